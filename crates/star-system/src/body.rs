//! Bodies of the system tree.

use std::fmt;

use planetary::{CompositionClass, PlanetaryBody};
use serde::{Deserialize, Serialize};
use stellar::Star;
use units::Length;

/// Identifier scoped by ancestry.
///
/// A child's id is its parent's id shifted left by enough decimal digits to
/// hold the sibling ordinal, plus the ordinal (see [`BodyId::child`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BodyId(pub u64);

/// Decimal shift wide enough for ordinals up to `last_ordinal`, never less than 10.
///
/// ```
/// use star_system::id_stride;
///
/// assert_eq!(id_stride(3), 10);
/// assert_eq!(id_stride(12), 100);
/// ```
pub fn id_stride(last_ordinal: u64) -> u64 {
    let mut stride = 10u64;
    while stride <= last_ordinal {
        stride = stride.saturating_mul(10);
    }
    stride
}

impl BodyId {
    /// `self × stride + ordinal`, with `ordinal` 1-based and `stride` from [`id_stride`].
    ///
    /// `None` once the id no longer fits in a `u64`, which bounds how deep a
    /// tree can be numbered.
    pub fn child(&self, stride: u64, ordinal: u64) -> Option<BodyId> {
        self.0.checked_mul(stride)?.checked_add(ordinal).map(BodyId)
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A transient object docked in some body's bound list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    pub owner: String,
    /// Hull class, e.g. "frigate"
    pub class_label: String,
    /// ANSI 256 palette entry used to print the owner
    pub owner_color: u8,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            owner: "Unknown".to_string(),
            class_label: "frigate".to_string(),
            owner_color: 39,
        }
    }
}

/// What a body is, with only the data that kind of body carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum BodyKind {
    Star(Star),
    Planet(PlanetaryBody),
    Moon(PlanetaryBody),
    Ship(Ship),
}

impl BodyKind {
    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Star(_) => "Star",
            BodyKind::Planet(_) => "Planet",
            BodyKind::Moon(_) => "Moon",
            BodyKind::Ship(_) => "Ship",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CelestialBody {
    pub id: BodyId,
    pub name: String,
    /// Distance from the parent: AU around the star, generator units for satellites
    pub orbit_radius: Length,
    /// The body this one orbits. Only an id, never an owning link.
    pub parent: Option<BodyId>,
    pub kind: BodyKind,
    /// Bodies orbiting or docked at this one, in order
    pub bound: Vec<CelestialBody>,
}

impl CelestialBody {
    pub fn new(
        id: BodyId,
        name: impl Into<String>,
        orbit_radius: Length,
        parent: Option<BodyId>,
        kind: BodyKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            orbit_radius,
            parent,
            kind,
            bound: Vec::new(),
        }
    }

    /// A ship not yet docked anywhere.
    pub fn ship(id: BodyId, name: impl Into<String>, ship: Ship) -> Self {
        Self::new(id, name, Length::zero(), None, BodyKind::Ship(ship))
    }

    pub fn planetary(&self) -> Option<&PlanetaryBody> {
        match &self.kind {
            BodyKind::Planet(body) | BodyKind::Moon(body) => Some(body),
            BodyKind::Star(_) | BodyKind::Ship(_) => None,
        }
    }

    pub fn planetary_mut(&mut self) -> Option<&mut PlanetaryBody> {
        match &mut self.kind {
            BodyKind::Planet(body) | BodyKind::Moon(body) => Some(body),
            BodyKind::Star(_) | BodyKind::Ship(_) => None,
        }
    }

    pub fn composition_class(&self) -> Option<CompositionClass> {
        self.planetary().map(|body| body.class)
    }

    pub fn is_ship(&self) -> bool {
        matches!(self.kind, BodyKind::Ship(_))
    }

    /// Longest chain of natural satellites below this body (0 for a leaf).
    pub fn satellite_depth(&self) -> usize {
        self.bound
            .iter()
            .filter(|child| !child.is_ship())
            .map(|child| 1 + child.satellite_depth())
            .max()
            .unwrap_or(0)
    }

    /// This body plus everything below it.
    pub fn subtree_len(&self) -> usize {
        1 + self.bound.iter().map(CelestialBody::subtree_len).sum::<usize>()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        if self.name == name {
            return Some(self);
        }
        self.bound.iter().find_map(|child| child.find_by_name(name))
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut CelestialBody> {
        if self.name == name {
            return Some(self);
        }
        self.bound
            .iter_mut()
            .find_map(|child| child.find_by_name_mut(name))
    }

    pub fn find(&self, id: BodyId) -> Option<&CelestialBody> {
        if self.id == id {
            return Some(self);
        }
        self.bound.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        if self.id == id {
            return Some(self);
        }
        self.bound.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Detach the first descendant named `name`, searching depth-first.
    pub(crate) fn detach(&mut self, name: &str) -> Option<CelestialBody> {
        if let Some(index) = self.bound.iter().position(|child| child.name == name) {
            return Some(self.bound.remove(index));
        }
        self.bound.iter_mut().find_map(|child| child.detach(name))
    }
}
