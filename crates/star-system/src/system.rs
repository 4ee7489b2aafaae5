//! A single star system and the operations on its body tree.

use orbits::{Orbit, OrbitNode, OrbitalSystem, Vec3};
use planetary::Surface;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::body::{BodyId, BodyKind, CelestialBody};
use crate::error::SystemError;

/// Conjugate of the golden ratio, used to spread start phases evenly by id.
const PHASE_STEP: f64 = 0.618_033_988_749_894_9;

/// One star and everything bound to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarSystem {
    pub id: u64,
    pub name: String,
    /// Location in the universe frame
    pub position: Vec3,
    /// Root of the body tree; its bound list holds the planets
    pub star: CelestialBody,
}

impl StarSystem {
    pub fn new(id: u64, name: impl Into<String>, position: Vec3, star: CelestialBody) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            star,
        }
    }

    /// Bodies directly orbiting the star, ships excluded.
    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.star
            .bound
            .iter()
            .filter(|body| matches!(body.kind, BodyKind::Planet(_)))
    }

    pub fn planet_count(&self) -> usize {
        self.planets().count()
    }

    /// Every body in pre-order with its depth below the star (star = 0).
    pub fn bodies(&self) -> Bodies<'_> {
        Bodies {
            stack: vec![(0, &self.star)],
        }
    }

    /// Depth-first lookup by name, star included.
    pub fn find_by_name(&self, name: &str) -> Option<&CelestialBody> {
        self.star.find_by_name(name)
    }

    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut CelestialBody> {
        self.star.find_by_name_mut(name)
    }

    pub fn find(&self, id: BodyId) -> Option<&CelestialBody> {
        self.star.find(id)
    }

    pub fn find_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.star.find_mut(id)
    }

    /// Scan the named planet or moon, generating its surface on first use.
    ///
    /// Repeat scans return the stored surface without drawing from `rng`.
    pub fn scan(&mut self, name: &str, rng: &mut ChaChaRng) -> Result<&Surface, SystemError> {
        let body = self
            .star
            .find_by_name_mut(name)
            .ok_or_else(|| SystemError::UnknownBody(name.to_string()))?;
        match body.planetary_mut() {
            Some(planetary) => Ok(planetary.scan(rng)),
            None => Err(SystemError::NotScannable(name.to_string())),
        }
    }

    /// Dock a ship at the front of `target`'s bound list.
    ///
    /// On failure the ship is handed back alongside the error.
    pub fn dock_ship(
        &mut self,
        mut ship: CelestialBody,
        target: &str,
    ) -> Result<(), (SystemError, CelestialBody)> {
        if !ship.is_ship() {
            return Err((SystemError::NotAShip(ship.name.clone()), ship));
        }
        let Some(location) = self.star.find_by_name_mut(target) else {
            return Err((SystemError::UnknownBody(target.to_string()), ship));
        };

        debug!(ship = %ship.name, location = %location.name, "ship docked");
        ship.parent = Some(location.id);
        location.bound.insert(0, ship);
        Ok(())
    }

    /// Remove a docked ship from wherever it is.
    pub fn undock_ship(&mut self, name: &str) -> Result<CelestialBody, SystemError> {
        match self.star.find_by_name(name) {
            None => return Err(SystemError::UnknownBody(name.to_string())),
            Some(body) if !body.is_ship() => return Err(SystemError::NotAShip(name.to_string())),
            Some(_) => {}
        }
        let mut ship = self
            .star
            .detach(name)
            .ok_or_else(|| SystemError::UnknownBody(name.to_string()))?;
        ship.parent = None;
        Ok(ship)
    }

    /// Move a docked ship to another body of this system.
    pub fn move_ship(&mut self, name: &str, target: &str) -> Result<(), SystemError> {
        if self.star.find_by_name(target).is_none() {
            return Err(SystemError::UnknownBody(target.to_string()));
        }
        let ship = self.undock_ship(name)?;
        self.dock_ship(ship, target).map_err(|(e, _)| e)
    }

    /// Circular, untilted orbits at each body's generated radius.
    ///
    /// The star becomes a zero-sized root. Start phases are spread by body id
    /// so the view is the same every time it is built.
    pub fn orbital_view(&self) -> OrbitalSystem {
        let mut root = OrbitNode::new(self.star.name.clone(), Orbit::circular(0.0, 0.0));
        root.bound_objects = self.star.bound.iter().map(orbit_node).collect();
        OrbitalSystem::new(self.name.clone(), 0.0, root)
    }
}

fn orbit_node(body: &CelestialBody) -> OrbitNode {
    let phase = (body.id.0 as f64 * PHASE_STEP).fract();
    let mut node = OrbitNode::new(
        body.name.clone(),
        Orbit::circular(body.orbit_radius.to_au(), phase),
    );
    node.bound_objects = body.bound.iter().map(orbit_node).collect();
    node
}

/// Pre-order walk over a body tree. See [`StarSystem::bodies`].
pub struct Bodies<'a> {
    stack: Vec<(usize, &'a CelestialBody)>,
}

impl<'a> Iterator for Bodies<'a> {
    type Item = (usize, &'a CelestialBody);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, body) = self.stack.pop()?;
        self.stack
            .extend(body.bound.iter().rev().map(|child| (depth + 1, child)));
        Some((depth, body))
    }
}
