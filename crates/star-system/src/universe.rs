//! Registry of generated star systems.

use std::collections::BTreeMap;

use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SystemError;
use crate::naming::catalog_name;
use crate::system::StarSystem;

/// Star systems keyed by their unique names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Universe {
    systems: BTreeMap<String, StarSystem>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system under its own name, returning any system it replaces.
    pub fn insert(&mut self, system: StarSystem) -> Option<StarSystem> {
        self.systems.insert(system.name.clone(), system)
    }

    pub fn get_system(&self, name: &str) -> Option<&StarSystem> {
        self.systems.get(name)
    }

    pub fn get_system_mut(&mut self, name: &str) -> Option<&mut StarSystem> {
        self.systems.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.systems.contains_key(name)
    }

    /// System names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn systems(&self) -> impl Iterator<Item = &StarSystem> {
        self.systems.values()
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }

    /// Draw catalog names until one is not already taken.
    pub fn unused_name(&self, rng: &mut ChaChaRng) -> String {
        loop {
            let name = catalog_name(rng);
            if !self.contains(&name) {
                return name;
            }
            debug!(%name, "catalog name collision, drawing again");
        }
    }

    /// Move a ship between systems, docking it at `to_body` in `to_system`.
    ///
    /// Both the destination system and body are checked before the ship is
    /// undocked, so a failed move leaves it where it was.
    pub fn relocate_ship(
        &mut self,
        ship: &str,
        from_system: &str,
        to_system: &str,
        to_body: &str,
    ) -> Result<(), SystemError> {
        let destination = self
            .get_system(to_system)
            .ok_or_else(|| SystemError::UnknownSystem(to_system.to_string()))?;
        if destination.find_by_name(to_body).is_none() {
            return Err(SystemError::UnknownBody(to_body.to_string()));
        }

        let ship = self
            .get_system_mut(from_system)
            .ok_or_else(|| SystemError::UnknownSystem(from_system.to_string()))?
            .undock_ship(ship)?;
        self.get_system_mut(to_system)
            .ok_or_else(|| SystemError::UnknownSystem(to_system.to_string()))?
            .dock_ship(ship, to_body)
            .map_err(|(e, _)| e)
    }

    /// Serialize the whole universe. The format is not versioned.
    pub fn to_snapshot_json(&self) -> Result<String, SystemError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_snapshot_json(json: &str) -> Result<Self, SystemError> {
        let universe: Universe = serde_json::from_str(json)?;
        debug!(systems = universe.len(), "universe snapshot loaded");
        Ok(universe)
    }
}
