//! Serialized orbit trees and their recursive evaluation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ellipse::Orbit;
use crate::error::OrbitError;
use crate::vector::Vec3;

// ============================================================================
// Wire records
// ============================================================================

fn default_body_name() -> String {
    "Unnamed".to_string()
}

fn default_system_name() -> String {
    "Unnamed System".to_string()
}

fn one() -> f64 {
    1.0
}

/// On-disk shape of a node. Any missing field takes its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OrbitNodeRecord {
    #[serde(default = "default_body_name")]
    name: String,
    #[serde(default = "one")]
    r_min: f64,
    #[serde(default = "one")]
    r_max: f64,
    #[serde(default)]
    phi: f64,
    #[serde(default)]
    theta: f64,
    #[serde(default)]
    alpha: f64,
    #[serde(default)]
    start_phase: f64,
    #[serde(default)]
    bound_objects: Vec<OrbitNodeRecord>,
}

impl From<OrbitNodeRecord> for OrbitNode {
    fn from(record: OrbitNodeRecord) -> Self {
        OrbitNode {
            name: record.name,
            orbit: Orbit::from_apsides(
                record.r_min,
                record.r_max,
                record.phi,
                record.theta,
                record.alpha,
                record.start_phase,
            ),
            bound_objects: record.bound_objects.into_iter().map(OrbitNode::from).collect(),
        }
    }
}

impl From<OrbitNode> for OrbitNodeRecord {
    fn from(node: OrbitNode) -> Self {
        let (phi, theta, alpha) = node.orbit.angles_degrees();
        OrbitNodeRecord {
            name: node.name,
            r_min: node.orbit.r_min,
            r_max: node.orbit.r_max,
            phi,
            theta,
            alpha,
            start_phase: node.orbit.start_phase,
            bound_objects: node
                .bound_objects
                .into_iter()
                .map(OrbitNodeRecord::from)
                .collect(),
        }
    }
}

// ============================================================================
// Tree
// ============================================================================

/// A body on its orbit, with the bodies orbiting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrbitNodeRecord", into = "OrbitNodeRecord")]
pub struct OrbitNode {
    pub name: String,
    pub orbit: Orbit,
    pub bound_objects: Vec<OrbitNode>,
}

impl OrbitNode {
    pub fn new(name: impl Into<String>, orbit: Orbit) -> Self {
        Self {
            name: name.into(),
            orbit,
            bound_objects: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: OrbitNode) -> Self {
        self.bound_objects.push(child);
        self
    }
}

/// A named orbit tree, typically rooted at a zero-sized sentinel for the primary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSystem {
    #[serde(default = "default_system_name")]
    pub name: String,
    /// Opaque epoch, carried through unchanged.
    #[serde(default)]
    pub creation_date: f64,
    pub root: OrbitNode,
}

/// Absolute position of one body at a given age.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyPosition {
    pub name: String,
    pub depth: usize,
    pub position: Vec3,
}

/// A body's sampled orbit, translated to its parent's absolute position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitTrace {
    pub name: String,
    pub center: Vec3,
    pub points: Vec<Vec3>,
}

impl OrbitalSystem {
    pub fn new(name: impl Into<String>, creation_date: f64, root: OrbitNode) -> Self {
        Self {
            name: name.into(),
            creation_date,
            root,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, OrbitError> {
        let system: OrbitalSystem = serde_json::from_str(json)?;
        debug!(name = %system.name, bodies = system.body_count(), "loaded orbital system");
        Ok(system)
    }

    pub fn to_json_pretty(&self) -> Result<String, OrbitError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of nodes, root included.
    pub fn body_count(&self) -> usize {
        fn count(node: &OrbitNode) -> usize {
            1 + node.bound_objects.iter().map(count).sum::<usize>()
        }
        count(&self.root)
    }

    /// Absolute positions of every body at `age`, in pre-order.
    pub fn positions_at(&self, age: f64) -> Vec<BodyPosition> {
        let mut out = Vec::with_capacity(self.body_count());
        collect_positions(&self.root, age, Vec3::zeros(), 0, &mut out);
        out
    }

    /// Orbit curves of every body, each centred on its parent's absolute
    /// position at `age`, in pre-order.
    pub fn traces_at(&self, age: f64, samples: usize) -> Vec<OrbitTrace> {
        let mut out = Vec::with_capacity(self.body_count());
        collect_traces(&self.root, age, samples, Vec3::zeros(), &mut out);
        out
    }

    pub fn position_of(&self, name: &str, age: f64) -> Option<Vec3> {
        self.positions_at(age)
            .into_iter()
            .find(|p| p.name == name)
            .map(|p| p.position)
    }
}

fn collect_positions(
    node: &OrbitNode,
    age: f64,
    center: Vec3,
    depth: usize,
    out: &mut Vec<BodyPosition>,
) {
    let position = center + node.orbit.position(age);
    out.push(BodyPosition {
        name: node.name.clone(),
        depth,
        position,
    });
    for child in &node.bound_objects {
        collect_positions(child, age, position, depth + 1, out);
    }
}

fn collect_traces(
    node: &OrbitNode,
    age: f64,
    samples: usize,
    center: Vec3,
    out: &mut Vec<OrbitTrace>,
) {
    let points = node
        .orbit
        .sample_curve(samples)
        .into_iter()
        .map(|p| p + center)
        .collect();
    out.push(OrbitTrace {
        name: node.name.clone(),
        center,
        points,
    });

    let position = center + node.orbit.position(age);
    for child in &node.bound_objects {
        collect_traces(child, age, samples, position, out);
    }
}
