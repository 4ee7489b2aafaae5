//! Anomaly survey attached to a body by a surface scan.

use rand::Rng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

pub const ATMOSPHERIC_ANOMALIES: [&str; 21] = [
    "High altitude winds",
    "Perpetual lightning storms",
    "Toxic cloud layers",
    "Radioactive fog",
    "Aurora storms",
    "Magnetic field inversion",
    "Supercooled jet streams",
    "Acid rain",
    "Invisible atmosphere (light-bending gases)",
    "Supersonic wind tunnels",
    "Atmospheric plasma arcs",
    "Anti-gravity turbulence",
    "Floating ice crystals",
    "Localized firestorms",
    "Cryogenic vapor flows",
    "Volcanic gas haze",
    "Electrical vortexes",
    "Photosensitive dust storms",
    "Organic spore clouds",
    "Methane monsoons",
    "Blackout storms (EM disruption)",
];

pub const TERRAIN_ANOMALIES: [&str; 21] = [
    "Sand planet",
    "Shifting landmasses",
    "Crystal growth fields",
    "Magnetized rock plains",
    "Lava lakes",
    "Living terrain (biological surface)",
    "Bone deserts (fossil remains)",
    "Active tectonic fault zones",
    "Mirror-smooth rock formations",
    "Ultradense gravity wells",
    "Color-changing soil",
    "Cactus forests with silicon spines",
    "Geothermal geyser fields",
    "Salt flat mirage zones",
    "Frozen lightning scars",
    "Radioactive boulder fields",
    "Metallic dunes",
    "Tectonic breathing zones",
    "Alien monolith ruins",
    "Acoustic canyons (resonant stone)",
    "Hovering rock islands",
];

pub const UNDERGROUND_ANOMALIES: [&str; 21] = [
    "Underground oceans",
    "Hollow planetary core",
    "Subsurface fungal networks",
    "Thermal crystal caverns",
    "Ancient alien tunnels",
    "Volatile gas pockets",
    "Living cave systems",
    "Superconductive ore veins",
    "Bioluminescent cavern walls",
    "Dark matter sinkholes",
    "Magnetic cave mazes",
    "Sentient crystal formations",
    "Glowing geothermal rivers",
    "Prehistoric DNA vaults",
    "Petrified underground forests",
    "Resonant mineral chambers",
    "Shifting subterranean corridors",
    "Toxic mineral sludge",
    "Time-warp chambers",
    "Corrosive acid springs",
    "Silicon-based fossil beds",
];

/// Between one and three distinct findings per layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Anomalies {
    pub atmospheric: Vec<String>,
    pub terrain: Vec<String>,
    pub underground: Vec<String>,
}

impl Anomalies {
    pub fn sample(rng: &mut ChaChaRng) -> Self {
        Self {
            atmospheric: pick_findings(rng, &ATMOSPHERIC_ANOMALIES),
            terrain: pick_findings(rng, &TERRAIN_ANOMALIES),
            underground: pick_findings(rng, &UNDERGROUND_ANOMALIES),
        }
    }

    pub fn len(&self) -> usize {
        self.atmospheric.len() + self.terrain.len() + self.underground.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn pick_findings(rng: &mut ChaChaRng, pool: &[&str]) -> Vec<String> {
    let count = rng.random_range(1..=3);
    pool.choose_multiple(rng, count)
        .map(|finding| finding.to_string())
        .collect()
}
