use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::attributes::{BodyAttributes, OrbitContext, derive_attributes};
use crate::composition_class::CompositionClass;
use crate::surface::{Palette, Surface, SurfaceScan};

/// A planet, moon or sub-planet: its class, derived attributes and scan state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetaryBody {
    pub class: CompositionClass,
    pub attributes: BodyAttributes,
    #[serde(default)]
    pub surface: SurfaceScan,
}

impl PlanetaryBody {
    pub fn sample(rng: &mut ChaChaRng, class: CompositionClass, context: OrbitContext) -> Self {
        Self {
            class,
            attributes: derive_attributes(rng, class, context),
            surface: SurfaceScan::default(),
        }
    }

    /// Attach a surface on the first call; afterwards a no-op returning the same surface.
    pub fn scan(&mut self, rng: &mut ChaChaRng) -> &Surface {
        if !self.surface.is_scanned() {
            debug!(class = %self.class, "scanning surface");
        }
        let palette = Palette::for_body(self.class, self.attributes.temperature);
        self.surface.scan(rng, palette)
    }
}
