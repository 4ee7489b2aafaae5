//! Count and category draws used by the hierarchy generator.

use planetary::CompositionClass;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand_chacha::ChaChaRng;
use rand_distr::Poisson;
use tracing::warn;

use crate::error::GenerationError;

/// Draw a Poisson-distributed count with the given mean.
///
/// A mean of zero (or below) always yields zero.
pub fn sample_count(rng: &mut ChaChaRng, mean: f64) -> usize {
    if mean <= 0.0 {
        return 0;
    }
    match Poisson::new(mean) {
        Ok(poisson) => {
            let draw: f64 = poisson.sample(rng);
            draw as usize
        }
        Err(err) => {
            warn!(mean, %err, "unusable Poisson mean, drawing no bodies");
            0
        }
    }
}

/// A composition-class table with relative weights.
///
/// Weights need not sum to one; they are normalized on construction.
#[derive(Debug, Clone)]
pub struct WeightedClasses {
    classes: Vec<CompositionClass>,
    index: WeightedIndex<f64>,
}

impl WeightedClasses {
    pub fn new(
        field: &'static str,
        classes: &[CompositionClass],
        weights: &[f64],
    ) -> Result<Self, GenerationError> {
        if classes.len() != weights.len() {
            return Err(GenerationError::invalid(
                field,
                format!("{} weights for {} classes", weights.len(), classes.len()),
            ));
        }
        let index = WeightedIndex::new(weights.iter().copied())
            .map_err(|err| GenerationError::invalid(field, err.to_string()))?;
        Ok(Self {
            classes: classes.to_vec(),
            index,
        })
    }

    pub fn sample(&self, rng: &mut ChaChaRng) -> CompositionClass {
        self.classes[self.index.sample(rng)]
    }
}
