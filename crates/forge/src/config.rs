//! Generator configuration
//!
//! Every tunable of the hierarchy generator lives in [`GeneratorConfig`]. The
//! struct deserializes with `#[serde(default)]`, so a TOML file only has to
//! name the keys it changes:
//!
//! ```toml
//! max_satellite_depth = 3
//! spectral_classes = ["G", "K", "M"]
//!
//! [satellite_means]
//! gas = 5.0
//! ```

use std::path::Path;

use planetary::CompositionClass;
use serde::{Deserialize, Serialize};
use stellar::SpectralType;

use crate::error::GenerationError;

/// One Earth radius in AU, as used for satellite and sub-planet orbit ranges.
const EARTH_RADIUS_AU: f64 = 1.0 / 215.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    // ── Star ─────────────────────────────────────────────────────────────────
    pub spectral_classes: Vec<SpectralType>,

    // ── Planets ──────────────────────────────────────────────────────────────
    /// Orbit radius the first gap is added to (AU)
    pub first_orbit_au: f64,
    /// Gap between successive planets, drawn uniformly (AU)
    pub orbit_gap_au: (f64, f64),
    /// Planets inside this radius use the inner class table (AU)
    pub orbit_threshold_au: f64,
    pub inner_classes: Vec<CompositionClass>,
    pub inner_weights: Vec<f64>,
    pub outer_classes: Vec<CompositionClass>,
    pub outer_weights: Vec<f64>,

    // ── Satellites ───────────────────────────────────────────────────────────
    pub satellite_means: SatelliteMeans,
    pub moon_orbit_au: (f64, f64),
    /// Deepest satellite level below a planet
    pub max_satellite_depth: usize,

    // ── Sub-planets ──────────────────────────────────────────────────────────
    pub sub_planets: SubPlanetConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            spectral_classes: SpectralType::ALL.to_vec(),
            first_orbit_au: 0.3,
            orbit_gap_au: (0.2, 1.5),
            orbit_threshold_au: 2.0,
            inner_classes: vec![CompositionClass::Rock, CompositionClass::Metal],
            inner_weights: vec![0.8, 0.2],
            outer_classes: vec![
                CompositionClass::Gas,
                CompositionClass::Ice,
                CompositionClass::Rock,
            ],
            outer_weights: vec![0.5, 0.3, 0.2],
            satellite_means: SatelliteMeans::default(),
            moon_orbit_au: (5.0 * EARTH_RADIUS_AU, 60.0 * EARTH_RADIUS_AU),
            max_satellite_depth: 5,
            sub_planets: SubPlanetConfig::default(),
        }
    }
}

/// Poisson mean of the satellite count, per composition class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SatelliteMeans {
    pub gas: f64,
    pub ice: f64,
    pub rock: f64,
    pub metal: f64,
    pub moon: f64,
}

impl Default for SatelliteMeans {
    fn default() -> Self {
        Self {
            gas: 3.0,
            ice: 2.0,
            rock: 0.5,
            metal: 0.3,
            moon: 0.0,
        }
    }
}

impl SatelliteMeans {
    pub fn mean(&self, class: CompositionClass) -> f64 {
        match class {
            CompositionClass::Gas => self.gas,
            CompositionClass::Ice => self.ice,
            CompositionClass::Rock => self.rock,
            CompositionClass::Metal => self.metal,
            CompositionClass::Moon => self.moon,
        }
    }

    fn iter(&self) -> impl Iterator<Item = (CompositionClass, f64)> + '_ {
        CompositionClass::ALL.iter().map(|class| (*class, self.mean(*class)))
    }
}

/// Extra Rock bodies attached to heavy gas giants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubPlanetConfig {
    /// Gas giants heavier than this (M⊕) receive sub-planets
    pub mass_threshold: f64,
    pub max_count: usize,
    pub orbit_au: (f64, f64),
}

impl Default for SubPlanetConfig {
    fn default() -> Self {
        Self {
            mass_threshold: 100.0,
            max_count: 3,
            orbit_au: (1.5 * EARTH_RADIUS_AU, 5.0 * EARTH_RADIUS_AU),
        }
    }
}

impl GeneratorConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, GenerationError> {
        let config: GeneratorConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, GenerationError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Limit star generation to the named spectral classes, e.g. `["G", "K"]`.
    pub fn restrict_spectral_classes<'a>(
        &mut self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), GenerationError> {
        let classes = labels
            .into_iter()
            .map(str::parse::<SpectralType>)
            .collect::<Result<Vec<_>, _>>()?;
        if classes.is_empty() {
            return Err(GenerationError::invalid("spectral_classes", "no classes given"));
        }
        self.spectral_classes = classes;
        Ok(())
    }

    /// Reject values that would leave generation undefined.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.spectral_classes.is_empty() {
            return Err(GenerationError::invalid("spectral_classes", "must not be empty"));
        }
        check_non_negative("first_orbit_au", self.first_orbit_au)?;
        check_range("orbit_gap_au", self.orbit_gap_au)?;
        if !self.orbit_threshold_au.is_finite() {
            return Err(GenerationError::invalid("orbit_threshold_au", "must be finite"));
        }
        check_weights("inner_weights", &self.inner_classes, &self.inner_weights)?;
        check_weights("outer_weights", &self.outer_classes, &self.outer_weights)?;

        for (class, mean) in self.satellite_means.iter() {
            if !(mean.is_finite() && mean >= 0.0) {
                return Err(GenerationError::invalid(
                    "satellite_means",
                    format!("{} mean must be a non-negative number, got {}", class, mean),
                ));
            }
        }
        check_range("moon_orbit_au", self.moon_orbit_au)?;

        if self.sub_planets.max_count == 0 {
            return Err(GenerationError::invalid("sub_planets.max_count", "must be at least 1"));
        }
        if self.sub_planets.mass_threshold.is_nan() {
            return Err(GenerationError::invalid("sub_planets.mass_threshold", "must be a number"));
        }
        check_range("sub_planets.orbit_au", self.sub_planets.orbit_au)?;
        Ok(())
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), GenerationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GenerationError::invalid(field, format!("must be a non-negative number, got {}", value)))
    }
}

fn check_range(field: &'static str, (min, max): (f64, f64)) -> Result<(), GenerationError> {
    check_non_negative(field, min)?;
    check_non_negative(field, max)?;
    if min > max {
        return Err(GenerationError::invalid(field, format!("empty range [{}, {}]", min, max)));
    }
    Ok(())
}

fn check_weights(
    field: &'static str,
    classes: &[CompositionClass],
    weights: &[f64],
) -> Result<(), GenerationError> {
    if classes.is_empty() {
        return Err(GenerationError::invalid(field, "no classes to choose from"));
    }
    if classes.len() != weights.len() {
        return Err(GenerationError::invalid(
            field,
            format!("{} weights for {} classes", weights.len(), classes.len()),
        ));
    }
    if weights.iter().any(|w| !(w.is_finite() && *w >= 0.0)) {
        return Err(GenerationError::invalid(field, "weights must be non-negative numbers"));
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(GenerationError::invalid(field, "weights must not sum to zero"));
    }
    Ok(())
}
