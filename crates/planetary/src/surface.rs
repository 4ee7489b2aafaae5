//! Surface scans: procedural heightmaps and their terminal palettes.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::DMatrix;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};
use units::Temperature;

use crate::anomalies::Anomalies;
use crate::composition_class::CompositionClass;

pub const HEIGHTMAP_ROWS: usize = 32;
pub const HEIGHTMAP_COLS: usize = 64;

/// Upper bound (inclusive) of the surface seed drawn by a scan.
pub const MAX_SURFACE_SEED: u64 = 99_999_999;

// ============================================================================
// Smoothing kernels
// ============================================================================

/// Separable binomial smoothing kernel, chosen per scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinomialKernel {
    Three,
    Four,
    Five,
    Six,
}

impl BinomialKernel {
    pub const ALL: [BinomialKernel; 4] = [
        BinomialKernel::Three,
        BinomialKernel::Four,
        BinomialKernel::Five,
        BinomialKernel::Six,
    ];

    pub fn size(&self) -> usize {
        self.row().len()
    }

    fn row(&self) -> &'static [f64] {
        match self {
            BinomialKernel::Three => &[1.0, 2.0, 1.0],
            BinomialKernel::Four => &[1.0, 3.0, 3.0, 1.0],
            BinomialKernel::Five => &[1.0, 4.0, 6.0, 4.0, 1.0],
            BinomialKernel::Six => &[1.0, 5.0, 10.0, 10.0, 5.0, 1.0],
        }
    }

    fn divisor(&self) -> f64 {
        match self {
            BinomialKernel::Three => 16.0,
            BinomialKernel::Four => 64.0,
            BinomialKernel::Five => 256.0,
            BinomialKernel::Six => 676.0,
        }
    }

    /// Outer product of the binomial row with itself, scaled by the divisor.
    pub fn weights(&self) -> DMatrix<f64> {
        let row = self.row();
        let divisor = self.divisor();
        DMatrix::from_fn(row.len(), row.len(), |i, j| row[i] * row[j] / divisor)
    }
}

// ============================================================================
// Heightmap generation
// ============================================================================

fn latitude(row: usize, rows: usize) -> f64 {
    if rows < 2 {
        return -FRAC_PI_2;
    }
    -FRAC_PI_2 + PI * row as f64 / (rows - 1) as f64
}

/// 2D convolution with periodic boundaries, output the same shape as `input`.
///
/// Even-sized kernels are anchored one cell before their geometric centre.
pub fn convolve_wrapped(input: &DMatrix<f64>, kernel: &DMatrix<f64>) -> DMatrix<f64> {
    let (rows, cols) = input.shape();
    let (k_rows, k_cols) = kernel.shape();
    let (off_r, off_c) = ((k_rows as isize - 1) / 2, (k_cols as isize - 1) / 2);

    DMatrix::from_fn(rows, cols, |i, j| {
        let mut acc = 0.0;
        for m in 0..k_rows {
            for n in 0..k_cols {
                let r = (i as isize + off_r - m as isize).rem_euclid(rows as isize) as usize;
                let c = (j as isize + off_c - n as isize).rem_euclid(cols as isize) as usize;
                acc += kernel[(m, n)] * input[(r, c)];
            }
        }
        acc
    })
}

/// Rescale into [0, 1]. A flat map becomes all zeros.
fn normalize(map: DMatrix<f64>) -> DMatrix<f64> {
    let min = map.min();
    let max = map.max();
    let span = max - min;
    if span <= f64::EPSILON {
        return DMatrix::zeros(map.nrows(), map.ncols());
    }
    map.map(|h| (h - min) / span)
}

/// Build a normalized heightmap from a surface seed.
///
/// Per-cell uniform noise is damped towards the poles by cos(latitude), a
/// polar cap term `5 − exp(−(0.6·lat)⁸)` is added, the result is smoothed
/// with `kernel` and rescaled into [0, 1].
pub fn generate_heightmap(
    rows: usize,
    cols: usize,
    seed: u64,
    kernel: BinomialKernel,
) -> DMatrix<f64> {
    if rows == 0 || cols == 0 {
        return DMatrix::zeros(rows, cols);
    }

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let noise: Vec<f64> = (0..rows * cols).map(|_| rng.random::<f64>()).collect();
    let noise = DMatrix::from_row_slice(rows, cols, &noise);

    let terrain = DMatrix::from_fn(rows, cols, |i, j| {
        let lat = latitude(i, rows);
        noise[(i, j)] * lat.cos() + (5.0 - (-(lat * 0.6).powi(8)).exp())
    });

    normalize(convolve_wrapped(&terrain, &kernel.weights()))
}

// ============================================================================
// Palettes
// ============================================================================

/// Height-to-color ramps over the 256-entry ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Earth,
    Lava,
    Toxic,
    Desert,
    Ice,
}

impl Palette {
    pub const ALL: [Palette; 5] = [
        Palette::Earth,
        Palette::Lava,
        Palette::Toxic,
        Palette::Desert,
        Palette::Ice,
    ];

    /// Ascending `(height threshold, color)` stops.
    pub fn stops(&self) -> &'static [(f64, u8)] {
        match self {
            Palette::Earth => &[
                (0.05, 17),
                (0.15, 19),
                (0.25, 33),
                (0.35, 71),
                (0.45, 142),
                (0.55, 181),
                (0.65, 179),
                (0.75, 214),
                (0.85, 223),
                (1.00, 231),
            ],
            Palette::Lava => &[
                (0.05, 52),
                (0.15, 88),
                (0.25, 124),
                (0.35, 160),
                (0.45, 166),
                (0.55, 172),
                (0.65, 178),
                (0.75, 184),
                (0.85, 220),
                (1.00, 229),
            ],
            Palette::Toxic => &[
                (0.05, 54),
                (0.15, 55),
                (0.25, 56),
                (0.35, 71),
                (0.45, 83),
                (0.55, 85),
                (0.65, 118),
                (0.75, 154),
                (0.85, 190),
                (1.00, 229),
            ],
            Palette::Desert => &[
                (0.05, 94),
                (0.15, 130),
                (0.25, 136),
                (0.35, 172),
                (0.45, 178),
                (0.55, 214),
                (0.65, 220),
                (0.75, 223),
                (0.85, 229),
                (1.00, 231),
            ],
            Palette::Ice => &[
                (0.05, 17),
                (0.15, 18),
                (0.25, 19),
                (0.35, 37),
                (0.45, 39),
                (0.55, 45),
                (0.65, 123),
                (0.75, 159),
                (0.85, 195),
                (1.00, 231),
            ],
        }
    }

    /// Color of the nearer stop of the interval containing `height`.
    pub fn color_for(&self, height: f64) -> u8 {
        let stops = self.stops();
        for pair in stops.windows(2) {
            let (v0, c0) = pair[0];
            let (v1, c1) = pair[1];
            if height <= v1 {
                let t = (height - v0) / (v1 - v0);
                return if t < 0.5 { c0 } else { c1 };
            }
        }
        stops.last().map(|&(_, color)| color).unwrap_or(0)
    }

    /// Ramp that suits a body's class and surface temperature.
    pub fn for_body(class: CompositionClass, temperature: Temperature) -> Self {
        let kelvin = temperature.to_kelvin();
        match class {
            CompositionClass::Gas => Palette::Toxic,
            CompositionClass::Ice => Palette::Ice,
            CompositionClass::Metal => Palette::Lava,
            CompositionClass::Rock if kelvin > 400.0 => Palette::Lava,
            CompositionClass::Rock if kelvin < 230.0 => Palette::Ice,
            CompositionClass::Rock if kelvin <= 330.0 => Palette::Earth,
            CompositionClass::Rock => Palette::Desert,
            CompositionClass::Moon if kelvin < 150.0 => Palette::Ice,
            CompositionClass::Moon => Palette::Desert,
        }
    }
}

// ============================================================================
// Scan state
// ============================================================================

/// Result of scanning a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub seed: u64,
    pub kernel: BinomialKernel,
    pub palette: Palette,
    /// `HEIGHTMAP_ROWS × HEIGHTMAP_COLS`, values in [0, 1]
    pub heightmap: DMatrix<f64>,
    pub anomalies: Anomalies,
}

impl Surface {
    pub fn generate(rng: &mut ChaChaRng, palette: Palette) -> Self {
        let seed = rng.random_range(0..=MAX_SURFACE_SEED);
        let anomalies = Anomalies::sample(rng);
        let kernel = *BinomialKernel::ALL.choose(rng).unwrap_or(&BinomialKernel::Three);
        let heightmap = generate_heightmap(HEIGHTMAP_ROWS, HEIGHTMAP_COLS, seed, kernel);

        Self {
            seed,
            kernel,
            palette,
            heightmap,
            anomalies,
        }
    }
}

/// A body starts unscanned (`null` when serialized); the first scan stores its surface for good.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceScan(Option<Surface>);

impl SurfaceScan {
    /// Scan once. Later calls return the stored surface and leave `rng` untouched.
    pub fn scan(&mut self, rng: &mut ChaChaRng, palette: Palette) -> &Surface {
        self.0.get_or_insert_with(|| Surface::generate(rng, palette))
    }

    pub fn surface(&self) -> Option<&Surface> {
        self.0.as_ref()
    }

    pub fn is_scanned(&self) -> bool {
        self.0.is_some()
    }
}
