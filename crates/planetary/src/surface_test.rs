use approx::assert_relative_eq;
use nalgebra::DMatrix;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use units::Temperature;

use crate::composition_class::CompositionClass;
use crate::surface::{
    BinomialKernel, HEIGHTMAP_COLS, HEIGHTMAP_ROWS, MAX_SURFACE_SEED, Palette, SurfaceScan,
    convolve_wrapped, generate_heightmap,
};

// ============================================================================
// Kernels and convolution
// ============================================================================

#[test]
fn test_kernel_weights() {
    let three = BinomialKernel::Three.weights();
    assert_eq!(three.shape(), (3, 3));
    assert_relative_eq!(three[(1, 1)], 4.0 / 16.0);
    assert_relative_eq!(three.sum(), 1.0);

    let six = BinomialKernel::Six.weights();
    assert_eq!(BinomialKernel::Six.size(), 6);
    assert_relative_eq!(six[(2, 3)], 100.0 / 676.0);
}

#[test]
fn test_convolution_preserves_constant_map() {
    let flat = DMatrix::from_element(8, 10, 2.0);
    let smoothed = convolve_wrapped(&flat, &BinomialKernel::Five.weights());
    for value in smoothed.iter() {
        assert_relative_eq!(*value, 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_convolution_wraps_at_edges() {
    let mut spike = DMatrix::zeros(5, 5);
    spike[(0, 0)] = 16.0;
    let smoothed = convolve_wrapped(&spike, &BinomialKernel::Three.weights());

    assert_relative_eq!(smoothed[(0, 0)], 4.0);
    // neighbours across both edges receive weight
    assert_relative_eq!(smoothed[(4, 0)], 2.0);
    assert_relative_eq!(smoothed[(0, 4)], 2.0);
    assert_relative_eq!(smoothed[(4, 4)], 1.0);
    assert_relative_eq!(smoothed.sum(), 16.0, epsilon = 1e-12);
}

// ============================================================================
// Heightmaps
// ============================================================================

#[test]
fn test_heightmap_shape_and_range() {
    for kernel in BinomialKernel::ALL {
        let map = generate_heightmap(HEIGHTMAP_ROWS, HEIGHTMAP_COLS, 1234, kernel);
        assert_eq!(map.shape(), (32, 64));
        assert_relative_eq!(map.min(), 0.0);
        assert_relative_eq!(map.max(), 1.0);
    }
}

#[test]
fn test_heightmap_is_seeded() {
    let a = generate_heightmap(16, 16, 77, BinomialKernel::Four);
    let b = generate_heightmap(16, 16, 77, BinomialKernel::Four);
    let c = generate_heightmap(16, 16, 78, BinomialKernel::Four);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_degenerate_heightmaps() {
    assert_eq!(generate_heightmap(0, 4, 1, BinomialKernel::Three).shape(), (0, 4));
    let single = generate_heightmap(1, 1, 1, BinomialKernel::Three);
    assert_eq!(single[(0, 0)], 0.0);
}

// ============================================================================
// Palettes
// ============================================================================

#[test]
fn test_palette_lookup() {
    let earth = Palette::Earth;
    assert_eq!(earth.color_for(0.0), 17);
    assert_eq!(earth.color_for(0.09), 17);
    assert_eq!(earth.color_for(0.11), 19);
    assert_eq!(earth.color_for(0.52), 181);
    assert_eq!(earth.color_for(1.0), 231);
    assert_eq!(earth.color_for(1.5), 231);
}

#[test]
fn test_palettes_are_ascending() {
    for palette in Palette::ALL {
        let stops = palette.stops();
        assert_eq!(stops.len(), 10);
        assert!(stops.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(stops[stops.len() - 1].0, 1.0);
    }
}

#[test]
fn test_palette_for_body() {
    let temperate = Temperature::from_kelvin(288.0);
    assert_eq!(Palette::for_body(CompositionClass::Rock, temperate), Palette::Earth);
    assert_eq!(
        Palette::for_body(CompositionClass::Rock, Temperature::from_kelvin(525.8)),
        Palette::Lava
    );
    assert_eq!(Palette::for_body(CompositionClass::Gas, temperate), Palette::Toxic);
    assert_eq!(
        Palette::for_body(CompositionClass::Moon, Temperature::from_kelvin(80.0)),
        Palette::Ice
    );
}

// ============================================================================
// Scan state
// ============================================================================

#[test]
fn test_scan_is_idempotent() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let mut scan = SurfaceScan::default();
    assert!(!scan.is_scanned());
    assert!(scan.surface().is_none());

    let first = scan.scan(&mut rng, Palette::Earth).clone();
    assert!(first.seed <= MAX_SURFACE_SEED);
    assert_eq!(first.heightmap.shape(), (HEIGHTMAP_ROWS, HEIGHTMAP_COLS));
    assert!(!first.anomalies.is_empty());

    let mut other_rng = ChaChaRng::seed_from_u64(999);
    let second = scan.scan(&mut other_rng, Palette::Lava).clone();
    assert_eq!(first, second);
    assert!(scan.is_scanned());
}

#[test]
fn test_stored_surface_leaves_rng_untouched() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let mut scan = SurfaceScan::default();
    let first = scan.scan(&mut rng, Palette::Ice).clone();

    let json = serde_json::to_string(&scan).unwrap();
    let mut restored: SurfaceScan = serde_json::from_str(&json).unwrap();
    assert!(restored.is_scanned());

    let mut later_rng = ChaChaRng::seed_from_u64(31);
    let again = restored.scan(&mut later_rng, Palette::Earth).clone();
    assert_eq!(again.seed, first.seed);
    assert_eq!(again.palette, first.palette);
    assert_eq!(later_rng.random::<u64>(), ChaChaRng::seed_from_u64(31).random::<u64>());

    let unscanned: SurfaceScan = serde_json::from_str("null").unwrap();
    assert!(!unscanned.is_scanned());
}
