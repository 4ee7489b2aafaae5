use approx::assert_relative_eq;
use planetary::CompositionClass;
use stellar::SpectralType;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;

#[test]
fn test_defaults() {
    let config = GeneratorConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.spectral_classes.len(), 7);
    assert_eq!(config.first_orbit_au, 0.3);
    assert_eq!(config.orbit_gap_au, (0.2, 1.5));
    assert_eq!(config.orbit_threshold_au, 2.0);
    assert_eq!(config.max_satellite_depth, 5);
    assert_eq!(config.satellite_means.mean(CompositionClass::Gas), 3.0);
    assert_eq!(config.satellite_means.mean(CompositionClass::Moon), 0.0);
    assert_eq!(config.sub_planets.max_count, 3);
    assert_eq!(config.sub_planets.mass_threshold, 100.0);
    assert_relative_eq!(config.moon_orbit_au.0, 5.0 / 215.0);
    assert_relative_eq!(config.moon_orbit_au.1, 60.0 / 215.0);
}

#[test]
fn test_partial_toml_overrides_only_named_keys() {
    let source = r#"
        max_satellite_depth = 2
        orbit_gap_au = [0.1, 0.4]
        spectral_classes = ["G", "K"]

        [satellite_means]
        gas = 4.5

        [sub_planets]
        max_count = 1
    "#;
    let config = GeneratorConfig::from_toml_str(source).unwrap();

    assert_eq!(config.max_satellite_depth, 2);
    assert_eq!(config.orbit_gap_au, (0.1, 0.4));
    assert_eq!(config.spectral_classes, vec![SpectralType::G, SpectralType::K]);
    assert_eq!(config.satellite_means.gas, 4.5);
    assert_eq!(config.satellite_means.ice, 2.0);
    assert_eq!(config.sub_planets.max_count, 1);
    assert_eq!(config.sub_planets.mass_threshold, 100.0);
    assert_eq!(config.inner_weights, vec![0.8, 0.2]);
}

#[test]
fn test_empty_toml_is_default() {
    let config = GeneratorConfig::from_toml_str("").unwrap();
    assert_eq!(config, GeneratorConfig::default());
}

#[test]
fn test_toml_parse_errors() {
    assert!(matches!(
        GeneratorConfig::from_toml_str("max_satellite_depth = "),
        Err(GenerationError::ConfigParse(_))
    ));
    assert!(matches!(
        GeneratorConfig::from_toml_str(r#"inner_classes = ["Plasma"]"#),
        Err(GenerationError::ConfigParse(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = GeneratorConfig::from_toml_file("/definitely/not/here/generator.toml");
    assert!(matches!(result, Err(GenerationError::ConfigRead(_))));
}

#[test]
fn test_validate_rejects_bad_values() {
    let field_of = |config: GeneratorConfig| match config.validate() {
        Err(GenerationError::InvalidConfig { field, .. }) => field,
        other => panic!("expected InvalidConfig, got {:?}", other),
    };

    let mut config = GeneratorConfig::default();
    config.orbit_gap_au = (1.5, 0.2);
    assert_eq!(field_of(config), "orbit_gap_au");

    let mut config = GeneratorConfig::default();
    config.satellite_means.rock = -1.0;
    assert_eq!(field_of(config), "satellite_means");

    let mut config = GeneratorConfig::default();
    config.inner_weights = vec![1.0];
    assert_eq!(field_of(config), "inner_weights");

    let mut config = GeneratorConfig::default();
    config.outer_weights = vec![0.0, 0.0, 0.0];
    assert_eq!(field_of(config), "outer_weights");

    let mut config = GeneratorConfig::default();
    config.spectral_classes.clear();
    assert_eq!(field_of(config), "spectral_classes");

    let mut config = GeneratorConfig::default();
    config.sub_planets.max_count = 0;
    assert_eq!(field_of(config), "sub_planets.max_count");

    let mut config = GeneratorConfig::default();
    config.first_orbit_au = f64::NAN;
    assert_eq!(field_of(config), "first_orbit_au");
}

#[test]
fn test_degenerate_range_is_allowed() {
    let mut config = GeneratorConfig::default();
    config.moon_orbit_au = (0.1, 0.1);
    assert!(config.validate().is_ok());
}

#[test]
fn test_restrict_spectral_classes() {
    let mut config = GeneratorConfig::default();
    config.restrict_spectral_classes(["M", "K"]).unwrap();
    assert_eq!(config.spectral_classes, vec![SpectralType::M, SpectralType::K]);

    let err = config.restrict_spectral_classes(["G", "X"]).unwrap_err();
    assert!(matches!(err, GenerationError::InvalidCategory(_)));
    // unchanged on failure
    assert_eq!(config.spectral_classes, vec![SpectralType::M, SpectralType::K]);
}
