use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use units::Length;

use crate::attributes::OrbitContext;
use crate::body::PlanetaryBody;
use crate::composition_class::CompositionClass;

#[test]
fn test_body_scan_once() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let mut body = PlanetaryBody::sample(
        &mut rng,
        CompositionClass::Rock,
        OrbitContext::Primary {
            orbit_radius: Length::from_au(1.0),
        },
    );
    assert!(!body.surface.is_scanned());

    let seed = body.scan(&mut rng).seed;
    let again = body.scan(&mut rng).seed;
    assert_eq!(seed, again);
    assert!(body.surface.is_scanned());
}

#[test]
fn test_body_serializes_with_class() {
    let mut rng = ChaChaRng::seed_from_u64(8);
    let body = PlanetaryBody::sample(
        &mut rng,
        CompositionClass::Gas,
        OrbitContext::Primary {
            orbit_radius: Length::from_au(5.2),
        },
    );
    let json = serde_json::to_string(&body).unwrap();
    assert!(json.contains("\"class\":\"Gas\""));
    assert!(json.contains("\"surface\":null"));

    let back: PlanetaryBody = serde_json::from_str(&json).unwrap();
    assert_eq!(back.class, CompositionClass::Gas);
    assert_eq!(back.attributes.atmosphere, body.attributes.atmosphere);
    assert_relative_eq!(back.attributes.mass, body.attributes.mass);
    assert!(!back.surface.is_scanned());
}
