//! Small hand-built systems shared by the unit tests.

use orbits::Vec3;
use planetary::{CompositionClass, OrbitContext, PlanetaryBody};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use stellar::{SpectralType, sample_star};
use units::Length;

use crate::body::{BodyId, BodyKind, CelestialBody, Ship};
use crate::system::StarSystem;

/// `name` star with one Rock planet at 1 AU (one moon) and one Gas planet at 5 AU.
pub fn sample_system(id: u64, name: &str) -> StarSystem {
    let mut rng = ChaChaRng::seed_from_u64(id);
    let star_id = BodyId(id * 10);
    let mut star = CelestialBody::new(
        star_id,
        format!("G-{name}"),
        Length::zero(),
        None,
        BodyKind::Star(sample_star(&mut rng, SpectralType::G)),
    );

    let rock_id = star_id.child(10, 1).unwrap();
    let mut rock = CelestialBody::new(
        rock_id,
        format!("{name}-I"),
        Length::from_au(1.0),
        Some(star_id),
        BodyKind::Planet(PlanetaryBody::sample(
            &mut rng,
            CompositionClass::Rock,
            OrbitContext::Primary {
                orbit_radius: Length::from_au(1.0),
            },
        )),
    );
    let moon_radius = Length::from_au(0.1);
    rock.bound.push(CelestialBody::new(
        rock_id.child(10, 1).unwrap(),
        format!("{name}-I-I"),
        moon_radius,
        Some(rock_id),
        BodyKind::Moon(PlanetaryBody::sample(
            &mut rng,
            CompositionClass::Moon,
            OrbitContext::Satellite {
                orbit_radius: moon_radius,
                parent_radius: Some(1.0),
            },
        )),
    ));

    let gas = CelestialBody::new(
        star_id.child(10, 2).unwrap(),
        format!("{name}-II"),
        Length::from_au(5.0),
        Some(star_id),
        BodyKind::Planet(PlanetaryBody::sample(
            &mut rng,
            CompositionClass::Gas,
            OrbitContext::Primary {
                orbit_radius: Length::from_au(5.0),
            },
        )),
    );

    star.bound.push(rock);
    star.bound.push(gas);
    StarSystem::new(id, name, Vec3::new(0.5, 0.5, 0.5), star)
}

pub fn sample_ship(name: &str) -> CelestialBody {
    CelestialBody::ship(
        BodyId(9_000),
        name,
        Ship {
            owner: "Ada".to_string(),
            class_label: "corvette".to_string(),
            owner_color: 199,
        },
    )
}
