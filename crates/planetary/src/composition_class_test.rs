use crate::composition_class::CompositionClass;

#[test]
fn test_class_names_round_trip() {
    for class in CompositionClass::ALL {
        assert_eq!(class.name().parse::<CompositionClass>(), Ok(class));
        assert_eq!(class.to_string(), class.name());
    }
}

#[test]
fn test_unknown_class_is_rejected() {
    let err = "Plasma".parse::<CompositionClass>().unwrap_err();
    assert_eq!(err.label, "Plasma");
    assert_eq!(err.to_string(), "unknown composition class 'Plasma'");
    assert!("rock".parse::<CompositionClass>().is_err());
}

#[test]
fn test_profiles_are_well_formed() {
    for class in CompositionClass::ALL {
        let p = class.profile();
        for (min, max) in [p.mass, p.radius, p.density] {
            assert!(min > 0.0 && min < max, "{class}: ({min}, {max})");
        }
        assert!(!p.atmospheres.is_empty());
    }
}

#[test]
fn test_rock_profile() {
    let rock = CompositionClass::Rock.profile();
    assert_eq!(rock.mass, (0.1, 10.0));
    assert_eq!(rock.radius, (0.5, 2.0));
    assert_eq!(rock.core_composition, "Iron-Nickel");
    assert_eq!(CompositionClass::Metal.profile().atmospheres, &["None"]);
}
