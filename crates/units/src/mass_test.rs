mod tests {
    use approx::assert_relative_eq;

    use crate::mass::Mass;

    #[test]
    fn test_mass_in_solar_masses() {
        let sun = Mass::from_solar_masses(1.0);
        assert_relative_eq!(sun.to_solar_masses(), 1.0);
        assert!(Mass::from_solar_masses(0.08) < sun);
        assert_eq!(Mass::from_solar_masses(0.5).to_string(), "0.5 M☉");
    }

    #[test]
    fn test_mass_arithmetic() {
        let total = Mass::from_solar_masses(1.0) + Mass::from_solar_masses(0.5);
        assert_relative_eq!(total.to_solar_masses(), 1.5);
        assert_relative_eq!((total * 2.0).to_solar_masses(), 3.0);
    }
}
