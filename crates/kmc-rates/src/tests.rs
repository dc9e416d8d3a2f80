//! Unit tests for the rate model.

#[cfg(test)]
mod formulas {
    use kmc_core::BOLTZMANN_EV_PER_K;

    use crate::{activation_energy, arrhenius_rate, site_energy};

    #[test]
    fn site_energy_halves_each_bond() {
        assert_eq!(site_energy(0, 2.0), 0.0);
        assert_eq!(site_energy(4, 2.0), -4.0);
        assert!((site_energy(3, 2.07) + 3.105).abs() < 1e-12);
    }

    #[test]
    fn uphill_pays_one_plus_alpha() {
        let e_a = activation_energy(-2.0, -1.0, 0.1, 0.1);
        assert!((e_a - 1.2).abs() < 1e-12, "got {e_a}");
    }

    #[test]
    fn neutral_move_costs_e0() {
        assert_eq!(activation_energy(-1.5, -1.5, 0.3, 0.25), 0.25);
    }

    #[test]
    fn downhill_recovers_alpha() {
        let e_a = activation_energy(-1.0, -2.0, 0.1, 0.1);
        assert!(e_a.abs() < 1e-12, "got {e_a}");
    }

    #[test]
    fn zero_barrier_runs_at_attempt_frequency() {
        assert_eq!(arrhenius_rate(0.0, 300.0, 1e13), 1e13);
    }

    #[test]
    fn arrhenius_matches_closed_form() {
        let k = arrhenius_rate(0.5, 500.0, 2e12);
        let expected = 2e12 * (-0.5 / (BOLTZMANN_EV_PER_K * 500.0)).exp();
        assert!((k / expected - 1.0).abs() < 1e-12);
    }

    #[test]
    fn hotter_is_faster() {
        assert!(arrhenius_rate(0.3, 600.0, 1e13) > arrhenius_rate(0.3, 300.0, 1e13));
    }
}

#[cfg(test)]
mod table {
    use kmc_core::{KmcError, PhysicalParams};

    use crate::{MAX_BONDS, RateTable, transition_rate};

    #[test]
    fn covers_every_bond_pair() {
        let params = PhysicalParams::default();
        let table = RateTable::from_params(&params).unwrap();
        for start in 0..=MAX_BONDS {
            for end in 0..=MAX_BONDS {
                let r = table.rate(start, end).unwrap();
                assert!(r.is_finite() && r >= 0.0);
                assert_eq!(r, transition_rate(&params, start, end).unwrap());
            }
        }
    }

    #[test]
    fn more_bonds_means_slower_escape() {
        let table = RateTable::from_params(&PhysicalParams::default()).unwrap();
        assert!(table.rate(3, 0).unwrap() < table.rate(1, 0).unwrap());
        assert!(table.rate(2, 2).unwrap() > table.rate(3, 0).unwrap());
    }

    #[test]
    fn out_of_range_lookup_is_unconfigured() {
        let table = RateTable::uniform(1.0).unwrap();
        assert!(matches!(table.rate(5, 0), Err(KmcError::UnconfiguredTransition(_))));
        assert!(matches!(table.rate(0, 5), Err(KmcError::UnconfiguredTransition(_))));
    }

    #[test]
    fn invalid_physics_rejected() {
        let params = PhysicalParams { temperature: 0.0, ..PhysicalParams::default() };
        assert!(RateTable::from_params(&params).is_err());
    }

    #[test]
    fn negative_custom_rate_rejected() {
        assert!(RateTable::from_fn(|s, _| if s == 2 { -1.0 } else { 1.0 }).is_err());
        assert!(RateTable::uniform(f64::NAN).is_err());
    }

    #[test]
    fn from_fn_places_entries() {
        let table = RateTable::from_fn(|s, e| (s * 10 + e) as f64).unwrap();
        assert_eq!(table.rate(3, 1).unwrap(), 31.0);
        assert_eq!(table.as_array()[4][2], 42.0);
    }
}

#[cfg(test)]
mod named {
    use kmc_core::{KmcError, PhysicalParams};

    use crate::{NamedRates, NamedTransition, RateTable};

    #[test]
    fn from_params_fills_every_transition() {
        let named = NamedRates::from_params(&PhysicalParams::default()).unwrap();
        for t in NamedTransition::ALL {
            assert!(named.is_configured(t), "{t} missing");
        }
    }

    #[test]
    fn named_rates_agree_with_table() {
        let params = PhysicalParams::default();
        let named = NamedRates::from_params(&params).unwrap();
        let table = RateTable::from_params(&params).unwrap();
        assert_eq!(named.rate(NamedTransition::Adatom).unwrap(), table.rate(0, 0).unwrap());
        assert_eq!(named.rate(NamedTransition::Edge).unwrap(), table.rate(2, 2).unwrap());
        for d in 0..=3 {
            let t = NamedTransition::Surface { destination_bonds: d };
            assert_eq!(named.rate(t).unwrap(), table.rate(3, d).unwrap());
        }
    }

    #[test]
    fn unconfigured_lookup_is_an_error_not_zero() {
        let named = NamedRates::empty().with_rate(NamedTransition::Edge, 2.0).unwrap();
        assert_eq!(named.rate(NamedTransition::Edge).unwrap(), 2.0);
        assert!(matches!(
            named.rate(NamedTransition::Adatom),
            Err(KmcError::UnconfiguredTransition(_))
        ));
    }

    #[test]
    fn impossible_surface_destination_rejected() {
        let t = NamedTransition::Surface { destination_bonds: 4 };
        assert!(NamedRates::empty().with_rate(t, 1.0).is_err());
        assert!(NamedRates::uniform(1.0).unwrap().rate(t).is_err());
    }

    #[test]
    fn with_rate_overrides() {
        let named = NamedRates::uniform(1.0)
            .unwrap()
            .with_rate(NamedTransition::SurfaceFixed, 5.0)
            .unwrap();
        assert_eq!(named.rate(NamedTransition::SurfaceFixed).unwrap(), 5.0);
        assert_eq!(named.rate(NamedTransition::Adatom).unwrap(), 1.0);
    }

    #[test]
    fn display_names() {
        assert_eq!(NamedTransition::Adatom.to_string(), "adatom");
        assert_eq!(NamedTransition::Surface { destination_bonds: 2 }.to_string(), "surface→2");
    }
}
