use approx::assert_relative_eq;
use inhibkin::prelude::*;

fn grid(points: &[f64]) -> TimeGrid {
    TimeGrid::new(points.to_vec()).expect("valid grid")
}

#[test]
fn concentration_decays_monotonically() {
    let params = ParameterSet::default();
    let series = evaluate(params, &params.time_grid().unwrap()).unwrap();

    let c = series.concentrations();
    assert_eq!(c[0], params.initial_concentration);
    assert!(c.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn growth_rate_recovers_as_inhibitor_clears() {
    let params = ParameterSet::default();
    let series = evaluate(params, &params.time_grid().unwrap()).unwrap();

    let mu = series.growth_rates();
    assert!(mu.windows(2).all(|w| w[1] >= w[0]));
    assert!(mu.iter().all(|&m| m > 0.0 && m <= params.mu_max));
}

#[test]
fn biomass_stays_between_n0_and_capacity() {
    let params = ParameterSet::default().with_compound(Compound::Compound2);
    let series = evaluate(params, &params.time_grid().unwrap()).unwrap();

    for n in series.biomass() {
        assert!(n >= params.n0 && n <= params.k_max, "biomass {} out of range", n);
    }
}

#[test]
fn stronger_inhibitor_grows_less() {
    let params = ParameterSet::default();
    let grid = params.time_grid().unwrap();
    let strong = evaluate_compound(params, &grid, Compound::Compound1).unwrap();
    let weak = evaluate_compound(params, &grid, Compound::Compound2).unwrap();

    for (s, w) in strong.points().iter().zip(weak.points()) {
        assert_eq!(s.concentration, w.concentration);
        assert!(s.growth_rate <= w.growth_rate);
        assert!(s.biomass <= w.biomass);
    }
}

#[test]
fn no_inhibitor_grows_at_mu_max() {
    let params = ParameterSet::default()
        .with(Parameter::InitialConcentration, 0.0)
        .unwrap();
    let series = evaluate(params, &grid(&[0.0, 1.0, 4.0])).unwrap();

    for p in series.points() {
        assert_eq!(p.concentration, 0.0);
        assert_relative_eq!(p.growth_rate, params.mu_max);
    }
}

#[test]
fn concentration_at_ki_halves_growth() {
    let params = ParameterSet::default()
        .with(Parameter::Ka, 0.0)
        .unwrap()
        .with(Parameter::Ke, 0.0)
        .unwrap()
        .with(Parameter::InitialConcentration, 0.12)
        .unwrap();
    let series = evaluate(params, &grid(&[0.0, 2.0])).unwrap();

    for p in series.points() {
        assert_relative_eq!(p.growth_rate, params.mu_max / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn n0_at_capacity_is_stationary() {
    let params = ParameterSet::default()
        .with(Parameter::N0, 1e9)
        .unwrap();
    let series = evaluate(params, &grid(&[0.0, 3.0, 8.0])).unwrap();

    assert!(series.biomass().iter().all(|&n| n == 1e9));
}

#[test]
fn zero_ki_is_rejected() {
    let params = ParameterSet {
        ki_compound1: 0.0,
        ..ParameterSet::default()
    };
    let err = evaluate(params, &grid(&[0.0, 1.0])).unwrap_err();
    assert!(matches!(err, InhibkinError::InvalidParameter { .. }));
}

#[test]
fn relative_potency_is_reciprocal_on_swap() {
    let ab = relative_potency(0.12, 10.0).unwrap();
    let ba = relative_potency(10.0, 0.12).unwrap();
    assert_relative_eq!(ab * ba, 1.0, epsilon = 1e-12);

    let comparison = compare_compounds(&ParameterSet::default()).unwrap();
    assert_relative_eq!(comparison.relative_potency, 10.0 / 0.12);
    assert_eq!(comparison.more_potent(), Compound::Compound1);
}

#[test]
fn ed50_tracks_ki_not_mu_max() {
    assert_eq!(estimate_ed50(0.95, 0.12).unwrap(), 0.12);
    assert_eq!(estimate_ed50(2.0, 0.12).unwrap(), 0.12);
    assert!(estimate_ed50(0.95, -1.0).is_err());
}

#[test]
fn inhibition_curve_is_decreasing_and_halves_at_ki() {
    let concentrations = [0.0, 0.06, 0.12, 0.24];
    let curve = inhibition_curve(0.95, 0.12, &concentrations).unwrap();

    assert!(curve.y().windows(2).all(|w| w[1] < w[0]));
    assert_relative_eq!(curve.interpolate(0.12).unwrap(), 0.475, epsilon = 1e-12);
}
