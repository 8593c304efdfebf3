use super::equations::{biomass, concentration, growth_rate};
use super::series::{Curve, TimePoint, TimeSeries};
use crate::error::InhibkinError;
use crate::params::{Compound, ParameterSet, TimeGrid};

/// Concentration span (mmol/L) over which inhibition curves are drawn
pub const INHIBITION_CONCENTRATION_RANGE: (f64, f64) = (0.0, 0.25);

/// Number of points on a default inhibition curve
pub const INHIBITION_CURVE_POINTS: usize = 100;

/// Evaluate the kinetic model for the selected compound
///
/// Shorthand for [`evaluate_compound`] with `params.compound`.
pub fn evaluate(params: ParameterSet, grid: &TimeGrid) -> Result<TimeSeries, InhibkinError> {
    evaluate_compound(params, grid, params.compound)
}

/// Evaluate concentration, growth rate and biomass at every grid point
///
/// The three quantities are composed in a fixed order: C depends only on t,
/// μ on C at the same t, and N on that μ through the logistic closed form.
/// Each grid point is computed independently of its neighbours.
pub fn evaluate_compound(
    params: ParameterSet,
    grid: &TimeGrid,
    compound: Compound,
) -> Result<TimeSeries, InhibkinError> {
    params.validate()?;
    let ki = params.ki(compound);

    let points = grid
        .iter()
        .map(|t| {
            let c = concentration(t, params.initial_concentration, params.ka, params.ke);
            let mu = growth_rate(c, params.mu_max, ki)?;
            let n = biomass(t, params.n0, params.k_max, mu)?;
            Ok(TimePoint {
                time: t,
                concentration: c,
                growth_rate: mu,
                biomass: n,
            })
        })
        .collect::<Result<Vec<_>, InhibkinError>>()?;

    log::debug!(
        "Evaluated {} over {} time points (Ki = {})",
        compound,
        points.len(),
        ki
    );
    Ok(TimeSeries::from_ordered(points))
}

/// Growth rate as a function of inhibitor concentration
///
/// `concentrations` must be non-decreasing.
pub fn inhibition_curve(
    mu_max: f64,
    ki: f64,
    concentrations: &[f64],
) -> Result<Curve, InhibkinError> {
    let rates = concentrations
        .iter()
        .map(|&c| growth_rate(c, mu_max, ki))
        .collect::<Result<Vec<_>, _>>()?;
    Curve::new(concentrations.to_vec(), rates)
}

/// Inhibition curve of `compound` over [`INHIBITION_CONCENTRATION_RANGE`]
pub fn default_inhibition_curve(
    params: &ParameterSet,
    compound: Compound,
) -> Result<Curve, InhibkinError> {
    let (lo, hi) = INHIBITION_CONCENTRATION_RANGE;
    inhibition_curve(
        params.mu_max,
        params.ki(compound),
        &linspace(lo, hi, INHIBITION_CURVE_POINTS),
    )
}

/// `n` evenly spaced values from `start` to `end` inclusive
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![start],
        _ => {
            let span = end - start;
            let last = (n - 1) as f64;
            (0..n).map(|i| start + span * i as f64 / last).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Parameter;
    use approx::assert_relative_eq;

    #[test]
    fn test_evaluate_default_parameters() {
        let params = ParameterSet::default();
        let series = evaluate(params, &params.time_grid().unwrap()).unwrap();

        assert_eq!(series.len(), 101);
        let first = series.points()[0];
        assert_eq!(first.time, 0.0);
        assert_eq!(first.concentration, 0.2);
        assert_eq!(first.biomass, 1e6);
        assert_relative_eq!(first.growth_rate, 0.95 / (1.0 + 0.2 / 0.12), epsilon = 1e-12);
    }

    #[test]
    fn test_evaluate_uses_instantaneous_rate_per_point() {
        let params = ParameterSet::default();
        let grid = TimeGrid::new(vec![0.0, 2.0, 5.0]).unwrap();
        let series = evaluate(params, &grid).unwrap();

        for p in series.points() {
            let c = 0.2 * (-(0.1 + 0.05) * p.time).exp();
            let mu = 0.95 / (1.0 + c / 0.12);
            let n = 1e9 * 1e6 / (1e6 + (1e9 - 1e6) * (-mu * p.time).exp());
            assert_relative_eq!(p.concentration, c, max_relative = 1e-12);
            assert_relative_eq!(p.growth_rate, mu, max_relative = 1e-12);
            assert_relative_eq!(p.biomass, n, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_evaluate_compound_switches_ki() {
        let params = ParameterSet::default();
        let grid = TimeGrid::new(vec![1.0]).unwrap();
        let potent = evaluate_compound(params, &grid, Compound::Compound1).unwrap();
        let weak = evaluate_compound(params, &grid, Compound::Compound2).unwrap();

        assert!(potent.growth_rates()[0] < weak.growth_rates()[0]);
        assert_eq!(potent.concentrations(), weak.concentrations());
    }

    #[test]
    fn test_evaluate_refuses_invalid_parameters() {
        let params = ParameterSet {
            ki_compound1: 0.0,
            ..ParameterSet::default()
        };
        let grid = TimeGrid::new(vec![0.0, 1.0]).unwrap();
        let err = evaluate(params, &grid).unwrap_err();
        assert!(matches!(err, InhibkinError::InvalidParameter { .. }));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let params = ParameterSet::default()
            .with(Parameter::Ka, 0.3)
            .unwrap();
        let grid = params.time_grid().unwrap();
        assert_eq!(evaluate(params, &grid).unwrap(), evaluate(params, &grid).unwrap());
    }

    #[test]
    fn test_inhibition_curve_half_max_at_ki() {
        let curve = inhibition_curve(1.0, 0.1, &[0.0, 0.1, 0.2]).unwrap();
        assert_eq!(curve.y()[0], 1.0);
        assert_eq!(curve.y()[1], 0.5);
    }

    #[test]
    fn test_default_inhibition_curve_span() {
        let curve = default_inhibition_curve(&ParameterSet::default(), Compound::Compound2).unwrap();
        assert_eq!(curve.len(), INHIBITION_CURVE_POINTS);
        assert_eq!(curve.x_range(), Some((0.0, 0.25)));
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
