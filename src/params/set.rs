use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{Bound, Compound, Parameter, TimeGrid, MAX_INTERVALS};
use crate::error::{ensure_non_negative, ensure_positive, InhibkinError};

/// A snapshot of every model input
///
/// Passed by value into the evaluator. Fields missing from a configuration
/// file take their [`Default`] values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    /// Maximum (uninhibited) specific growth rate (h⁻¹)
    pub mu_max: f64,
    /// Inhibition constant of compound 1 (mmol/L)
    pub ki_compound1: f64,
    /// Inhibition constant of compound 2 (mmol/L)
    pub ki_compound2: f64,
    /// Absorption rate constant (h⁻¹)
    pub ka: f64,
    /// Elimination rate constant (h⁻¹)
    pub ke: f64,
    /// Inhibitor concentration at t = 0 (mmol/L)
    pub initial_concentration: f64,
    /// Initial biomass (cells/mL)
    pub n0: f64,
    /// Carrying capacity (cells/mL)
    pub k_max: f64,
    /// Compound driving the kinetic time series
    pub compound: Compound,
    /// End of the uniform time grid (h)
    pub time_end: f64,
    /// Number of intervals of the uniform time grid
    pub time_points: usize,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            mu_max: Parameter::MuMax.default_value(),
            ki_compound1: Parameter::KiCompound1.default_value(),
            ki_compound2: Parameter::KiCompound2.default_value(),
            ka: Parameter::Ka.default_value(),
            ke: Parameter::Ke.default_value(),
            initial_concentration: Parameter::InitialConcentration.default_value(),
            n0: Parameter::N0.default_value(),
            k_max: Parameter::KMax.default_value(),
            compound: Compound::default(),
            time_end: Parameter::TimeEnd.default_value(),
            time_points: Parameter::TimePoints.default_value() as usize,
        }
    }
}

impl ParameterSet {
    /// Read the current value of a parameter
    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::MuMax => self.mu_max,
            Parameter::KiCompound1 => self.ki_compound1,
            Parameter::KiCompound2 => self.ki_compound2,
            Parameter::Ka => self.ka,
            Parameter::Ke => self.ke,
            Parameter::InitialConcentration => self.initial_concentration,
            Parameter::N0 => self.n0,
            Parameter::KMax => self.k_max,
            Parameter::TimeEnd => self.time_end,
            Parameter::TimePoints => self.time_points as f64,
        }
    }

    /// Return a copy with one parameter replaced
    ///
    /// The new value is checked against the parameter's [`Bound`]; the
    /// original set is left untouched either way.
    pub fn with(self, parameter: Parameter, value: f64) -> Result<Self, InhibkinError> {
        check_bound(parameter, value)?;
        let mut next = self;
        match parameter {
            Parameter::MuMax => next.mu_max = value,
            Parameter::KiCompound1 => next.ki_compound1 = value,
            Parameter::KiCompound2 => next.ki_compound2 = value,
            Parameter::Ka => next.ka = value,
            Parameter::Ke => next.ke = value,
            Parameter::InitialConcentration => next.initial_concentration = value,
            Parameter::N0 => next.n0 = value,
            Parameter::KMax => next.k_max = value,
            Parameter::TimeEnd => next.time_end = value,
            Parameter::TimePoints => next.time_points = value.round() as usize,
        }
        Ok(next)
    }

    pub fn with_compound(self, compound: Compound) -> Self {
        Self { compound, ..self }
    }

    /// Check every invariant of the set
    pub fn validate(&self) -> Result<(), InhibkinError> {
        for parameter in Parameter::ALL {
            check_bound(parameter, self.get(parameter))?;
        }
        Ok(())
    }

    /// Inhibition constant of `compound`
    pub fn ki(&self, compound: Compound) -> f64 {
        match compound {
            Compound::Compound1 => self.ki_compound1,
            Compound::Compound2 => self.ki_compound2,
        }
    }

    /// Inhibition constant of the selected compound
    pub fn selected_ki(&self) -> f64 {
        self.ki(self.compound)
    }

    /// Uniform grid described by `time_end` and `time_points`
    pub fn time_grid(&self) -> Result<TimeGrid, InhibkinError> {
        TimeGrid::uniform(self.time_end, self.time_points)
    }

    /// Parameters whose value lies outside the advisory slider range
    pub fn outside_slider_ranges(&self) -> Vec<(Parameter, f64)> {
        Parameter::ALL
            .iter()
            .map(|&p| (p, self.get(p)))
            .filter(|(p, v)| !p.in_slider_range(*v))
            .collect()
    }

    /// Load and validate a JSON parameter file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, InhibkinError> {
        let path = path.as_ref();
        let config_error = |reason: String| InhibkinError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let contents = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        let params: ParameterSet =
            serde_json::from_str(&contents).map_err(|e| config_error(e.to_string()))?;
        params.validate().map_err(|e| config_error(e.to_string()))?;
        log::info!("Loaded parameters from {}", path.display());
        Ok(params)
    }

    /// Load a JSON parameter file, falling back to defaults on any failure
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_json_file(path.as_ref()) {
            Ok(params) => params,
            Err(e) => {
                log::warn!("{}, using default parameters", e);
                Self::default()
            }
        }
    }
}

fn check_bound(parameter: Parameter, value: f64) -> Result<(), InhibkinError> {
    let name = parameter.name();
    match parameter.bound() {
        Bound::NonNegative => ensure_non_negative(name, value).map(|_| ()),
        Bound::Positive => ensure_positive(name, value).map(|_| ()),
        Bound::Count => {
            if !value.is_finite() || value.round() < 1.0 {
                Err(InhibkinError::invalid(name, value, "must be at least 1"))
            } else if value.round() > MAX_INTERVALS as f64 {
                Err(InhibkinError::invalid(
                    name,
                    value,
                    format!("must be at most {}", MAX_INTERVALS),
                ))
            } else {
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        let params = ParameterSet::default();
        params.validate().unwrap();
        assert_eq!(params.selected_ki(), 0.12);
        assert_eq!(params.time_grid().unwrap().len(), 101);
    }

    #[test]
    fn test_with_returns_new_set() {
        let base = ParameterSet::default();
        let next = base.with(Parameter::KiCompound2, 25.0).unwrap();
        assert_eq!(next.ki_compound2, 25.0);
        assert_eq!(base.ki_compound2, 10.0);
    }

    #[test]
    fn test_with_rejects_zero_ki() {
        let base = ParameterSet::default();
        let err = base.with(Parameter::KiCompound1, 0.0).unwrap_err();
        match err {
            InhibkinError::InvalidParameter { param, value, .. } => {
                assert_eq!(param, "ki_compound1");
                assert_eq!(value, 0.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_rejects_negative_rates() {
        let base = ParameterSet::default();
        assert!(base.with(Parameter::Ka, -0.1).is_err());
        assert!(base.with(Parameter::Ke, f64::NAN).is_err());
        assert!(base.with(Parameter::Ka, 0.0).is_ok());
    }

    #[test]
    fn test_time_points_are_rounded() {
        let params = ParameterSet::default()
            .with(Parameter::TimePoints, 59.6)
            .unwrap();
        assert_eq!(params.time_points, 60);
        assert!(ParameterSet::default()
            .with(Parameter::TimePoints, 0.2)
            .is_err());
    }

    #[test]
    fn test_time_points_have_upper_bound() {
        let base = ParameterSet::default();
        for value in [1e20, 1e9, f64::INFINITY] {
            let err = base.with(Parameter::TimePoints, value).unwrap_err();
            assert!(matches!(err, InhibkinError::InvalidParameter { .. }));
        }
        let max = base
            .with(Parameter::TimePoints, MAX_INTERVALS as f64)
            .unwrap();
        assert_eq!(max.time_points, MAX_INTERVALS);
    }

    #[test]
    fn test_oversized_grid_in_config_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "time_points": 5000000000 }}"#).unwrap();

        let err = ParameterSet::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, InhibkinError::Config { .. }));

        let params = ParameterSet {
            time_points: usize::MAX,
            ..ParameterSet::default()
        };
        assert!(params.validate().is_err());
        assert!(params.time_grid().is_err());
    }

    #[test]
    fn test_validate_catches_direct_field_edits() {
        let params = ParameterSet {
            n0: 0.0,
            ..ParameterSet::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_outside_slider_ranges() {
        let params = ParameterSet::default()
            .with(Parameter::KiCompound2, 80.0)
            .unwrap();
        let flagged = params.outside_slider_ranges();
        assert_eq!(flagged, vec![(Parameter::KiCompound2, 80.0)]);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mu_max": 1.2, "compound": "compound2" }}"#).unwrap();

        let params = ParameterSet::from_json_file(file.path()).unwrap();
        assert_eq!(params.mu_max, 1.2);
        assert_eq!(params.compound, Compound::Compound2);
        assert_eq!(params.ki_compound1, 0.12);
    }

    #[test]
    fn test_invalid_json_values_are_config_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "ki_compound2": -3.0 }}"#).unwrap();

        let err = ParameterSet::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, InhibkinError::Config { .. }));
        assert_eq!(
            ParameterSet::load_or_default(file.path()),
            ParameterSet::default()
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let params = ParameterSet::load_or_default("does/not/exist.json");
        assert_eq!(params, ParameterSet::default());
    }
}
