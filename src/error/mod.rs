use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by model evaluation, data import and export
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InhibkinError {
    /// An input violates a model precondition
    #[error("Invalid parameter: {param} = {value} ({reason})")]
    InvalidParameter {
        param: String,
        value: f64,
        reason: String,
    },

    /// The destination of an export could not be written
    #[error("Failed to export to {}: {reason}", path.display())]
    ExportFailure { path: PathBuf, reason: String },

    /// Experimental data has no abscissa inside the model range
    #[error("Experimental data does not overlap the model range [{model_start}, {model_end}]")]
    ImportMismatch { model_start: f64, model_end: f64 },

    /// A data file could not be read or parsed
    #[error("Failed to import {}: {reason}", path.display())]
    Import { path: PathBuf, reason: String },

    /// A configuration file could not be read or parsed
    #[error("Invalid configuration {}: {reason}", path.display())]
    Config { path: PathBuf, reason: String },
}

impl InhibkinError {
    pub(crate) fn invalid(param: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        InhibkinError::InvalidParameter {
            param: param.into(),
            value,
            reason: reason.into(),
        }
    }
}

/// Require `value` to be finite and `>= 0`
pub(crate) fn ensure_non_negative(param: &str, value: f64) -> Result<f64, InhibkinError> {
    if !value.is_finite() {
        return Err(InhibkinError::invalid(param, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(InhibkinError::invalid(param, value, "must be non-negative"));
    }
    Ok(value)
}

/// Require `value` to be finite and `> 0`
pub(crate) fn ensure_positive(param: &str, value: f64) -> Result<f64, InhibkinError> {
    if !value.is_finite() {
        return Err(InhibkinError::invalid(param, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(InhibkinError::invalid(param, value, "must be strictly positive"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert!(ensure_positive("ki", 0.0).is_err());
        assert!(ensure_positive("ki", f64::NAN).is_err());
        assert!(ensure_positive("ki", -1.0).is_err());
        assert_eq!(ensure_positive("ki", 0.12).unwrap(), 0.12);
    }

    #[test]
    fn test_non_negative_accepts_zero() {
        assert_eq!(ensure_non_negative("ka", 0.0).unwrap(), 0.0);
        assert!(ensure_non_negative("ka", -0.01).is_err());
        assert!(ensure_non_negative("ka", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ensure_positive("ki_compound1", 0.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("ki_compound1"), "{msg}");
        assert!(msg.contains("strictly positive"), "{msg}");
    }
}
