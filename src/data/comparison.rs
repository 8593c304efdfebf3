use serde::{Deserialize, Serialize};

use crate::error::InhibkinError;
use crate::model::Curve;

/// Model prediction against one measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Residual {
    /// Abscissa of the measurement
    pub x: f64,
    pub observed: f64,
    /// Model value linearly interpolated at `x`
    pub predicted: f64,
    /// `observed - predicted`
    pub residual: f64,
}

/// Pointwise comparison of a model curve with experimental data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Residuals {
    points: Vec<Residual>,
    skipped: usize,
}

impl Residuals {
    pub fn points(&self) -> &[Residual] {
        &self.points
    }

    /// Measurements outside the model range that were left out
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn mean_residual(&self) -> f64 {
        self.points.iter().map(|r| r.residual).sum::<f64>() / self.points.len() as f64
    }

    /// Root mean squared residual
    pub fn rmse(&self) -> f64 {
        let ss: f64 = self.points.iter().map(|r| r.residual * r.residual).sum();
        (ss / self.points.len() as f64).sqrt()
    }

    pub fn max_abs_residual(&self) -> f64 {
        self.points
            .iter()
            .map(|r| r.residual.abs())
            .fold(0.0, f64::max)
    }
}

/// Compare a model curve with measurements at matching abscissae
///
/// The model is linearly interpolated at each measurement's x. Measurements
/// outside the model's x-range are skipped rather than extrapolated; when
/// none remain the result is [`InhibkinError::ImportMismatch`]. No fitting
/// takes place.
pub fn compare_to_experimental(
    model: &Curve,
    experimental: &Curve,
) -> Result<Residuals, InhibkinError> {
    let (model_start, model_end) = model.x_range().ok_or_else(|| {
        InhibkinError::invalid("model_curve", 0.0, "must contain at least one point")
    })?;

    let mut points = Vec::with_capacity(experimental.len());
    let mut skipped = 0;
    for (x, observed) in experimental.points() {
        match model.interpolate(x) {
            Some(predicted) => points.push(Residual {
                x,
                observed,
                predicted,
                residual: observed - predicted,
            }),
            None => skipped += 1,
        }
    }

    if points.is_empty() {
        return Err(InhibkinError::ImportMismatch {
            model_start,
            model_end,
        });
    }
    if skipped > 0 {
        log::debug!(
            "{} experimental points outside [{}, {}] were skipped",
            skipped,
            model_start,
            model_end
        );
    }
    Ok(Residuals { points, skipped })
}
