use serde::{Deserialize, Serialize};

use crate::error::InhibkinError;

/// Largest number of intervals [`TimeGrid::uniform`] accepts
pub const MAX_INTERVALS: usize = 1_000_000;

/// Ordered, non-empty set of time points (h) at which the model is evaluated
///
/// Points are finite, non-negative and non-decreasing. Spacing may be
/// arbitrary; [`TimeGrid::uniform`] builds the evenly spaced grid used by
/// the interactive tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct TimeGrid {
    points: Vec<f64>,
}

impl TimeGrid {
    /// Build a grid from arbitrary time points
    pub fn new(points: Vec<f64>) -> Result<Self, InhibkinError> {
        if points.is_empty() {
            return Err(InhibkinError::invalid(
                "time_grid",
                0.0,
                "must contain at least one time point",
            ));
        }
        for (i, &t) in points.iter().enumerate() {
            if !t.is_finite() || t < 0.0 {
                return Err(InhibkinError::invalid(
                    format!("time_grid[{}]", i),
                    t,
                    "time points must be finite and non-negative",
                ));
            }
            if i > 0 && t < points[i - 1] {
                return Err(InhibkinError::invalid(
                    format!("time_grid[{}]", i),
                    t,
                    "time points must be non-decreasing",
                ));
            }
        }
        Ok(Self { points })
    }

    /// `intervals + 1` evenly spaced points from 0 to `t_end` inclusive
    pub fn uniform(t_end: f64, intervals: usize) -> Result<Self, InhibkinError> {
        if !t_end.is_finite() || t_end <= 0.0 {
            return Err(InhibkinError::invalid(
                "time_end",
                t_end,
                "must be finite and strictly positive",
            ));
        }
        if intervals == 0 {
            return Err(InhibkinError::invalid(
                "time_points",
                0.0,
                "must be at least 1",
            ));
        }
        if intervals > MAX_INTERVALS {
            return Err(InhibkinError::invalid(
                "time_points",
                intervals as f64,
                format!("must be at most {}", MAX_INTERVALS),
            ));
        }
        let n = intervals as f64;
        // Scale instead of accumulating dt so the last point is exactly t_end
        let points = (0..=intervals).map(|i| t_end * i as f64 / n).collect();
        Ok(Self { points })
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> f64 {
        self.points[0]
    }

    pub fn end(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().copied()
    }
}

impl TryFrom<Vec<f64>> for TimeGrid {
    type Error = InhibkinError;

    fn try_from(points: Vec<f64>) -> Result<Self, Self::Error> {
        TimeGrid::new(points)
    }
}

impl From<TimeGrid> for Vec<f64> {
    fn from(grid: TimeGrid) -> Self {
        grid.points
    }
}
