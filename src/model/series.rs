//! Output containers: aligned kinetic time series and generic (x, y) curves

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::InhibkinError;

/// One row of a kinetic time series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Time (h)
    pub time: f64,
    /// Inhibitor concentration (mmol/L)
    pub concentration: f64,
    /// Specific growth rate μ (h⁻¹)
    pub growth_rate: f64,
    /// Biomass (cells/mL)
    pub biomass: f64,
}

/// Model quantity tracked in a [`TimeSeries`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Concentration,
    GrowthRate,
    Biomass,
    /// log10 of biomass, the scale the growth curve is usually read on
    Log10Biomass,
}

impl Quantity {
    pub fn label(&self) -> &'static str {
        match self {
            Quantity::Concentration => "Concentration (mmol/L)",
            Quantity::GrowthRate => "μ (h⁻¹)",
            Quantity::Biomass => "Biomass (cells/mL)",
            Quantity::Log10Biomass => "log₁₀(cells/mL)",
        }
    }

    fn value(&self, point: &TimePoint) -> f64 {
        match self {
            Quantity::Concentration => point.concentration,
            Quantity::GrowthRate => point.growth_rate,
            Quantity::Biomass => point.biomass,
            Quantity::Log10Biomass => point.biomass.log10(),
        }
    }
}

/// Concentration, growth rate and biomass aligned on one time grid
///
/// Created by [`evaluate`](super::evaluate) or read back from an export;
/// there is no way to modify a series after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    points: Vec<TimePoint>,
}

#[derive(Deserialize)]
struct RawTimeSeries {
    points: Vec<TimePoint>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = InhibkinError;

    fn try_from(raw: RawTimeSeries) -> Result<Self, Self::Error> {
        TimeSeries::from_points(raw.points)
    }
}

impl TimeSeries {
    /// Build a series from rows, checking that time is non-decreasing
    pub fn from_points(points: Vec<TimePoint>) -> Result<Self, InhibkinError> {
        for (i, pair) in points.windows(2).enumerate() {
            if pair[1].time < pair[0].time {
                return Err(InhibkinError::invalid(
                    format!("time[{}]", i + 1),
                    pair[1].time,
                    "time points must be non-decreasing",
                ));
            }
        }
        Ok(Self { points })
    }

    /// Rows produced by the evaluator are ordered by construction
    pub(crate) fn from_ordered(points: Vec<TimePoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[TimePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn concentrations(&self) -> Vec<f64> {
        self.column(Quantity::Concentration)
    }

    pub fn growth_rates(&self) -> Vec<f64> {
        self.column(Quantity::GrowthRate)
    }

    pub fn biomass(&self) -> Vec<f64> {
        self.column(Quantity::Biomass)
    }

    pub fn log10_biomass(&self) -> Vec<f64> {
        self.column(Quantity::Log10Biomass)
    }

    pub fn column(&self, quantity: Quantity) -> Vec<f64> {
        self.points.iter().map(|p| quantity.value(p)).collect()
    }

    /// `(t, value)` view of one quantity
    pub fn curve(&self, quantity: Quantity) -> Curve {
        Curve::from_trusted(self.times(), self.column(quantity))
    }
}

/// Ordered `(x, y)` pairs with linear interpolation inside the x-range
///
/// Used for time courses, inhibition curves (μ vs concentration) and
/// experimental measurements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawCurve")]
pub struct Curve {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Deserialize)]
struct RawCurve {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<RawCurve> for Curve {
    type Error = InhibkinError;

    fn try_from(raw: RawCurve) -> Result<Self, Self::Error> {
        Curve::new(raw.x, raw.y)
    }
}

impl Curve {
    /// Create a curve from parallel arrays
    ///
    /// `x` must be finite and non-decreasing; `y` must be finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self, InhibkinError> {
        if x.len() != y.len() {
            return Err(InhibkinError::invalid(
                "curve",
                y.len() as f64,
                format!("expected {} values to match the abscissa", x.len()),
            ));
        }
        for i in 0..x.len() {
            if !x[i].is_finite() || !y[i].is_finite() {
                return Err(InhibkinError::invalid(
                    format!("curve[{}]", i),
                    if x[i].is_finite() { y[i] } else { x[i] },
                    "must be finite",
                ));
            }
            if i > 0 && x[i] < x[i - 1] {
                return Err(InhibkinError::invalid(
                    format!("curve[{}]", i),
                    x[i],
                    "abscissa must be non-decreasing",
                ));
            }
        }
        Ok(Self { x, y })
    }

    /// Arrays already known to be ordered and of equal length
    pub(crate) fn from_trusted(x: Vec<f64>, y: Vec<f64>) -> Self {
        debug_assert_eq!(x.len(), y.len());
        Self { x, y }
    }

    /// Create a curve from `(x, y)` pairs in any order
    pub fn from_unsorted(mut points: Vec<(f64, f64)>) -> Result<Self, InhibkinError> {
        points.sort_by(|a, b| a.0.total_cmp(&b.0));
        let (x, y) = points.into_iter().unzip();
        Self::new(x, y)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// `(first x, last x)`, or `None` for an empty curve
    pub fn x_range(&self) -> Option<(f64, f64)> {
        Some((*self.x.first()?, *self.x.last()?))
    }

    /// `(min y, max y)`, or `None` for an empty curve
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.y.iter().copied().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Linearly interpolated y at `x`
    ///
    /// Returns `None` outside `[first x, last x]`; no extrapolation.
    pub fn interpolate(&self, x: f64) -> Option<f64> {
        let (start, end) = self.x_range()?;
        if !(x >= start && x <= end) {
            return None;
        }
        // First index strictly beyond x
        let hi = self.x.partition_point(|&xi| xi <= x);
        if hi == self.x.len() {
            return self.y.last().copied();
        }
        let lo = hi - 1;
        let (x0, x1) = (self.x[lo], self.x[hi]);
        let (y0, y1) = (self.y[lo], self.y[hi]);
        Some(y0 + (y1 - y0) * (x - x0) / (x1 - x0))
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.x_range() {
            Some((a, b)) => write!(f, "Curve({} points, x ∈ [{}, {}])", self.len(), a, b),
            None => write!(f, "Curve(empty)"),
        }
    }
}
