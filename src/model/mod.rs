//! Model Evaluator
//!
//! Pure, stateless evaluation of the inhibition / pharmacokinetic / growth
//! model. Nothing in here keeps state between calls: every function maps
//! its inputs to a freshly allocated result.
//!
//! # Equations
//!
//! | Quantity | Closed form |
//! |----------|-------------|
//! | Inhibitor concentration | C(t) = C0·e^(−(ka+ke)·t) |
//! | Competitive inhibition | μ(C) = μmax / (1 + C/Ki) |
//! | Logistic biomass | N(t) = Kmax·N0 / (N0 + (Kmax − N0)·e^(−μ·t)) |
//! | ED50 | ED50 = Ki |
//!
//! # Evaluation policy
//!
//! [`evaluate`] walks the time grid and, at each t, plugs that t's
//! instantaneous μ into the logistic closed form as if μ had been constant
//! since t = 0. This is not an integration of a time-varying rate; the
//! points are independent of each other.
//!
//! ```rust
//! use inhibkin::model::{evaluate, compare_compounds};
//! use inhibkin::params::ParameterSet;
//!
//! let params = ParameterSet::default();
//! let series = evaluate(params, &params.time_grid()?)?;
//! assert_eq!(series.len(), 101);
//!
//! let comparison = compare_compounds(&params)?;
//! println!("{}", comparison);
//! # Ok::<(), inhibkin::InhibkinError>(())
//! ```

mod equations;
mod evaluator;
mod potency;
mod series;

pub use equations::{biomass, concentration, growth_rate};
pub use evaluator::{
    default_inhibition_curve, evaluate, evaluate_compound, inhibition_curve, linspace,
    INHIBITION_CONCENTRATION_RANGE, INHIBITION_CURVE_POINTS,
};
pub use potency::{compare_compounds, estimate_ed50, relative_potency, ComparisonResult};
pub use series::{Curve, Quantity, TimePoint, TimeSeries};

pub use crate::data::{compare_to_experimental, Residual, Residuals};
