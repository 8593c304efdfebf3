//! Competitive enzyme inhibition and its effect on bacterial growth
//!
//! `inhibkin` evaluates a small closed-form model chain
//!
//! ```text
//! ParameterSet → TimeGrid → C(t) → μ(t) → N(t) → ED50 / relative potency
//! ```
//!
//! to compare the potency of two inhibitors. Evaluation is pure and
//! synchronous; there is no solver, cache or shared state. The crate also
//! covers the glue around the model: experimental data import, comparison,
//! CSV/JSON export and plot-ready panels.

pub mod data;
pub mod error;
pub mod export;
pub mod model;
pub mod params;
pub mod render;

pub use error::InhibkinError;

pub mod prelude {
    pub use crate::data::{
        compare_to_experimental, read_experimental_csv, reference_dataset,
        reference_growth_curve, DoseResponsePoint, Residuals,
    };
    pub use crate::error::InhibkinError;
    pub use crate::export::{
        default_export_filename, read_time_series_csv, write_summary_json,
        write_time_series_csv, CsvOptions, RunSummary,
    };
    pub use crate::model::{
        biomass, compare_compounds, concentration, estimate_ed50, evaluate, evaluate_compound,
        growth_rate, inhibition_curve, relative_potency, ComparisonResult, Curve, Quantity,
        TimePoint, TimeSeries,
    };
    pub use crate::params::{Compound, Parameter, ParameterSet, TimeGrid};
    pub use crate::render::Dashboard;
}
