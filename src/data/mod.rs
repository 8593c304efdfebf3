//! Experimental data and model-versus-experiment comparison
//!
//! Measurements arrive as `(x, value)` pairs, either from the built-in
//! reference datasets or from a CSV file, and are held as a
//! [`Curve`](crate::model::Curve). The abscissa is whatever the model curve
//! uses: time for kinetic series, concentration for inhibition curves.

mod comparison;
mod experimental;
mod reference;

pub use comparison::{compare_to_experimental, Residual, Residuals};
pub use experimental::{read_experimental_csv, read_experimental_reader};
pub use reference::{reference_dataset, reference_growth_curve, DoseResponsePoint};
