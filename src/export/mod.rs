//! File export of model output
//!
//! - [`csv`]: kinetic time series as `time,concentration,growth_rate,biomass`
//! - [`json`]: run summary with parameters, ED50 comparison and residuals
//!
//! Every export creates or fully overwrites its destination; nothing is
//! appended. Failures surface as [`InhibkinError::ExportFailure`] and leave
//! in-memory results untouched.
//!
//! [`InhibkinError::ExportFailure`]: crate::InhibkinError::ExportFailure

pub mod csv;
pub mod json;

pub use self::csv::{
    default_export_filename, read_time_series_csv, write_time_series_csv, CsvOptions,
};
pub use self::json::{read_summary_json, write_summary_json, RunSummary};
