use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::data::Residuals;
use crate::error::InhibkinError;
use crate::model::{compare_compounds, ComparisonResult};
use crate::params::ParameterSet;

/// Everything needed to reproduce and interpret one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Crate version that produced the summary
    pub version: String,
    pub parameters: ParameterSet,
    pub comparison: ComparisonResult,
    /// Model-vs-experiment residuals keyed by a free-form label
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub residuals: BTreeMap<String, Residuals>,
}

impl RunSummary {
    pub fn new(parameters: ParameterSet) -> Result<Self, InhibkinError> {
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            parameters,
            comparison: compare_compounds(&parameters)?,
            residuals: BTreeMap::new(),
        })
    }

    pub fn with_residuals(mut self, label: impl Into<String>, residuals: Residuals) -> Self {
        self.residuals.insert(label.into(), residuals);
        self
    }
}

/// Write `summary` as pretty-printed JSON, replacing any existing file
pub fn write_summary_json(
    summary: &RunSummary,
    path: impl AsRef<Path>,
) -> Result<(), InhibkinError> {
    let path = path.as_ref();
    let fail = |e: &dyn ToString| InhibkinError::ExportFailure {
        path: PathBuf::from(path),
        reason: e.to_string(),
    };

    let file = File::create(path).map_err(|e| fail(&e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, summary).map_err(|e| fail(&e))?;
    out.flush().map_err(|e| fail(&e))?;

    log::info!("Summary exported: {}", path.display());
    Ok(())
}

pub fn read_summary_json(path: impl AsRef<Path>) -> Result<RunSummary, InhibkinError> {
    let path = path.as_ref();
    let fail = |e: &dyn ToString| InhibkinError::Import {
        path: PathBuf::from(path),
        reason: e.to_string(),
    };
    let contents = std::fs::read_to_string(path).map_err(|e| fail(&e))?;
    serde_json::from_str(&contents).map_err(|e| fail(&e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{compare_to_experimental, reference_growth_curve};
    use crate::model::default_inhibition_curve;
    use crate::params::Compound;

    #[test]
    fn test_summary_round_trip() {
        let params = ParameterSet::default();
        let model = default_inhibition_curve(&params, Compound::Compound1).unwrap();
        let residuals =
            compare_to_experimental(&model, &reference_growth_curve(Compound::Compound1))
                .unwrap();
        let summary = RunSummary::new(params)
            .unwrap()
            .with_residuals("compound1", residuals);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        write_summary_json(&summary, &path).unwrap();

        let back = read_summary_json(&path).unwrap();
        assert_eq!(back, summary);
        assert_eq!(back.residuals["compound1"].len(), 5);
    }

    #[test]
    fn test_summary_without_residuals_omits_field() {
        let summary = RunSummary::new(ParameterSet::default()).unwrap();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("residuals"));
        assert!(json.contains("\"relative_potency\""));
    }

    #[test]
    fn test_unwritable_destination_is_export_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("summary.json");
        let summary = RunSummary::new(ParameterSet::default()).unwrap();

        let err = write_summary_json(&summary, &path).unwrap_err();
        assert!(matches!(err, InhibkinError::ExportFailure { .. }));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_full_device_is_export_failure() {
        let summary = RunSummary::new(ParameterSet::default()).unwrap();
        let err = write_summary_json(&summary, "/dev/full").unwrap_err();
        assert!(matches!(err, InhibkinError::ExportFailure { .. }));
    }
}
