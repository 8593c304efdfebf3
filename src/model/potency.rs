use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ensure_non_negative, ensure_positive, InhibkinError};
use crate::params::{Compound, ParameterSet};

/// ED50 of a competitive inhibitor
///
/// Under `μ = μmax / (1 + C/Ki)` the growth rate is halved exactly at
/// `C = Ki`, so no search is needed.
pub fn estimate_ed50(mu_max: f64, ki: f64) -> Result<f64, InhibkinError> {
    ensure_non_negative("mu_max", mu_max)?;
    ensure_positive("ki", ki)
}

/// How many times more potent compound A is than compound B
///
/// Returns `ED50_b / ED50_a`; swapping the arguments gives the reciprocal.
pub fn relative_potency(ed50_a: f64, ed50_b: f64) -> Result<f64, InhibkinError> {
    ensure_positive("ed50_a", ed50_a)?;
    ensure_positive("ed50_b", ed50_b)?;
    Ok(ed50_b / ed50_a)
}

/// ED50 of both compounds and their relative potency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// ED50 of compound 1 (mmol/L)
    pub ed50_compound1: f64,
    /// ED50 of compound 2 (mmol/L)
    pub ed50_compound2: f64,
    /// `ED50_2 / ED50_1`: potency of compound 1 relative to compound 2
    pub relative_potency: f64,
}

impl ComparisonResult {
    pub fn ed50(&self, compound: Compound) -> f64 {
        match compound {
            Compound::Compound1 => self.ed50_compound1,
            Compound::Compound2 => self.ed50_compound2,
        }
    }

    /// The compound with the lower ED50
    pub fn more_potent(&self) -> Compound {
        if self.ed50_compound1 <= self.ed50_compound2 {
            Compound::Compound1
        } else {
            Compound::Compound2
        }
    }
}

/// Compare both compounds of a parameter set
///
/// Derived from the parameters directly, independent of any time series.
pub fn compare_compounds(params: &ParameterSet) -> Result<ComparisonResult, InhibkinError> {
    let ed50_compound1 = estimate_ed50(params.mu_max, params.ki_compound1)?;
    let ed50_compound2 = estimate_ed50(params.mu_max, params.ki_compound2)?;
    Ok(ComparisonResult {
        ed50_compound1,
        ed50_compound2,
        relative_potency: relative_potency(ed50_compound1, ed50_compound2)?,
    })
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "ED50 {}: {:.3} mmol/L",
            Compound::Compound1.short_label(),
            self.ed50_compound1
        )?;
        writeln!(
            f,
            "ED50 {}: {:.3} mmol/L",
            Compound::Compound2.short_label(),
            self.ed50_compound2
        )?;
        writeln!(f, "Relative potency: {:.1}x", self.relative_potency)?;
        write!(f, "Ki2/Ki1 ratio: {:.1}", self.relative_potency)
    }
}
