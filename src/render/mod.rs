//! Plot-ready data for the presentation layer
//!
//! [`Dashboard::build`] is the single recompute step run after every
//! parameter change. It evaluates the model and collects everything the
//! views need: per-compound inhibition curves with their measurements, the
//! kinetic time course of the selected compound, and the two-compound
//! overlay. Drawing is left to a backend; the `plots` feature provides an
//! SVG one in [`svg`].

#[cfg(feature = "plots")]
pub mod svg;

use serde::Serialize;

use crate::data::{compare_to_experimental, reference_growth_curve, Residuals};
use crate::error::InhibkinError;
use crate::model::{
    compare_compounds, default_inhibition_curve, estimate_ed50, evaluate, ComparisonResult,
    Curve, Quantity, TimeSeries,
};
use crate::params::{Compound, ParameterSet};

/// Model vs measured growth rate for one compound
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InhibitionPanel {
    pub compound: Compound,
    /// μ vs concentration from the model
    pub model: Curve,
    /// Measured μ vs concentration
    pub experimental: Curve,
    pub ki: f64,
    pub ed50: f64,
}

impl InhibitionPanel {
    pub fn title(&self) -> &'static str {
        self.compound.description()
    }

    /// Text box shown in the corner of the panel
    pub fn annotation(&self) -> String {
        format!("Ki: {:.3} mmol/L\nED50: {:.3} mmol/L", self.ki, self.ed50)
    }

    /// Residuals of the measurements against the model curve
    pub fn residuals(&self) -> Result<Residuals, InhibkinError> {
        compare_to_experimental(&self.model, &self.experimental)
    }
}

/// Both compounds' inhibition curves on shared axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPanel {
    pub curves: Vec<(Compound, Curve)>,
    pub experimental: Vec<(Compound, Curve)>,
    /// μmax / 2, the 50 % inhibition reference line
    pub half_max: f64,
}

/// Everything one parameter snapshot renders to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub parameters: ParameterSet,
    pub inhibition: Vec<InhibitionPanel>,
    /// Kinetic time course of `parameters.compound`
    pub kinetics: TimeSeries,
    pub overlay: ComparisonPanel,
    pub comparison: ComparisonResult,
}

impl Dashboard {
    pub fn build(parameters: ParameterSet) -> Result<Self, InhibkinError> {
        parameters.validate()?;

        let mut inhibition = Vec::with_capacity(Compound::ALL.len());
        for compound in Compound::ALL {
            let ki = parameters.ki(compound);
            inhibition.push(InhibitionPanel {
                compound,
                model: default_inhibition_curve(&parameters, compound)?,
                experimental: reference_growth_curve(compound),
                ki,
                ed50: estimate_ed50(parameters.mu_max, ki)?,
            });
        }

        let overlay = ComparisonPanel {
            curves: inhibition
                .iter()
                .map(|p| (p.compound, p.model.clone()))
                .collect(),
            experimental: inhibition
                .iter()
                .map(|p| (p.compound, p.experimental.clone()))
                .collect(),
            half_max: parameters.mu_max * 0.5,
        };

        let kinetics = evaluate(parameters, &parameters.time_grid()?)?;
        let comparison = compare_compounds(&parameters)?;

        log::debug!(
            "Dashboard rebuilt for {} ({} kinetic points)",
            parameters.compound,
            kinetics.len()
        );
        Ok(Self {
            parameters,
            inhibition,
            kinetics,
            overlay,
            comparison,
        })
    }

    pub fn inhibition_panel(&self, compound: Compound) -> Option<&InhibitionPanel> {
        self.inhibition.iter().find(|p| p.compound == compound)
    }

    /// Inhibitor concentration vs time
    pub fn concentration_curve(&self) -> Curve {
        self.kinetics.curve(Quantity::Concentration)
    }

    /// Specific growth rate vs time
    pub fn growth_rate_curve(&self) -> Curve {
        self.kinetics.curve(Quantity::GrowthRate)
    }

    /// log10 biomass vs time
    pub fn biomass_curve(&self) -> Curve {
        self.kinetics.curve(Quantity::Log10Biomass)
    }
}
