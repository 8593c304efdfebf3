use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Hard lower bound enforced on a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// `value >= 0`
    NonNegative,
    /// `value > 0`
    Positive,
    /// Integer `1 <= value <= MAX_INTERVALS`
    Count,
}

/// The named numeric options exposed to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    MuMax,
    KiCompound1,
    KiCompound2,
    Ka,
    Ke,
    InitialConcentration,
    N0,
    KMax,
    TimeEnd,
    TimePoints,
}

impl Parameter {
    pub const ALL: [Parameter; 10] = [
        Parameter::MuMax,
        Parameter::KiCompound1,
        Parameter::KiCompound2,
        Parameter::Ka,
        Parameter::Ke,
        Parameter::InitialConcentration,
        Parameter::N0,
        Parameter::KMax,
        Parameter::TimeEnd,
        Parameter::TimePoints,
    ];

    /// Key used in configuration files and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::MuMax => "mu_max",
            Parameter::KiCompound1 => "ki_compound1",
            Parameter::KiCompound2 => "ki_compound2",
            Parameter::Ka => "ka",
            Parameter::Ke => "ke",
            Parameter::InitialConcentration => "initial_concentration",
            Parameter::N0 => "n0",
            Parameter::KMax => "k_max",
            Parameter::TimeEnd => "time_end",
            Parameter::TimePoints => "time_points",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Parameter::MuMax => "μmax",
            Parameter::KiCompound1 => "Ki Comp1",
            Parameter::KiCompound2 => "Ki Comp2",
            Parameter::Ka => "ka",
            Parameter::Ke => "ke",
            Parameter::InitialConcentration => "Initial conc.",
            Parameter::N0 => "N0",
            Parameter::KMax => "Kmax",
            Parameter::TimeEnd => "Time span",
            Parameter::TimePoints => "Time points",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::MuMax | Parameter::Ka | Parameter::Ke => "h⁻¹",
            Parameter::KiCompound1
            | Parameter::KiCompound2
            | Parameter::InitialConcentration => "mmol/L",
            Parameter::N0 | Parameter::KMax => "cells/mL",
            Parameter::TimeEnd => "h",
            Parameter::TimePoints => "",
        }
    }

    pub fn bound(&self) -> Bound {
        match self {
            Parameter::MuMax | Parameter::Ka | Parameter::Ke | Parameter::InitialConcentration => {
                Bound::NonNegative
            }
            Parameter::KiCompound1
            | Parameter::KiCompound2
            | Parameter::N0
            | Parameter::KMax
            | Parameter::TimeEnd => Bound::Positive,
            Parameter::TimePoints => Bound::Count,
        }
    }

    /// Reset value
    pub fn default_value(&self) -> f64 {
        match self {
            Parameter::MuMax => 0.95,
            Parameter::KiCompound1 => 0.12,
            Parameter::KiCompound2 => 10.0,
            Parameter::Ka => 0.1,
            Parameter::Ke => 0.05,
            Parameter::InitialConcentration => 0.2,
            Parameter::N0 => 1e6,
            Parameter::KMax => 1e9,
            Parameter::TimeEnd => 8.0,
            Parameter::TimePoints => 100.0,
        }
    }

    /// Advisory slider range `(min, max)`; values outside are valid but unusual
    pub fn slider_range(&self) -> Option<(f64, f64)> {
        match self {
            Parameter::MuMax => Some((0.1, 2.0)),
            Parameter::KiCompound1 => Some((0.01, 1.0)),
            Parameter::KiCompound2 => Some((1.0, 50.0)),
            Parameter::Ka => Some((0.01, 0.5)),
            Parameter::Ke => Some((0.01, 0.2)),
            Parameter::InitialConcentration => Some((0.05, 0.5)),
            Parameter::TimePoints => Some((50.0, 200.0)),
            Parameter::N0 | Parameter::KMax | Parameter::TimeEnd => None,
        }
    }

    /// Whether `value` lies inside the slider range (always true when unbounded)
    pub fn in_slider_range(&self, value: f64) -> bool {
        self.slider_range()
            .map_or(true, |(lo, hi)| value >= lo && value <= hi)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Parameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        Parameter::ALL
            .iter()
            .find(|p| p.name() == key)
            .copied()
            .ok_or_else(|| format!("unknown parameter '{}'", s))
    }
}
