use serde::{Deserialize, Serialize};

use crate::model::Curve;
use crate::params::Compound;

/// A measured growth response at one inhibitor concentration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseResponsePoint {
    /// Inhibitor concentration (mmol/L)
    pub concentration: f64,
    /// Specific growth rate μ (h⁻¹)
    pub growth_rate: f64,
    /// Generation time (h)
    pub generation_time: f64,
    /// Viable fraction relative to the untreated culture
    pub viable_fraction: f64,
}

const fn point(c: f64, mu: f64, g: f64, viable: f64) -> DoseResponsePoint {
    DoseResponsePoint {
        concentration: c,
        growth_rate: mu,
        generation_time: g,
        viable_fraction: viable,
    }
}

const COMPOUND1: [DoseResponsePoint; 5] = [
    point(0.00, 0.95, 0.73, 1.0),
    point(0.05, 0.85, 0.82, 0.89),
    point(0.10, 0.75, 0.92, 0.79),
    point(0.15, 0.55, 1.26, 0.58),
    point(0.20, 0.40, 1.73, 0.42),
];

const COMPOUND2: [DoseResponsePoint; 5] = [
    point(0.00, 0.95, 0.73, 1.0),
    point(0.05, 0.90, 0.77, 0.95),
    point(0.10, 0.91, 0.76, 0.96),
    point(0.15, 0.89, 0.78, 0.94),
    point(0.20, 0.90, 0.77, 0.95),
];

/// Bundled E. coli dose-response measurements for `compound`
pub fn reference_dataset(compound: Compound) -> &'static [DoseResponsePoint] {
    match compound {
        Compound::Compound1 => &COMPOUND1,
        Compound::Compound2 => &COMPOUND2,
    }
}

/// Growth rate vs concentration of the bundled measurements
pub fn reference_growth_curve(compound: Compound) -> Curve {
    let data = reference_dataset(compound);
    Curve::from_trusted(
        data.iter().map(|p| p.concentration).collect(),
        data.iter().map(|p| p.growth_rate).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_data_is_ordered() {
        for compound in Compound::ALL {
            let curve = reference_growth_curve(compound);
            assert_eq!(curve.len(), 5);
            assert!(Curve::new(curve.x().to_vec(), curve.y().to_vec()).is_ok());
        }
    }

    #[test]
    fn test_untreated_cultures_agree() {
        let a = reference_dataset(Compound::Compound1)[0];
        let b = reference_dataset(Compound::Compound2)[0];
        assert_eq!(a, b);
        assert_eq!(a.growth_rate, 0.95);
    }
}
