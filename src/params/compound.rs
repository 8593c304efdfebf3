use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two inhibitors being compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compound {
    /// High-activity inhibitor (low Ki)
    #[default]
    Compound1,
    /// Low-activity inhibitor (high Ki)
    Compound2,
}

impl Compound {
    pub const ALL: [Compound; 2] = [Compound::Compound1, Compound::Compound2];

    /// Identifier used in file names and serialized data
    pub fn id(&self) -> &'static str {
        match self {
            Compound::Compound1 => "compound1",
            Compound::Compound2 => "compound2",
        }
    }

    /// Short label for result panels
    pub fn short_label(&self) -> &'static str {
        match self {
            Compound::Compound1 => "Comp1",
            Compound::Compound2 => "Comp2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Compound::Compound1 => "Compound 1 (high activity)",
            Compound::Compound2 => "Compound 2 (low activity)",
        }
    }

    /// The other compound of the pair
    pub fn other(&self) -> Compound {
        match self {
            Compound::Compound1 => Compound::Compound2,
            Compound::Compound2 => Compound::Compound1,
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compound::Compound1 => write!(f, "Compound 1"),
            Compound::Compound2 => write!(f, "Compound 2"),
        }
    }
}

impl FromStr for Compound {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "compound1" | "comp1" => Ok(Compound::Compound1),
            "2" | "compound2" | "comp2" => Ok(Compound::Compound2),
            other => Err(format!("unknown compound '{}', expected 1 or 2", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        assert_eq!("1".parse::<Compound>().unwrap(), Compound::Compound1);
        assert_eq!("Compound2".parse::<Compound>().unwrap(), Compound::Compound2);
        assert!("3".parse::<Compound>().is_err());
    }

    #[test]
    fn test_other_is_involution() {
        for c in Compound::ALL {
            assert_eq!(c.other().other(), c);
            assert_ne!(c.other(), c);
        }
    }

    #[test]
    fn test_serde_uses_ids() {
        let json = serde_json::to_string(&Compound::Compound2).unwrap();
        assert_eq!(json, "\"compound2\"");
    }
}
