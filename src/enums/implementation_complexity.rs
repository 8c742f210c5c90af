use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationComplexity {
    Simple,
    Moderate,
    Complex,
}

impl ImplementationComplexity {
    pub const ALL: [Self; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    /// Hours before any layout surcharge.
    pub const fn base_hours(self) -> u32 {
        match self {
            Self::Simple => 4,
            Self::Moderate => 8,
            Self::Complex => 20,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

impl Default for ImplementationComplexity {
    fn default() -> Self {
        Self::Moderate
    }
}

impl fmt::Display for ImplementationComplexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImplementationComplexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(Self::Simple),
            "moderate" => Ok(Self::Moderate),
            "complex" => Ok(Self::Complex),
            other => Err(format!("unknown complexity '{other}' (expected simple, moderate or complex)")),
        }
    }
}
