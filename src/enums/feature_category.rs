use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum FeatureCategory {
    Core,
    Integration,
    Ui,
    Security,
    Performance,
    Community,
}

impl FeatureCategory {
    pub const ALL: [Self; 6] = [
        Self::Core,
        Self::Integration,
        Self::Ui,
        Self::Security,
        Self::Performance,
        Self::Community,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Integration => "integration",
            Self::Ui => "ui",
            Self::Security => "security",
            Self::Performance => "performance",
            Self::Community => "community",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Integration => "Integration",
            Self::Ui => "UI/UX",
            Self::Security => "Security",
            Self::Performance => "Performance",
            Self::Community => "Community",
        }
    }
}

impl Default for FeatureCategory {
    fn default() -> Self {
        Self::Core
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == wanted)
            .ok_or_else(|| {
                format!("unknown category '{wanted}' (expected core, integration, ui, security, performance or community)")
            })
    }
}
