use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPolicy {
    /// One point per correct pick.
    #[default]
    Straight,
    /// A correct pick earns its confidence weight.
    Confidence,
}

impl ScoringPolicy {
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Confidence)
    }
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Confidence => write!(f, "confidence"),
        }
    }
}

impl FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "straight" => Ok(Self::Straight),
            "confidence" | "weighted" => Ok(Self::Confidence),
            other => Err(format!(
                "unknown scoring policy '{}', expected 'straight' or 'confidence'",
                other
            )),
        }
    }
}
