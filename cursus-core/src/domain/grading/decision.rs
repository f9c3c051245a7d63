// cursus-core/src/domain/grading/decision.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label returned whenever an average is missing or falls outside every mention band.
pub const NOT_EVALUATED: &str = "NOT EVALUATED";

/// Jury outcome for a student record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "ADMITTED")]
    Admitted,
    #[serde(rename = "DEFERRED")]
    Deferred,
    #[serde(rename = "NOT EVALUATED")]
    NotEvaluated,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admitted => "ADMITTED",
            Self::Deferred => "DEFERRED",
            Self::NotEvaluated => NOT_EVALUATED,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Decision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('_', " ").as_str() {
            "ADMITTED" => Ok(Self::Admitted),
            "DEFERRED" => Ok(Self::Deferred),
            "NOT EVALUATED" => Ok(Self::NotEvaluated),
            _ => Err(format!("Unknown decision: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parsing_consistency() -> anyhow::Result<()> {
        use std::str::FromStr;

        assert_eq!(Decision::NotEvaluated.to_string(), "NOT EVALUATED");
        assert_eq!(
            Decision::from_str("admitted").map_err(|e| anyhow::anyhow!(e))?,
            Decision::Admitted
        );
        assert_eq!(
            Decision::from_str("not_evaluated").map_err(|e| anyhow::anyhow!(e))?,
            Decision::NotEvaluated
        );
        assert!(Decision::from_str("failed").is_err());
        Ok(())
    }

    #[test]
    fn test_serialized_labels() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Decision::Deferred)?;
        assert_eq!(json, "\"DEFERRED\"");
        let back: Decision = serde_json::from_str("\"NOT EVALUATED\"")?;
        assert_eq!(back, Decision::NotEvaluated);
        Ok(())
    }
}
