// cursus-core/src/domain/grading/rounding.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// Absorbs binary noise on the scaled value: 12.3 * 0.4 is 4.920000000000001,
// which must not round up to 4.93.
const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    #[default]
    Nearest,
    Up,
    Down,
}

impl RoundingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            _ => Err(format!("Unknown rounding mode: {}", s)),
        }
    }
}

/// Rounds `value` to `decimal_places` digits using `mode`.
pub fn round_to(value: f64, decimal_places: u32, mode: RoundingMode) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    let scaled = value * factor;
    let rounded = match mode {
        RoundingMode::Nearest => (scaled + TOLERANCE).round(),
        RoundingMode::Up => (scaled - TOLERANCE).ceil(),
        RoundingMode::Down => (scaled + TOLERANCE).floor(),
    };
    rounded / factor
}
