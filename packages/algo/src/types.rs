use serde::{Deserialize, Serialize};

/// Qualitative rating of a single performance event.
///
/// The vocabulary is a closed contract: the four labels and their numeric
/// observation values are fixed, with no interpolation between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Performance {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Performance {
    /// Numeric observation value fed into the strength update.
    pub fn observation(&self) -> f64 {
        match self {
            Self::Poor => 0.1,
            Self::Fair => 0.4,
            Self::Good => 0.7,
            Self::Excellent => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "poor" => Some(Self::Poor),
            "fair" => Some(Self::Fair),
            "good" => Some(Self::Good),
            "excellent" => Some(Self::Excellent),
            _ => None,
        }
    }
}
