//! Narration tone selection and difficulty adjustment
//!
//! Pure decision functions consumed by the narration context builder:
//! which tone bucket fits the learner's position in the lesson, whether
//! review should be emphasized, and how far to scale a requested hint
//! difficulty down as mastery grows.

use serde::{Deserialize, Serialize};

/// Progress below this keeps narration in the foundational bucket.
const FOUNDATIONAL_PROGRESS_CEILING: f64 = 0.3;
/// Average strength below this triggers remedial tone and review emphasis.
const REVIEW_STRENGTH_FLOOR: f64 = 0.4;
/// Assumed average strength for a lesson with no memory records yet.
pub const NEUTRAL_PRIOR: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToneHint {
    #[serde(rename = "welcoming")]
    Welcoming,
    #[serde(rename = "summarizing")]
    Summarizing,
    #[serde(rename = "foundational/patient")]
    Foundational,
    #[serde(rename = "remedial/supportive")]
    Remedial,
    #[serde(rename = "confident/forward-moving")]
    Confident,
}

impl ToneHint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcoming => "welcoming",
            Self::Summarizing => "summarizing",
            Self::Foundational => "foundational/patient",
            Self::Remedial => "remedial/supportive",
            Self::Confident => "confident/forward-moving",
        }
    }
}

/// Selects the tone bucket for a section.
///
/// Lesson-boundary sections override the progress/strength buckets; for a
/// single-section lesson the welcoming override wins over summarizing.
pub fn select_tone(progress: f64, average_strength: f64, is_first: bool, is_last: bool) -> ToneHint {
    if is_first {
        return ToneHint::Welcoming;
    }
    if is_last {
        return ToneHint::Summarizing;
    }
    if progress < FOUNDATIONAL_PROGRESS_CEILING {
        ToneHint::Foundational
    } else if average_strength < REVIEW_STRENGTH_FLOOR {
        ToneHint::Remedial
    } else {
        ToneHint::Confident
    }
}

/// Whether narration should emphasize review of weak concepts.
pub fn needs_review(average_strength: f64) -> bool {
    average_strength < REVIEW_STRENGTH_FLOOR
}

/// Mean strength over a lesson's records, or the neutral prior when the
/// lesson has no records yet.
pub fn average_strength(strengths: &[f64]) -> f64 {
    if strengths.is_empty() {
        return NEUTRAL_PRIOR;
    }
    strengths.iter().sum::<f64>() / strengths.len() as f64
}

/// Scales a requested difficulty down as mastery grows: full strength maps
/// any request to 0, zero strength leaves it untouched.
pub fn adjust_difficulty(requested: f64, strength: f64) -> f64 {
    requested * (1.0 - strength.clamp(0.0, 1.0))
}
