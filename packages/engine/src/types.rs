use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use mentor_algo::{Performance, ToneHint};

/// One entry of a record's append-only review audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEntry {
    pub timestamp: DateTime<Utc>,
    pub performance: Performance,
}

/// Per-(user, concept) memory state, scoped within a lesson.
///
/// Created on the first observed performance event with zero strength,
/// mutated on every subsequent event, never deleted. Repetition count is
/// derived from the history length rather than stored separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryRecord {
    pub user_id: String,
    pub lesson_id: String,
    pub concept_id: String,
    pub strength: f64,
    pub last_reviewed: DateTime<Utc>,
    pub next_review_due: DateTime<Utc>,
    pub last_interval_days: i64,
    pub review_history: Vec<ReviewEntry>,
}

impl MemoryRecord {
    pub fn new(
        user_id: impl Into<String>,
        lesson_id: impl Into<String>,
        concept_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            lesson_id: lesson_id.into(),
            concept_id: concept_id.into(),
            strength: mentor_algo::INITIAL_STRENGTH,
            last_reviewed: now,
            next_review_due: now,
            last_interval_days: mentor_algo::FIRST_INTERVAL_DAYS,
            review_history: Vec::new(),
        }
    }

    pub fn repetitions(&self) -> usize {
        self.review_history.len()
    }
}

/// Per-(user, lesson) completion state. Written by the progress subsystem;
/// strictly read-only input to this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub user_id: String,
    pub lesson_id: String,
    pub progress: f64,
    pub time_spent_secs: i64,
}

impl ProgressRecord {
    /// The valid default for a lesson the user has not started.
    pub fn empty(user_id: impl Into<String>, lesson_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            lesson_id: lesson_id.into(),
            progress: 0.0,
            time_spent_secs: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    pub section_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrator_prompt: Option<String>,
}

/// Static authored lesson content. Section order is the authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub sections: Vec<Section>,
}

impl Lesson {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn is_first_section(&self, section_id: &str) -> bool {
        self.sections.first().is_some_and(|s| s.id == section_id)
    }

    pub fn is_last_section(&self, section_id: &str) -> bool {
        self.sections.last().is_some_and(|s| s.id == section_id)
    }
}

/// What kind of narration to generate next. Ephemeral: produced fresh per
/// request, never persisted, never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationIntent {
    pub section_id: String,
    pub tone_hint: ToneHint,
    pub emphasize_review: bool,
    pub adjusted_difficulty: f64,
    pub is_first_section: bool,
    pub is_last_section: bool,
    pub average_memory_strength: f64,
    pub recent_history_window: Vec<String>,
}

/// Sibling intent for hint generation on a single concept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintIntent {
    pub concept_id: String,
    pub requested_difficulty: f64,
    pub adjusted_difficulty: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_strength: Option<f64>,
}
