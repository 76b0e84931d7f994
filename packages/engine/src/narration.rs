//! Narration context builder
//!
//! Stateless projection over the current memory/progress snapshot: every
//! build reads explicit inputs and returns a fresh intent. Calling a
//! builder twice with the same inputs yields identical intents.

use crate::config::NarrationParams;
use crate::error::EngineError;
use crate::types::{HintIntent, Lesson, MemoryRecord, NarrationIntent, ProgressRecord};

/// Base difficulty a narration intent is scaled from.
const BASE_NARRATION_DIFFICULTY: f64 = 1.0;

/// Builds the intent describing what kind of narration fits a section.
///
/// `records` are the user's memory records for this lesson's concepts;
/// `recent_narrations` is the bounded window of previously generated
/// strings, oldest first.
pub fn build_narration_intent(
    lesson: &Lesson,
    section_id: &str,
    progress: &ProgressRecord,
    records: &[MemoryRecord],
    recent_narrations: &[String],
    params: &NarrationParams,
) -> Result<NarrationIntent, EngineError> {
    let section = lesson
        .section(section_id)
        .ok_or_else(|| EngineError::SectionNotFound {
            lesson_id: lesson.id.clone(),
            section_id: section_id.to_string(),
        })?;

    let strengths: Vec<f64> = records.iter().map(|r| r.strength).collect();
    let average = mentor_algo::average_strength(&strengths);
    let is_first = lesson.is_first_section(&section.id);
    let is_last = lesson.is_last_section(&section.id);

    let adjusted_difficulty = if params.adaptive_difficulty {
        mentor_algo::adjust_difficulty(BASE_NARRATION_DIFFICULTY, average)
    } else {
        BASE_NARRATION_DIFFICULTY
    };

    let window_start = recent_narrations.len().saturating_sub(params.history_window);
    let recent_history_window = recent_narrations[window_start..].to_vec();

    Ok(NarrationIntent {
        section_id: section.id.clone(),
        tone_hint: mentor_algo::select_tone(progress.progress, average, is_first, is_last),
        emphasize_review: mentor_algo::needs_review(average),
        adjusted_difficulty,
        is_first_section: is_first,
        is_last_section: is_last,
        average_memory_strength: average,
        recent_history_window,
    })
}

/// Builds the intent for a hint on one concept. A never-seen concept keeps
/// the requested difficulty untouched; full mastery drives it to zero.
pub fn build_hint_intent(
    concept_id: &str,
    requested_difficulty: f64,
    record: Option<&MemoryRecord>,
    params: &NarrationParams,
) -> HintIntent {
    let adjusted_difficulty = match record {
        Some(r) if params.adaptive_difficulty => {
            mentor_algo::adjust_difficulty(requested_difficulty, r.strength)
        }
        _ => requested_difficulty,
    };

    HintIntent {
        concept_id: concept_id.to_string(),
        requested_difficulty,
        adjusted_difficulty,
        memory_strength: record.map(|r| r.strength),
    }
}
