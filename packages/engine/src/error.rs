use thiserror::Error;

/// Failure reported by the external persistence collaborator.
///
/// The in-memory learning state stays valid when one of these surfaces;
/// callers may retry the save without re-running the algorithm.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct PersistenceError {
    pub message: String,
}

impl PersistenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Opaque failure from the external content generator. Never mutates
/// engine state; surfaced to the caller as-is.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct GeneratorError {
    pub message: String,
}

impl GeneratorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// Requested section id does not exist in the resolved lesson.
    /// Deterministic and caller-correctable; never retried automatically.
    #[error("section {section_id} not found in lesson {lesson_id}")]
    SectionNotFound {
        lesson_id: String,
        section_id: String,
    },

    /// The store has no lesson under this id.
    #[error("lesson {lesson_id} not found")]
    LessonNotFound { lesson_id: String },

    #[error("persistence failure: {0}")]
    Persistence(#[from] PersistenceError),

    #[error("content generator failed: {0}")]
    Generator(#[from] GeneratorError),

    #[error("no content generator configured")]
    GeneratorUnavailable,
}
