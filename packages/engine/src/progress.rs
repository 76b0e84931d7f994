//! Progress tracker - read-only view over per-lesson completion state

use std::sync::Arc;

use crate::error::PersistenceError;
use crate::persistence::LearningStore;
use crate::types::ProgressRecord;

/// Thin read-only projection of the progress subsystem's records. An
/// absent record is a valid state: the lesson simply has not been started.
pub struct ProgressTracker {
    store: Arc<dyn LearningStore>,
}

impl ProgressTracker {
    pub fn new(store: Arc<dyn LearningStore>) -> Self {
        Self { store }
    }

    pub async fn lesson_progress(
        &self,
        user_id: &str,
        lesson_id: &str,
    ) -> Result<ProgressRecord, PersistenceError> {
        let records = self.store.load_progress(user_id).await?;
        Ok(records
            .into_iter()
            .find(|p| p.lesson_id == lesson_id)
            .unwrap_or_else(|| ProgressRecord::empty(user_id, lesson_id)))
    }
}
