//! Storage boundary
//!
//! The engine owns memory records in-session; durable storage, progress
//! records, and lesson content come from a collaborator behind
//! [`LearningStore`]. The trait deliberately says nothing about storage
//! format. [`InMemoryStore`] is the reference implementation used by tests
//! and single-process embedders.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::PersistenceError;
use crate::types::{Lesson, MemoryRecord, ProgressRecord};

#[async_trait]
pub trait LearningStore: Send + Sync {
    /// All memory records previously saved for a user.
    async fn load_memory_records(&self, user_id: &str)
        -> Result<Vec<MemoryRecord>, PersistenceError>;

    /// Durably stores one record. A failure here does not invalidate the
    /// in-memory record; the engine propagates it and keeps going.
    async fn save_memory_record(&self, record: &MemoryRecord) -> Result<(), PersistenceError>;

    /// All progress records for a user. Written by the progress subsystem,
    /// read-only here.
    async fn load_progress(&self, user_id: &str) -> Result<Vec<ProgressRecord>, PersistenceError>;

    /// Authored lesson content; `None` for an unknown lesson id.
    async fn load_lesson(&self, lesson_id: &str) -> Result<Option<Lesson>, PersistenceError>;
}

#[derive(Default)]
struct StoreInner {
    records: HashMap<(String, String), MemoryRecord>,
    progress: HashMap<(String, String), ProgressRecord>,
    lessons: HashMap<String, Lesson>,
}

#[derive(Default)]
pub struct InMemoryStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_lesson(&self, lesson: Lesson) {
        self.inner.write().lessons.insert(lesson.id.clone(), lesson);
    }

    pub fn insert_progress(&self, progress: ProgressRecord) {
        self.inner.write().progress.insert(
            (progress.user_id.clone(), progress.lesson_id.clone()),
            progress,
        );
    }

    pub fn insert_memory_record(&self, record: MemoryRecord) {
        self.inner.write().records.insert(
            (record.user_id.clone(), record.concept_id.clone()),
            record,
        );
    }

    pub fn saved_record(&self, user_id: &str, concept_id: &str) -> Option<MemoryRecord> {
        self.inner
            .read()
            .records
            .get(&(user_id.to_string(), concept_id.to_string()))
            .cloned()
    }
}

#[async_trait]
impl LearningStore for InMemoryStore {
    async fn load_memory_records(
        &self,
        user_id: &str,
    ) -> Result<Vec<MemoryRecord>, PersistenceError> {
        Ok(self
            .inner
            .read()
            .records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn save_memory_record(&self, record: &MemoryRecord) -> Result<(), PersistenceError> {
        self.inner.write().records.insert(
            (record.user_id.clone(), record.concept_id.clone()),
            record.clone(),
        );
        Ok(())
    }

    async fn load_progress(&self, user_id: &str) -> Result<Vec<ProgressRecord>, PersistenceError> {
        Ok(self
            .inner
            .read()
            .progress
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn load_lesson(&self, lesson_id: &str) -> Result<Option<Lesson>, PersistenceError> {
        Ok(self.inner.read().lessons.get(lesson_id).cloned())
    }
}
