//! Memory store - per-(user, concept) records and the strength update
//!
//! The update in [`MemoryStore::record_performance_at`] is a single atomic
//! transition: strength, history, lastReviewed and the recomputed schedule
//! all change under one per-record lock, so a reader never observes a
//! half-applied update. The same lock is held across the save hook, which
//! serializes updates per key: at most one `record_performance` is in
//! flight for a given (user, concept) at a time, while distinct keys
//! proceed independently.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{Mutex, RwLock};

use crate::error::EngineError;
use crate::persistence::LearningStore;
use crate::types::{MemoryRecord, Performance, ReviewEntry};

type RecordKey = (String, String);

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<RecordKey, Arc<Mutex<MemoryRecord>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with records loaded from persistence. Existing
    /// in-session records win over loaded ones; the session state is the
    /// source of truth.
    pub async fn hydrate(&self, records: Vec<MemoryRecord>) {
        let mut map = self.records.write().await;
        for record in records {
            let key = (record.user_id.clone(), record.concept_id.clone());
            map.entry(key)
                .or_insert_with(|| Arc::new(Mutex::new(record)));
        }
    }

    /// Snapshot of one record; `None` when no performance event has been
    /// observed for the pair.
    pub async fn get(&self, user_id: &str, concept_id: &str) -> Option<MemoryRecord> {
        let slot = {
            let map = self.records.read().await;
            map.get(&(user_id.to_string(), concept_id.to_string()))
                .cloned()
        }?;
        let record = slot.lock().await;
        Some(record.clone())
    }

    /// Snapshots of all of a user's records for one lesson.
    pub async fn for_lesson(&self, user_id: &str, lesson_id: &str) -> Vec<MemoryRecord> {
        let slots: Vec<Arc<Mutex<MemoryRecord>>> = {
            let map = self.records.read().await;
            map.iter()
                .filter(|((uid, _), _)| uid.as_str() == user_id)
                .map(|(_, slot)| Arc::clone(slot))
                .collect()
        };

        let mut records = Vec::new();
        for slot in slots {
            let record = slot.lock().await;
            if record.lesson_id == lesson_id {
                records.push(record.clone());
            }
        }
        records
    }

    /// Applies one performance event and recomputes the review schedule,
    /// then hands the updated record to the save hook. A save failure
    /// propagates as `PersistenceFailure` without rolling back the
    /// in-memory update.
    pub async fn record_performance_at(
        &self,
        store: &dyn LearningStore,
        user_id: &str,
        lesson_id: &str,
        concept_id: &str,
        performance: Performance,
        now: DateTime<Utc>,
    ) -> Result<MemoryRecord, EngineError> {
        let slot = {
            let mut map = self.records.write().await;
            Arc::clone(
                map.entry((user_id.to_string(), concept_id.to_string()))
                    .or_insert_with(|| {
                        Arc::new(Mutex::new(MemoryRecord::new(
                            user_id, lesson_id, concept_id, now,
                        )))
                    }),
            )
        };

        let mut record = slot.lock().await;
        record.strength = mentor_algo::update_strength(record.strength, performance);
        record.review_history.push(ReviewEntry {
            timestamp: now,
            performance,
        });
        record.last_reviewed = now;

        let interval = mentor_algo::next_interval_days(
            record.strength,
            record.repetitions(),
            record.last_interval_days,
        );
        record.last_interval_days = interval;
        record.next_review_due = now + Duration::days(interval);

        let snapshot = record.clone();
        tracing::debug!(
            user_id,
            concept_id,
            performance = performance.as_str(),
            strength = snapshot.strength,
            interval_days = interval,
            "memory record updated"
        );

        store.save_memory_record(&snapshot).await?;
        Ok(snapshot)
    }
}
