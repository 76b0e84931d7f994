//! Learning engine facade
//!
//! Owns the memory store, progress tracker and narration windows, and wires
//! them to the persistence and content-generation collaborators. This is
//! the complete public surface of the core: `record_performance`,
//! `build_narration_intent`, `build_hint_intent`, plus the convenience
//! flows that drive a configured generator.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::generator::ContentGenerator;
use crate::memory::MemoryStore;
use crate::narration;
use crate::persistence::LearningStore;
use crate::progress::ProgressTracker;
use crate::types::{HintIntent, MemoryRecord, NarrationIntent, Performance};

type WindowKey = (String, String);

pub struct LearningEngine {
    config: EngineConfig,
    store: Arc<dyn LearningStore>,
    generator: Option<Arc<dyn ContentGenerator>>,
    memory: MemoryStore,
    progress: ProgressTracker,
    hydrated_users: RwLock<HashSet<String>>,
    narration_windows: RwLock<HashMap<WindowKey, VecDeque<String>>>,
}

impl LearningEngine {
    pub fn new(config: EngineConfig, store: Arc<dyn LearningStore>) -> Self {
        Self {
            config,
            progress: ProgressTracker::new(Arc::clone(&store)),
            store,
            generator: None,
            memory: MemoryStore::new(),
            hydrated_users: RwLock::new(HashSet::new()),
            narration_windows: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_generator(mut self, generator: Arc<dyn ContentGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Loads a user's memory records from the store on first touch. The
    /// in-session state is authoritative afterwards; this engine is the
    /// exclusive owner of memory records.
    async fn ensure_hydrated(&self, user_id: &str) -> Result<(), EngineError> {
        {
            let hydrated = self.hydrated_users.read().await;
            if hydrated.contains(user_id) {
                return Ok(());
            }
        }

        let records = self.store.load_memory_records(user_id).await?;
        let count = records.len();
        self.memory.hydrate(records).await;
        self.hydrated_users.write().await.insert(user_id.to_string());
        tracing::debug!(user_id, records = count, "memory records hydrated");
        Ok(())
    }

    /// Records a performance event against a concept and reschedules its
    /// next review. Returns the updated record.
    pub async fn record_performance(
        &self,
        user_id: &str,
        lesson_id: &str,
        concept_id: &str,
        performance: Performance,
    ) -> Result<MemoryRecord, EngineError> {
        self.record_performance_at(user_id, lesson_id, concept_id, performance, Utc::now())
            .await
    }

    /// Clock-explicit variant of [`record_performance`](Self::record_performance).
    pub async fn record_performance_at(
        &self,
        user_id: &str,
        lesson_id: &str,
        concept_id: &str,
        performance: Performance,
        now: DateTime<Utc>,
    ) -> Result<MemoryRecord, EngineError> {
        self.ensure_hydrated(user_id).await?;
        self.memory
            .record_performance_at(
                self.store.as_ref(),
                user_id,
                lesson_id,
                concept_id,
                performance,
                now,
            )
            .await
    }

    /// Read-only record lookup; `None` for a never-seen concept.
    pub async fn memory_record(
        &self,
        user_id: &str,
        concept_id: &str,
    ) -> Result<Option<MemoryRecord>, EngineError> {
        self.ensure_hydrated(user_id).await?;
        Ok(self.memory.get(user_id, concept_id).await)
    }

    /// Builds the narration intent for a section. Deterministic and
    /// side-effect-free: repeated calls without intervening performance
    /// events yield identical intents.
    pub async fn build_narration_intent(
        &self,
        user_id: &str,
        lesson_id: &str,
        section_id: &str,
    ) -> Result<NarrationIntent, EngineError> {
        self.ensure_hydrated(user_id).await?;

        let lesson = self
            .store
            .load_lesson(lesson_id)
            .await?
            .ok_or_else(|| EngineError::LessonNotFound {
                lesson_id: lesson_id.to_string(),
            })?;
        let progress = self.progress.lesson_progress(user_id, lesson_id).await?;
        let records = self.memory.for_lesson(user_id, lesson_id).await;
        let recent = self.recent_narrations(user_id, lesson_id).await;

        let intent = narration::build_narration_intent(
            &lesson,
            section_id,
            &progress,
            &records,
            &recent,
            &self.config.narration,
        )?;
        tracing::debug!(
            user_id,
            lesson_id,
            section_id,
            tone = intent.tone_hint.as_str(),
            emphasize_review = intent.emphasize_review,
            "narration intent built"
        );
        Ok(intent)
    }

    /// Builds the hint intent for a concept at a requested difficulty.
    pub async fn build_hint_intent(
        &self,
        user_id: &str,
        concept_id: &str,
        requested_difficulty: f64,
    ) -> Result<HintIntent, EngineError> {
        self.ensure_hydrated(user_id).await?;
        let record = self.memory.get(user_id, concept_id).await;
        Ok(narration::build_hint_intent(
            concept_id,
            requested_difficulty,
            record.as_ref(),
            &self.config.narration,
        ))
    }

    /// Builds the intent, runs the configured generator, and feeds the
    /// produced text back into the narration window. A generator failure
    /// surfaces as-is and leaves all learning state untouched.
    pub async fn narrate_section(
        &self,
        user_id: &str,
        lesson_id: &str,
        section_id: &str,
    ) -> Result<String, EngineError> {
        let intent = self
            .build_narration_intent(user_id, lesson_id, section_id)
            .await?;
        let generator = self
            .generator
            .as_ref()
            .ok_or(EngineError::GeneratorUnavailable)?;

        let text = generator.narrate(&intent).await.map_err(|err| {
            tracing::warn!(user_id, lesson_id, section_id, error = %err, "narration generation failed");
            err
        })?;
        self.note_narration(user_id, lesson_id, &text).await;
        Ok(text)
    }

    /// Builds the hint intent and runs the configured generator.
    pub async fn hint_for_concept(
        &self,
        user_id: &str,
        concept_id: &str,
        requested_difficulty: f64,
    ) -> Result<String, EngineError> {
        let intent = self
            .build_hint_intent(user_id, concept_id, requested_difficulty)
            .await?;
        let generator = self
            .generator
            .as_ref()
            .ok_or(EngineError::GeneratorUnavailable)?;
        Ok(generator.hint(&intent).await?)
    }

    /// Appends generated narration text to the bounded per-(user, lesson)
    /// window. Callers that render content outside the engine feed the
    /// window through this.
    pub async fn note_narration(&self, user_id: &str, lesson_id: &str, text: &str) {
        let mut windows = self.narration_windows.write().await;
        let window = windows
            .entry((user_id.to_string(), lesson_id.to_string()))
            .or_default();
        window.push_back(text.to_string());
        while window.len() > self.config.narration.history_window {
            window.pop_front();
        }
    }

    async fn recent_narrations(&self, user_id: &str, lesson_id: &str) -> Vec<String> {
        let windows = self.narration_windows.read().await;
        windows
            .get(&(user_id.to_string(), lesson_id.to_string()))
            .map(|w| w.iter().cloned().collect())
            .unwrap_or_default()
    }
}
