#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use mentor_engine::error::{GeneratorError, PersistenceError};
use mentor_engine::types::{
    HintIntent, Lesson, MemoryRecord, NarrationIntent, ProgressRecord, Section,
};
use mentor_engine::{ContentGenerator, EngineConfig, InMemoryStore, LearningEngine, LearningStore};

pub const FIXED_TIMESTAMP: i64 = 1_700_000_000;

pub fn t0() -> DateTime<Utc> {
    Utc.timestamp_opt(FIXED_TIMESTAMP, 0).unwrap()
}

pub fn section(id: &str, title: &str, section_type: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        section_type: section_type.to_string(),
        narrator_prompt: None,
    }
}

pub fn sample_lesson() -> Lesson {
    Lesson {
        id: "lesson_candlesticks".to_string(),
        title: "Reading Candlestick Charts".to_string(),
        sections: vec![
            section("s_intro", "Why candlesticks", "intro"),
            section("s_anatomy", "Anatomy of a candle", "content"),
            section("s_patterns", "Common patterns", "quiz"),
            section("s_wrap", "Putting it together", "summary"),
        ],
    }
}

pub fn single_section_lesson() -> Lesson {
    Lesson {
        id: "lesson_one_pager".to_string(),
        title: "Order Types in One Page".to_string(),
        sections: vec![section("s_only", "Order types", "content")],
    }
}

pub fn store_with_lessons() -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.insert_lesson(sample_lesson());
    store.insert_lesson(single_section_lesson());
    store
}

pub fn progress(user_id: &str, lesson_id: &str, fraction: f64) -> ProgressRecord {
    ProgressRecord {
        user_id: user_id.to_string(),
        lesson_id: lesson_id.to_string(),
        progress: fraction,
        time_spent_secs: 600,
    }
}

pub fn engine_over(store: Arc<InMemoryStore>) -> LearningEngine {
    LearningEngine::new(EngineConfig::default(), store)
}

/// Store whose saves can be switched to fail, for persistence-failure
/// semantics. Loads delegate to an inner in-memory store.
pub struct FlakyStore {
    inner: InMemoryStore,
    pub fail_saves: AtomicBool,
}

impl FlakyStore {
    pub fn new() -> Self {
        let inner = InMemoryStore::new();
        inner.insert_lesson(sample_lesson());
        Self {
            inner,
            fail_saves: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl LearningStore for FlakyStore {
    async fn load_memory_records(
        &self,
        user_id: &str,
    ) -> Result<Vec<MemoryRecord>, PersistenceError> {
        self.inner.load_memory_records(user_id).await
    }

    async fn save_memory_record(&self, record: &MemoryRecord) -> Result<(), PersistenceError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(PersistenceError::new("simulated storage outage"));
        }
        self.inner.save_memory_record(record).await
    }

    async fn load_progress(&self, user_id: &str) -> Result<Vec<ProgressRecord>, PersistenceError> {
        self.inner.load_progress(user_id).await
    }

    async fn load_lesson(&self, lesson_id: &str) -> Result<Option<Lesson>, PersistenceError> {
        self.inner.load_lesson(lesson_id).await
    }
}

/// Generator that echoes the intent back as deterministic text.
pub struct StubGenerator;

#[async_trait]
impl ContentGenerator for StubGenerator {
    async fn narrate(&self, intent: &NarrationIntent) -> Result<String, GeneratorError> {
        Ok(format!(
            "[{}] {}",
            intent.tone_hint.as_str(),
            intent.section_id
        ))
    }

    async fn hint(&self, intent: &HintIntent) -> Result<String, GeneratorError> {
        Ok(format!(
            "hint for {} at {:.2}",
            intent.concept_id, intent.adjusted_difficulty
        ))
    }
}

/// Generator that always fails.
pub struct FailingGenerator;

#[async_trait]
impl ContentGenerator for FailingGenerator {
    async fn narrate(&self, _intent: &NarrationIntent) -> Result<String, GeneratorError> {
        Err(GeneratorError::new("model endpoint unreachable"))
    }

    async fn hint(&self, _intent: &HintIntent) -> Result<String, GeneratorError> {
        Err(GeneratorError::new("model endpoint unreachable"))
    }
}
