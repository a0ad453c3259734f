//! Statistics aggregator - single sequential fold over the corpus.
//!
//! Runs the extraction and classifier bank over every stored message,
//! accumulates counters, and derives the final report. Malformed documents
//! and messages are skipped, never fatal; only store access can fail the
//! whole pass, and then no partial report is returned.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::AppError;
use crate::models::{TranscriptDocument, TranscriptMessage};
use crate::store::TranscriptStore;

use super::category::{classify_topic, Category, OTHERS_COLOR};
use super::escalation::is_escalation;
use super::extract::extract_message_text;
use super::greeting::is_greeting;
use super::language::{detect_language, Language};
use super::report::{CategoryCount, LanguageShare, StatsReport};

/// Originator tags recognized by the fold. Anything else is ignored.
const TYPE_HUMAN: &str = "human";
const TYPE_AI: &str = "ai";

/// Running counters for one aggregation pass.
///
/// Built fresh per invocation; never shared between passes.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    total_queries: u64,
    category_counts: HashMap<Category, u64>,
    others_count: u64,
    lang_counts: HashMap<Language, u64>,
    ai_responses: u64,
    escalations: u64,
}

impl StatsAggregator {
    /// Creates an aggregator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one document's messages into the counters.
    ///
    /// A `messages` field that is not an array skips the whole document;
    /// entries that do not look like messages are skipped individually.
    pub fn ingest_document(&mut self, doc: &TranscriptDocument) {
        let Some(messages) = doc.messages.0.as_array() else {
            debug!(transcript_id = %doc.id, "Skipping transcript without message array");
            return;
        };

        for entry in messages {
            let Ok(message) = serde_json::from_value::<TranscriptMessage>(entry.clone()) else {
                continue;
            };
            self.ingest_message(&message);
        }
    }

    /// Folds a single message into the counters. Unknown originators are
    /// ignored.
    pub fn ingest_message(&mut self, message: &TranscriptMessage) {
        match message.kind.as_str() {
            TYPE_HUMAN => self.ingest_human(&message.data),
            TYPE_AI => self.ingest_ai(&message.data),
            _ => {}
        }
    }

    fn ingest_human(&mut self, payload: &Value) {
        let raw = extract_message_text(payload);
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        let lower = text.to_lowercase();
        if is_greeting(&lower) {
            return;
        }

        self.total_queries += 1;

        // Language runs on the original text; script classes are unaffected
        // by case but the label must reflect what the user typed.
        let language = detect_language(text);
        *self.lang_counts.entry(language).or_insert(0) += 1;

        match classify_topic(&lower) {
            Some(category) => *self.category_counts.entry(category).or_insert(0) += 1,
            None => self.others_count += 1,
        }
    }

    fn ingest_ai(&mut self, payload: &Value) {
        let raw = extract_message_text(payload);
        let text = raw.trim();
        if text.is_empty() {
            return;
        }

        self.ai_responses += 1;

        if is_escalation(&text.to_lowercase()) {
            self.escalations += 1;
        }
    }

    /// Derives the final report from the accumulated counters.
    pub fn finalize(self, total_users: u64) -> StatsReport {
        let accuracy = if self.ai_responses > 0 {
            let raw = 100.0 * (self.ai_responses as f64 - self.escalations as f64)
                / self.ai_responses as f64;
            if raw.is_finite() {
                round2(raw.clamp(0.0, 100.0))
            } else {
                0.0
            }
        } else {
            0.0
        };

        let total_lang_count: u64 = self.lang_counts.values().sum();
        let languages = Language::ALL
            .iter()
            .map(|language| {
                let count = self.lang_counts.get(language).copied().unwrap_or(0);
                let percentage = if total_lang_count > 0 {
                    round1(100.0 * count as f64 / total_lang_count as f64)
                } else {
                    0.0
                };
                LanguageShare {
                    language: language.label().to_string(),
                    count,
                    percentage,
                }
            })
            .collect();

        let mut categories: Vec<CategoryCount> = Category::ALL
            .iter()
            .map(|category| CategoryCount {
                category: category.label().to_string(),
                count: self.category_counts.get(category).copied().unwrap_or(0),
                color: category.color().to_string(),
            })
            .collect();
        categories.push(CategoryCount {
            category: "Others".to_string(),
            count: self.others_count,
            color: OTHERS_COLOR.to_string(),
        });

        StatsReport {
            total_users,
            total_queries: self.total_queries,
            categories,
            languages,
            accuracy,
            human_escalations: self.escalations,
            ai_responses: self.ai_responses,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Runs one full aggregation pass against the store.
///
/// Exactly one call to each store method per invocation; the fold itself
/// cannot fail. Any store fault aborts the pass with no partial report.
pub async fn compute_stats(store: &dyn TranscriptStore) -> Result<StatsReport, AppError> {
    let session_ids = store.distinct_session_ids().await?;
    let documents = store.all_documents().await?;

    info!(
        sessions = session_ids.len(),
        documents = documents.len(),
        "Computing transcript statistics"
    );

    let mut aggregator = StatsAggregator::new();
    for doc in &documents {
        aggregator.ingest_document(doc);
    }

    let report = aggregator.finalize(session_ids.len() as u64);

    info!(
        total_queries = report.total_queries,
        ai_responses = report.ai_responses,
        escalations = report.human_escalations,
        "Aggregation pass complete"
    );

    Ok(report)
}
