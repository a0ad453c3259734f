//! # Analysis Module
//!
//! Non-LLM transcript analysis for CampusChat. Classifies stored chat turns
//! and aggregates them into dashboard statistics in a single pass.
//!
//! ## Components
//! - `extract`: total text extraction from heterogeneous message payloads
//! - `language`: Unicode-script language detection
//! - `category`: priority-ordered multilingual topic classification
//! - `greeting`: greeting filter applied before query counting
//! - `escalation`: escalation-phrase detection on AI replies
//! - `report`: output data structures
//! - `aggregator`: single sequential fold over the corpus

pub mod aggregator;
pub mod category;
pub mod escalation;
pub mod extract;
pub mod greeting;
pub mod language;
pub mod report;

// Re-export main types for convenience
#[allow(unused_imports)]
pub use aggregator::{compute_stats, StatsAggregator};
#[allow(unused_imports)]
pub use category::{classify_topic, Category};
#[allow(unused_imports)]
pub use escalation::is_escalation;
#[allow(unused_imports)]
pub use extract::extract_message_text;
#[allow(unused_imports)]
pub use greeting::is_greeting;
#[allow(unused_imports)]
pub use language::{detect_language, Language};
#[allow(unused_imports)]
pub use report::{CategoryCount, LanguageShare, StatsReport};
