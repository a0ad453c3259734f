//! Statistics report - output structure of an aggregation pass.
//!
//! Field names serialize exactly as the dashboard frontend consumes them
//! (mixed camelCase and snake_case, an inherited wire format).

use serde::{Deserialize, Serialize};

/// Per-category share of classified queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category display name ("Scholarship" .. "Teaching", or "Others").
    pub category: String,
    /// Number of queries assigned to this category.
    pub count: u64,
    /// Fixed display color consumed by the frontend.
    pub color: String,
}

/// Per-language share of classified queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageShare {
    /// Language display label.
    pub language: String,
    /// Number of queries labeled with this language.
    pub count: u64,
    /// Share of all language-labeled queries, percent rounded to 1 decimal.
    pub percentage: f64,
}

/// Complete statistics report over the transcript corpus.
///
/// Built fresh per invocation; nothing is cached or persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsReport {
    /// Count of distinct chat sessions in the corpus.
    #[serde(rename = "totalUsers")]
    pub total_users: u64,
    /// Human queries counted after the greeting filter.
    #[serde(rename = "totalQueries")]
    pub total_queries: u64,
    /// 12 entries: the 11 fixed categories plus the synthetic "Others".
    pub categories: Vec<CategoryCount>,
    /// 9 fixed entries, one per language label.
    pub languages: Vec<LanguageShare>,
    /// Non-escalated share of AI replies, percent in [0, 100], 2 decimals.
    pub accuracy: f64,
    /// AI replies that matched an escalation phrase.
    pub human_escalations: u64,
    /// AI replies with non-empty extracted text.
    pub ai_responses: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let report = StatsReport {
            total_users: 1,
            total_queries: 2,
            categories: vec![],
            languages: vec![],
            accuracy: 100.0,
            human_escalations: 0,
            ai_responses: 3,
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["totalUsers"], 1);
        assert_eq!(json["totalQueries"], 2);
        assert_eq!(json["human_escalations"], 0);
        assert_eq!(json["ai_responses"], 3);
    }

    #[test]
    fn test_serialization_round_trip() {
        let report = StatsReport {
            total_users: 4,
            total_queries: 9,
            categories: vec![CategoryCount {
                category: "Exams".to_string(),
                count: 3,
                color: "#3b82f6".to_string(),
            }],
            languages: vec![LanguageShare {
                language: "English".to_string(),
                count: 9,
                percentage: 100.0,
            }],
            accuracy: 66.67,
            human_escalations: 1,
            ai_responses: 3,
        };

        let json = serde_json::to_string(&report).unwrap();
        let parsed: StatsReport = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.total_users, 4);
        assert_eq!(parsed.categories.len(), 1);
        assert_eq!(parsed.languages[0].language, "English");
        assert_eq!(parsed.accuracy, 66.67);
    }
}
