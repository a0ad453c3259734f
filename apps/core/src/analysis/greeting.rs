//! Greeting filter for query counting.
//!
//! Pure greetings are not queries. A human turn is dropped from the
//! statistics when it exactly equals a known greeting, or when a short line
//! consists entirely of greeting tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Greeting words ignored when counting queries, lowercased.
const GREETING_WORDS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "good morning",
    "good evening",
    "vanakkam",
    "namaste",
    "hai",
    "hola",
    "bonjour",
];

/// Texts shorter than this qualify for the all-tokens-are-greetings rule.
const SHORT_GREETING_MAX_CHARS: usize = 30;

static GREETING_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GREETING_WORDS.iter().copied().collect());

/// True when a lowercased, trimmed human turn should be excluded from query
/// counting.
///
/// Multi-word entries like "good morning" only hit the exact-match arm; the
/// token rule splits on whitespace and sees them as two tokens. A short line
/// whose tokens are all greeting words is dropped even if the combination is
/// linguistically meaningful.
pub fn is_greeting(lower: &str) -> bool {
    if GREETING_SET.contains(lower) {
        return true;
    }

    lower.chars().count() < SHORT_GREETING_MAX_CHARS
        && !lower.is_empty()
        && lower
            .split_whitespace()
            .all(|token| GREETING_SET.contains(token))
}
