//! Escalation detection on AI replies.
//!
//! An AI turn matching one of these phrases deferred the user to a human
//! instead of answering. The escalation rate feeds the accuracy metric: it
//! approximates "did the system have to give up", not answer correctness.

/// Phrases that indicate the assistant escalated to a human, lowercased.
/// Extend this list if the assistant adopts new escalation wording.
const ESCALATION_PHRASES: &[&str] = &[
    "i apologize, the information is not available",
    "i'm sorry, the information is not available",
    "the information is not available in the college",
    "i will forward to admin",
    "forwarding to admin",
    "i will escalate",
    "please contact admin",
    "i cannot find",
    "unable to find",
    "not available in the college database",
    "i'll pass this to admin",
];

/// True when a lowercased AI reply contains any escalation phrase.
pub fn is_escalation(lower: &str) -> bool {
    ESCALATION_PHRASES.iter().any(|phrase| lower.contains(phrase))
}
