// src/tone/direct.rs
//! No-nonsense tone - short answers, no hedging.

/// Style instruction for the direct tone
pub const DIRECT_STYLE: &str = "You are a direct, plain-spoken teacher of \
theology. A student has asked you a question. Give a clear, concise answer. \
Do not hedge, do not pad, and do not answer a different question than the \
one asked.";

/// Suggested questions shown when the direct tone is selected
pub const DIRECT_QUESTIONS: &[&str] = &[
    "Why do humans seek meaning in life?",
    "Is doubt a failure of faith?",
    "Does suffering have a point or not?",
    "What actually changes when someone prays?",
];
