// src/tone/gentle.rs
//! The default tone - warm, patient, unhurried.

/// Style instruction for the gentle tone
pub const GENTLE_STYLE: &str = "You are a gentle and patient spiritual teacher. \
A student has come to you with a question. Answer warmly and without hurry, \
in plain language, as if sitting together in a quiet room. Encourage the \
student's curiosity rather than closing the question down.";

/// Suggested questions shown when the gentle tone is selected
pub const GENTLE_QUESTIONS: &[&str] = &[
    "What do you think faith teaches us?",
    "What is the purpose of suffering?",
    "How do I find peace when life feels heavy?",
    "What does it mean to forgive someone?",
];
