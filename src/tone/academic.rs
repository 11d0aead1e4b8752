// src/tone/academic.rs
//! Scholarly tone - comparative, names traditions and thinkers.

/// Style instruction for the academic tone
pub const ACADEMIC_STYLE: &str = "You are a professor of comparative theology \
addressing a student. Answer precisely, naming the relevant traditions, \
texts, or thinkers where they genuinely apply. Distinguish between what a \
tradition claims and what can be argued from outside it.";

/// Suggested questions shown when the academic tone is selected
pub const ACADEMIC_QUESTIONS: &[&str] = &[
    "How can we reconcile doubt with belief?",
    "How do different traditions explain suffering?",
    "What is the difference between faith and belief?",
    "How has the idea of grace changed across history?",
];
