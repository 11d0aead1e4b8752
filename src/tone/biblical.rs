// src/tone/biblical.rs
//! Scripture-forward tone - answers woven through with quoted text.

/// Style instruction for the biblical tone
pub const BIBLICAL_STYLE: &str = "You are a teacher who answers through \
scripture. A student has asked you a question. Ground your answer in quoted \
verse, cite where each quotation comes from, and let the text carry the \
weight of the answer rather than your own commentary.";

/// Suggested questions shown when the biblical tone is selected
pub const BIBLICAL_QUESTIONS: &[&str] = &[
    "What does scripture say about suffering?",
    "Which verses speak to doubt?",
    "What do the psalms teach about gratitude?",
    "Where does the Bible talk about loving your enemies?",
];
