//! Prompt assembly
//!
//! Deterministic string concatenation: style line, optional verse line,
//! labeled transcript capped to the most recent turns, trailing cue.

use crate::session::Turn;
use crate::tone::ToneProfile;
use crate::verse::VerseEntry;

/// Builds the complete generation prompt for one student message.
pub fn build_prompt(
    tone: ToneProfile,
    verse: Option<&VerseEntry>,
    history: &[Turn],
    input: &str,
    history_cap: usize,
) -> String {
    let mut prompt = String::new();

    // 1. Tone style instruction
    prompt.push_str(tone.style_instruction());
    prompt.push_str("\n\n");

    // 2. Matched verse, when the lookup found one
    if let Some(entry) = verse {
        prompt.push_str(&format!("A verse to reflect on: \"{}\"\n\n", entry.verse));
    }

    // 3. Recent transcript, oldest first, capped
    let start_idx = history.len().saturating_sub(history_cap);
    for turn in &history[start_idx..] {
        prompt.push_str(&format!("{}: {}\n", turn.role.label(), turn.text));
    }

    // 4. The new student line and the cue for the model to continue
    prompt.push_str(&format!("Student: {}\nTeacher:", input.trim()));

    prompt
}
