// src/tone/mod.rs
// Tone profiles for the teacher voice. Each tone carries its style
// instruction and the suggested-question presets shown to the student.

pub mod academic;
pub mod biblical;
pub mod direct;
pub mod gentle;

use serde::{Deserialize, Serialize};

/// Named style profile controlling the system instruction given to the
/// generator, plus the preset questions offered for that tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneProfile {
    Gentle,
    Direct,
    Academic,
    Biblical,
}

impl ToneProfile {
    /// All tones, in the order the selector presents them.
    pub const ALL: [ToneProfile; 4] = [
        ToneProfile::Gentle,
        ToneProfile::Direct,
        ToneProfile::Academic,
        ToneProfile::Biblical,
    ];

    /// Returns the style instruction for this tone.
    pub fn style_instruction(&self) -> &'static str {
        match self {
            ToneProfile::Gentle => gentle::GENTLE_STYLE,
            ToneProfile::Direct => direct::DIRECT_STYLE,
            ToneProfile::Academic => academic::ACADEMIC_STYLE,
            ToneProfile::Biblical => biblical::BIBLICAL_STYLE,
        }
    }

    /// Returns the ordered suggested-question presets for this tone.
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        match self {
            ToneProfile::Gentle => gentle::GENTLE_QUESTIONS,
            ToneProfile::Direct => direct::DIRECT_QUESTIONS,
            ToneProfile::Academic => academic::ACADEMIC_QUESTIONS,
            ToneProfile::Biblical => biblical::BIBLICAL_QUESTIONS,
        }
    }
}

impl std::fmt::Display for ToneProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ToneProfile::Gentle => "gentle",
                ToneProfile::Direct => "direct",
                ToneProfile::Academic => "academic",
                ToneProfile::Biblical => "biblical",
            }
        )
    }
}

impl std::str::FromStr for ToneProfile {
    type Err = ();

    /// Parse a tone name from a request field.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gentle" => Ok(ToneProfile::Gentle),
            "direct" => Ok(ToneProfile::Direct),
            "academic" => Ok(ToneProfile::Academic),
            "biblical" => Ok(ToneProfile::Biblical),
            _ => Err(()),
        }
    }
}
