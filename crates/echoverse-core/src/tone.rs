//! Tone and voice selections

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Rewriting style applied to the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Neutral,
    Suspenseful,
    Inspiring,
}

impl Tone {
    /// All tones in display order
    pub fn all() -> &'static [Tone] {
        &[Tone::Neutral, Tone::Suspenseful, Tone::Inspiring]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "Neutral",
            Tone::Suspenseful => "Suspenseful",
            Tone::Inspiring => "Inspiring",
        }
    }

    /// Short user-facing description of the narration style
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Neutral => "Clear, balanced, and objective narration",
            Tone::Suspenseful => "Dramatic tension and engaging mystery",
            Tone::Inspiring => "Uplifting and motivational delivery",
        }
    }

    /// Instruction handed to a language-model backend for this tone.
    pub fn prompt(&self) -> &'static str {
        match self {
            Tone::Neutral => "Rewrite the following text in a clear, balanced, and objective tone while preserving all original meaning and key information:",
            Tone::Suspenseful => "Rewrite the following text with dramatic tension, mystery, and engaging suspense while preserving all original meaning and key information:",
            Tone::Inspiring => "Rewrite the following text with an uplifting, motivational, and inspiring tone while preserving all original meaning and key information:",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::InvalidTone(s.to_string()))
    }
}

/// Narrator persona used for synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Voice {
    #[default]
    Lisa,
    Michael,
    Allison,
}

impl Voice {
    pub fn all() -> &'static [Voice] {
        &[Voice::Lisa, Voice::Michael, Voice::Allison]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Voice::Lisa => "Lisa",
            Voice::Michael => "Michael",
            Voice::Allison => "Allison",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Voice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Voice::all()
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| Error::InvalidVoice(s.to_string()))
    }
}
