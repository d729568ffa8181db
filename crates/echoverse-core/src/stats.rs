//! Side-by-side text statistics

use serde::Serialize;

use crate::tone::Tone;

/// Words per minute assumed for reading-time estimates
const READING_WPM: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub words: usize,
    pub characters: usize,
    pub reading_minutes: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        let words = text.split_whitespace().count();
        Self {
            words,
            characters: text.chars().count(),
            reading_minutes: words / READING_WPM + 1,
        }
    }
}

/// Original and rewritten text with their statistics
#[derive(Debug, Clone, Serialize)]
pub struct TextComparison {
    pub tone: Tone,
    pub original: String,
    pub original_stats: TextStats,
    pub rewritten: String,
    pub rewritten_stats: TextStats,
}

impl TextComparison {
    pub fn new(tone: Tone, original: &str, rewritten: &str) -> Self {
        Self {
            tone,
            original: original.to_string(),
            original_stats: TextStats::of(original),
            rewritten: rewritten.to_string(),
            rewritten_stats: TextStats::of(rewritten),
        }
    }
}
