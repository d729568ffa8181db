//! Tone-adaptive text rewriting
//!
//! The rewriter stands in for a language-model call. Each tone maps to an
//! ordered list of literal substitutions, applied globally and case
//! sensitively, followed by an optional fixed wrapper. Substitutions are not
//! word-boundary aware ("willow" becomes "shallow") and later entries see the
//! output of earlier ones.

use tracing::debug;

use crate::error::Result;
use crate::tone::Tone;

/// Substitution table and wrapper for one tone
struct ToneRules {
    replacements: &'static [(&'static str, &'static str)],
    wrapper: Option<(&'static str, &'static str)>,
}

static NEUTRAL: ToneRules = ToneRules {
    replacements: &[("!", "."), ("amazing", "notable"), ("awesome", "effective")],
    wrapper: None,
};

static SUSPENSEFUL: ToneRules = ToneRules {
    replacements: &[(".", "... "), ("important", "crucial"), ("will", "shall")],
    wrapper: Some(("What lies ahead? ", " The answer may surprise you.")),
};

static INSPIRING: ToneRules = ToneRules {
    replacements: &[
        ("can", "have the power to"),
        ("should", "are destined to"),
        ("difficult", "challenging yet conquerable"),
    ],
    wrapper: Some(("Imagine the possibilities: ", " Your journey begins now!")),
};

fn rules(tone: Tone) -> &'static ToneRules {
    match tone {
        Tone::Neutral => &NEUTRAL,
        Tone::Suspenseful => &SUSPENSEFUL,
        Tone::Inspiring => &INSPIRING,
    }
}

/// Apply the substitution table for `tone` to `text`.
pub fn rewrite(text: &str, tone: Tone) -> String {
    let rules = rules(tone);

    let mut result = text.to_string();
    for &(from, to) in rules.replacements {
        result = result.replace(from, to);
    }

    match rules.wrapper {
        Some((prefix, suffix)) => format!("{}{}{}", prefix, result, suffix),
        None => result,
    }
}

/// Rewrites text into a target tone while preserving its meaning.
pub trait ToneRewriter: Send + Sync {
    fn rewrite(&self, text: &str, tone: Tone) -> Result<String>;
}

/// Offline rewriter backed by the fixed substitution tables
#[derive(Debug, Clone, Copy, Default)]
pub struct MockToneRewriter;

impl ToneRewriter for MockToneRewriter {
    fn rewrite(&self, text: &str, tone: Tone) -> Result<String> {
        let rewritten = rewrite(text, tone);
        debug!(
            "Rewrote {} chars with {} tone ({} chars out)",
            text.chars().count(),
            tone,
            rewritten.chars().count()
        );
        Ok(rewritten)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "This is amazing! It will be important.";

    const STRESS_INPUTS: &[&str] = &[
        "",
        "plain",
        "...",
        "!.",
        "!!",
        "cancan",
        "should should",
        "will.important",
        "awesome!amazing",
        "Ça va! ¡Qué amazing!",
        "Wir können das.",
        "終わり！ end!",
        "\n\t",
    ];

    #[test]
    fn test_neutral_scenario() {
        assert_eq!(
            rewrite(SAMPLE, Tone::Neutral),
            "This is notable. It will be important."
        );
    }

    #[test]
    fn test_suspenseful_scenario() {
        assert_eq!(
            rewrite(SAMPLE, Tone::Suspenseful),
            "What lies ahead? This is amazing! It shall be crucial...  The answer may surprise you."
        );
    }

    #[test]
    fn test_inspiring_substitutions() {
        assert_eq!(
            rewrite("You can do it, even if it is difficult.", Tone::Inspiring),
            "Imagine the possibilities: You have the power to do it, even if it is challenging yet conquerable. Your journey begins now!"
        );
        assert_eq!(
            rewrite("We should go.", Tone::Inspiring),
            "Imagine the possibilities: We are destined to go. Your journey begins now!"
        );
    }

    #[test]
    fn test_neutral_removes_every_exclamation() {
        for text in STRESS_INPUTS.iter().chain(&["!!!", "Wow! Awesome!", "a!b!c"]) {
            assert!(!rewrite(text, Tone::Neutral).contains('!'));
        }
    }

    #[test]
    fn test_wrappers_always_present() {
        for text in STRESS_INPUTS.iter().chain(&["Dots. Everywhere.", "will willow"]) {
            let suspense = rewrite(text, Tone::Suspenseful);
            assert!(suspense.starts_with("What lies ahead? "));
            assert!(suspense.ends_with("The answer may surprise you."));

            let inspiring = rewrite(text, Tone::Inspiring);
            assert!(inspiring.starts_with("Imagine the possibilities: "));
            assert!(inspiring.ends_with("Your journey begins now!"));
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(rewrite("", Tone::Neutral), "");
        assert_eq!(
            rewrite("", Tone::Suspenseful),
            "What lies ahead?  The answer may surprise you."
        );
        assert_eq!(
            rewrite("", Tone::Inspiring),
            "Imagine the possibilities:  Your journey begins now!"
        );
    }

    #[test]
    fn test_substring_matches_inside_words() {
        assert_eq!(
            rewrite("willow", Tone::Suspenseful),
            "What lies ahead? shallow The answer may surprise you."
        );
        assert_eq!(
            rewrite("scan", Tone::Inspiring),
            "Imagine the possibilities: shave the power to Your journey begins now!"
        );
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(rewrite("Amazing AWESOME", Tone::Neutral), "Amazing AWESOME");
        assert_eq!(
            rewrite("Will", Tone::Suspenseful),
            "What lies ahead? Will The answer may surprise you."
        );
    }

    #[test]
    fn test_mock_rewriter_never_fails() {
        let rewriter = MockToneRewriter;
        for tone in Tone::all() {
            assert_eq!(
                rewriter.rewrite(SAMPLE, *tone).unwrap(),
                rewrite(SAMPLE, *tone)
            );
        }
    }

    #[test]
    fn test_periods_expand_before_other_substitutions() {
        assert_eq!(
            rewrite("...", Tone::Suspenseful),
            "What lies ahead? ... ... ...  The answer may surprise you."
        );
        assert_eq!(
            rewrite("will.important", Tone::Suspenseful),
            "What lies ahead? shall... crucial The answer may surprise you."
        );
        assert_eq!(
            rewrite("!.", Tone::Suspenseful),
            "What lies ahead? !...  The answer may surprise you."
        );
    }

    #[test]
    fn test_neutral_exclamations_become_periods() {
        assert_eq!(rewrite("!.", Tone::Neutral), "..");
        assert_eq!(rewrite("awesome!amazing", Tone::Neutral), "effective.notable");
        assert_eq!(rewrite("...", Tone::Neutral), "...");
    }

    #[test]
    fn test_repeated_matches_all_replaced() {
        assert_eq!(
            rewrite("cancan", Tone::Inspiring),
            "Imagine the possibilities: have the power tohave the power to Your journey begins now!"
        );
        assert_eq!(
            rewrite("should should", Tone::Inspiring),
            "Imagine the possibilities: are destined to are destined to Your journey begins now!"
        );
        assert_eq!(rewrite("cancan", Tone::Neutral), "cancan");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(
            rewrite("Ça va! ¡Qué amazing!", Tone::Neutral),
            "Ça va. ¡Qué notable."
        );
        assert_eq!(
            rewrite("Wir können das.", Tone::Suspenseful),
            "What lies ahead? Wir können das...  The answer may surprise you."
        );
        assert_eq!(
            rewrite("Wir können das.", Tone::Inspiring),
            "Imagine the possibilities: Wir können das. Your journey begins now!"
        );
    }

    #[test]
    fn test_tones_only_touch_their_own_table() {
        assert_eq!(
            rewrite("awesome!amazing", Tone::Suspenseful),
            "What lies ahead? awesome!amazing The answer may surprise you."
        );
        assert_eq!(
            rewrite("will.important", Tone::Inspiring),
            "Imagine the possibilities: will.important Your journey begins now!"
        );
    }
}
