//! Per-session pipeline state
//!
//! A session moves text through three stages: original, rewritten, audio.
//! Replacing the original text invalidates both downstream stages. Changing
//! the tone or voice does not: audio generated under a previous selection
//! stays available until the next synthesis replaces it.

use tracing::{debug, info, warn};

use crate::download::AudioDownload;
use crate::error::{Error, Result};
use crate::rewriter::ToneRewriter;
use crate::stats::TextComparison;
use crate::synthesizer::{decode_audio, SpeechSynthesizer};
use crate::tone::{Tone, Voice};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    original_text: String,
    rewritten_text: String,
    selected_tone: Tone,
    selected_voice: Voice,
    audio_bytes: Option<Vec<u8>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn original_text(&self) -> &str {
        &self.original_text
    }

    pub fn rewritten_text(&self) -> &str {
        &self.rewritten_text
    }

    pub fn tone(&self) -> Tone {
        self.selected_tone
    }

    pub fn voice(&self) -> Voice {
        self.selected_voice
    }

    /// Stored (encoded) audio, if synthesis has run since the last text change
    pub fn audio_bytes(&self) -> Option<&[u8]> {
        self.audio_bytes.as_deref()
    }

    pub fn has_audio(&self) -> bool {
        self.audio_bytes.is_some()
    }

    /// Replace the original text. Returns `false` when `text` matches the
    /// current value, in which case nothing downstream is reset.
    pub fn set_original_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.original_text {
            return false;
        }

        debug!("Original text replaced ({} chars)", text.chars().count());
        self.original_text = text;
        self.rewritten_text.clear();
        self.audio_bytes = None;
        true
    }

    /// Load an uploaded `.txt` file. Content is decoded as UTF-8 and trimmed;
    /// empty content is ignored. On decode failure the session is untouched.
    pub fn load_upload(&mut self, content: Vec<u8>) -> Result<bool> {
        let text = String::from_utf8(content).map_err(|e| {
            warn!("Rejected upload: {}", e);
            Error::from(e)
        })?;

        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }
        Ok(self.set_original_text(text))
    }

    pub fn set_tone(&mut self, tone: Tone) {
        self.selected_tone = tone;
    }

    pub fn set_voice(&mut self, voice: Voice) {
        self.selected_voice = voice;
    }

    /// Rewrite the original text in the selected tone. On failure the
    /// previous rewritten text is kept.
    pub fn apply_rewrite(&mut self, rewriter: &dyn ToneRewriter) -> Result<&str> {
        if self.original_text.is_empty() {
            return Err(Error::EmptyText);
        }

        let rewritten = rewriter.rewrite(&self.original_text, self.selected_tone)?;
        self.rewritten_text = rewritten;
        Ok(&self.rewritten_text)
    }

    /// Synthesize the rewritten text with the selected voice. On failure the
    /// previous audio is kept.
    pub async fn apply_synthesis(&mut self, synthesizer: &dyn SpeechSynthesizer) -> Result<()> {
        if self.rewritten_text.is_empty() {
            return Err(Error::NothingToSynthesize);
        }

        let audio = synthesizer
            .synthesize(&self.rewritten_text, self.selected_voice)
            .await?;
        info!(
            "Generated audio with {} voice ({} bytes)",
            self.selected_voice,
            audio.len()
        );
        self.audio_bytes = Some(audio);
        Ok(())
    }

    /// Package the current audio under a name derived from the current
    /// tone and voice.
    pub fn download(&self) -> Result<AudioDownload> {
        let stored = self.audio_bytes.as_deref().ok_or(Error::NoAudio)?;
        let data = decode_audio(stored)?;
        Ok(AudioDownload::new(
            self.selected_tone,
            self.selected_voice,
            data,
        ))
    }

    /// Side-by-side view, available once both texts are present
    pub fn comparison(&self) -> Option<TextComparison> {
        if self.original_text.is_empty() || self.rewritten_text.is_empty() {
            return None;
        }
        Some(TextComparison::new(
            self.selected_tone,
            &self.original_text,
            &self.rewritten_text,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewriter::MockToneRewriter;
    use crate::synthesizer::MockSpeechSynthesizer;
    use async_trait::async_trait;
    use std::time::Duration;

    const SAMPLE: &str = "This is amazing! It will be important.";

    struct FailingRewriter;

    impl ToneRewriter for FailingRewriter {
        fn rewrite(&self, _text: &str, _tone: Tone) -> Result<String> {
            Err(Error::RewriteError("backend unavailable".to_string()))
        }
    }

    struct FailingSynthesizer;

    #[async_trait]
    impl SpeechSynthesizer for FailingSynthesizer {
        async fn synthesize(&self, _text: &str, _voice: Voice) -> Result<Vec<u8>> {
            Err(Error::SynthesisError("backend unavailable".to_string()))
        }
    }

    fn synth() -> MockSpeechSynthesizer {
        MockSpeechSynthesizer::new(Duration::ZERO)
    }

    async fn with_audio() -> SessionState {
        let mut session = SessionState::new();
        session.set_original_text(SAMPLE);
        session.apply_rewrite(&MockToneRewriter).unwrap();
        session.apply_synthesis(&synth()).await.unwrap();
        session
    }

    #[test]
    fn test_initial_state() {
        let session = SessionState::new();
        assert_eq!(session.original_text(), "");
        assert_eq!(session.rewritten_text(), "");
        assert_eq!(session.tone(), Tone::Neutral);
        assert_eq!(session.voice(), Voice::Lisa);
        assert!(!session.has_audio());
    }

    #[tokio::test]
    async fn test_editing_text_resets_downstream() {
        let mut session = with_audio().await;
        assert!(session.has_audio());

        assert!(session.set_original_text("Something new"));
        assert_eq!(session.rewritten_text(), "");
        assert!(session.audio_bytes().is_none());
    }

    #[tokio::test]
    async fn test_same_text_is_noop() {
        let mut session = with_audio().await;
        assert!(!session.set_original_text(SAMPLE));
        assert!(!session.rewritten_text().is_empty());
        assert!(session.has_audio());
    }

    #[tokio::test]
    async fn test_tone_change_keeps_stale_audio() {
        let mut session = with_audio().await;
        let before = session.audio_bytes().unwrap().to_vec();

        session.set_tone(Tone::Inspiring);
        session.set_voice(Voice::Michael);
        assert_eq!(session.audio_bytes().unwrap(), before.as_slice());
        assert_eq!(session.rewritten_text(), "This is notable. It will be important.");
    }

    #[tokio::test]
    async fn test_rewrite_leaves_audio_untouched() {
        let mut session = with_audio().await;
        session.set_tone(Tone::Suspenseful);
        session.apply_rewrite(&MockToneRewriter).unwrap();
        assert!(session.rewritten_text().starts_with("What lies ahead? "));
        assert!(session.has_audio());
    }

    #[test]
    fn test_rewrite_requires_text() {
        let mut session = SessionState::new();
        assert!(matches!(
            session.apply_rewrite(&MockToneRewriter),
            Err(Error::EmptyText)
        ));
    }

    #[test]
    fn test_failed_rewrite_keeps_previous() {
        let mut session = SessionState::new();
        session.set_original_text(SAMPLE);
        session.apply_rewrite(&MockToneRewriter).unwrap();

        assert!(session.apply_rewrite(&FailingRewriter).is_err());
        assert_eq!(session.rewritten_text(), "This is notable. It will be important.");
    }

    #[tokio::test]
    async fn test_synthesis_requires_rewrite() {
        let mut session = SessionState::new();
        session.set_original_text(SAMPLE);
        assert!(matches!(
            session.apply_synthesis(&synth()).await,
            Err(Error::NothingToSynthesize)
        ));
    }

    #[tokio::test]
    async fn test_failed_synthesis_keeps_previous() {
        let mut session = with_audio().await;
        let before = session.audio_bytes().unwrap().to_vec();

        assert!(session.apply_synthesis(&FailingSynthesizer).await.is_err());
        assert_eq!(session.audio_bytes().unwrap(), before.as_slice());
    }

    #[tokio::test]
    async fn test_download() {
        let mut session = with_audio().await;
        session.set_voice(Voice::Allison);

        let download = session.download().unwrap();
        assert_eq!(download.filename, "audiobook_neutral_allison.mp3");
        assert_eq!(download.content_type, "audio/mp3");
        assert_eq!(
            download.data,
            b"MOCK_AUDIO_DATA_This is notable. It will be important._Lisa"
        );
    }

    #[test]
    fn test_download_without_audio() {
        assert!(matches!(SessionState::new().download(), Err(Error::NoAudio)));
    }

    #[test]
    fn test_upload_trims_and_resets() {
        let mut session = SessionState::new();
        assert!(session.load_upload(b"  From a file.\n".to_vec()).unwrap());
        assert_eq!(session.original_text(), "From a file.");
    }

    #[test]
    fn test_upload_empty_is_ignored() {
        let mut session = SessionState::new();
        session.set_original_text(SAMPLE);
        assert!(!session.load_upload(b" \n\t".to_vec()).unwrap());
        assert_eq!(session.original_text(), SAMPLE);
    }

    #[tokio::test]
    async fn test_bad_upload_leaves_state() {
        let mut session = with_audio().await;
        let result = session.load_upload(vec![0xff, 0xfe, 0xfd]);
        assert!(matches!(result, Err(Error::Decode(_))));
        assert_eq!(session.original_text(), SAMPLE);
        assert!(session.has_audio());
    }

    #[test]
    fn test_comparison_needs_both_texts() {
        let mut session = SessionState::new();
        assert!(session.comparison().is_none());

        session.set_original_text(SAMPLE);
        assert!(session.comparison().is_none());

        session.apply_rewrite(&MockToneRewriter).unwrap();
        let comparison = session.comparison().unwrap();
        assert_eq!(comparison.original_stats.words, 7);
        assert_eq!(comparison.rewritten_stats.words, 7);
        assert_eq!(comparison.tone, Tone::Neutral);
    }
}
