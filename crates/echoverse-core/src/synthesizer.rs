//! Placeholder speech synthesis
//!
//! Real synthesis is out of scope; the mock produces a short deterministic
//! payload after a simulated backend round trip so the rest of the pipeline
//! (state transitions, download packaging) behaves as it would with a real
//! provider.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::Result;
use crate::tone::Voice;

/// Marker prepended to every mock payload
pub const MOCK_AUDIO_PREFIX: &str = "MOCK_AUDIO_DATA_";

/// Characters of input text carried into the mock payload
pub const MOCK_TEXT_CHARS: usize = 50;

/// Converts text to audio in the voice of the selected narrator.
///
/// Returned bytes are in stored (base64) form; use [`decode_audio`] to get
/// the downloadable payload.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>>;
}

/// Synthesizer that sleeps for `delay` and returns an encoded marker
#[derive(Debug, Clone)]
pub struct MockSpeechSynthesizer {
    delay: Duration,
}

impl MockSpeechSynthesizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockSpeechSynthesizer {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

/// Raw (pre-base64) mock payload for `text` and `voice`.
fn mock_payload(text: &str, voice: Voice) -> Vec<u8> {
    let head: String = text.chars().take(MOCK_TEXT_CHARS).collect();

    let mut payload = Vec::with_capacity(MOCK_AUDIO_PREFIX.len() + head.len() + 16);
    payload.extend_from_slice(MOCK_AUDIO_PREFIX.as_bytes());
    payload.extend_from_slice(head.as_bytes());
    payload.push(b'_');
    payload.extend_from_slice(voice.as_str().as_bytes());
    payload
}

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>> {
        debug!("Simulating synthesis latency of {:?}", self.delay);
        tokio::time::sleep(self.delay).await;

        let encoded = STANDARD.encode(mock_payload(text, voice)).into_bytes();
        info!(
            "Synthesized {} chars with voice {} ({} bytes)",
            text.chars().count(),
            voice,
            encoded.len()
        );
        Ok(encoded)
    }
}

/// Decode stored audio into the bytes delivered for download.
pub fn decode_audio(stored: &[u8]) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(stored)?)
}
