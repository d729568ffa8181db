//! Download packaging for generated audio

use crate::tone::{Tone, Voice};

/// Declared media type of the download. The mock payload is not a decodable
/// MP3 stream.
pub const AUDIO_CONTENT_TYPE: &str = "audio/mp3";

/// Filename for an audiobook rendered with `tone` and `voice`.
pub fn audio_filename(tone: Tone, voice: Voice) -> String {
    format!("audiobook_{}_{}.mp3", tone, voice).to_lowercase()
}

/// Audio file ready to hand to the user
#[derive(Debug, Clone)]
pub struct AudioDownload {
    pub filename: String,
    pub content_type: &'static str,
    pub data: Vec<u8>,
}

impl AudioDownload {
    pub fn new(tone: Tone, voice: Voice, data: Vec<u8>) -> Self {
        Self {
            filename: audio_filename(tone, voice),
            content_type: AUDIO_CONTENT_TYPE,
            data,
        }
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}
