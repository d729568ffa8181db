//! Error types for the EchoVerse pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown tone: {0}")]
    InvalidTone(String),

    #[error("Unknown voice: {0}")]
    InvalidVoice(String),

    #[error("No text to rewrite")]
    EmptyText,

    #[error("No rewritten text to synthesize")]
    NothingToSynthesize,

    #[error("No audio has been generated")]
    NoAudio,

    #[error("Error reading file: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Rewrite failed: {0}")]
    RewriteError(String),

    #[error("Synthesis failed: {0}")]
    SynthesisError(String),

    #[error("Audio decoding error: {0}")]
    AudioError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::ConfigError(e.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::AudioError(e.to_string())
    }
}
