//! EchoVerse Core - tone rewriting and audiobook synthesis pipeline
//!
//! This crate holds everything behind the EchoVerse audiobook creator that is
//! not HTTP plumbing:
//! - Tone-adaptive rewriting through a fixed substitution table
//! - Placeholder speech synthesis with simulated backend latency
//! - Per-session state with upstream-change invalidation
//! - Download packaging and side-by-side text statistics
//!
//! # Example
//!
//! ```ignore
//! use echoverse_core::{MockSpeechSynthesizer, MockToneRewriter, SessionState, Tone};
//!
//! let mut session = SessionState::default();
//! session.set_original_text("This is amazing!");
//! session.set_tone(Tone::Suspenseful);
//! session.apply_rewrite(&MockToneRewriter)?;
//! session.apply_synthesis(&MockSpeechSynthesizer::default()).await?;
//! let download = session.download()?;
//! ```

pub mod config;
pub mod download;
pub mod error;
pub mod rewriter;
pub mod session;
pub mod stats;
pub mod synthesizer;
pub mod tone;

pub use config::ServerConfig;
pub use download::{audio_filename, AudioDownload, AUDIO_CONTENT_TYPE};
pub use error::{Error, Result};
pub use rewriter::{rewrite, MockToneRewriter, ToneRewriter};
pub use session::SessionState;
pub use stats::{TextComparison, TextStats};
pub use synthesizer::{decode_audio, MockSpeechSynthesizer, SpeechSynthesizer};
pub use tone::{Tone, Voice};
