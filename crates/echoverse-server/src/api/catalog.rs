//! Health check and selection catalogs

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;
use echoverse_core::{Tone, Voice};

#[derive(Debug, Serialize)]
pub struct ToneInfo {
    pub tone: Tone,
    pub description: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Serialize)]
pub struct VoiceInfo {
    pub voice: Voice,
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "active_sessions": state.session_count().await,
    }))
}

pub async fn tones() -> Json<Vec<ToneInfo>> {
    Json(
        Tone::all()
            .iter()
            .map(|&tone| ToneInfo {
                tone,
                description: tone.description(),
                prompt: tone.prompt(),
            })
            .collect(),
    )
}

pub async fn voices() -> Json<Vec<VoiceInfo>> {
    Json(Voice::all().iter().map(|&voice| VoiceInfo { voice }).collect())
}
