//! Session endpoints
//!
//! Each handler locks one session for the whole action, so actions within a
//! session run one at a time while other sessions proceed independently.

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{AppState, SessionHandle};
use echoverse_core::{audio_filename, SessionState, TextComparison, Tone, Voice};

/// Client-facing view of a session. Audio is summarised, not inlined.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub original_text: String,
    pub rewritten_text: String,
    pub tone: Tone,
    pub voice: Voice,
    pub has_audio: bool,
    pub audio_size: Option<usize>,
    pub download_filename: Option<String>,
}

impl SessionSnapshot {
    fn new(id: Uuid, session: &SessionState) -> Self {
        Self {
            id,
            original_text: session.original_text().to_string(),
            rewritten_text: session.rewritten_text().to_string(),
            tone: session.tone(),
            voice: session.voice(),
            has_audio: session.has_audio(),
            audio_size: session.audio_bytes().map(|a| a.len()),
            download_filename: session
                .has_audio()
                .then(|| audio_filename(session.tone(), session.voice())),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct SettingsRequest {
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default)]
    pub voice: Option<String>,
}

async fn lookup(state: &AppState, id: Uuid) -> Result<SessionHandle, ApiError> {
    state
        .session(id)
        .await
        .ok_or_else(|| ApiError::session_not_found(id))
}

pub async fn create(State(state): State<AppState>) -> (StatusCode, Json<SessionSnapshot>) {
    let (id, handle) = state.create_session().await;
    let session = handle.lock().await;
    (StatusCode::CREATED, Json(SessionSnapshot::new(id, &session)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let handle = lookup(&state, id).await?;
    let session = handle.lock().await;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

pub async fn end(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.end_session(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::session_not_found(id))
    }
}

pub async fn set_text(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TextRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    session.set_original_text(req.text);
    Ok(Json(SessionSnapshot::new(id, &session)))
}

/// Accepts a multipart form with a `.txt` file in the `file` field.
pub async fn upload(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let handle = lookup(&state, id).await?;

    let mut content = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        if !file_name.to_ascii_lowercase().ends_with(".txt") {
            warn!("Rejected upload {:?}: not a .txt file", file_name);
            return Err(ApiError::bad_request("Only .txt files are supported"));
        }

        info!("Session {} uploading {}", id, file_name);
        content = Some(field.bytes().await?);
        break;
    }

    let content = content.ok_or_else(|| ApiError::bad_request("Missing 'file' field"))?;

    let mut session = handle.lock().await;
    session.load_upload(content.to_vec())?;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SettingsRequest>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let tone = req.tone.as_deref().map(str::parse::<Tone>).transpose()?;
    let voice = req.voice.as_deref().map(str::parse::<Voice>).transpose()?;

    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    if let Some(tone) = tone {
        session.set_tone(tone);
    }
    if let Some(voice) = voice {
        session.set_voice(voice);
    }
    Ok(Json(SessionSnapshot::new(id, &session)))
}

pub async fn rewrite(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    info!("Session {} rewriting with {} tone", id, session.tone());
    session.apply_rewrite(state.rewriter.as_ref())?;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

pub async fn synthesize(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let handle = lookup(&state, id).await?;
    let mut session = handle.lock().await;
    info!("Session {} synthesizing with {} voice", id, session.voice());
    session.apply_synthesis(state.synthesizer.as_ref()).await?;
    Ok(Json(SessionSnapshot::new(id, &session)))
}

pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let handle = lookup(&state, id).await?;
    let download = handle.lock().await.download()?;

    info!("Session {} downloading {}", id, download.filename);
    Ok((
        [
            (header::CONTENT_TYPE, download.content_type.to_string()),
            (header::CONTENT_DISPOSITION, download.content_disposition()),
        ],
        download.data,
    )
        .into_response())
}

pub async fn comparison(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TextComparison>, ApiError> {
    let handle = lookup(&state, id).await?;
    let session = handle.lock().await;
    session
        .comparison()
        .map(Json)
        .ok_or_else(|| ApiError::conflict("Both original and rewritten text are required"))
}
