//! Application state management

use echoverse_core::{
    MockSpeechSynthesizer, MockToneRewriter, ServerConfig, SessionState, SpeechSynthesizer,
    ToneRewriter,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// One user's session. The mutex serialises actions within the session;
/// sessions never share state.
pub type SessionHandle = Arc<Mutex<SessionState>>;

struct SessionEntry {
    handle: SessionHandle,
    last_access: Instant,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub rewriter: Arc<dyn ToneRewriter>,
    pub synthesizer: Arc<dyn SpeechSynthesizer>,
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl AppState {
    /// State backed by the offline rewriter and synthesizer
    pub fn new(config: ServerConfig) -> Self {
        let synthesizer = MockSpeechSynthesizer::new(config.synthesis_delay());
        info!("Synthesis delay: {:?}", synthesizer.delay());
        Self::with_backends(config, Arc::new(MockToneRewriter), Arc::new(synthesizer))
    }

    pub fn with_backends(
        config: ServerConfig,
        rewriter: Arc<dyn ToneRewriter>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            rewriter,
            synthesizer,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn create_session(&self) -> (Uuid, SessionHandle) {
        let id = Uuid::new_v4();
        let handle = Arc::new(Mutex::new(SessionState::new()));

        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions);
        sessions.insert(
            id,
            SessionEntry {
                handle: handle.clone(),
                last_access: Instant::now(),
            },
        );
        info!("Session {} started", id);
        (id, handle)
    }

    /// Look up a live session and mark it as used.
    pub async fn session(&self, id: Uuid) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions);
        sessions.get_mut(&id).map(|entry| {
            entry.last_access = Instant::now();
            entry.handle.clone()
        })
    }

    pub async fn end_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!("Session {} ended", id);
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions);
        sessions.len()
    }

    /// Drop sessions idle for longer than the configured timeout. Returns the
    /// number removed.
    pub async fn expire_idle_sessions(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions)
    }

    /// Run [`AppState::expire_idle_sessions`] on a fixed interval until the
    /// runtime shuts down. Does nothing when expiry is disabled.
    pub fn spawn_session_reaper(&self) -> Option<tokio::task::JoinHandle<()>> {
        let timeout = self.config.session_idle_timeout()?;
        let period = (timeout / 2).max(Duration::from_secs(1));
        let state = self.clone();

        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                let removed = state.expire_idle_sessions().await;
                if removed > 0 {
                    info!("Expired {} idle sessions", removed);
                }
            }
        }))
    }

    fn prune(&self, sessions: &mut HashMap<Uuid, SessionEntry>) -> usize {
        let Some(timeout) = self.config.session_idle_timeout() else {
            return 0;
        };

        let before = sessions.len();
        sessions.retain(|id, entry| {
            let live = entry.last_access.elapsed() <= timeout;
            if !live {
                debug!("Session {} idle for over {:?}", id, timeout);
            }
            live
        });
        before - sessions.len()
    }
}
