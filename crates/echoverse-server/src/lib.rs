//! EchoVerse Server - HTTP API for the audiobook creator

pub mod api;
pub mod error;
pub mod state;

pub use api::create_router;
pub use state::AppState;
