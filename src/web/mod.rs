mod form;
mod handlers;
mod pages;

pub use form::{EventForm, FormError, DEFAULT_END_TIME, DEFAULT_START_TIME};
pub use handlers::{generate_handler, health_handler, index_handler};
pub use pages::{IndexPage, Notice, PAGE_TITLE};

use crate::generator::PostGenerator;
use crate::session::PostSession;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Directory served under `/assets`
pub const ASSETS_DIR: &str = "assets";

#[derive(Clone)]
pub struct AppState {
    /// Generator used for every submission
    pub generator: PostGenerator,
    /// Last generated post
    pub session: Arc<PostSession>,
}

impl AppState {
    pub fn new(generator: PostGenerator) -> Self {
        Self {
            generator,
            session: Arc::new(PostSession::new()),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/health", get(health_handler))
        .nest_service("/assets", ServeDir::new(ASSETS_DIR))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
