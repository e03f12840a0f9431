use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Local;
use tracing::{error, info, warn};

use super::form::EventForm;
use super::pages::{IndexPage, Notice};
use super::AppState;
use crate::generator::GenerateError;

/// Render a page, turning template failures into a 500
fn render_page(status: StatusCode, page: IndexPage) -> Response {
    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!("Failed to render page: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Handler for the form page
pub async fn index_handler(State(state): State<AppState>) -> Response {
    let form = EventForm::with_defaults(Local::now().date_naive());
    let post = state.session.last_post().await;

    render_page(StatusCode::OK, IndexPage::new(form, post, None))
}

/// Handler for form submission
pub async fn generate_handler(
    State(state): State<AppState>,
    Form(form): Form<EventForm>,
) -> Response {
    let (details, creativity) = match form.to_details() {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!("Rejected form submission: {}", e);
            let post = state.session.last_post().await;
            let page = IndexPage::new(form, post, Some(Notice::invalid_input(e.to_string())));
            return render_page(StatusCode::BAD_REQUEST, page);
        }
    };

    match state.generator.generate(&details, creativity).await {
        Ok(post) => {
            info!("Post generated for event '{}'", details.name);
            state.session.store(post.clone()).await;
            render_page(StatusCode::OK, IndexPage::new(form, Some(post), None))
        }
        Err(e) => {
            let status = match e {
                GenerateError::MissingApiKey => StatusCode::SERVICE_UNAVAILABLE,
                GenerateError::Provider(_) => StatusCode::BAD_GATEWAY,
            };
            let post = state.session.last_post().await;
            let page = IndexPage::new(form, post, Some(Notice::from_generate_error(&e)));
            render_page(status, page)
        }
    }
}

// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}
