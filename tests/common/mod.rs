use async_trait::async_trait;
use linkedscribe::generator::{CompletionRequest, PostGenerator, ProviderError, TextProvider};
use linkedscribe::web::AppState;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Mock text provider that replays scripted replies and records every request
#[derive(Debug, Default)]
pub struct MockProvider {
    replies: Mutex<VecDeque<Result<String, String>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockProvider {
    /// Create a mock that answers with `replies` in order
    pub fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        let replies = replies
            .into_iter()
            .map(|reply| reply.map(str::to_string).map_err(str::to_string))
            .collect();
        Arc::new(Self {
            replies: Mutex::new(replies),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// All requests received so far
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl TextProvider for MockProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn complete(
        &self,
        _api_key: &str,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError> {
        self.requests.lock().await.push(request.clone());
        match self.replies.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(ProviderError::Status {
                status: 500,
                body: message,
            }),
            None => Err(ProviderError::MalformedResponse(
                "no scripted reply left".to_string(),
            )),
        }
    }
}

/// App state backed by the mock provider
pub fn app_state(api_key: Option<&str>, provider: Arc<MockProvider>) -> AppState {
    AppState::new(PostGenerator::new(api_key.map(str::to_string), provider))
}

/// URL-encoded body for the event form
pub fn form_body<V: AsRef<str>>(pairs: &[(&str, V)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Form fields for the Tech Symposium example
pub fn symposium_form(creativity: &str) -> Vec<(&'static str, String)> {
    vec![
        ("name", "Tech Symposium 2024".to_string()),
        ("venue", "Main Hall".to_string()),
        ("start_date", "2024-03-01".to_string()),
        ("start_time", "09:00".to_string()),
        ("end_date", "2024-03-01".to_string()),
        ("end_time", "17:00".to_string()),
        ("description", "A full day of talks on cloud computing".to_string()),
        ("category", "Technology".to_string()),
        ("involvement", "Volunteer".to_string()),
        ("additional_details", String::new()),
        ("creativity", creativity.to_string()),
    ]
}
