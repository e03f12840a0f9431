use tokio::sync::RwLock;

/// Holds the most recently generated post for the lifetime of the server.
///
/// Empty until the first successful generation; every later success
/// overwrites it. Failed generations never touch it.
#[derive(Debug, Default)]
pub struct PostSession {
    last_post: RwLock<Option<String>>,
}

impl PostSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last generated post, if any
    pub async fn last_post(&self) -> Option<String> {
        self.last_post.read().await.clone()
    }

    /// Replace the stored post
    pub async fn store(&self, post: String) {
        *self.last_post.write().await = Some(post);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_session_starts_empty() {
        let session = PostSession::new();
        assert_eq!(session.last_post().await, None);
    }

    #[tokio::test]
    async fn test_store_overwrites_previous_post() {
        let session = PostSession::new();
        session.store("first".to_string()).await;
        session.store("second".to_string()).await;
        assert_eq!(session.last_post().await.as_deref(), Some("second"));
    }
}
