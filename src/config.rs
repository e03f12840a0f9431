use crate::error::{env_error, AppResult};
use dotenvy::dotenv;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use url::Url;

/// Default Gemini model used for post generation
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default base URL of the Generative Language API
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Default port for the web server
pub const DEFAULT_PORT: u16 = 3000;

/// Main configuration structure for the web app
#[derive(Clone)]
pub struct Config {
    /// Gemini API key, checked on every generation rather than at startup
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    pub gemini_model: String,
    /// Base URL for the Gemini REST API
    pub gemini_api_base: Url,
    /// Address the server binds to
    pub host: IpAddr,
    /// Port the server listens on
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<redacted>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_api_base", &self.gemini_api_base.as_str())
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present
    pub fn load() -> AppResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty key is treated the same as a missing one
        let gemini_api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty());

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|model| !model.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base = lookup("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let gemini_api_base =
            Url::parse(&base).map_err(|e| env_error("GEMINI_API_BASE", &e.to_string()))?;

        let host = match lookup("HOST") {
            Some(host) => host
                .parse::<IpAddr>()
                .map_err(|e| env_error("HOST", &e.to_string()))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| env_error("PORT", &e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            gemini_api_key,
            gemini_model,
            gemini_api_base,
            host,
            port,
        })
    }

    /// Socket address for the listener
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
