use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(
        code(linkedscribe::environment),
        help("Check the values in your environment or .env file")
    )]
    Environment(String),

    #[error(transparent)]
    #[diagnostic(code(linkedscribe::io))]
    Io(#[from] std::io::Error),

    #[error("Server error: {0}")]
    #[diagnostic(code(linkedscribe::server))]
    Server(String),
}

/// Type alias for Result with our Error type
pub type AppResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str, reason: &str) -> Error {
    Error::Environment(format!("Invalid environment variable {}: {}", var, reason))
}

/// Helper to create server errors
pub fn server_error(message: &str) -> Error {
    Error::Server(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_error_names_variable() {
        let err = env_error("PORT", "invalid digit found in string");
        assert_eq!(
            err.to_string(),
            "Environment error: Invalid environment variable PORT: invalid digit found in string"
        );
    }
}
