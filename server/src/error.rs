//! Startup failures.

/// Anything that stops the server from coming up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Leptos site configuration or an environment variable is unusable.
    #[error("configuration error: {0}")]
    Config(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
