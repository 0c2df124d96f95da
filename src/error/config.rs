use thiserror::Error;

/// Configuration issues detected while loading the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    ///
    /// Results in a 500 Internal Server Error if it ever reaches a response,
    /// though in practice it aborts startup.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}
