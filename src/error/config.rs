use thiserror::Error;

/// Configuration errors raised while reading the environment at startup.
///
/// These never occur during request handling; `main` reports them and exits.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable is set but holds an unusable value.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why the value was rejected.
        reason: String,
    },
}
