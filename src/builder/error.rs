use thiserror::Error;

/// Failures raised while parsing builder input.
///
/// None of these reach the user: the editor logs them and carries on with
/// a no-op, the way a drop of an unknown palette token is simply ignored.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("unknown component type: {0}")]
    UnknownComponentType(String),

    #[error("unknown property: {0}")]
    UnknownProperty(String),

    #[error("invalid builder config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, BuilderError>;
