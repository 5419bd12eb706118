use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorizerError {
    #[error("Unknown color mode '{0}'. Expected 'consecutive' or 'independent'")]
    UnknownColorMode(String),

    #[error("Failed to serialize color ranges: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
