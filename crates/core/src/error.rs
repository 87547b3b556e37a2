#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("{entity} not found: {path}")]
    NotFound { entity: &'static str, path: String },

    #[error("Unknown hotspot: {0}")]
    UnknownHotspot(String),

    #[error("Image decode failed: {0}")]
    ImageDecode(String),

    #[error("Storage write failed: {0}")]
    StorageWrite(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
