use roomsheet_core::error::CoreError;

/// Failures surfaced by the studio controller and its overlay sources.
#[derive(Debug, thiserror::Error)]
pub enum StudioError {
    /// The hotspot is not part of the loaded hotspot table.
    #[error("Unknown hotspot: {0}")]
    UnknownHotspot(String),

    /// A sheet was selected while no picker was open.
    #[error("No hotspot picker is open")]
    NotPicking,

    /// The HTTP request itself failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with its structured error envelope.
    #[error("{error} ({status}): {message}")]
    Rejected {
        status: u16,
        error: String,
        code: String,
        message: String,
    },

    /// The server answered with a non-2xx status and an unrecognized body.
    #[error("Overlay API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// A catalog received from the server failed validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid studio configuration.
    #[error("Invalid studio configuration: {0}")]
    Config(String),
}
