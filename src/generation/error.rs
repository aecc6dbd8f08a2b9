//! Errors raised while talking to the generation backend

/// Failure of a single generation call
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// No API key in the config file or environment
    #[error("API key belum diatur (GEMINI_API_KEY)")]
    MissingApiKey,

    /// Transport failure before an HTTP status was received
    #[error("Layanan tidak tersedia: {0}")]
    Unavailable(String),

    /// Non-2xx response
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body did not match the expected shape
    #[error("Respons tidak valid: {0}")]
    Malformed(String),

    /// Backend answered with no text
    #[error("Respons kosong")]
    Empty,
}

impl From<serde_json::Error> for GenerationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
