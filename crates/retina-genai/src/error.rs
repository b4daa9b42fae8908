use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenAiError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("generation service returned no text: {0}")]
    EmptyResponse(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("{0}")]
    Generation(String),
}

impl From<reqwest::Error> for GenAiError {
    fn from(e: reqwest::Error) -> Self {
        GenAiError::Http(e.to_string())
    }
}
