use thiserror::Error;

#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NovaError {
    #[error("Missing field in model response: {0}")]
    MissingField(String),

    #[error("Unrecognized content block in model response: {0}")]
    UnrecognizedContent(String),

    #[error("Malformed message: {0}")]
    MalformedMessage(String),

    #[error("Unsupported image media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Duplicate tool name: {0}")]
    DuplicateTool(String),

    #[error("Failed to render template: {0}")]
    Template(String),

    #[error("Bedrock request failed: {0}")]
    Transport(String),
}

impl From<serde_json::Error> for NovaError {
    fn from(err: serde_json::Error) -> Self {
        NovaError::MalformedMessage(err.to_string())
    }
}

impl From<tera::Error> for NovaError {
    fn from(err: tera::Error) -> Self {
        NovaError::Template(err.to_string())
    }
}

pub type NovaResult<T> = Result<T, NovaError>;
