use registry::ValidationError;
use thiserror::Error;

/// Everything the screens can surface. `Display` is the inline message.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Network response was not ok ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("Registration was not added: {0}")]
    UnexpectedResponse(String),
}
