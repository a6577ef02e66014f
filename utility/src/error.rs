use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] url::ParseError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    /// the gateway answered 404 for a function lookup
    #[error("No such function: {0}")]
    NotFound(String),
    #[error("unauthorized access to {0}, check the credentials embedded in the gateway URL")]
    Unauthorized(String),
    #[error("Server returned unexpected status code {status} and body {body}")]
    UnexpectedStatus { status: u16, body: String },
    /// the target gateway can't receive functions from this tool
    #[error("Invalid target cluster configuration: {0}")]
    Compatibility(String),
    #[error("{0}")]
    Expired(String),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, crate::Error>;
