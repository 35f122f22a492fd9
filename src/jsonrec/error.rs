use crate::operation::Flag;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecError {
    #[error("-{0} flag has to be specified")]
    MissingFlag(Flag),

    #[error("Operation {0} not allowed!")]
    UnknownOperation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecError>;
