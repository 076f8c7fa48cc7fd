use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Unsupported modality: {0}")]
    UnsupportedModality(String),
}

pub type Result<T> = std::result::Result<T, Error>;
