use thiserror::Error;

use crate::math::error::MathError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),
}

pub type Result<T> = std::result::Result<T, Error>;
