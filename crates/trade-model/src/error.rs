use thiserror::Error;

use crate::Code;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid code: {0:?}")]
    InvalidCode(String),
    #[error("empty name for code {0}")]
    EmptyName(Code),
}

pub type Result<T> = std::result::Result<T, ModelError>;
