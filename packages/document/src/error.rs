use thiserror::Error;

pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Error, Debug)]
pub enum SyntaxError {
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}
