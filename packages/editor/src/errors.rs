//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("syntax error: {0}")]
    Syntax(#[from] chisel_document::SyntaxError),

    #[error("unknown action: {0}")]
    UnknownAction(String),
}
