//! Error types for the Logo interpreter.

use thiserror::Error;

/// Result type alias used throughout the interpreter.
pub type Result<T> = std::result::Result<T, LogoError>;

/// The two error kinds the interpreter ever raises: one from the
/// tokenizer, one from everything downstream of it (variable lookup,
/// procedure application, arity checks, primitive failures).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogoError {
    /// Raised by the tokenizer on unmatched brackets or other malformed
    /// input that prevents a line from being split into tokens.
    #[error("{0}")]
    Syntax(String),

    /// Raised by the evaluator, the environment, or a primitive. Carries
    /// a message that, where relevant, already has a buffer-with-cursor
    /// rendering appended by the caller.
    #[error("{0}")]
    Interpreter(String),
}

impl LogoError {
    /// Build an interpreter error from a message.
    pub fn interpreter(message: impl Into<String>) -> Self {
        Self::Interpreter(message.into())
    }

    /// Build a syntax error from a message.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }
}
