//! Unified error handling for KESTREL
//!
//! This module provides a centralized error type for the entire KESTREL
//! workspace, ensuring consistent error handling across all components.

use thiserror::Error;

/// Main error type for KESTREL operations
#[derive(Debug, Error)]
pub enum KestrelError {
    /// I/O related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Communication layer errors
    #[error("Communication error: {0}")]
    Communication(String),

    /// Transport adapter errors
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid input/argument errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic internal errors (use sparingly)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Catch-all for other error types
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Results using KestrelError
pub type KestrelResult<T> = Result<T, KestrelError>;

// Convert from anyhow::Error
impl From<anyhow::Error> for KestrelError {
    fn from(err: anyhow::Error) -> Self {
        KestrelError::Other(err.to_string())
    }
}

// Convert from &str for convenient error creation
impl From<&str> for KestrelError {
    fn from(msg: &str) -> Self {
        KestrelError::Other(msg.to_string())
    }
}

// Convert from String for convenient error creation
impl From<String> for KestrelError {
    fn from(msg: String) -> Self {
        KestrelError::Other(msg)
    }
}

// Helper methods
impl KestrelError {
    /// Create a communication error
    pub fn communication<S: Into<String>>(msg: S) -> Self {
        KestrelError::Communication(msg.into())
    }

    /// Create a transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        KestrelError::Transport(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        KestrelError::InvalidInput(msg.into())
    }

    /// Check if this is a communication error
    pub fn is_communication(&self) -> bool {
        matches!(self, KestrelError::Communication(_))
    }

    /// Check if this is a transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, KestrelError::Transport(_))
    }
}
