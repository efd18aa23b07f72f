//! Error types for kgwire.

use thiserror::Error;

/// Main error type for all kgwire operations.
#[derive(Debug, Error)]
pub enum KgError {
    /// I/O error from the underlying transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Protocol error (truncated payload, malformed frame, etc.).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// No decoder exists for the given (type, class, command) triple.
    #[error("Unknown message: type {message_type:#04X}, class {class_id}, command {command_id}")]
    UnknownMessage {
        message_type: u8,
        class_id: u8,
        command_id: u8,
    },

    /// A registered handler failed during dispatch.
    #[error("Handler error: {0}")]
    Handler(String),
}

/// Result type alias using KgError.
pub type Result<T> = std::result::Result<T, KgError>;
