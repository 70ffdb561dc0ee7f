//! Error types for pgspec
//!
//! This module provides unified error handling across the workspace:
//! input errors (bad JSON, malformed specs), identifier violations,
//! file IO errors and errors surfaced by the database apply step.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for pgspec
#[derive(Debug, Error)]
pub enum EngineError {
    // ========================================================================
    // Input Errors
    // ========================================================================
    /// Input document is not parseable JSON or not a JSON object
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// A required field is missing or has the wrong shape
    #[error("Malformed spec at '{path}': {message}")]
    MalformedSpec { path: String, message: String },

    // ========================================================================
    // Identifier Errors
    // ========================================================================
    /// An identifier is empty or exceeds the length limit
    #[error("Invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    // ========================================================================
    // Database Errors (apply step)
    // ========================================================================
    /// Could not reach the database server
    #[error("Connection error: {0}")]
    Connection(String),

    /// The server rejected the supplied credentials
    #[error("Authentication error: {0}")]
    Auth(String),

    /// The server failed while executing the script
    #[error("Execution error: {0}")]
    Execution(String),

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(String),
}

impl EngineError {
    /// Create a malformed spec error for the element at `path`
    pub fn malformed(path: impl Into<String>, msg: impl Into<String>) -> Self {
        EngineError::MalformedSpec {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create an invalid identifier error
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was caused by the input document or its file
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidJson(_) | EngineError::FileRead { .. }
        )
    }

    /// Check if this error is a spec violation (shape or identifier rules)
    pub fn is_spec_error(&self) -> bool {
        matches!(
            self,
            EngineError::MalformedSpec { .. } | EngineError::InvalidIdentifier { .. }
        )
    }

    /// Check if this error came from the database apply step
    pub fn is_database_error(&self) -> bool {
        matches!(
            self,
            EngineError::Connection(_) | EngineError::Auth(_) | EngineError::Execution(_)
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            EngineError::Io(_)
                | EngineError::FileRead { .. }
                | EngineError::FileWrite { .. }
                | EngineError::DirectoryCreate { .. }
        )
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::InvalidJson(err.to_string())
    }
}

/// Result type alias using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

// ============================================================================
// Tests
// ============================================================================
