//! Application error types

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // Resolution Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Command not found on the search path or as a direct path: {command}")]
    CommandNotFound { command: String },

    // ─────────────────────────────────────────────────────────────
    // Launch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Malformed argument string: {message}")]
    Args { message: String },

    #[error("Failed to spawn process: {reason}")]
    Spawn { reason: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn command_not_found(command: impl Into<String>) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    pub fn args(message: impl Into<String>) -> Self {
        Self::Args {
            message: message.into(),
        }
    }

    pub fn spawn(reason: impl Into<String>) -> Self {
        Self::Spawn {
            reason: reason.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error stems from user configuration rather than the
    /// environment. The host surfaces these once and falls back to its own
    /// default handling; there is nothing to retry.
    pub fn is_user_config(&self) -> bool {
        matches!(
            self,
            Error::CommandNotFound { .. } | Error::Args { .. } | Error::Config { .. }
        )
    }
}
