//! Error types for partvis.

use thiserror::Error;

/// The main error type for partvis operations.
#[derive(Error, Debug)]
pub enum PartvisError {
    /// The host rejected a scene command.
    #[error("host rejected '{command}': {message}")]
    HostCommand {
        /// The command the host refused.
        command: String,
        /// The host's reason, verbatim.
        message: String,
    },

    /// A scene node with the given name was not found in the host.
    #[error("node '{0}' not found in host scene")]
    NotFound(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PartvisError {
    /// Builds a [`PartvisError::HostCommand`] from a command name and reason.
    pub fn host_command(command: impl Into<String>, message: impl Into<String>) -> Self {
        Self::HostCommand {
            command: command.into(),
            message: message.into(),
        }
    }
}

/// A specialized Result type for partvis operations.
pub type Result<T> = std::result::Result<T, PartvisError>;
