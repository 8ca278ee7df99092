//! # Hero Error Types
//!
//! All errors that can occur while setting up the hero sequence. The
//! running choreography itself is infallible: worst case is a visually
//! incomplete animation, never a failure.

use thiserror::Error;

/// Errors that can occur in the hero system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeroError {
    /// Configuration file could not be parsed.
    #[error("configuration parse failed: {0}")]
    ConfigParse(String),

    /// Configuration values failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
