//! Errors raised by the checked accessors.

use thiserror::Error;

/// Errors that can occur when reading a payload through a checked accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("Expected a {expected} value but the container holds {found}")]
    WrongVariant {
        expected: &'static str,
        found: &'static str,
    },
}

impl AccessError {
    pub(crate) fn wrong_variant(expected: &'static str, found: &'static str) -> Self {
        Self::WrongVariant { expected, found }
    }
}
