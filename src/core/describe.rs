//! Error capability carried by failed outcomes.
//!
//! An outcome's error side can be any value that can say what went wrong.
//! The capability is deliberately small: a single message accessor.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Capability required of every error stored in an [`Outcome`](super::Outcome).
///
/// Every `std::error::Error` implements `Describe` through its `Display`
/// output, so error types derived with `thiserror` can be used directly.
///
/// # Example
///
/// ```rust
/// use railway::core::Describe;
/// use thiserror::Error;
///
/// #[derive(Debug, Error)]
/// enum SignupError {
///     #[error("age {0} is below the minimum")]
///     TooYoung(u32),
/// }
///
/// let error = SignupError::TooYoung(12);
/// assert_eq!(error.message(), "age 12 is below the minimum");
/// ```
pub trait Describe: Debug {
    /// Human-readable description of what went wrong.
    fn message(&self) -> String;
}

impl<E: std::error::Error + ?Sized> Describe for E {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// Stock error value: a plain descriptive message.
///
/// `Fault` is the default error type of [`Outcome`](super::Outcome). Its
/// `Default` value carries an empty message, which is what the unchecked
/// [`Outcome::get_err`](super::Outcome::get_err) accessor returns for a
/// successful outcome.
///
/// # Example
///
/// ```rust
/// use railway::core::{Describe, Fault};
///
/// let fault = Fault::new("bad");
/// assert_eq!(fault.message(), "bad");
/// assert_eq!(fault, Fault::from("bad"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct Fault {
    message: String,
}

impl Fault {
    /// Create a fault from anything convertible into a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("disk {device} is full")]
    struct DiskFull {
        device: String,
    }

    #[test]
    fn fault_describes_its_message() {
        assert_eq!(Fault::new("bad").message(), "bad");
        assert_eq!(Fault::from(String::from("worse")).message(), "worse");
    }

    #[test]
    fn default_fault_has_empty_message() {
        assert_eq!(Fault::default().message(), "");
    }

    #[test]
    fn thiserror_types_describe_through_display() {
        let error = DiskFull {
            device: "sda".to_string(),
        };
        assert_eq!(error.message(), "disk sda is full");
    }

    #[test]
    fn trait_objects_describe() {
        let boxed: Box<dyn std::error::Error> = Box::new(Fault::new("boxed"));
        assert_eq!(boxed.as_ref().message(), "boxed");
    }

    #[test]
    fn fault_serializes_correctly() {
        let fault = Fault::new("bad");
        let json = serde_json::to_string(&fault).unwrap();
        let deserialized: Fault = serde_json::from_str(&json).unwrap();
        assert_eq!(fault, deserialized);
    }
}
