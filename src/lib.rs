//! Railway: pure functional containers for optional, fallible, and two-sided values
//!
//! Railway provides three immutable tagged unions and the operators that
//! compose them without manual null checks or branching on error codes:
//!
//! # Core Concepts
//!
//! - **Maybe**: a value that is `Present` or `Absent`
//! - **Outcome**: a `Success` value or a `Failure` carrying a described error
//! - **Either**: exactly one of two independent types, `Left` or `Right`
//! - **Describe**: the error capability an `Outcome` failure must provide
//!
//! Once a chain enters its negative alternative (`Absent` or `Failure`), every
//! subsequent `map`/`bind` short-circuits: user code is not invoked again and
//! the negative state reaches the caller unchanged.
//!
//! Operators exist both as methods and as free functions in [`ops`]; the
//! [`prelude`] re-exports everything.
//!
//! # Example
//!
//! ```rust
//! use railway::core::{Either, Fault, Outcome};
//!
//! fn lookup_age(name: &str) -> Either<Fault, u32> {
//!     match name {
//!         "ada" => Either::right(25),
//!         _ => Either::left(Fault::new("unknown user")),
//!     }
//! }
//!
//! let adult_years = lookup_age("ada").to_outcome().map(|age| age - 18);
//! assert_eq!(adult_years, Outcome::success(7));
//!
//! let missing = lookup_age("bob").to_outcome().map(|age| age - 18);
//! assert!(missing.is_err());
//! ```

pub mod core;
pub mod ops;
pub mod prelude;

// Re-export commonly used types
pub use crate::core::{AccessError, Describe, Either, Fault, Maybe, Outcome, Variant};
