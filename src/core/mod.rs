//! Core container types and their operators.
//!
//! This module contains the pure functional core of the crate:
//! - `Maybe` for values that may be absent
//! - `Outcome` for computations that may fail with a described error
//! - `Either` for a choice between two independent types
//! - The `Describe` error capability and the stock `Fault` error
//!
//! Every value is immutable and every operator is a pure function from one
//! container to a new one.

mod access;
mod describe;
mod either;
mod maybe;
mod outcome;
mod variant;

pub use access::AccessError;
pub use describe::{Describe, Fault};
pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use variant::Variant;
