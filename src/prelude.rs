//! Glob-importable re-exports of the container types and free functions.
//!
//! ```rust
//! use railway::prelude::*;
//!
//! let total = map_maybe(present(2), |x| x * 21).unwrap_or(0);
//! assert_eq!(total, 42);
//! ```

pub use crate::core::{AccessError, Describe, Either, Fault, Maybe, Outcome, Variant};
pub use crate::ops::{
    absent, bind_maybe, bind_outcome, failure, fold, left, map_left, map_maybe, map_outcome,
    map_right, present, right, success, swap, to_outcome,
};
