//! Uniform naming of the populated alternative.
//!
//! Every container in this crate is a closed set of alternatives, exactly one
//! of which is populated for the lifetime of the value. `Variant` exposes which
//! one without matching, for diagnostics and checked access.

/// Trait implemented by every container in the crate.
///
/// All methods are pure and always defined.
///
/// # Example
///
/// ```rust
/// use railway::core::{Either, Maybe, Outcome, Variant};
///
/// assert_eq!(Maybe::present(1).variant(), "Present");
/// assert!(Maybe::<i32>::absent().is_negative());
///
/// let outcome: Outcome<i32> = Outcome::success(7);
/// assert!(!outcome.is_negative());
///
/// let choice: Either<i32, &str> = Either::left(3);
/// assert_eq!(choice.variant(), "Left");
/// assert!(!choice.is_negative());
/// ```
pub trait Variant {
    /// Name of the populated alternative.
    fn variant(&self) -> &'static str;

    /// Check if the negative alternative is populated.
    ///
    /// A negative alternative makes chained transformations short-circuit.
    /// Containers without a privileged side never report one.
    ///
    /// Default implementation returns `false`.
    fn is_negative(&self) -> bool {
        false
    }
}
