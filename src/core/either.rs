//! Choice container: exactly one of two independently typed alternatives.
//!
//! Unlike [`Maybe`](super::Maybe) and [`Outcome`], neither side of an `Either`
//! is privileged. When the left side is an error, [`Either::to_outcome`]
//! bridges into the result container.

use super::access::AccessError;
use super::describe::Describe;
use super::outcome::Outcome;
use super::variant::Variant;
use serde::{Deserialize, Serialize};

/// A value that is either a `Left(A)` or a `Right(B)`.
///
/// # Example
///
/// ```rust
/// use railway::core::Either;
///
/// fn classify(raw: &str) -> Either<String, i64> {
///     match raw.parse() {
///         Ok(number) => Either::right(number),
///         Err(_) => Either::left(raw.to_string()),
///     }
/// }
///
/// let described = classify("42")
///     .map_right(|n| n * 2)
///     .fold(|text| format!("text: {text}"), |n| format!("number: {n}"));
/// assert_eq!(described, "number: 84");
///
/// let described = classify("hello")
///     .map_left(|text| text.to_uppercase())
///     .fold(|text| format!("text: {text}"), |n| format!("number: {n}"));
/// assert_eq!(described, "text: HELLO");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<A, B> {
    /// The left alternative.
    Left(A),
    /// The right alternative.
    Right(B),
}

impl<A, B> Either<A, B> {
    /// Populate the left side.
    pub fn left(value: A) -> Self {
        Either::Left(value)
    }

    /// Populate the right side.
    pub fn right(value: B) -> Self {
        Either::Right(value)
    }

    /// Check if the left side is populated (pure).
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Check if the right side is populated (pure).
    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Return the left payload without checking.
    ///
    /// On a right value this silently returns `A::default()`.
    pub fn get_left(self) -> A
    where
        A: Default,
    {
        match self {
            Either::Left(value) => value,
            Either::Right(_) => A::default(),
        }
    }

    /// Return the right payload without checking.
    ///
    /// On a left value this silently returns `B::default()`.
    pub fn get_right(self) -> B
    where
        B: Default,
    {
        match self {
            Either::Left(_) => B::default(),
            Either::Right(value) => value,
        }
    }

    /// Return the left payload, or an error naming the populated side.
    pub fn checked_left(self) -> Result<A, AccessError> {
        match self {
            Either::Left(value) => Ok(value),
            Either::Right(_) => Err(AccessError::wrong_variant("Left", "Right")),
        }
    }

    /// Return the right payload, or an error naming the populated side.
    pub fn checked_right(self) -> Result<B, AccessError> {
        match self {
            Either::Left(_) => Err(AccessError::wrong_variant("Right", "Left")),
            Either::Right(value) => Ok(value),
        }
    }

    /// Transform the right side; a left value passes through retyped.
    pub fn map_right<C, F>(self, f: F) -> Either<A, C>
    where
        F: FnOnce(B) -> C,
    {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    /// Transform the left side; a right value passes through retyped.
    pub fn map_left<C, F>(self, f: F) -> Either<C, B>
    where
        F: FnOnce(A) -> C,
    {
        match self {
            Either::Left(value) => Either::Left(f(value)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Eliminate the choice into a single value.
    ///
    /// Exactly one of `on_left` and `on_right` is invoked, depending on
    /// which side is populated.
    ///
    /// ```rust
    /// use railway::core::Either;
    ///
    /// let choice: Either<&str, i32> = Either::right(100);
    /// assert_eq!(choice.fold(|_| "str", |_| "num"), "num");
    /// ```
    pub fn fold<R, L, G>(self, on_left: L, on_right: G) -> R
    where
        L: FnOnce(A) -> R,
        G: FnOnce(B) -> R,
    {
        match self {
            Either::Left(value) => on_left(value),
            Either::Right(value) => on_right(value),
        }
    }

    /// Exchange the sides without touching the payload.
    ///
    /// `Left(a)` becomes `Right(a)` and `Right(b)` becomes `Left(b)`.
    ///
    /// ```rust
    /// use railway::core::Either;
    ///
    /// let choice: Either<String, i32> = Either::right(100);
    /// let swapped = choice.swap();
    /// assert_eq!(swapped, Either::left(100));
    /// assert_eq!(swapped.fold(|_: i32| "num", |_: String| "str"), "num");
    /// ```
    pub fn swap(self) -> Either<B, A> {
        match self {
            Either::Left(value) => Either::Right(value),
            Either::Right(value) => Either::Left(value),
        }
    }

    /// Borrow both sides, keeping the populated one.
    pub fn as_ref(&self) -> Either<&A, &B> {
        match self {
            Either::Left(value) => Either::Left(value),
            Either::Right(value) => Either::Right(value),
        }
    }
}

impl<E: Describe, T> Either<E, T> {
    /// Bridge into the result container.
    ///
    /// `Left(error)` becomes `Failure(error)` and `Right(value)` becomes
    /// `Success(value)`; the payload is carried over untouched.
    ///
    /// ```rust
    /// use railway::core::{Either, Fault, Outcome};
    ///
    /// let failed: Either<Fault, u8> = Either::left(Fault::new("bad"));
    /// assert_eq!(failed.to_outcome(), Outcome::failure(Fault::new("bad")));
    ///
    /// let succeeded: Either<Fault, u8> = Either::right(3);
    /// assert_eq!(succeeded.to_outcome(), Outcome::success(3));
    /// ```
    pub fn to_outcome(self) -> Outcome<T, E> {
        match self {
            Either::Left(error) => Outcome::Failure(error),
            Either::Right(value) => Outcome::Success(value),
        }
    }
}

impl<A, B> Variant for Either<A, B> {
    fn variant(&self) -> &'static str {
        match self {
            Either::Left(_) => "Left",
            Either::Right(_) => "Right",
        }
    }
}

impl<E: Describe, T> From<Either<E, T>> for Outcome<T, E> {
    fn from(either: Either<E, T>) -> Self {
        either.to_outcome()
    }
}
