//! Free-function operator surface.
//!
//! Every constructor and type-changing operator is also available as a free
//! generic function, mirroring the method on the container it acts on. The
//! two styles are interchangeable: each function delegates to the method.
//!
//! # Example
//!
//! ```rust
//! use railway::ops::{bind_outcome, failure, fold, map_outcome, right, success, swap};
//! use railway::core::{Either, Fault, Outcome};
//!
//! let age: Outcome<i32> = success(25);
//! assert_eq!(map_outcome(age, |age| age - 18), success(7));
//!
//! let failed: Outcome<i32> = failure(Fault::new("bad"));
//! let chained = bind_outcome(failed, |x| success::<_, Fault>(x + 1));
//! assert_eq!(chained, failure(Fault::new("bad")));
//!
//! let choice: Either<String, i32> = right(100);
//! assert_eq!(fold(swap(choice), |_: i32| "num", |_: String| "str"), "num");
//! ```

use crate::core::{Describe, Either, Maybe, Outcome};

/// Wrap a value as present.
pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::present(value)
}

/// Create an absent instance of an explicitly named element type.
pub fn absent<T>() -> Maybe<T> {
    Maybe::absent()
}

/// Wrap a successful value.
pub fn success<T, E: Describe>(value: T) -> Outcome<T, E> {
    Outcome::success(value)
}

/// Wrap an error.
pub fn failure<T, E: Describe>(error: E) -> Outcome<T, E> {
    Outcome::failure(error)
}

/// Populate the left side of a choice.
pub fn left<A, B>(value: A) -> Either<A, B> {
    Either::left(value)
}

/// Populate the right side of a choice.
pub fn right<A, B>(value: B) -> Either<A, B> {
    Either::right(value)
}

/// See [`Maybe::map`].
pub fn map_maybe<T, U, F>(maybe: Maybe<T>, f: F) -> Maybe<U>
where
    F: FnOnce(T) -> U,
{
    maybe.map(f)
}

/// See [`Maybe::bind`].
pub fn bind_maybe<T, U, F>(maybe: Maybe<T>, f: F) -> Maybe<U>
where
    F: FnOnce(T) -> Maybe<U>,
{
    maybe.bind(f)
}

/// See [`Outcome::map`].
pub fn map_outcome<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    E: Describe,
    F: FnOnce(T) -> U,
{
    outcome.map(f)
}

/// See [`Outcome::bind`].
pub fn bind_outcome<T, U, E, F>(outcome: Outcome<T, E>, f: F) -> Outcome<U, E>
where
    E: Describe,
    F: FnOnce(T) -> Outcome<U, E>,
{
    outcome.bind(f)
}

/// See [`Either::map_left`].
pub fn map_left<A, B, C, F>(either: Either<A, B>, f: F) -> Either<C, B>
where
    F: FnOnce(A) -> C,
{
    either.map_left(f)
}

/// See [`Either::map_right`].
pub fn map_right<A, B, C, F>(either: Either<A, B>, f: F) -> Either<A, C>
where
    F: FnOnce(B) -> C,
{
    either.map_right(f)
}

/// See [`Either::fold`].
pub fn fold<A, B, R, L, G>(either: Either<A, B>, on_left: L, on_right: G) -> R
where
    L: FnOnce(A) -> R,
    G: FnOnce(B) -> R,
{
    either.fold(on_left, on_right)
}

/// See [`Either::swap`].
pub fn swap<A, B>(either: Either<A, B>) -> Either<B, A> {
    either.swap()
}

/// See [`Either::to_outcome`].
pub fn to_outcome<E: Describe, T>(either: Either<E, T>) -> Outcome<T, E> {
    either.to_outcome()
}
