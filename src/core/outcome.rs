//! Result container: a success value or a described failure.
//!
//! Once an `Outcome` has failed, the chain is poisoned: the original error
//! propagates unchanged through every subsequent `map`/`bind`, and no user
//! code runs until the caller extracts the error.

use super::access::AccessError;
use super::describe::{Describe, Fault};
use super::either::Either;
use super::variant::Variant;
use serde::{Deserialize, Serialize};

/// Either a success value of type `T` or a failure carrying an error `E`.
///
/// `E` must implement [`Describe`]; it defaults to [`Fault`].
///
/// # Example
///
/// ```rust
/// use railway::core::{Fault, Outcome};
///
/// fn parse_age(raw: &str) -> Outcome<u32> {
///     match raw.parse() {
///         Ok(age) => Outcome::success(age),
///         Err(_) => Outcome::failure(Fault::new("not a number")),
///     }
/// }
///
/// fn check_adult(age: u32) -> Outcome<u32> {
///     if age >= 18 {
///         Outcome::success(age)
///     } else {
///         Outcome::failure(Fault::new("too young"))
///     }
/// }
///
/// let years_of_adulthood = parse_age("25").bind(check_adult).map(|age| age - 18);
/// assert_eq!(years_of_adulthood, Outcome::success(7));
///
/// let rejected = parse_age("12").bind(check_adult).map(|age| age - 18);
/// assert_eq!(rejected, Outcome::failure(Fault::new("too young")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<T, E: Describe = Fault> {
    /// The computation succeeded.
    Success(T),
    /// The computation failed with a described error.
    Failure(E),
}

impl<T, E: Describe> Outcome<T, E> {
    /// Wrap a successful value.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wrap an error.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Check if the outcome succeeded (pure).
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Check if the outcome failed (pure).
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Return the success value without checking.
    ///
    /// On a failure this silently returns `T::default()`. Check
    /// [`is_ok`](Self::is_ok) first or use [`checked_get`](Self::checked_get).
    pub fn get(self) -> T
    where
        T: Default,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => T::default(),
        }
    }

    /// Return the error without checking.
    ///
    /// On a success this silently returns `E::default()`; for [`Fault`] that
    /// is a fault with an empty message.
    ///
    /// ```rust
    /// use railway::core::{Describe, Fault, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
    /// assert_eq!(failed.get_err().message(), "bad");
    ///
    /// let succeeded: Outcome<i32> = Outcome::success(1);
    /// assert_eq!(succeeded.get_err(), Fault::default());
    /// ```
    pub fn get_err(self) -> E
    where
        E: Default,
    {
        match self {
            Outcome::Success(_) => E::default(),
            Outcome::Failure(error) => error,
        }
    }

    /// Return the success value, or an error naming the populated variant.
    pub fn checked_get(self) -> Result<T, AccessError> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(AccessError::wrong_variant("Success", "Failure")),
        }
    }

    /// Return the error, or an error naming the populated variant.
    pub fn checked_get_err(self) -> Result<E, AccessError> {
        match self {
            Outcome::Success(_) => Err(AccessError::wrong_variant("Failure", "Success")),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Chain a computation that may itself fail.
    ///
    /// On success, `f`'s outcome is returned as is. On failure, the existing
    /// error is re-wrapped as a failure of the new success type and `f` is
    /// never invoked.
    ///
    /// ```rust
    /// use railway::core::{Fault, Outcome};
    ///
    /// let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
    /// let chained = failed.bind(|x| Outcome::success(x.to_string()));
    /// assert_eq!(chained, Outcome::failure(Fault::new("bad")));
    /// ```
    pub fn bind<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the success value, carrying a failure through unchanged.
    ///
    /// ```rust
    /// use railway::core::Outcome;
    ///
    /// let age: Outcome<u32> = Outcome::success(25);
    /// assert_eq!(age.map(|age| age - 18), Outcome::success(7));
    /// ```
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a choice container: failure on the left, success on the right.
    ///
    /// This is the inverse of [`Either::to_outcome`].
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Outcome::Success(value) => Either::Right(value),
            Outcome::Failure(error) => Either::Left(error),
        }
    }
}

impl<T, E: Describe> Variant for Outcome<T, E> {
    fn variant(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "Success",
            Outcome::Failure(_) => "Failure",
        }
    }

    fn is_negative(&self) -> bool {
        self.is_err()
    }
}

impl<T, E: Describe> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E: Describe> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    enum LookupError {
        #[error("user {0} not found")]
        NotFound(u32),
        #[error("user {0} is locked")]
        Locked(u32),
    }

    fn find_user(id: u32) -> Outcome<String, LookupError> {
        match id {
            1 => Outcome::success("ada".to_string()),
            2 => Outcome::failure(LookupError::Locked(2)),
            _ => Outcome::failure(LookupError::NotFound(id)),
        }
    }

    #[test]
    fn success_holds_value() {
        let outcome: Outcome<i32> = Outcome::success(25);
        assert!(outcome.is_ok());
        assert!(!outcome.is_err());
        assert_eq!(outcome.get(), 25);
    }

    #[test]
    fn failure_holds_error() {
        let outcome: Outcome<i32> = Outcome::failure(Fault::new("bad"));
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
        assert_eq!(outcome.get_err().message(), "bad");
    }

    #[test]
    fn map_subtracts_age() {
        let outcome: Outcome<i32> = Outcome::success(25);
        assert_eq!(outcome.map(|age| age - 18), Outcome::success(7));
    }

    #[test]
    fn bind_skips_function_on_failure() {
        let calls = Cell::new(0);
        let outcome: Outcome<i32> = Outcome::failure(Fault::new("bad"));

        let result = outcome.bind(|x| {
            calls.set(calls.get() + 1);
            Outcome::success(x * 2)
        });

        assert_eq!(result, Outcome::failure(Fault::new("bad")));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_propagates_new_failure() {
        let result = find_user(1).bind(|_| find_user(2)).map(|name| name.len());
        assert_eq!(result, Outcome::failure(LookupError::Locked(2)));
    }

    #[test]
    fn first_failure_is_preserved_through_chain() {
        let calls = Cell::new(0);
        let result = find_user(9)
            .map(|name| {
                calls.set(calls.get() + 1);
                name
            })
            .bind(|_| find_user(2))
            .map(|name| {
                calls.set(calls.get() + 1);
                name.len()
            });

        assert_eq!(result, Outcome::failure(LookupError::NotFound(9)));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn unchecked_accessors_yield_defaults_on_wrong_variant() {
        let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
        assert_eq!(failed.get(), 0);

        let succeeded: Outcome<i32> = Outcome::success(3);
        assert_eq!(succeeded.get_err(), Fault::default());
    }

    #[test]
    fn checked_accessors_report_wrong_variant() {
        let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
        assert_eq!(
            failed.clone().checked_get(),
            Err(AccessError::WrongVariant {
                expected: "Success",
                found: "Failure",
            })
        );
        assert_eq!(failed.checked_get_err(), Ok(Fault::new("bad")));

        let succeeded: Outcome<i32> = Outcome::success(3);
        assert_eq!(succeeded.clone().checked_get(), Ok(3));
        assert_eq!(
            succeeded.checked_get_err(),
            Err(AccessError::WrongVariant {
                expected: "Failure",
                found: "Success",
            })
        );
    }

    #[test]
    fn into_either_places_failure_on_left() {
        let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
        assert_eq!(failed.into_either(), Either::left(Fault::new("bad")));

        let succeeded: Outcome<i32> = Outcome::success(3);
        assert_eq!(succeeded.into_either(), Either::right(3));
    }

    #[test]
    fn converts_to_and_from_std_result() {
        let outcome: Outcome<u8, LookupError> = Ok(4).into();
        assert_eq!(outcome, Outcome::success(4));

        let result: Result<u8, LookupError> = Outcome::failure(LookupError::NotFound(7)).into();
        assert_eq!(result, Err(LookupError::NotFound(7)));
    }

    #[test]
    fn composes_with_question_mark() {
        fn lookup_length(id: u32) -> Result<usize, LookupError> {
            let name: Result<String, LookupError> = find_user(id).into();
            Ok(name?.len())
        }

        assert_eq!(lookup_length(1), Ok(3));
        assert_eq!(lookup_length(5), Err(LookupError::NotFound(5)));
    }

    #[test]
    fn variant_names_alternative() {
        let failed: Outcome<i32> = Outcome::failure(Fault::new("bad"));
        assert_eq!(failed.variant(), "Failure");
        assert!(failed.is_negative());

        let succeeded: Outcome<i32> = Outcome::success(1);
        assert_eq!(succeeded.variant(), "Success");
        assert!(!succeeded.is_negative());
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcomes: [Outcome<i32>; 2] =
            [Outcome::success(5), Outcome::failure(Fault::new("bad"))];
        for outcome in outcomes {
            let json = serde_json::to_string(&outcome).unwrap();
            let deserialized: Outcome<i32> = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, deserialized);
        }
    }
}
