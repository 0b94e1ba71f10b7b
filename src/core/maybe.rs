//! Optional container: a value that may or may not be present.
//!
//! `Maybe` is an immutable tagged union. Transformations consume the value and
//! return a new one; once `Absent`, every subsequent `map`/`bind` stays
//! `Absent` without invoking user code.

use super::access::AccessError;
use super::variant::Variant;
use serde::{Deserialize, Serialize};

/// A value of type `T` that is either present or absent.
///
/// # Example
///
/// ```rust
/// use railway::core::Maybe;
///
/// let port = Maybe::present("8080")
///     .bind(|raw| Maybe::from(raw.parse::<u16>().ok()))
///     .map(|port| port + 1);
///
/// assert_eq!(port, Maybe::present(8081));
/// assert_eq!(Maybe::<u16>::absent().unwrap_or(80), 80);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// A value is held.
    Present(T),
    /// No value is held.
    Absent,
}

impl<T> Maybe<T> {
    /// Wrap a value as present.
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Create an empty instance.
    ///
    /// The element type has to be named explicitly since there is no value
    /// to infer it from.
    ///
    /// ```rust
    /// use railway::core::Maybe;
    ///
    /// let nothing = Maybe::<String>::absent();
    /// assert!(nothing.is_absent());
    /// ```
    pub fn absent() -> Self {
        Maybe::Absent
    }

    /// Check if a value is held (pure).
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Check if no value is held (pure).
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Return the held value, or `default` when absent. Never fails.
    ///
    /// ```rust
    /// use railway::core::Maybe;
    ///
    /// assert_eq!(Maybe::present(3).unwrap_or(9), 3);
    /// assert_eq!(Maybe::absent().unwrap_or(9), 9);
    /// ```
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => default,
        }
    }

    /// Return the held value without checking.
    ///
    /// Call [`is_present`](Self::is_present) first: on an absent instance this
    /// silently returns `T::default()`, which is indistinguishable from a real
    /// zero value. Use [`checked_get`](Self::checked_get) when the variant is
    /// not already known.
    ///
    /// ```rust
    /// use railway::core::Maybe;
    ///
    /// assert_eq!(Maybe::present(5).get(), 5);
    /// assert_eq!(Maybe::<i32>::absent().get(), 0);
    /// ```
    pub fn get(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => T::default(),
        }
    }

    /// Return the held value, or an error naming the populated variant.
    ///
    /// ```rust
    /// use railway::core::{AccessError, Maybe};
    ///
    /// assert_eq!(Maybe::present(5).checked_get(), Ok(5));
    /// assert!(matches!(
    ///     Maybe::<i32>::absent().checked_get(),
    ///     Err(AccessError::WrongVariant { found: "Absent", .. })
    /// ));
    /// ```
    pub fn checked_get(self) -> Result<T, AccessError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(AccessError::wrong_variant("Present", "Absent")),
        }
    }

    /// Transform the held value.
    ///
    /// When absent, `f` is never invoked and an absent instance of the new
    /// type is returned.
    ///
    /// ```rust
    /// use railway::core::Maybe;
    ///
    /// assert_eq!(Maybe::present(2).map(|x| x * 10), Maybe::present(20));
    /// assert_eq!(Maybe::<i32>::absent().map(|x| x * 10), Maybe::absent());
    /// ```
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Chain a computation that may itself produce absence.
    ///
    /// When present, `f`'s result is returned directly. When absent, the
    /// chain short-circuits without invoking `f`.
    ///
    /// ```rust
    /// use railway::core::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::present(x / 2) } else { Maybe::absent() }
    /// }
    ///
    /// assert_eq!(Maybe::present(8).bind(half).bind(half), Maybe::present(2));
    /// assert_eq!(Maybe::present(6).bind(half).bind(half), Maybe::absent());
    /// ```
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Present(value) => f(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Borrow the held value, keeping the variant.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> Variant for Maybe<T> {
    fn variant(&self) -> &'static str {
        match self {
            Maybe::Present(_) => "Present",
            Maybe::Absent => "Absent",
        }
    }

    fn is_negative(&self) -> bool {
        self.is_absent()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}
