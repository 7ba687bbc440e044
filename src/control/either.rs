//! Either type - a value that can be one of two types.
//!
//! `Either<L, R>` is either `Left(L)` or `Right(R)`. By convention
//! `Left` carries failure and `Right` carries success, which makes
//! `Either` the simplest fixture for the error capability: `fmap`,
//! `flat_map` and `apply` are right-biased and a `Left` propagates
//! through them untouched until intercepted.
//!
//! # Examples
//!
//! ```rust
//! use lambent::control::Either;
//! use lambent::typeclass::{Functor, Monad};
//!
//! let success: Either<String, i32> = Either::Right(20);
//! let result = success
//!     .fmap(|n| n + 1)
//!     .flat_map(|n| if n > 10 { Either::Right(n) } else { Either::Left("too small".to_string()) });
//! assert_eq!(result, Either::Right(21));
//! ```

use crate::typeclass::{Alternative, Applicative, Functor, Monad, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// `Left` conventionally represents failure or the first alternative,
/// `Right` success or the second alternative. All capability instances
/// are right-biased.
///
/// # Examples
///
/// ```rust
/// use lambent::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert!(success.is_right());
/// assert!(failure.is_left());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into `Option<L>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Applies a function to the left value, leaving a `Right`
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value, leaving a `Left`
    /// untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both cases into a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let collapsed = value.fold(|n| n.to_string(), |s| s);
    /// assert_eq!(collapsed, "hello");
    /// ```
    #[inline]
    pub fn fold<T, FL, FR>(self, on_left: FL, on_right: FR) -> T
    where
        FL: FnOnce(L) -> T,
        FR: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Swaps left and right.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// Converts into a `Result`, mapping `Right` to `Ok` and `Left` to
    /// `Err`.
    #[inline]
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(error) => Err(error),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

// =============================================================================
// Capability Implementations (right-biased)
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B + 'static,
        B: 'static,
    {
        self.map_right(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _)
            | (_, Either::Left(error), _)
            | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }
}

impl<L: Clone + Default, R> Alternative for Either<L, R> {
    /// The failure identity is a `Left` carrying the default payload.
    #[inline]
    fn empty<A>() -> Either<L, A>
    where
        A: 'static,
    {
        Either::Left(L::default())
    }

    /// First `Right` wins; a `Left` falls through to the alternative.
    #[inline]
    fn alt(self, alternative: Self) -> Self {
        match self {
            Self::Left(_) => alternative,
            Self::Right(value) => Self::Right(value),
        }
    }

    #[inline]
    fn optional(self) -> Either<L, Option<R>>
    where
        R: 'static,
    {
        match self {
            Self::Left(_) => Either::Right(None),
            Self::Right(value) => Either::Right(Some(value)),
        }
    }
}
