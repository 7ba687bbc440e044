//! Alternative type class - monoid structure on applicative functors.
//!
//! This module provides the `Alternative` trait (MonadPlus, when the
//! implementor is also a `Monad`): a failure identity (`empty`) and a
//! choice operator (`alt`) where the first success wins.
//!
//! # Laws
//!
//! All `Alternative` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! empty.alt(x) == x
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! x.alt(empty) == x
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! (x.alt(y)).alt(z) == x.alt(y.alt(z))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::Alternative;
//!
//! let first: Option<i32> = None;
//! let second: Option<i32> = Some(42);
//! assert_eq!(first.alt(second), Some(42));
//! ```

use super::applicative::Applicative;

/// A type class for applicative functors with a monoid structure:
/// a failure identity and an associative choice operator.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::Alternative;
///
/// let empty: Option<i32> = <Option<()>>::empty();
/// assert_eq!(empty, None);
/// assert_eq!(empty.alt(Some(1)), Some(1));
/// ```
pub trait Alternative: Applicative {
    /// Returns the identity element for `alt`.
    ///
    /// This represents a failed or empty computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Alternative;
    ///
    /// let empty: Option<i32> = <Option<()>>::empty();
    /// assert_eq!(empty, None);
    /// ```
    fn empty<A>() -> Self::WithType<A>
    where
        A: 'static;

    /// Combines two alternatives, returning the first success.
    ///
    /// # Arguments
    ///
    /// * `alternative` - The fallback used if `self` represents failure
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Alternative;
    ///
    /// assert_eq!(None.alt(Some(42)), Some(42));
    /// assert_eq!(Some(1).alt(Some(2)), Some(1));
    /// ```
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Conditionally succeeds with `()` or fails.
    ///
    /// Returns `pure(())` if the condition holds, otherwise `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::{Alternative, Functor};
    ///
    /// fn filter_positive(n: i32) -> Option<i32> {
    ///     <Option<()>>::guard(n > 0).fmap(move |_| n)
    /// }
    ///
    /// assert_eq!(filter_positive(5), Some(5));
    /// assert_eq!(filter_positive(-3), None);
    /// ```
    #[inline]
    #[must_use]
    fn guard(condition: bool) -> Self::WithType<()>
    where
        Self: Sized,
    {
        if condition {
            Self::pure(())
        } else {
            Self::empty()
        }
    }

    /// Makes a computation optional, converting failure to `None`.
    ///
    /// The result always succeeds: `Some(value)` if the original
    /// computation succeeded, `None` if it failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Alternative;
    ///
    /// let success: Option<i32> = Some(42);
    /// assert_eq!(success.optional(), Some(Some(42)));
    ///
    /// let failure: Option<i32> = None;
    /// assert_eq!(failure.optional(), Some(None));
    /// ```
    fn optional(self) -> Self::WithType<Option<Self::Inner>>
    where
        Self: Sized,
        Self::Inner: 'static;

    /// Chooses from multiple alternatives, returning the first success.
    ///
    /// Folds over the alternatives with `alt`, starting from `empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Alternative;
    ///
    /// let first = Option::choice(vec![None, Some(2), Some(3)]);
    /// assert_eq!(first, Some(2));
    /// ```
    fn choice<I>(alternatives: I) -> Self
    where
        Self: Sized,
        Self::Inner: 'static,
        Self::WithType<Self::Inner>: Into<Self>,
        I: IntoIterator<Item = Self>,
    {
        let empty: Self = Self::empty::<Self::Inner>().into();
        alternatives
            .into_iter()
            .fold(empty, |accumulated, next| accumulated.alt(next))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Alternative for Option<A> {
    #[inline]
    fn empty<B>() -> Option<B>
    where
        B: 'static,
    {
        None
    }

    #[inline]
    fn alt(self, alternative: Self) -> Self {
        self.or(alternative)
    }

    #[inline]
    fn optional(self) -> Option<Option<A>>
    where
        A: 'static,
    {
        Some(self)
    }
}

// =============================================================================
// Vec<A> Implementation (extension trait)
//
// Vec's alt is concatenation, which cannot go through the Alternative
// trait without conflicting bounds, so it lives in an extension trait
// like MonadVec and ApplicativeVec.
// =============================================================================

/// Extension trait providing alternative operations for `Vec`.
///
/// The list instance treats the empty vector as failure and `alt` as
/// concatenation: every result of `self`, then every result of the
/// alternative, in traversal order.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::AlternativeVec;
///
/// assert_eq!(vec![1].alt(vec![2]), vec![1, 2]);
/// assert_eq!(Vec::<i32>::empty().alt(vec![3]), vec![3]);
/// ```
pub trait AlternativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Returns the empty vector, the identity for `alt`.
    fn empty() -> Self;

    /// Concatenates the alternatives, keeping every result.
    #[must_use]
    fn alt(self, alternative: Self) -> Self;

    /// Chooses from multiple alternatives, concatenating all of them.
    fn choice<I>(alternatives: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        alternatives
            .into_iter()
            .fold(Self::empty(), |accumulated, next| accumulated.alt(next))
    }
}

impl<A> AlternativeVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn empty() -> Self {
        Self::new()
    }

    fn alt(mut self, mut alternative: Self) -> Self {
        self.append(&mut alternative);
        self
    }
}
