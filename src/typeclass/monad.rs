//! Monad type class - sequencing computations within a context.
//!
//! This module provides the `Monad` trait, which extends `Applicative`
//! with `flat_map`: sequencing where each step can depend on the result
//! of the previous one.
//!
//! # Laws
//!
//! All `Monad` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::Monad;
//!
//! let result = Some("42")
//!     .flat_map(|s| s.parse::<i32>().ok())
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for types that support dependent sequencing of
/// computations.
///
/// # Laws
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// m.flat_map(Self::pure) == m
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::Monad;
///
/// let y = Some(5).flat_map(|n| Some(n * 2));
/// assert_eq!(y, Some(10));
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a new monad and flattens the result.
    ///
    /// This is Haskell's `>>=` (bind); `Option::and_then` and
    /// `Result::and_then` are the standard-library analogues.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that takes the inner value and returns
    ///   a new monad
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Monad;
    ///
    /// let w = Some(5).flat_map(|n| if n > 10 { Some(n) } else { None });
    /// assert_eq!(w, None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` represents a failure, the failure propagates and
    /// `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    ///
    /// let none: Option<i32> = None;
    /// assert_eq!(none.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Monad for Box<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Box<B>
    where
        F: FnOnce(A) -> Box<B>,
    {
        function(*self)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

// =============================================================================
// Vec<A> Implementation (extension trait)
//
// Vec requires FnMut because the function is called once per element,
// so the list monad lives in a separate trait, keeping the Monad
// interface clean with FnOnce.
// =============================================================================

/// Extension trait providing monadic operations for `Vec`.
///
/// `flat_map` applies the function to each element and concatenates the
/// produced vectors in traversal order - the list monad's bind,
/// flattening exactly one level of nesting.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::MonadVec;
///
/// let result = vec![1, 2, 3].flat_map(|n| vec![n, n * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
/// ```
pub trait MonadVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Applies a function to each element and flattens the results.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two Vec computations, discarding the first results.
    ///
    /// Produces `self.len()` copies of `next`, concatenated.
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B>;

    /// Flattens a nested Vec one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::MonadVec;
    ///
    /// let nested = vec![vec![1, 2], vec![3]];
    /// assert_eq!(nested.join(), vec![1, 2, 3]);
    /// ```
    fn join(self) -> Vec<<Self::VecInner as IntoIterator>::Item>
    where
        Self::VecInner: IntoIterator;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B> {
        self.flat_map(|_| next.clone())
    }

    fn join(self) -> Vec<<A as IntoIterator>::Item>
    where
        A: IntoIterator,
    {
        self.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_chains() {
        let y = Some(5).flat_map(|n| Some(n * 2));
        assert_eq!(y, Some(10));
    }

    #[rstest]
    fn option_flat_map_propagates_none() {
        let x: Option<i32> = None;
        assert_eq!(x.flat_map(|n| Some(n * 2)), None);
    }

    #[rstest]
    fn result_flat_map_propagates_err() {
        let x: Result<i32, String> = Err("bad".to_string());
        assert_eq!(x.flat_map(|n| Ok(n + 1)), Err("bad".to_string()));
    }

    #[rstest]
    fn identity_flat_map_applies_function() {
        let result = Identity(5).flat_map(|n| Identity(n + 1));
        assert_eq!(result, Identity(6));
    }

    #[rstest]
    fn box_flat_map_applies_function() {
        let result = Box::new(5).flat_map(|n| Box::new(n.to_string()));
        assert_eq!(result, Box::new("5".to_string()));
    }

    #[rstest]
    fn vec_flat_map_concatenates_in_order() {
        let result = vec![1, 2, 3].flat_map(|n| vec![n, n * 10]);
        assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn vec_flat_map_flattens_one_level() {
        let result = vec![vec![1, 2], vec![3]].flat_map(|inner| inner);
        assert_eq!(result, vec![1, 2, 3]);
    }

    #[rstest]
    fn vec_join_flattens_one_level() {
        let nested = vec![vec![1], vec![], vec![2, 3]];
        assert_eq!(nested.join(), vec![1, 2, 3]);
    }

    #[rstest]
    fn then_discards_first_value() {
        assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    }
}
