//! Applicative type class - combining independent computations.
//!
//! This module provides the `Applicative` trait, which extends `Functor`
//! with the ability to lift plain values into the context (`pure`) and
//! to combine independent computations (`map2`, `apply`).
//!
//! # Laws
//!
//! All `Applicative` implementations must satisfy:
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(1).map2(Some(2), |x, y| x + y);
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A type class for functors that can lift values and combine
/// independent computations.
///
/// `pure` lifts a plain value into the context (the Pointed part of the
/// hierarchy); `apply` applies a contained function to a contained
/// argument; `map2` combines two computations with a binary function.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// If either side represents failure (in the sense appropriate to
    /// the specific applicative), the result is that failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// let sum = Some(3).map2(Some(4), |x, y| x + y);
    /// assert_eq!(sum, Some(7));
    ///
    /// let none: Option<i32> = None;
    /// assert_eq!(Some(3).map2(none, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// let sum = Some(1).map3(Some(2), Some(3), |x, y, z| x + y + z);
    /// assert_eq!(sum, Some(6));
    /// ```
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    ///
    /// Equivalent to `map2(other, |a, b| (a, b))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product(Some("a")), Some((1, "a")));
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Sequences two computations, keeping the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_left(Some(2)), Some(1));
    /// let none: Option<i32> = None;
    /// assert_eq!(Some(1).product_left(none), None);
    /// ```
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Sequences two computations, keeping the second value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).product_right(Some(2)), Some(2));
    /// ```
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a contained function to a contained argument.
    ///
    /// `self` holds a function `B -> Output`; `other` holds the
    /// argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x * 2);
    /// assert_eq!(function.apply(Some(21)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Result<B, E>, third: Result<C, E>, function: F) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        match (self, second, third) {
            (Ok(a), Ok(b), Ok(c)) => Ok(function(a, b, c)),
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Ok(function), Ok(value)) => Ok(function(value)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}

// =============================================================================
// Box<A> Implementation
// =============================================================================

impl<A> Applicative for Box<A> {
    #[inline]
    fn pure<B>(value: B) -> Box<B> {
        Box::new(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Box<B>, function: F) -> Box<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Box::new(function(*self, *other))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Box<B>, third: Box<C>, function: F) -> Box<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Box::new(function(*self, *second, *third))
    }

    #[inline]
    fn apply<B, Output>(self, other: Box<B>) -> Box<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Box::new((*self)(*other))
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

// =============================================================================
// Vec<A> Implementation (extension trait)
//
// Vec's applicative combines every pair of elements, which requires the
// function to be callable repeatedly and the elements to be cloneable.
// The separate trait keeps the Applicative interface clean with FnOnce.
// =============================================================================

/// Extension trait providing applicative operations for `Vec`.
///
/// The instance is the cartesian one: every element of `self` is
/// combined with every element of `other`, in traversal order.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::ApplicativeVec;
///
/// let pairs = vec![1, 2].product(vec!["a", "b"]);
/// assert_eq!(pairs, vec![(1, "a"), (1, "b"), (2, "a"), (2, "b")]);
/// ```
pub trait ApplicativeVec: Sized {
    /// The inner type of the Vec.
    type VecInner;

    /// Combines every pair of elements using a binary function.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        F: FnMut(Self::VecInner, B) -> C,
        Self::VecInner: Clone;

    /// Combines every pair of elements into a tuple.
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone;

    /// Applies every contained function to every contained argument.
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: Fn(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        F: FnMut(A, B) -> C,
        A: Clone,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for a in self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(A, B)>
    where
        A: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: Fn(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len() * other.len());
        for function in &self {
            for b in &other {
                result.push(function(b.clone()));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_pure_wraps_value() {
        let x: Option<i32> = <Option<()>>::pure(42);
        assert_eq!(x, Some(42));
    }

    #[rstest]
    fn option_map2_combines_values() {
        assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    }

    #[rstest]
    fn option_map2_propagates_none() {
        let none: Option<i32> = None;
        assert_eq!(Some(1).map2(none, |x, y| x + y), None);
    }

    #[rstest]
    fn option_apply_applies_function() {
        let function: Option<fn(i32) -> i32> = Some(|x| x * 2);
        assert_eq!(function.apply(Some(21)), Some(42));
    }

    #[rstest]
    fn result_map2_short_circuits_on_first_error() {
        let first: Result<i32, &str> = Err("first");
        let second: Result<i32, &str> = Err("second");
        assert_eq!(first.map2(second, |x, y| x + y), Err("first"));
    }

    #[rstest]
    fn result_map3_combines_values() {
        let result: Result<i32, String> = Ok(1).map3(Ok(2), Ok(3), |x, y, z| x + y + z);
        assert_eq!(result, Ok(6));
    }

    #[rstest]
    fn identity_apply_applies_function() {
        let function: Identity<fn(i32) -> String> = Identity(|x: i32| x.to_string());
        assert_eq!(function.apply(Identity(5)), Identity("5".to_string()));
    }

    #[rstest]
    fn product_left_keeps_first() {
        assert_eq!(Some(1).product_left(Some(2)), Some(1));
    }

    #[rstest]
    fn product_right_keeps_second() {
        assert_eq!(Some(1).product_right(Some(2)), Some(2));
    }

    #[rstest]
    fn vec_map2_is_cartesian() {
        let result = vec![1, 2].map2(vec![10, 20], |x, y| x + y);
        assert_eq!(result, vec![11, 21, 12, 22]);
    }

    #[rstest]
    fn vec_apply_applies_every_function() {
        let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
        assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
    }

    #[rstest]
    fn vec_product_of_empty_is_empty() {
        let empty: Vec<i32> = vec![];
        let result = empty.product(vec!["a"]);
        assert_eq!(result, vec![]);
    }
}
