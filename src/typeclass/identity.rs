//! Identity wrapper type - the identity functor.
//!
//! `Identity` wraps a single value and adds no behavior. It is the
//! simplest implementor of the whole capability hierarchy, which makes
//! it the lowest-risk fixture for the law test suites: every law can be
//! checked against it without any container-specific noise.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// `Identity` implements everything from [`Functor`](super::Functor)
/// through [`Comonad`](super::Comonad), always holding exactly one
/// value, so both `extract` and `extend` are total.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax works too
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Identity;
    ///
    /// let x = Identity::new(42);
    /// assert_eq!(x.into_inner(), 42);
    /// ```
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}
