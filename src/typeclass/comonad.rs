//! Comonad type class - extracting values and extending contexts.
//!
//! The dual of `Monad`: where a monad lifts values in and sequences
//! effects, a comonad guarantees a value can be taken out (`extract`)
//! and lets a context-aware function be applied at every position of a
//! structure (`extend`).
//!
//! `extract` is total, so only types that are guaranteed non-empty can
//! implement this trait: [`Identity`] always holds exactly one value
//! and [`Stream`](super::Stream) is non-empty by construction. A
//! possibly-empty container such as `Vec` has no lawful `extract` and
//! therefore no Comonad instance.
//!
//! # Laws
//!
//! All `Comonad` implementations must satisfy:
//!
//! ## Left Identity Law
//!
//! Extending with extract rebuilds the same structure:
//!
//! ```text
//! w.extend(|x| x.clone().extract()) == w
//! ```
//!
//! ## Right Identity Law
//!
//! Extracting after extending applies the function to the whole:
//!
//! ```text
//! w.clone().extend(f).extract() == f(&w)
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! w.extend(f).extend(g) == w.extend(|x| g(&x.clone().extend(f)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::{Comonad, Identity};
//!
//! let wrapped = Identity::new(21);
//! let doubled = wrapped.extend(|w| w.as_inner() * 2);
//! assert_eq!(doubled.extract(), 42);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for structures from which a value can always be
/// extracted, and over which a context-aware function can be extended.
///
/// # Examples
///
/// ```rust
/// use lambent::typeclass::{Comonad, Identity};
///
/// assert_eq!(Identity::new(42).extract(), 42);
/// ```
pub trait Comonad: TypeConstructor + Sized {
    /// Extracts the value at the focus of the structure.
    ///
    /// Must be total: implementing types guarantee at least one value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::{Comonad, Identity};
    ///
    /// assert_eq!(Identity::new(5).extract(), 5);
    /// ```
    fn extract(self) -> Self::Inner;

    /// Applies a whole-structure function at every position.
    ///
    /// For `Identity` there is a single position, so this is
    /// `Identity(function(&self))`. For a sequence, the function sees
    /// the sub-sequence starting at each position (its "tails").
    ///
    /// # Arguments
    ///
    /// * `function` - A function from the structure (viewed from some
    ///   position) to a new focus value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::{Comonad, Stream};
    ///
    /// let stream = Stream::from_head_tail(1, vec![2, 3]);
    /// let sums = stream.extend(|s| s.iter().sum::<i32>());
    /// assert_eq!(sums.to_vec(), vec![6, 5, 3]);
    /// ```
    fn extend<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(&Self) -> B,
        B: 'static;

    /// Wraps every position in its own copy of the remaining structure.
    ///
    /// Equivalent to `extend(|w| w.clone())`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::typeclass::{Comonad, Identity};
    ///
    /// let nested = Identity::new(1).duplicate();
    /// assert_eq!(nested.extract(), Identity::new(1));
    /// ```
    #[inline]
    fn duplicate(self) -> Self::WithType<Self>
    where
        Self: Clone + 'static,
    {
        self.extend(Self::clone)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Comonad for Identity<A> {
    #[inline]
    fn extract(self) -> A {
        self.0
    }

    #[inline]
    fn extend<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(&Self) -> B,
        B: 'static,
    {
        Identity(function(&self))
    }
}
