//! Free dispatch functions for the capability traits.
//!
//! Each capability operation is also available as a free function that
//! takes the computation as its first argument and forwards to the
//! trait method. This is the function-first spelling of the registry:
//! generic over the trait, so a value that does not implement a
//! capability is rejected at compile time.
//!
//! The continuation-specific capabilities (`call_cc`, `reset`, `shift`)
//! have exactly one implementor and are dispatched through the inherent
//! constructors on [`Continuation`](crate::control::Continuation);
//! the error capability's free functions live next to its trait in
//! [`effect`](crate::effect).
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::dispatch;
//!
//! let doubled = dispatch::fmap(Some(21), |x| x * 2);
//! assert_eq!(doubled, Some(42));
//!
//! let chained = dispatch::flat_map(Some(5), |x| Some(x + 1));
//! assert_eq!(chained, Some(6));
//! ```

use super::alternative::Alternative;
use super::applicative::Applicative;
use super::comonad::Comonad;
use super::functor::Functor;
use super::monad::Monad;

/// Applies a function to the value inside a functor.
///
/// Forwards to [`Functor::fmap`].
#[inline]
pub fn fmap<F, B, Fun>(functor: F, function: Fun) -> F::WithType<B>
where
    F: Functor,
    Fun: FnOnce(F::Inner) -> B + 'static,
    B: 'static,
{
    functor.fmap(function)
}

/// Lifts a plain value into an applicative context.
///
/// The context must be named at the call site:
///
/// ```rust
/// use lambent::typeclass::dispatch;
///
/// let lifted = dispatch::pure::<Option<()>, _>(42);
/// assert_eq!(lifted, Some(42));
/// ```
#[inline]
pub fn pure<F, B>(value: B) -> F::WithType<B>
where
    F: Applicative,
{
    F::pure(value)
}

/// Applies a contained function to a contained argument.
///
/// Forwards to [`Applicative::apply`].
#[inline]
pub fn apply<F, B, Output>(function: F, argument: F::WithType<B>) -> F::WithType<Output>
where
    F: Applicative,
    F::Inner: FnOnce(B) -> Output,
{
    function.apply(argument)
}

/// Sequences a computation into a function returning a new one.
///
/// Forwards to [`Monad::flat_map`].
#[inline]
pub fn flat_map<M, B, Fun>(monad: M, function: Fun) -> M::WithType<B>
where
    M: Monad,
    Fun: FnOnce(M::Inner) -> M::WithType<B>,
{
    monad.flat_map(function)
}

/// Extracts the focused value of a comonad.
///
/// Forwards to [`Comonad::extract`].
#[inline]
pub fn extract<W>(comonad: W) -> W::Inner
where
    W: Comonad,
{
    comonad.extract()
}

/// Extends a whole-structure function over every position.
///
/// Forwards to [`Comonad::extend`].
#[inline]
pub fn extend<W, B, Fun>(comonad: W, function: Fun) -> W::WithType<B>
where
    W: Comonad,
    Fun: Fn(&W) -> B,
    B: 'static,
{
    comonad.extend(function)
}

/// Returns the failure identity of an alternative context.
///
/// The context must be named at the call site, as with [`pure`].
#[inline]
pub fn empty<F, A>() -> F::WithType<A>
where
    F: Alternative,
    A: 'static,
{
    F::empty()
}

/// Combines two alternatives, first success wins.
///
/// Forwards to [`Alternative::alt`].
#[inline]
pub fn alt<F>(first: F, second: F) -> F
where
    F: Alternative,
{
    first.alt(second)
}
