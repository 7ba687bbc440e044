//! `MonadError` type class - error handling capability.
//!
//! This module provides the `MonadError` trait, which abstracts the
//! ability to throw and catch errors within a monadic context. Errors
//! are first-class values flowing through the context's error channel,
//! never host panics: a thrown error propagates through `flat_map`
//! untouched until a `catch_error` handler intercepts it.
//!
//! # Laws
//!
//! All `MonadError` implementations must satisfy:
//!
//! ## Throw Catch Law
//!
//! ```text
//! catch_error(throw_error(e), handler) == handler(e)
//! ```
//!
//! ## Catch Pure Law
//!
//! ```text
//! catch_error(pure(a), handler) == pure(a)
//! ```
//!
//! ## Throw Short-Circuit Law
//!
//! ```text
//! throw_error(e).flat_map(f) == throw_error(e)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambent::effect::MonadError;
//!
//! let result: Result<i32, String> = <Result<i32, String>>::throw_error("error".to_string());
//! assert_eq!(result, Err("error".to_string()));
//!
//! let recovered = <Result<i32, String>>::catch_error(result, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(5));
//! ```

use crate::typeclass::Monad;

#[cfg(feature = "control")]
use crate::control::Either;

// =============================================================================
// MonadErrorExt Trait - Extension for error type transformation
// =============================================================================

/// Extension trait for error type transformation.
///
/// Provided separately from [`MonadError`] because the return type
/// changes: the error type is different.
///
/// # Laws
///
/// ```text
/// computation.map_error(|e| e) == computation
/// computation.map_error(f).map_error(g) == computation.map_error(|e| g(f(e)))
/// pure(a).map_error(f) == pure(a)
/// ```
///
/// # Examples
///
/// ```rust
/// use lambent::effect::MonadErrorExt;
///
/// let computation: Result<i32, i32> = Err(404);
/// let mapped: Result<i32, String> = computation.map_error(|code| format!("HTTP Error: {code}"));
/// assert_eq!(mapped, Err("HTTP Error: 404".to_string()));
/// ```
pub trait MonadErrorExt<E> {
    /// The error-carrying context over a new error type.
    type WithError<E2>;

    /// Transforms the error type using the provided function.
    ///
    /// Success values are not affected.
    fn map_error<E2, F>(self, transform: F) -> Self::WithError<E2>
    where
        F: FnOnce(E) -> E2;
}

impl<A, E> MonadErrorExt<E> for Result<A, E> {
    type WithError<E2> = Result<A, E2>;

    fn map_error<E2, F>(self, transform: F) -> Result<A, E2>
    where
        F: FnOnce(E) -> E2,
    {
        self.map_err(transform)
    }
}

#[cfg(feature = "control")]
impl<L, R> MonadErrorExt<L> for Either<L, R> {
    type WithError<E2> = Either<E2, R>;

    fn map_error<E2, F>(self, transform: F) -> Either<E2, R>
    where
        F: FnOnce(L) -> E2,
    {
        self.map_left(transform)
    }
}

/// A type class for monads that can throw and catch errors of type `E`.
///
/// # Laws
///
/// ```text
/// catch_error(throw_error(e), handler) == handler(e)
/// catch_error(pure(a), handler) == pure(a)
/// throw_error(e).flat_map(f) == throw_error(e)
/// ```
///
/// # Examples
///
/// ```rust
/// use lambent::effect::MonadError;
///
/// fn checked_divide(a: i32, b: i32) -> Result<i32, String> {
///     if b == 0 {
///         <Result<i32, String>>::throw_error("division by zero".to_string())
///     } else {
///         Ok(a / b)
///     }
/// }
///
/// assert_eq!(checked_divide(10, 2), Ok(5));
/// assert!(checked_divide(1, 0).is_err());
/// ```
pub trait MonadError<E>: Monad {
    /// Throws an error, short-circuiting the computation.
    ///
    /// Any subsequent `flat_map` operations are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::effect::MonadError;
    ///
    /// let error: Result<i32, String> = <Result<i32, String>>::throw_error("oops".to_string());
    /// assert_eq!(error, Err("oops".to_string()));
    /// ```
    fn throw_error<A>(error: E) -> Self::WithType<A>
    where
        A: 'static;

    /// Catches an error and applies a handler to recover.
    ///
    /// If the computation fails, the handler is applied to the error to
    /// produce a recovery computation, which may itself fail. If the
    /// computation succeeds, the handler is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::effect::MonadError;
    ///
    /// let failing: Result<i32, String> = Err("error".to_string());
    /// let recovered = <Result<i32, String>>::catch_error(failing, |e| Ok(e.len() as i32));
    /// assert_eq!(recovered, Ok(5));
    /// ```
    fn catch_error<A, F>(computation: Self::WithType<A>, handler: F) -> Self::WithType<A>
    where
        F: FnOnce(E) -> Self::WithType<A> + 'static,
        A: 'static;

    /// Converts a `Result` into this error-handling monad.
    ///
    /// `Ok` values become successful computations, `Err` values become
    /// thrown errors.
    fn from_result<A>(result: Result<A, E>) -> Self::WithType<A>
    where
        A: 'static,
        E: 'static;

    /// Returns a fallback computation if the original fails.
    ///
    /// A simpler alternative to `catch_error` when the error value does
    /// not matter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::effect::MonadError;
    ///
    /// let failing: Result<i32, String> = Err("error".to_string());
    /// assert_eq!(<Result<i32, String>>::recover_with(failing, Ok(0)), Ok(0));
    /// ```
    fn recover_with<A>(
        computation: Self::WithType<A>,
        default: Self::WithType<A>,
    ) -> Self::WithType<A>
    where
        A: 'static,
        Self::WithType<A>: 'static,
    {
        Self::catch_error(computation, move |_| default)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E: Clone> MonadError<E> for Result<T, E> {
    #[inline]
    fn throw_error<A>(error: E) -> Result<A, E>
    where
        A: 'static,
    {
        Err(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Result<A, E>, handler: F) -> Result<A, E>
    where
        F: FnOnce(E) -> Result<A, E> + 'static,
        A: 'static,
    {
        computation.or_else(handler)
    }

    #[inline]
    fn from_result<A>(result: Result<A, E>) -> Result<A, E>
    where
        A: 'static,
        E: 'static,
    {
        result
    }
}

// =============================================================================
// Either<L, R> Implementation
// =============================================================================

#[cfg(feature = "control")]
impl<L: Clone, R> MonadError<L> for Either<L, R> {
    #[inline]
    fn throw_error<A>(error: L) -> Either<L, A>
    where
        A: 'static,
    {
        Either::Left(error)
    }

    #[inline]
    fn catch_error<A, F>(computation: Either<L, A>, handler: F) -> Either<L, A>
    where
        F: FnOnce(L) -> Either<L, A> + 'static,
        A: 'static,
    {
        match computation {
            Either::Left(error) => handler(error),
            Either::Right(value) => Either::Right(value),
        }
    }

    #[inline]
    fn from_result<A>(result: Result<A, L>) -> Either<L, A>
    where
        A: 'static,
        L: 'static,
    {
        result.into()
    }
}

// =============================================================================
// Free Dispatch Functions
// =============================================================================

/// Throws an error in a context named at the call site.
///
/// Forwards to [`MonadError::throw_error`].
///
/// # Examples
///
/// ```rust
/// use lambent::effect;
///
/// let failed = effect::throw_error::<Result<(), String>, i32>("bad".to_string());
/// assert_eq!(failed, Err("bad".to_string()));
/// ```
#[inline]
pub fn throw_error<M, A>(error: <M as ErrorOf>::Error) -> M::WithType<A>
where
    M: ErrorOf,
    A: 'static,
{
    M::throw_error(error)
}

/// Catches an error with a recovery handler.
///
/// Forwards to [`MonadError::catch_error`].
///
/// # Examples
///
/// ```rust
/// use lambent::effect;
///
/// let failing: Result<i32, String> = Err("error".to_string());
/// let recovered = effect::catch_error::<Result<(), String>, _, _>(failing, |e| Ok(e.len() as i32));
/// assert_eq!(recovered, Ok(5));
/// ```
#[inline]
pub fn catch_error<M, A, F>(computation: M::WithType<A>, handler: F) -> M::WithType<A>
where
    M: ErrorOf,
    F: FnOnce(<M as ErrorOf>::Error) -> M::WithType<A> + 'static,
    A: 'static,
{
    M::catch_error(computation, handler)
}

/// Helper trait pinning a single error type per context, so the free
/// dispatch functions need only one context annotation.
pub trait ErrorOf: MonadError<<Self as ErrorOf>::Error> {
    /// The error type of this context.
    type Error;
}

impl<T, E: Clone> ErrorOf for Result<T, E> {
    type Error = E;
}

#[cfg(feature = "control")]
impl<L: Clone, R> ErrorOf for Either<L, R> {
    type Error = L;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn result_throw_error_creates_err() {
        let error: Result<i32, String> = <Result<i32, String>>::throw_error("oops".to_string());
        assert_eq!(error, Err("oops".to_string()));
    }

    #[rstest]
    fn result_catch_error_applies_handler() {
        let failing: Result<i32, String> = Err("error".to_string());
        let recovered = <Result<i32, String>>::catch_error(failing, |e| Ok(e.len() as i32));
        assert_eq!(recovered, Ok(5));
    }

    #[rstest]
    fn result_catch_error_skips_success() {
        let success: Result<i32, String> = Ok(1);
        let untouched = <Result<i32, String>>::catch_error(success, |_| Ok(-1));
        assert_eq!(untouched, Ok(1));
    }

    #[rstest]
    fn result_from_result_round_trips() {
        let ok: Result<i32, String> = <Result<i32, String>>::from_result(Ok(42));
        assert_eq!(ok, Ok(42));
    }

    #[rstest]
    fn result_recover_with_provides_fallback() {
        let failing: Result<i32, String> = Err("error".to_string());
        assert_eq!(<Result<i32, String>>::recover_with(failing, Ok(0)), Ok(0));
    }

    #[rstest]
    fn result_map_error_transforms_error_type() {
        let computation: Result<i32, i32> = Err(404);
        let mapped: Result<i32, String> = computation.map_error(|code| format!("code {code}"));
        assert_eq!(mapped, Err("code 404".to_string()));
    }

    #[cfg(feature = "control")]
    mod either_instance {
        use super::*;

        #[rstest]
        fn either_throw_error_creates_left() {
            let error: Either<String, i32> = <Either<String, i32>>::throw_error("bad".to_string());
            assert_eq!(error, Either::Left("bad".to_string()));
        }

        #[rstest]
        fn either_catch_error_applies_handler() {
            let failing: Either<String, i32> = Either::Left("bad".to_string());
            let recovered =
                <Either<String, i32>>::catch_error(failing, |e| Either::Right(e.len() as i32));
            assert_eq!(recovered, Either::Right(3));
        }

        #[rstest]
        fn either_catch_error_skips_success() {
            let success: Either<String, i32> = Either::Right(1);
            let untouched = <Either<String, i32>>::catch_error(success, |_| Either::Right(-1));
            assert_eq!(untouched, Either::Right(1));
        }

        #[rstest]
        fn either_map_error_transforms_left() {
            let failing: Either<i32, i32> = Either::Left(404);
            let mapped: Either<String, i32> = failing.map_error(|code| format!("code {code}"));
            assert_eq!(mapped, Either::Left("code 404".to_string()));
        }

        #[rstest]
        fn either_from_result_lifts_both_cases() {
            let ok: Either<String, i32> = <Either<String, i32>>::from_result(Ok(1));
            assert_eq!(ok, Either::Right(1));
            let err: Either<String, i32> =
                <Either<String, i32>>::from_result(Err("bad".to_string()));
            assert_eq!(err, Either::Left("bad".to_string()));
        }
    }

    #[rstest]
    fn free_throw_and_catch_forward_to_trait() {
        let failed = throw_error::<Result<(), String>, i32>("bad".to_string());
        assert_eq!(failed, Err("bad".to_string()));
        let recovered = catch_error::<Result<(), String>, _, _>(failed, |e| Ok(e.len() as i32));
        assert_eq!(recovered, Ok(3));
    }
}
