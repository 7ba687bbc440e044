//! Error continuation monad - CPS with a dedicated error channel.
//!
//! This module provides `ErrorContinuation<R, A, E>`, the
//! two-continuation generalization of
//! [`Continuation`](super::Continuation): a computation is a function
//! of a success continuation `(A -> R)` and a failure continuation
//! `(E -> R)`, and invokes exactly one of the two per run.
//!
//! Errors are plain values flowing through the failure channel, never
//! host panics: a failure constructed by
//! [`ErrorContinuation::fail`] propagates through `map`, `flat_map` and
//! `apply` untouched until intercepted by
//! [`ErrorContinuation::recover`]. The alternative pair
//! [`ErrorContinuation::empty`] / [`ErrorContinuation::or_else`]
//! selects the first success, falling through failed computations.
//!
//! As with `Continuation`, construction is effect-free and the
//! representation is shared (`Rc<dyn Fn>`), so values clone cheaply and
//! may be run through multi-shot captures.
//!
//! # Examples
//!
//! ```rust
//! use lambent::control::ErrorContinuation;
//!
//! let computation: ErrorContinuation<Result<i32, String>, i32, String> =
//!     ErrorContinuation::pure(20)
//!         .flat_map(|x| {
//!             if x > 10 {
//!                 ErrorContinuation::pure(x + 1)
//!             } else {
//!                 ErrorContinuation::fail("too small".to_string())
//!             }
//!         });
//! assert_eq!(computation.into_result(), Ok(21));
//! ```

use std::rc::Rc;

/// A shared success continuation from a value to the final result.
pub type SuccessFunction<A, R> = Rc<dyn Fn(A) -> R>;

/// A shared failure continuation from an error to the final result.
pub type FailureFunction<E, R> = Rc<dyn Fn(E) -> R>;

/// A shared CPS function over a success/failure continuation pair.
type ErrorCpsFunction<A, E, R> = Rc<dyn Fn(SuccessFunction<A, R>, FailureFunction<E, R>) -> R>;

/// A CPS computation with success and error channels.
///
/// `ErrorContinuation<R, A, E>` encapsulates a computation that:
/// - Succeeds with a value of type `A`, or fails with an error of type
///   `E`
/// - When given a continuation pair `(A -> R, E -> R)`, produces a
///   final result of type `R` by invoking exactly one of the two
///
/// The internal representation is essentially
/// `(A -> R, E -> R) -> R`. Invoking it (through
/// [`ErrorContinuation::run`]) is the only way to observe the
/// computation; construction and composition allocate new inert values.
///
/// # Type Parameters
///
/// * `R` - The type of the final result of the whole computation
/// * `A` - The success value type
/// * `E` - The error value type
///
/// # Laws
///
/// In addition to the functor and monad laws (read observationally),
/// the error and alternative laws hold:
///
/// - `fail(e).flat_map(f).run(sk, ek) == fail(e).run(sk, ek)`
/// - `fail(e).recover(h).run(sk, ek) == h(e).run(sk, ek)`
/// - `pure(a).recover(h).run(sk, ek) == pure(a).run(sk, ek)`
/// - `empty().or_else(m).run(sk, ek) == m.run(sk, ek)`
/// - `m.or_else(empty()).run(sk, ek) == m.run(sk, ek)`
/// - `or_else` is associative
///
/// # Examples
///
/// ```rust
/// use lambent::control::ErrorContinuation;
///
/// let failed: ErrorContinuation<Result<i32, String>, i32, String> =
///     ErrorContinuation::fail("bad".to_string());
/// let recovered = failed.recover(|e| ErrorContinuation::pure(e.len() as i32));
/// assert_eq!(recovered.into_result(), Ok(3));
/// ```
pub struct ErrorContinuation<R, A, E> {
    /// The CPS function: given `(A -> R, E -> R)`, produces `R`.
    run_continuation: ErrorCpsFunction<A, E, R>,
}

impl<R, A, E> Clone for ErrorContinuation<R, A, E> {
    fn clone(&self) -> Self {
        Self {
            run_continuation: Rc::clone(&self.run_continuation),
        }
    }
}

impl<R: 'static, A: 'static, E: 'static> ErrorContinuation<R, A, E> {
    /// Creates a new computation from a function
    /// `(A -> R, E -> R) -> R`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let conditional: ErrorContinuation<i32, i32, &str> =
    ///     ErrorContinuation::new(|on_success, _on_failure| on_success(42));
    /// assert_eq!(conditional.run(|x| x, |_| -1), 42);
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(SuccessFunction<A, R>, FailureFunction<E, R>) -> R + 'static,
    {
        Self {
            run_continuation: Rc::new(run),
        }
    }

    /// Lifts a pure value: the computation that immediately invokes the
    /// success continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let success: ErrorContinuation<i32, i32, String> = ErrorContinuation::pure(42);
    /// assert_eq!(success.run(|x| x, |_| -1), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |on_success, _on_failure| on_success(value.clone()))
    }

    /// Lifts an error: the computation that immediately invokes the
    /// failure continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let failure: ErrorContinuation<i32, i32, String> =
    ///     ErrorContinuation::fail("bad".to_string());
    /// assert_eq!(failure.run(|x| x, |e| e.len() as i32), 3);
    /// ```
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |_on_success, on_failure| on_failure(error.clone()))
    }

    /// Runs the computation with the given continuation pair.
    ///
    /// Exactly one of the two continuations is invoked per run.
    ///
    /// # Arguments
    ///
    /// * `on_success` - Receives the success value
    /// * `on_failure` - Receives the error value
    pub fn run<S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: Fn(A) -> R + 'static,
        F: Fn(E) -> R + 'static,
    {
        (self.run_continuation)(Rc::new(on_success), Rc::new(on_failure))
    }

    /// Runs with already-shared continuations, without consuming the
    /// computation.
    fn run_shared(
        &self,
        on_success: SuccessFunction<A, R>,
        on_failure: FailureFunction<E, R>,
    ) -> R {
        (self.run_continuation)(on_success, on_failure)
    }

    /// Applies a function to the success value; errors pass through
    /// unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let doubled: ErrorContinuation<i32, i32, String> =
    ///     ErrorContinuation::pure(21).map(|x| x * 2);
    /// assert_eq!(doubled.run(|x| x, |_| -1), 42);
    /// ```
    pub fn map<B: 'static, F>(self, function: F) -> ErrorContinuation<R, B, E>
    where
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        ErrorContinuation::new(
            move |on_success: SuccessFunction<B, R>, on_failure: FailureFunction<E, R>| {
                let function = Rc::clone(&function);
                self.run_shared(
                    Rc::new(move |value: A| on_success(function(value))),
                    on_failure,
                )
            },
        )
    }

    /// Applies a function to the error value; successes pass through
    /// unmodified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let renumbered: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::<_, i32, i32>::fail(404).map_error(|code| format!("error {code}"));
    /// assert_eq!(renumbered.into_result(), Err("error 404".to_string()));
    /// ```
    pub fn map_error<E2: 'static, F>(self, function: F) -> ErrorContinuation<R, A, E2>
    where
        F: Fn(E) -> E2 + 'static,
    {
        let function = Rc::new(function);
        ErrorContinuation::new(
            move |on_success: SuccessFunction<A, R>, on_failure: FailureFunction<E2, R>| {
                let function = Rc::clone(&function);
                self.run_shared(
                    on_success,
                    Rc::new(move |error: E| on_failure(function(error))),
                )
            },
        )
    }

    /// Sequences this computation into a function returning the next
    /// one.
    ///
    /// On success the function is applied to the yielded value and the
    /// resulting computation runs with the same continuation pair. On
    /// failure the error propagates untouched and the function is never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let chained: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::pure(20).flat_map(|x| ErrorContinuation::pure(x + 1));
    /// assert_eq!(chained.into_result(), Ok(21));
    /// ```
    pub fn flat_map<B: 'static, F>(self, function: F) -> ErrorContinuation<R, B, E>
    where
        F: Fn(A) -> ErrorContinuation<R, B, E> + 'static,
    {
        let function = Rc::new(function);
        ErrorContinuation::new(
            move |on_success: SuccessFunction<B, R>, on_failure: FailureFunction<E, R>| {
                let function = Rc::clone(&function);
                let on_failure_for_rest = Rc::clone(&on_failure);
                self.run_shared(
                    Rc::new(move |value: A| {
                        function(value)
                            .run_shared(Rc::clone(&on_success), Rc::clone(&on_failure_for_rest))
                    }),
                    on_failure,
                )
            },
        )
    }

    /// Alias for `flat_map`.
    #[inline]
    pub fn and_then<B: 'static, F>(self, function: F) -> ErrorContinuation<R, B, E>
    where
        F: Fn(A) -> ErrorContinuation<R, B, E> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first success value.
    ///
    /// A failure of the first computation propagates and the second
    /// never runs.
    #[inline]
    #[must_use]
    pub fn then<B: 'static>(self, next: ErrorContinuation<R, B, E>) -> ErrorContinuation<R, B, E> {
        self.flat_map(move |_| next.clone())
    }

    /// Applies a contained function to the result of another
    /// computation.
    ///
    /// `self` yields the function and runs first; on its success
    /// `argument` runs; on the argument's success the application
    /// result is forwarded. An error from either side propagates
    /// without running the remaining side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let function: ErrorContinuation<Result<i32, String>, fn(i32) -> i32, String> =
    ///     ErrorContinuation::pure(|x| x * 2);
    /// let applied = function.apply(ErrorContinuation::pure(21));
    /// assert_eq!(applied.into_result(), Ok(42));
    /// ```
    pub fn apply<B: 'static, C: 'static>(
        self,
        argument: ErrorContinuation<R, B, E>,
    ) -> ErrorContinuation<R, C, E>
    where
        A: Fn(B) -> C + Clone,
    {
        ErrorContinuation::new(
            move |on_success: SuccessFunction<C, R>, on_failure: FailureFunction<E, R>| {
                let argument = argument.clone();
                let on_failure_for_argument = Rc::clone(&on_failure);
                self.run_shared(
                    Rc::new(move |function: A| {
                        let on_success = Rc::clone(&on_success);
                        argument.run_shared(
                            Rc::new(move |value: B| on_success(function(value))),
                            Rc::clone(&on_failure_for_argument),
                        )
                    }),
                    on_failure,
                )
            },
        )
    }

    /// Intercepts a failure with a handler producing a new computation.
    ///
    /// The handler is applied to the error and its computation runs
    /// with the original continuation pair, so the handler may itself
    /// fail. A successful computation is unaffected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let recovered: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::fail("bad".to_string())
    ///         .recover(|e| ErrorContinuation::pure(e.len() as i32));
    /// assert_eq!(recovered.into_result(), Ok(3));
    /// ```
    pub fn recover<H>(self, handler: H) -> Self
    where
        H: Fn(E) -> Self + 'static,
    {
        let handler = Rc::new(handler);
        Self::new(
            move |on_success: SuccessFunction<A, R>, on_failure: FailureFunction<E, R>| {
                let handler = Rc::clone(&handler);
                let on_success_for_handler = Rc::clone(&on_success);
                self.run_shared(
                    on_success,
                    Rc::new(move |error: E| {
                        handler(error).run_shared(
                            Rc::clone(&on_success_for_handler),
                            Rc::clone(&on_failure),
                        )
                    }),
                )
            },
        )
    }

    /// The computation that always fails with no payload.
    ///
    /// This is the identity element for [`or_else`](Self::or_else);
    /// "no payload" is modeled as the error type's default value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let nothing: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::empty();
    /// assert_eq!(nothing.into_result(), Err(String::new()));
    /// ```
    pub fn empty() -> Self
    where
        E: Default,
    {
        Self::new(move |_on_success, on_failure| on_failure(E::default()))
    }

    /// Tries an alternative computation if this one fails.
    ///
    /// First success wins: on success of `self` the alternative never
    /// runs; on failure the error is discarded and the alternative runs
    /// with the original continuation pair. Only if both fail does the
    /// failure continuation fire, with the alternative's error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let fallback: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::fail("first".to_string())
    ///         .or_else(ErrorContinuation::pure(2));
    /// assert_eq!(fallback.into_result(), Ok(2));
    /// ```
    #[must_use]
    pub fn or_else(self, alternative: Self) -> Self {
        Self::new(
            move |on_success: SuccessFunction<A, R>, on_failure: FailureFunction<E, R>| {
                let alternative = alternative.clone();
                let on_success_for_alternative = Rc::clone(&on_success);
                self.run_shared(
                    on_success,
                    Rc::new(move |_error: E| {
                        alternative.run_shared(
                            Rc::clone(&on_success_for_alternative),
                            Rc::clone(&on_failure),
                        )
                    }),
                )
            },
        )
    }
}

impl<A: 'static, E: 'static> ErrorContinuation<Result<A, E>, A, E> {
    /// Runs the computation to a `Result`, the natural observation of
    /// the two channels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::ErrorContinuation;
    ///
    /// let success: ErrorContinuation<Result<i32, String>, i32, String> =
    ///     ErrorContinuation::pure(42);
    /// assert_eq!(success.into_result(), Ok(42));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` with the propagated error when the computation
    /// fails.
    pub fn into_result(self) -> Result<A, E> {
        self.run(Ok, Err)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<R, A, E> std::fmt::Debug for ErrorContinuation<R, A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ErrorContinuation")
            .finish_non_exhaustive()
    }
}

// The representation is Rc-based; sharing across threads is denied.
static_assertions::assert_not_impl_any!(ErrorContinuation<i32, i32, String>: Send, Sync);
