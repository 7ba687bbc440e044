//! Continuation monad for continuation-passing style (CPS).
//!
//! This module provides the `Continuation<R, A>` type, which abstracts
//! over continuation-passing style programming. A continuation
//! represents "the rest of the computation" and can be captured,
//! stored, and invoked as a first-class value.
//!
//! Continuation-passing style expresses control flow patterns that are
//! otherwise awkward to write directly:
//!
//! - Early return / exit (`call_cc`)
//! - Delimited control (`reset` / `shift`)
//! - Backtracking and resumption
//!
//! Captured continuations are **multi-shot**: the escape function
//! handed out by [`Continuation::call_cc`] and the continuation
//! captured by [`Continuation::shift`] may be invoked any number of
//! times, each invocation independently completing the surrounding
//! computation. This is why the representation is built from shared
//! `Rc<dyn Fn>` values rather than one-shot boxed closures, and why
//! lifted values carry a `Clone` bound.
//!
//! Constructing a continuation never runs anything: a
//! `Continuation` is an inert description until [`Continuation::run`]
//! supplies the final continuation.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use lambent::control::Continuation;
//!
//! let cont: Continuation<i32, i32> = Continuation::pure(42);
//! let result = cont.run(|x| x * 2);
//! assert_eq!(result, 84);
//! ```
//!
//! ## Early Return with `call_cc`
//!
//! ```rust
//! use lambent::control::Continuation;
//!
//! let cont = Continuation::<i32, i32>::call_cc::<i32, _>(|exit| {
//!     Continuation::pure(1).flat_map(move |x| {
//!         if x > 10 {
//!             exit(x * 100) // Early return
//!         } else {
//!             Continuation::pure(x + 5)
//!         }
//!     })
//! });
//!
//! assert_eq!(cont.run(|x| x), 6); // 1 is not > 10, so 1 + 5 = 6
//! ```

use std::rc::Rc;

/// A shared continuation function that takes a value and produces the
/// final result.
pub type ContinuationFunction<A, R> = Rc<dyn Fn(A) -> R>;

/// A shared CPS function that takes a continuation and produces the
/// final result.
type CpsFunction<A, R> = Rc<dyn Fn(ContinuationFunction<A, R>) -> R>;

/// A continuation monad representing computations in CPS.
///
/// `Continuation<R, A>` encapsulates a computation that:
/// - Produces a value of type `A`
/// - When given a continuation `(A -> R)`, produces a final result of
///   type `R`
///
/// The internal representation is essentially `(A -> R) -> R`.
/// Invoking that underlying function (through [`Continuation::run`]) is
/// the only way to observe or trigger the computation's effect;
/// construction and composition allocate new inert values. `Clone` is
/// cheap (a shared pointer copy), which is what multi-shot continuation
/// capture builds on.
///
/// # Type Parameters
///
/// * `R` - The type of the final result of the whole computation
/// * `A` - The type of the intermediate value this computation produces
///
/// # Laws
///
/// `Continuation` forms a monad, with equality read observationally
/// (same result for the same supplied continuation):
///
/// - **Left Identity**: `Continuation::pure(a).flat_map(f).run(k) == f(a).run(k)`
/// - **Right Identity**: `m.flat_map(Continuation::pure).run(k) == m.run(k)`
/// - **Associativity**: `m.flat_map(f).flat_map(g).run(k) == m.flat_map(|x| f(x).flat_map(g)).run(k)`
///
/// # Examples
///
/// ```rust
/// use lambent::control::Continuation;
///
/// // k(21) returns what the final continuation produces for 21,
/// // and the computation doubles it afterwards.
/// let double: Continuation<i32, i32> = Continuation::new(|k| k(21) * 2);
/// assert_eq!(double.run(|x| x), 42);
/// ```
pub struct Continuation<R, A> {
    /// The CPS function: given a continuation `(A -> R)`, produces `R`.
    run_continuation: CpsFunction<A, R>,
}

impl<R, A> Clone for Continuation<R, A> {
    fn clone(&self) -> Self {
        Self {
            run_continuation: Rc::clone(&self.run_continuation),
        }
    }
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Creates a new continuation from a function `(A -> R) -> R`.
    ///
    /// # Arguments
    ///
    /// * `run` - A function that receives the continuation and produces
    ///   the final result
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<String, i32> = Continuation::new(|k| k(42));
    /// assert_eq!(cont.run(|x| x.to_string()), "42");
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(ContinuationFunction<A, R>) -> R + 'static,
    {
        Self {
            run_continuation: Rc::new(run),
        }
    }

    /// Lifts a pure value into the continuation monad.
    ///
    /// The computation immediately invokes its continuation with the
    /// value. The `Clone` bound exists because a multi-shot capture may
    /// run the computation more than once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(42);
    /// assert_eq!(cont.run(|x| x), 42);
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |continuation| continuation(value.clone()))
    }

    /// Runs the computation with the given final continuation.
    ///
    /// # Arguments
    ///
    /// * `continuation` - The final continuation to apply
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<String, i32> = Continuation::pure(42);
    /// assert_eq!(cont.run(|x| format!("the answer is {x}")), "the answer is 42");
    /// ```
    pub fn run<K>(self, continuation: K) -> R
    where
        K: Fn(A) -> R + 'static,
    {
        (self.run_continuation)(Rc::new(continuation))
    }

    /// Runs the computation with an already-shared continuation,
    /// without consuming the computation.
    fn run_shared(&self, continuation: ContinuationFunction<A, R>) -> R {
        (self.run_continuation)(continuation)
    }

    /// Applies a function to the result of this computation.
    ///
    /// This is the functor map: when run with continuation `k`, the
    /// original computation runs with a continuation that applies
    /// `function` before forwarding to `k`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// assert_eq!(cont.map(|x| x * 2).run(|x| x), 42);
    /// ```
    pub fn map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: Fn(A) -> B + 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |continuation: ContinuationFunction<B, R>| {
            let function = Rc::clone(&function);
            self.run_shared(Rc::new(move |value: A| continuation(function(value))))
        })
    }

    /// Sequences this computation into a function returning the next
    /// one.
    ///
    /// This is the monadic bind: the original computation runs with a
    /// continuation that applies `function` to the yielded value and
    /// runs the resulting computation with the outer continuation.
    /// Sequencing is strictly outside-in, left-to-right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(21);
    /// let result = cont.flat_map(|x| Continuation::pure(x * 2));
    /// assert_eq!(result.run(|x| x), 42);
    /// ```
    pub fn flat_map<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: Fn(A) -> Continuation<R, B> + 'static,
    {
        let function = Rc::new(function);
        Continuation::new(move |continuation: ContinuationFunction<B, R>| {
            let function = Rc::clone(&function);
            self.run_shared(Rc::new(move |value: A| {
                function(value).run_shared(Rc::clone(&continuation))
            }))
        })
    }

    /// Alias for `flat_map`.
    #[inline]
    pub fn and_then<B: 'static, F>(self, function: F) -> Continuation<R, B>
    where
        F: Fn(A) -> Continuation<R, B> + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the result of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let first: Continuation<i32, &str> = Continuation::pure("ignored");
    /// let second: Continuation<i32, i32> = Continuation::pure(42);
    /// assert_eq!(first.then(second).run(|x| x), 42);
    /// ```
    #[inline]
    #[must_use]
    pub fn then<B: 'static>(self, next: Continuation<R, B>) -> Continuation<R, B> {
        self.flat_map(move |_| next.clone())
    }

    /// Applies a contained function to the result of another
    /// computation.
    ///
    /// `self` yields the function, `argument` yields its input; `self`
    /// runs first, then `argument`, then the application result is
    /// forwarded to the outer continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let function: Continuation<i32, fn(i32) -> i32> = Continuation::pure(|x| x * 2);
    /// let applied = function.apply(Continuation::pure(21));
    /// assert_eq!(applied.run(|x| x), 42);
    /// ```
    pub fn apply<B: 'static, C: 'static>(self, argument: Continuation<R, B>) -> Continuation<R, C>
    where
        A: Fn(B) -> C + Clone,
    {
        Continuation::new(move |continuation: ContinuationFunction<C, R>| {
            let argument = argument.clone();
            self.run_shared(Rc::new(move |function: A| {
                let continuation = Rc::clone(&continuation);
                argument.run_shared(Rc::new(move |value: B| continuation(function(value))))
            }))
        })
    }

    /// Captures the current continuation (call/cc).
    ///
    /// `function` receives an escape function. Invoking
    /// `escape(value)` produces a computation that ignores whatever
    /// continuation it is later run with and forwards `value` directly
    /// to the continuation captured at the `call_cc` boundary: the
    /// remainder of the computation built after the escape point is
    /// abandoned. If the escape is never invoked, `call_cc(f)` behaves
    /// exactly as the computation `f` produced.
    ///
    /// The escape is multi-shot: it may be stored and invoked any
    /// number of times, each invocation independently completing the
    /// captured continuation.
    ///
    /// # Type Parameters
    ///
    /// * `B` - The value type of the abandoned computation following an
    ///   escape; unconstrained when the escape is not invoked, so call
    ///   sites that ignore the escape annotate it
    ///
    /// # Examples
    ///
    /// ## Early Return
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont = Continuation::<i32, i32>::call_cc::<i32, _>(|exit| {
    ///     Continuation::pure(20).flat_map(move |x| {
    ///         if x > 10 {
    ///             exit(x * 100) // Early return with 2000
    ///         } else {
    ///             Continuation::pure(x + 5)
    ///         }
    ///     })
    /// });
    ///
    /// assert_eq!(cont.run(|x| x), 2000);
    /// ```
    pub fn call_cc<B: 'static, F>(function: F) -> Self
    where
        F: Fn(Rc<dyn Fn(A) -> Continuation<R, B>>) -> Self + 'static,
        A: Clone,
    {
        Self::new(move |continuation: ContinuationFunction<A, R>| {
            let captured = Rc::clone(&continuation);
            let escape: Rc<dyn Fn(A) -> Continuation<R, B>> = Rc::new(move |value: A| {
                let captured = Rc::clone(&captured);
                Continuation::new(move |_abandoned: ContinuationFunction<B, R>| {
                    captured(value.clone())
                })
            });
            function(escape).run_shared(continuation)
        })
    }
}

impl<A: 'static> Continuation<A, A> {
    /// Runs the computation to completion with the identity
    /// continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let cont: Continuation<i32, i32> = Continuation::pure(7);
    /// assert_eq!(cont.evaluate(), 7);
    /// ```
    pub fn evaluate(self) -> A {
        self.run(|value| value)
    }
}

impl<R: 'static, A: 'static> Continuation<R, A> {
    /// Delimits a computation.
    ///
    /// When the surrounding computation runs, `computation` is
    /// evaluated to completion with the identity continuation and the
    /// plain result is re-lifted into the surrounding computation.
    /// Code inside `computation` may [`shift`](Self::shift), but the
    /// captured continuation only extends up to this delimiter, never
    /// beyond it.
    ///
    /// Constructing the delimiter has no observable effect; the body
    /// runs only when the result is run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// let delimited: Continuation<String, i32> =
    ///     Continuation::reset(Continuation::pure(20).map(|x| x + 1));
    /// assert_eq!(delimited.run(|x| x.to_string()), "21");
    /// ```
    pub fn reset(computation: Continuation<A, A>) -> Self {
        Self::new(move |continuation: ContinuationFunction<A, R>| {
            continuation(computation.run_shared(Rc::new(|value| value)))
        })
    }

    /// Captures the continuation up to the nearest enclosing
    /// [`reset`](Self::reset).
    ///
    /// The captured continuation is handed to `function` as a plain
    /// shared function `A -> R` with no receiver dependency; `function`
    /// may invoke it zero, one, or many times, each invocation
    /// independently running the delimited remainder to completion and
    /// producing a plain result. The computation `function` returns is
    /// evaluated with the identity continuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::Continuation;
    ///
    /// // The captured continuation is invoked twice; both completions
    /// // are combined into the delimited result.
    /// let both: Continuation<i32, i32> =
    ///     Continuation::reset(Continuation::shift(|k| Continuation::pure(k(1) + k(2))));
    /// assert_eq!(both.run(|x| x), 3);
    /// ```
    pub fn shift<F>(function: F) -> Self
    where
        F: Fn(ContinuationFunction<A, R>) -> Continuation<R, R> + 'static,
    {
        Self::new(move |continuation: ContinuationFunction<A, R>| {
            function(Rc::clone(&continuation)).run_shared(Rc::new(|result| result))
        })
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<R, A> std::fmt::Debug for Continuation<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Continuation")
            .finish_non_exhaustive()
    }
}

// The representation is Rc-based; sharing across threads is denied.
static_assertions::assert_not_impl_any!(Continuation<i32, i32>: Send, Sync);
