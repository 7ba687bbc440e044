//! Sequencer - left-to-right Kleisli composition over
//! [`ErrorContinuation`].
//!
//! A [`Sequencer`] owns an ordered list of steps, each a function from
//! the previous step's success value to a new
//! [`ErrorContinuation`]. Composing them builds the single computation
//! `f1(initial).flat_map(f2).flat_map(f3)...`: strictly left-to-right,
//! stopping at the first failure, threading only the success value
//! forward.
//!
//! Long chains composed through `flat_map` evaluate with call depth
//! proportional to their length; [`Sequencer::run`] is the iterative
//! driver for such chains, running each step to a plain `Result`
//! before the next begins so the stack depth is bounded per step.
//!
//! # Examples
//!
//! ```rust
//! use lambent::control::{ErrorContinuation, Sequencer};
//!
//! let sequencer: Sequencer<Result<i32, String>, i32, String> = Sequencer::new()
//!     .step(|x| ErrorContinuation::pure(x + 1))
//!     .step(|x| ErrorContinuation::pure(x * 2));
//!
//! assert_eq!(sequencer.compose(20).into_result(), Ok(42));
//! assert_eq!(sequencer.run(20), Ok(42));
//! ```

use std::rc::Rc;

use super::error_continuation::ErrorContinuation;

/// A shared sequencing step: a function from the previous success
/// value to the next computation.
pub type SequencerStep<R, A, E> = Rc<dyn Fn(A) -> ErrorContinuation<R, A, E>>;

/// An ordered list of Kleisli steps over [`ErrorContinuation`].
///
/// Steps share a single success type `A`: each one receives its
/// predecessor's success value and produces the next computation.
///
/// # Examples
///
/// ```rust
/// use lambent::control::{ErrorContinuation, Sequencer};
///
/// let validated: Sequencer<Result<i32, String>, i32, String> = Sequencer::new()
///     .step(|x| {
///         if x > 0 {
///             ErrorContinuation::pure(x)
///         } else {
///             ErrorContinuation::fail("not positive".to_string())
///         }
///     })
///     .step(|x| ErrorContinuation::pure(x * 10));
///
/// assert_eq!(validated.run(4), Ok(40));
/// assert_eq!(validated.run(-4), Err("not positive".to_string()));
/// ```
pub struct Sequencer<R, A, E> {
    steps: Vec<SequencerStep<R, A, E>>,
}

impl<R, A, E> Clone for Sequencer<R, A, E> {
    fn clone(&self) -> Self {
        Self {
            steps: self.steps.clone(),
        }
    }
}

impl<R: 'static, A: 'static, E: 'static> Default for Sequencer<R, A, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static, A: 'static, E: 'static> Sequencer<R, A, E> {
    /// Creates an empty sequencer.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to the end of the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::{ErrorContinuation, Sequencer};
    ///
    /// let sequencer: Sequencer<Result<i32, String>, i32, String> =
    ///     Sequencer::new().step(|x| ErrorContinuation::pure(x + 1));
    /// assert_eq!(sequencer.len(), 1);
    /// ```
    #[must_use]
    pub fn step<F>(mut self, function: F) -> Self
    where
        F: Fn(A) -> ErrorContinuation<R, A, E> + 'static,
    {
        self.steps.push(Rc::new(function));
        self
    }

    /// Returns the number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the sequencer has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Builds the composed computation from an initial success value.
    ///
    /// Equivalent to `f1(initial).flat_map(f2)...flat_map(fn)` (the
    /// lift of `initial` into a pure computation makes no observable
    /// difference, by the left identity law). The composition is
    /// strictly left-to-right: the first failing step short-circuits
    /// all later ones, which are never invoked.
    ///
    /// An empty sequencer composes to `pure(initial)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::{ErrorContinuation, Sequencer};
    ///
    /// let sequencer: Sequencer<Result<i32, String>, i32, String> = Sequencer::new()
    ///     .step(|x| ErrorContinuation::pure(x + 1))
    ///     .step(|x| ErrorContinuation::pure(x * 2));
    /// assert_eq!(sequencer.compose(20).into_result(), Ok(42));
    /// ```
    pub fn compose(&self, initial: A) -> ErrorContinuation<R, A, E>
    where
        A: Clone,
    {
        let mut computation = ErrorContinuation::pure(initial);
        for step in &self.steps {
            let step = Rc::clone(step);
            computation = computation.flat_map(move |value| step(value));
        }
        computation
    }
}

impl<A: 'static, E: 'static> Sequencer<Result<A, E>, A, E> {
    /// Runs the steps iteratively, observing each as a `Result`.
    ///
    /// Behaves exactly like running [`compose`](Self::compose) with
    /// `Ok`/`Err` continuations, but each step's computation is driven
    /// to completion before the next begins, so the call depth is
    /// bounded per step rather than by the chain length. Prefer this
    /// driver for long chains.
    ///
    /// # Errors
    ///
    /// Returns the first failing step's error; later steps are never
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambent::control::{ErrorContinuation, Sequencer};
    ///
    /// let sequencer: Sequencer<Result<i32, String>, i32, String> = Sequencer::new()
    ///     .step(|x| ErrorContinuation::pure(x + 1))
    ///     .step(|_| ErrorContinuation::fail("stop".to_string()))
    ///     .step(|x| ErrorContinuation::pure(x * 2));
    /// assert_eq!(sequencer.run(1), Err("stop".to_string()));
    /// ```
    pub fn run(&self, initial: A) -> Result<A, E> {
        let mut value = initial;
        for step in &self.steps {
            match step(value).into_result() {
                Ok(next) => value = next,
                Err(error) => return Err(error),
            }
        }
        Ok(value)
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<R, A, E> std::fmt::Debug for Sequencer<R, A, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Sequencer")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Composes an ordered collection of steps from an initial value.
///
/// Free-function spelling of [`Sequencer::compose`].
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use lambent::control::{sequence, ErrorContinuation, SequencerStep};
///
/// let steps: Vec<SequencerStep<Result<i32, String>, i32, String>> = vec![
///     Rc::new(|x| ErrorContinuation::pure(x + 1)),
///     Rc::new(|x| ErrorContinuation::pure(x * 2)),
/// ];
/// assert_eq!(sequence(steps, 20).into_result(), Ok(42));
/// ```
pub fn sequence<R, A, E, I>(steps: I, initial: A) -> ErrorContinuation<R, A, E>
where
    R: 'static,
    A: Clone + 'static,
    E: 'static,
    I: IntoIterator<Item = SequencerStep<R, A, E>>,
{
    let mut computation = ErrorContinuation::pure(initial);
    for step in steps {
        computation = computation.flat_map(move |value| step(value));
    }
    computation
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    type Steps = Sequencer<Result<i32, String>, i32, String>;

    #[rstest]
    fn sequencer_empty_composes_to_pure() {
        let sequencer: Steps = Sequencer::new();
        assert!(sequencer.is_empty());
        assert_eq!(sequencer.compose(7).into_result(), Ok(7));
        assert_eq!(sequencer.run(7), Ok(7));
    }

    #[rstest]
    fn sequencer_threads_success_left_to_right() {
        let sequencer: Steps = Sequencer::new()
            .step(|x| ErrorContinuation::pure(x + 1))
            .step(|x| ErrorContinuation::pure(x * 2));
        assert_eq!(sequencer.compose(20).into_result(), Ok(42));
    }

    #[rstest]
    fn sequencer_stops_at_first_failure() {
        let third_ran = Rc::new(Cell::new(false));
        let failure_count = Rc::new(Cell::new(0));
        let observer = Rc::clone(&third_ran);
        let sequencer: Steps = Sequencer::new()
            .step(|x| ErrorContinuation::pure(x + 1))
            .step(|_| ErrorContinuation::fail("e".to_string()))
            .step(move |x| {
                observer.set(true);
                ErrorContinuation::pure(x * 2)
            });

        let failure_observer = Rc::clone(&failure_count);
        let result = sequencer.compose(1).run(Ok, move |error| {
            failure_observer.set(failure_observer.get() + 1);
            Err(error)
        });

        assert_eq!(result, Err("e".to_string()));
        assert_eq!(failure_count.get(), 1);
        assert!(!third_ran.get());
    }

    #[rstest]
    fn sequencer_run_matches_compose() {
        let sequencer: Steps = Sequencer::new()
            .step(|x| ErrorContinuation::pure(x + 1))
            .step(|x| {
                if x > 10 {
                    ErrorContinuation::fail("too big".to_string())
                } else {
                    ErrorContinuation::pure(x * 3)
                }
            });

        for initial in [-5, 0, 9, 10, 50] {
            assert_eq!(sequencer.run(initial), sequencer.compose(initial).into_result());
        }
    }

    #[rstest]
    fn sequencer_run_handles_long_chains() {
        let mut sequencer: Steps = Sequencer::new();
        for _ in 0..10_000 {
            sequencer = sequencer.step(|x| ErrorContinuation::pure(x + 1));
        }
        assert_eq!(sequencer.run(0), Ok(10_000));
    }

    #[rstest]
    fn sequence_free_function_composes_steps() {
        let steps: Vec<SequencerStep<Result<i32, String>, i32, String>> = vec![
            Rc::new(|x| ErrorContinuation::pure(x + 1)),
            Rc::new(|x| ErrorContinuation::pure(x * 2)),
        ];
        assert_eq!(sequence(steps, 20).into_result(), Ok(42));
    }

    #[rstest]
    fn sequencer_clone_shares_steps() {
        let sequencer: Steps = Sequencer::new().step(|x| ErrorContinuation::pure(x + 1));
        let extended = sequencer.clone().step(|x| ErrorContinuation::pure(x * 2));
        assert_eq!(sequencer.len(), 1);
        assert_eq!(extended.len(), 2);
        assert_eq!(sequencer.run(1), Ok(2));
        assert_eq!(extended.run(1), Ok(4));
    }
}
