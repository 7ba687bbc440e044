//! Integration tests for the ErrorContinuation monad.
//!
//! Covers the two-channel behaviors: which continuation fires, when
//! handlers run, and how failures thread through composed pipelines.

#![cfg(feature = "control")]

use lambent::control::ErrorContinuation;
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Computation = ErrorContinuation<Result<i32, String>, i32, String>;

// =============================================================================
// Channel selection
// =============================================================================

#[rstest]
fn success_invokes_only_the_success_continuation() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let success_sink = Rc::clone(&fired);
    let failure_sink = Rc::clone(&fired);

    let computation: ErrorContinuation<i32, i32, String> = ErrorContinuation::pure(42);
    let result = computation.run(
        move |x| {
            success_sink.borrow_mut().push("success");
            x
        },
        move |_| {
            failure_sink.borrow_mut().push("failure");
            -1
        },
    );

    assert_eq!(result, 42);
    assert_eq!(*fired.borrow(), vec!["success"]);
}

#[rstest]
fn failure_invokes_only_the_failure_continuation() {
    let fired = Rc::new(RefCell::new(Vec::new()));
    let success_sink = Rc::clone(&fired);
    let failure_sink = Rc::clone(&fired);

    let computation: ErrorContinuation<i32, i32, String> =
        ErrorContinuation::fail("bad".to_string());
    let result = computation.run(
        move |x| {
            success_sink.borrow_mut().push("success");
            x
        },
        move |_| {
            failure_sink.borrow_mut().push("failure");
            -1
        },
    );

    assert_eq!(result, -1);
    assert_eq!(*fired.borrow(), vec!["failure"]);
}

// =============================================================================
// Propagation through combinators
// =============================================================================

#[rstest]
fn errors_pass_through_map_unmodified() {
    let failed: Computation = ErrorContinuation::fail("original".to_string());
    assert_eq!(
        failed.map(|x| x + 1).map(|x| x * 2).into_result(),
        Err("original".to_string())
    );
}

#[rstest]
fn flat_map_function_never_runs_after_failure() {
    let invocations = Rc::new(Cell::new(0));
    let observer = Rc::clone(&invocations);

    let pipeline: Computation = ErrorContinuation::pure(1)
        .flat_map(|x| ErrorContinuation::pure(x + 1))
        .flat_map(|_| ErrorContinuation::fail("stop".to_string()))
        .flat_map(move |x: i32| {
            observer.set(observer.get() + 1);
            ErrorContinuation::pure(x * 10)
        });

    assert_eq!(pipeline.into_result(), Err("stop".to_string()));
    assert_eq!(invocations.get(), 0);
}

#[rstest]
fn apply_propagates_argument_error_without_applying() {
    let function: ErrorContinuation<Result<i32, String>, fn(i32) -> i32, String> =
        ErrorContinuation::pure(|x| x * 2);
    let argument: Computation = ErrorContinuation::fail("no argument".to_string());

    assert_eq!(
        function.apply(argument).into_result(),
        Err("no argument".to_string())
    );
}

#[rstest]
fn apply_with_failing_function_side_skips_argument() {
    let argument_ran = Rc::new(Cell::new(false));
    let observer = Rc::clone(&argument_ran);

    let function: ErrorContinuation<Result<i32, String>, fn(i32) -> i32, String> =
        ErrorContinuation::fail("no function".to_string());
    let argument: Computation = ErrorContinuation::new(move |on_success, _on_failure| {
        observer.set(true);
        on_success(1)
    });

    assert_eq!(
        function.apply(argument).into_result(),
        Err("no function".to_string())
    );
    assert!(!argument_ran.get());
}

// =============================================================================
// Recovery
// =============================================================================

#[rstest]
fn recover_converts_error_back_to_success() {
    let recovered: Computation = ErrorContinuation::fail("bad".to_string())
        .recover(|e| ErrorContinuation::pure(i32::try_from(e.len()).unwrap_or(0)));
    assert_eq!(recovered.into_result(), Ok(3));
}

#[rstest]
fn recover_chain_applies_handlers_in_order() {
    let recovered: Computation = ErrorContinuation::fail("first".to_string())
        .recover(|e| ErrorContinuation::fail(format!("{e}+second")))
        .recover(|e| ErrorContinuation::pure(i32::try_from(e.len()).unwrap_or(0)));
    assert_eq!(recovered.into_result(), Ok(12));
}

#[rstest]
fn recover_handler_never_runs_on_success() {
    let handler_ran = Rc::new(Cell::new(false));
    let observer = Rc::clone(&handler_ran);

    let computation: Computation = ErrorContinuation::pure(1).recover(move |_| {
        observer.set(true);
        ErrorContinuation::pure(-1)
    });

    assert_eq!(computation.into_result(), Ok(1));
    assert!(!handler_ran.get());
}

// =============================================================================
// Alternatives
// =============================================================================

#[rstest]
fn or_else_tries_alternatives_until_first_success() {
    let attempted = Rc::new(RefCell::new(Vec::new()));

    let attempt = |name: &'static str, outcome: Result<i32, String>| -> Computation {
        let log = Rc::clone(&attempted);
        ErrorContinuation::new(move |on_success, on_failure| {
            log.borrow_mut().push(name);
            match outcome.clone() {
                Ok(value) => on_success(value),
                Err(error) => on_failure(error),
            }
        })
    };

    let computation = attempt("first", Err("e1".to_string()))
        .or_else(attempt("second", Ok(2)))
        .or_else(attempt("third", Ok(3)));

    assert_eq!(computation.into_result(), Ok(2));
    assert_eq!(*attempted.borrow(), vec!["first", "second"]);
}

#[rstest]
fn empty_or_else_chain_keeps_last_error_when_all_fail() {
    let computation: Computation = ErrorContinuation::empty()
        .or_else(ErrorContinuation::fail("second".to_string()))
        .or_else(ErrorContinuation::fail("third".to_string()));
    assert_eq!(computation.into_result(), Err("third".to_string()));
}

// =============================================================================
// Construction and re-running
// =============================================================================

#[rstest]
fn construction_performs_no_effect_until_run() {
    let effects = Rc::new(Cell::new(0));
    let observer = Rc::clone(&effects);

    let computation: Computation = ErrorContinuation::new(move |on_success, _on_failure| {
        observer.set(observer.get() + 1);
        on_success(1)
    });
    let composed = computation
        .map(|x| x + 1)
        .recover(|_| ErrorContinuation::pure(0))
        .or_else(ErrorContinuation::pure(-1));

    assert_eq!(effects.get(), 0);
    assert_eq!(composed.into_result(), Ok(2));
    assert_eq!(effects.get(), 1);
}

#[rstest]
fn cloned_computations_observe_independent_runs() {
    let runs = Rc::new(Cell::new(0));
    let observer = Rc::clone(&runs);

    let computation: Computation = ErrorContinuation::new(move |on_success, _on_failure| {
        observer.set(observer.get() + 1);
        on_success(7)
    });
    let copy = computation.clone();

    assert_eq!(computation.into_result(), Ok(7));
    assert_eq!(copy.map(|x| x * 2).into_result(), Ok(14));
    assert_eq!(runs.get(), 2);
}
