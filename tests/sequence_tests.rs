//! Integration tests for the Sequencer.
//!
//! Covers left-to-right threading, first-failure short-circuiting with
//! instrumented steps, the equivalence of the composed computation and
//! the iterative driver, and long chains.

#![cfg(feature = "control")]

use lambent::control::{ErrorContinuation, Sequencer, SequencerStep, sequence};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Steps = Sequencer<Result<i32, String>, i32, String>;

#[rstest]
fn empty_sequencer_yields_the_initial_value() {
    let sequencer: Steps = Sequencer::new();
    assert_eq!(sequencer.compose(7).into_result(), Ok(7));
    assert_eq!(sequencer.run(7), Ok(7));
}

#[rstest]
fn steps_thread_the_success_value_left_to_right() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let first_log = Rc::clone(&order);
    let second_log = Rc::clone(&order);

    let sequencer: Steps = Sequencer::new()
        .step(move |x| {
            first_log.borrow_mut().push(("first", x));
            ErrorContinuation::pure(x + 1)
        })
        .step(move |x| {
            second_log.borrow_mut().push(("second", x));
            ErrorContinuation::pure(x * 10)
        });

    assert_eq!(sequencer.run(1), Ok(20));
    assert_eq!(*order.borrow(), vec![("first", 1), ("second", 2)]);
}

#[rstest]
fn failing_step_fires_error_continuation_once_and_skips_the_rest() {
    let third_ran = Rc::new(Cell::new(false));
    let error_count = Rc::new(Cell::new(0));
    let observer = Rc::clone(&third_ran);

    let sequencer: Steps = Sequencer::new()
        .step(|x| ErrorContinuation::pure(x + 1))
        .step(|_| ErrorContinuation::fail("e".to_string()))
        .step(move |x| {
            observer.set(true);
            ErrorContinuation::pure(x * 2)
        });

    let error_observer = Rc::clone(&error_count);
    let result = sequencer.compose(1).run(Ok, move |error| {
        error_observer.set(error_observer.get() + 1);
        Err(error)
    });

    assert_eq!(result, Err("e".to_string()));
    assert_eq!(error_count.get(), 1, "the error continuation fires exactly once");
    assert!(!third_ran.get(), "steps after the failure must never run");
}

#[rstest]
fn compose_and_run_agree_for_success_and_failure() {
    let sequencer: Steps = Sequencer::new()
        .step(|x| ErrorContinuation::pure(x + 1))
        .step(|x| {
            if x % 2 == 0 {
                ErrorContinuation::pure(x / 2)
            } else {
                ErrorContinuation::fail(format!("odd: {x}"))
            }
        })
        .step(|x| ErrorContinuation::pure(x * 100));

    for initial in [-3, -2, -1, 0, 1, 2, 3, 41] {
        assert_eq!(
            sequencer.run(initial),
            sequencer.compose(initial).into_result(),
            "compose and run diverge for initial value {initial}"
        );
    }
}

#[rstest]
fn run_drives_long_chains_iteratively() {
    let mut sequencer: Steps = Sequencer::new();
    for _ in 0..50_000 {
        sequencer = sequencer.step(|x| ErrorContinuation::pure(x + 1));
    }
    assert_eq!(sequencer.run(0), Ok(50_000));
}

#[rstest]
fn recover_inside_a_step_resumes_the_chain() {
    let sequencer: Steps = Sequencer::new()
        .step(|x| {
            ErrorContinuation::fail(format!("lost {x}"))
                .recover(|e| ErrorContinuation::pure(i32::try_from(e.len()).unwrap_or(0)))
        })
        .step(|x| ErrorContinuation::pure(x * 2));

    // "lost 1" has 6 characters, recovered into the chain.
    assert_eq!(sequencer.run(1), Ok(12));
}

#[rstest]
fn sequence_free_function_matches_the_builder() {
    let steps: Vec<SequencerStep<Result<i32, String>, i32, String>> = vec![
        Rc::new(|x| ErrorContinuation::pure(x + 1)),
        Rc::new(|x| ErrorContinuation::pure(x * 2)),
    ];
    let builder: Steps = Sequencer::new()
        .step(|x| ErrorContinuation::pure(x + 1))
        .step(|x| ErrorContinuation::pure(x * 2));

    assert_eq!(
        sequence(steps, 20).into_result(),
        builder.compose(20).into_result()
    );
}

#[rstest]
fn composed_computation_is_reusable() {
    let sequencer: Steps = Sequencer::new().step(|x| ErrorContinuation::pure(x + 1));
    let computation = sequencer.compose(1);

    assert_eq!(computation.clone().into_result(), Ok(2));
    assert_eq!(computation.run(|x| Ok(x * 10), Err), Ok(20));
}
