//! Control structures for continuation-passing programming.
//!
//! This module provides the CPS core of the crate:
//!
//! - [`Either`]: A value that can be one of two types (failure/success)
//! - [`Continuation`]: Continuation monad with `call_cc` and the
//!   delimited pair `reset`/`shift`
//! - [`ErrorContinuation`]: CPS with success and error channels
//! - [`Sequencer`]: Left-to-right Kleisli composition over
//!   `ErrorContinuation`
//!
//! # Examples
//!
//! ## Early return
//!
//! ```rust
//! use lambent::control::Continuation;
//!
//! let cont = Continuation::<i32, i32>::call_cc::<i32, _>(|exit| {
//!     exit(5).flat_map(|x| Continuation::pure(x + 1))
//! });
//! // The escape abandons the rest of the computation.
//! assert_eq!(cont.run(|x| x), 5);
//! ```
//!
//! ## Error channel
//!
//! ```rust
//! use lambent::control::{ErrorContinuation, Sequencer};
//!
//! let pipeline: Sequencer<Result<i32, String>, i32, String> = Sequencer::new()
//!     .step(|x| ErrorContinuation::pure(x * 2))
//!     .step(|x| {
//!         if x < 100 {
//!             ErrorContinuation::pure(x)
//!         } else {
//!             ErrorContinuation::fail("overflow".to_string())
//!         }
//!     });
//!
//! assert_eq!(pipeline.run(21), Ok(42));
//! assert_eq!(pipeline.run(70), Err("overflow".to_string()));
//! ```

mod continuation;
mod either;
mod error_continuation;
mod sequence;

pub use continuation::{Continuation, ContinuationFunction};
pub use either::Either;
pub use error_continuation::{ErrorContinuation, FailureFunction, SuccessFunction};
pub use sequence::{Sequencer, SequencerStep, sequence};
