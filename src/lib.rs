//! # lambent
//!
//! Algebraic capability traits and continuation-passing control
//! structures for Rust.
//!
//! ## Overview
//!
//! This library provides a small hierarchy of capability traits together
//! with concrete value types that implement subsets of it:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Comonad, Alternative
//! - **Fixtures**: `Identity`, `Option`, `Either`, `Vec`, `Stream` -
//!   simple containers that the law test suites are written against
//! - **CPS Control**: `Continuation` with `call_cc` and the delimited
//!   pair `reset`/`shift`, and `ErrorContinuation` with a dedicated
//!   error channel
//! - **Sequencing**: `Sequencer` for left-to-right Kleisli composition
//!   over `ErrorContinuation`
//! - **Error Capability**: `MonadError` for throwing and catching errors
//!   as values
//!
//! ## Feature Flags
//!
//! - `typeclass`: Capability traits and fixture types
//! - `control`: CPS control structures (`Continuation`, `ErrorContinuation`,
//!   `Sequencer`, `Either`)
//! - `effect`: Error-handling capability (`MonadError`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambent::control::Continuation;
//!
//! let cont: Continuation<i32, i32> = Continuation::pure(21);
//! let result = cont.flat_map(|x| Continuation::pure(x * 2)).run(|x| x);
//! assert_eq!(result, 42);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambent::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
