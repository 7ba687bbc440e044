//! Error-handling capability.
//!
//! This module provides the [`MonadError`] type class for throwing and
//! catching errors as values, its [`MonadErrorExt`] extension for
//! error-type transformation, and the free dispatch functions
//! [`throw_error`] / [`catch_error`].
//!
//! The CPS counterpart of this capability lives on
//! [`ErrorContinuation`](crate::control::ErrorContinuation), whose
//! `fail` / `recover` pair follows the same laws with observational
//! equality.
//!
//! # Examples
//!
//! ```rust
//! use lambent::effect::MonadError;
//!
//! let failing: Result<i32, String> = <Result<i32, String>>::throw_error("bad".to_string());
//! let recovered = <Result<i32, String>>::catch_error(failing, |e| Ok(e.len() as i32));
//! assert_eq!(recovered, Ok(3));
//! ```

mod monad_error;

pub use monad_error::{ErrorOf, MonadError, MonadErrorExt, catch_error, throw_error};
