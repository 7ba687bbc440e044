//! Capability traits for functional programming abstractions.
//!
//! This module provides the capability hierarchy that the rest of the
//! crate is written against:
//!
//! - [`Functor`]: Mapping over container values
//! - [`FunctorMut`]: Mapping with mutable functions for multi-element containers
//! - [`Applicative`]: Lifting values and combining independent computations
//! - [`Monad`]: Sequencing computations with dependency
//! - [`Comonad`]: Extracting values and extending context-aware functions
//! - [`Alternative`]: Failure identity and first-success choice
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types; the traits are expressed
//! through [`TypeConstructor`], a Generic-Associated-Type emulation.
//!
//! ## Fixture Types
//!
//! - [`Identity`]: the simplest implementor of the whole hierarchy
//! - [`Stream`]: a non-empty sequence with comonadic "tails" extension
//! - `Option`, `Result`, `Vec`, `Box`: standard containers with
//!   instances (for `Vec`, through the `*Vec` extension traits)
//!
//! ## Free Dispatch
//!
//! Every operation is also callable function-first through
//! [`dispatch`].
//!
//! # Examples
//!
//! ```rust
//! use lambent::typeclass::{Alternative, Functor, Monad};
//!
//! let result = Some(5)
//!     .fmap(|n| n * 2)
//!     .flat_map(|n| if n > 5 { Some(n) } else { None })
//!     .alt(Some(0));
//! assert_eq!(result, Some(10));
//! ```

mod alternative;
mod applicative;
mod comonad;
pub mod dispatch;
mod functor;
mod higher;
mod identity;
mod monad;
mod stream;

pub use alternative::{Alternative, AlternativeVec};
pub use applicative::{Applicative, ApplicativeVec};
pub use comonad::Comonad;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use stream::Stream;
