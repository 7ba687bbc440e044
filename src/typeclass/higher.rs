//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native Higher-Kinded Types: there is no way to write a
//! trait abstracting over `Option<_>` or `Vec<_>` as bare type
//! constructors. This module emulates HKT with a Generic Associated
//! Type, which is enough to express the capability traits (Functor,
//! Applicative, Monad, ...) generically.
//!
//! # Example
//!
//! ```rust
//! use lambent::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = rebuild(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor.
///
/// A `TypeConstructor` knows the type parameter it is currently applied
/// to (`Inner`) and how to name itself applied to a different parameter
/// (`WithType<B>`). The capability traits build on this to express
/// signatures such as `fmap: F<A> -> F<B>`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` should be the
/// same type as `F` (up to type equality).
///
/// # Example
///
/// ```rust
/// use lambent::typeclass::TypeConstructor;
///
/// fn takes_int_container<T: TypeConstructor<Inner = i32>>() {}
/// takes_int_container::<Option<i32>>();
/// takes_int_container::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Option<i32>` this is `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Option<i32>`, `WithType<String>` is `Option<String>`. The
    /// `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// for further transformations.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}
