//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! A trait cannot abstract over `Option<_>` itself, only over `Option<A>`
//! for some `A`. [`TypeConstructor`] recovers the missing piece: given
//! `Option<A>`, `WithType<B>` names `Option<B>`.
//!
//! ```rust
//! use adequate::typeclass::TypeConstructor;
//!
//! type Lengths = <Vec<String> as TypeConstructor>::WithType<usize>;
//! let lengths: Lengths = vec![3, 4];
//! assert_eq!(lengths.len(), 2);
//! ```

/// A type constructor applied to `Inner`, able to name itself applied to
/// any other type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

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
