//! Natural transformations - structure-changing maps between contexts.
//!
//! A natural transformation turns `F<A>` into `G<A>` for every `A` without
//! looking at the values, so it commutes with `fmap`:
//!
//! ```text
//! transform(fa.fmap(f)) == transform(fa).fmap(f)
//! ```
//!
//! Each transformation is available as a marker type implementing
//! [`NaturalTransformation`] and as a plain function.
//!
//! ```rust
//! use adequate::natural::{NaturalTransformation, VecToOption, vec_to_option};
//! use adequate::typeclass::{Functor, FunctorMut};
//!
//! let words = vec!["fooo", "foo"];
//! let transform_then_map = vec_to_option(words.clone()).fmap(str::len);
//! let map_then_transform = VecToOption::transform(words.fmap_mut(str::len));
//!
//! assert_eq!(transform_then_map, Some(4));
//! assert_eq!(transform_then_map, map_then_transform);
//! ```
//!
//! Nothing here transforms out of a `Task`: its value is only reachable
//! through `.await`.

#[cfg(feature = "task")]
mod task;

#[cfg(feature = "task")]
pub use task::{identity_to_task, option_to_task, result_to_task};

use std::marker::PhantomData;

use crate::typeclass::Identity;

/// A family of functions `Source<A> -> Target<A>`, one for every `A`.
pub trait NaturalTransformation {
    /// The context transformed from.
    type Source<A>;

    /// The context transformed into.
    type Target<A>;

    /// Changes the context of `source`, keeping its values.
    fn transform<A>(source: Self::Source<A>) -> Self::Target<A>;
}

/// `Option` to `Vec`: `None` becomes `[]`, `Some(x)` becomes `[x]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionToVec;

impl NaturalTransformation for OptionToVec {
    type Source<A> = Option<A>;
    type Target<A> = Vec<A>;

    fn transform<A>(source: Option<A>) -> Vec<A> {
        source.into_iter().collect()
    }
}

/// `Vec` to `Option`, keeping the first element.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecToOption;

impl NaturalTransformation for VecToOption {
    type Source<A> = Vec<A>;
    type Target<A> = Option<A>;

    fn transform<A>(source: Vec<A>) -> Option<A> {
        source.into_iter().next()
    }
}

/// `Vec` to `Option`, keeping the last element.
#[derive(Debug, Clone, Copy, Default)]
pub struct VecLastToOption;

impl NaturalTransformation for VecLastToOption {
    type Source<A> = Vec<A>;
    type Target<A> = Option<A>;

    fn transform<A>(mut source: Vec<A>) -> Option<A> {
        source.pop()
    }
}

/// `Result<_, E>` to `Option`, discarding the error.
pub struct ResultToOption<E>(PhantomData<fn() -> E>);

impl<E> ResultToOption<E> {
    /// Creates the marker.
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for ResultToOption<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> NaturalTransformation for ResultToOption<E> {
    type Source<A> = Result<A, E>;
    type Target<A> = Option<A>;

    fn transform<A>(source: Result<A, E>) -> Option<A> {
        source.ok()
    }
}

/// `Identity` to `Option`: always `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityToOption;

impl NaturalTransformation for IdentityToOption {
    type Source<A> = Identity<A>;
    type Target<A> = Option<A>;

    fn transform<A>(source: Identity<A>) -> Option<A> {
        Some(source.into_inner())
    }
}

/// `Identity` to a one-element `Vec`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityToVec;

impl NaturalTransformation for IdentityToVec {
    type Source<A> = Identity<A>;
    type Target<A> = Vec<A>;

    fn transform<A>(source: Identity<A>) -> Vec<A> {
        vec![source.into_inner()]
    }
}

/// See [`OptionToVec`].
///
/// ```rust
/// use adequate::natural::option_to_vec;
///
/// assert_eq!(option_to_vec(Some(5)), vec![5]);
/// assert_eq!(option_to_vec(None::<i32>), vec![]);
/// ```
pub fn option_to_vec<A>(option: Option<A>) -> Vec<A> {
    OptionToVec::transform(option)
}

/// See [`VecToOption`].
pub fn vec_to_option<A>(values: Vec<A>) -> Option<A> {
    VecToOption::transform(values)
}

/// See [`VecLastToOption`].
pub fn vec_last_to_option<A>(values: Vec<A>) -> Option<A> {
    VecLastToOption::transform(values)
}

/// See [`ResultToOption`].
pub fn result_to_option<A, E>(result: Result<A, E>) -> Option<A> {
    ResultToOption::<E>::transform(result)
}

/// `Option` to `Result`, using `absent_error` for `None`.
///
/// Not natural in the strict sense, since it needs the error value, but it
/// still commutes with `fmap`.
///
/// # Errors
///
/// Returns `Err(absent_error)` when `option` is `None`.
pub fn option_to_result<A, E>(option: Option<A>, absent_error: E) -> Result<A, E> {
    option.ok_or(absent_error)
}

/// See [`IdentityToOption`].
pub fn identity_to_option<A>(identity: Identity<A>) -> Option<A> {
    IdentityToOption::transform(identity)
}

/// See [`IdentityToVec`].
pub fn identity_to_vec<A>(identity: Identity<A>) -> Vec<A> {
    IdentityToVec::transform(identity)
}
