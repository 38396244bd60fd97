//! Curried, data-last forms of the type class operations.
//!
//! `fmap(f)` returns a function still waiting for its context, so an
//! operation can be named before the value it works on exists and passed
//! around or composed like any other function.
//!
//! ```rust
//! use adequate::compose;
//! use adequate::typeclass::pointfree::{flat_map, fmap};
//!
//! let parse = |text: String| text.trim().parse::<i32>().ok();
//! let parse_then_double = compose!(
//!     fmap::<Option<i32>, _, _>(|n: i32| n * 2),
//!     flat_map::<Option<String>, _, _>(parse),
//! );
//!
//! assert_eq!(parse_then_double(Some(String::from(" 21 "))), Some(42));
//! ```

use super::{Applicative, ApplicativeVec, Functor, FunctorMut, Monad, MonadVec};

/// `map(f)` for single-valued contexts.
pub fn fmap<Fa, B, F>(function: F) -> impl FnOnce(Fa) -> Fa::WithType<B>
where
    Fa: Functor,
    F: FnOnce(Fa::Inner) -> B,
{
    move |context| context.fmap(function)
}

/// `chain(f)` for single-valued contexts.
pub fn flat_map<Fa, B, F>(function: F) -> impl FnOnce(Fa) -> Fa::WithType<B>
where
    Fa: Monad,
    F: FnOnce(Fa::Inner) -> Fa::WithType<B>,
{
    move |context| context.flat_map(function)
}

/// `ap(functions)` for single-valued contexts: waits for the argument context.
///
/// ```rust
/// use adequate::typeclass::pointfree::apply;
///
/// let increment = apply::<_, i32, i32>(Some(|n: i32| n + 1));
/// assert_eq!(increment(Some(1)), Some(2));
/// ```
pub fn apply<Ff, B, Output>(functions: Ff) -> impl FnOnce(Ff::WithType<B>) -> Ff::WithType<Output>
where
    Ff: Applicative,
    Ff::Inner: FnOnce(B) -> Output,
{
    move |values| functions.apply(values)
}

/// `map(f)` for `Vec`. The returned function can be called repeatedly.
///
/// ```rust
/// use adequate::typeclass::pointfree::fmap_vec;
///
/// let lengths = fmap_vec(str::len);
/// assert_eq!(lengths(vec!["fooo", "foo"]), vec![4, 3]);
/// assert_eq!(lengths(vec![]), Vec::<usize>::new());
/// ```
pub fn fmap_vec<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |values| values.fmap_mut(&function)
}

/// `chain(f)` for `Vec`.
pub fn flat_map_vec<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> Vec<B>,
{
    move |values| values.flat_map(&function)
}

/// `ap(functions)` for `Vec`: the cross-product with whatever values follow.
pub fn apply_vec<B, Output, F>(functions: Vec<F>) -> impl Fn(Vec<B>) -> Vec<Output>
where
    B: Clone,
    F: Fn(B) -> Output + Clone,
{
    move |values| functions.clone().apply(values)
}
