//! Monad type class - sequencing computations within a context.
//!
//! `flat_map` (the `chain` of the functional-JavaScript world, `>>=` in
//! Haskell) feeds the carried value to an action that itself returns a
//! context, then flattens the nesting away. Each step may decide what the
//! next step is.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f)            == f(a)                              // left identity
//! m.flat_map(pure)               == m                                 // right identity
//! m.flat_map(f).flat_map(g)      == m.flat_map(|x| f(x).flat_map(g))  // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::typeclass::{Monad, MonadVec};
//!
//! fn safe_head(items: &[i32]) -> Option<i32> {
//!     items.first().copied()
//! }
//!
//! let nested = Some(vec![3, 4]);
//! assert_eq!(nested.flat_map(|v| safe_head(&v)), Some(3));
//! assert_eq!(Some(Vec::<i32>::new()).flat_map(|v| safe_head(&v)), None);
//!
//! let expanded = vec![1, 2, 3].flat_map(|n| vec![n; n as usize]);
//! assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
//! ```

use super::applicative::Applicative;
use super::identity::Identity;

/// A type class for contexts whose next step may depend on the carried value.
///
/// # Laws
///
/// See the module documentation.
pub trait Monad: Applicative {
    /// Feeds the carried value to `function` and flattens the result.
    ///
    /// A missing value (or an error) short-circuits: `function` is never
    /// called.
    ///
    /// ```rust
    /// use adequate::typeclass::Monad;
    ///
    /// let positive = |n: i32| if n > 0 { Some(n) } else { None };
    /// assert_eq!(Some(5).flat_map(positive), Some(5));
    /// assert_eq!(Some(-5).flat_map(positive), None);
    /// assert_eq!(None::<i32>.flat_map(positive), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`Monad::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences `next` after `self`, discarding the value of `self`.
    ///
    /// ```rust
    /// use adequate::typeclass::Monad;
    ///
    /// assert_eq!(Some(1).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        Self::and_then(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E>,
    {
        Self::and_then(self, function)
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}

/// Monad operations for `Vec` as non-deterministic computation.
///
/// `flat_map` runs the action on each element in order and appends the
/// produced vectors. The output is never interleaved: everything produced
/// by the first element precedes everything produced by the second.
///
/// ```rust
/// use adequate::typeclass::MonadVec;
///
/// let result = vec![1, 2].flat_map(|n| vec![n, n * 10]);
/// assert_eq!(result, vec![1, 10, 2, 20]);
/// ```
pub trait MonadVec: Sized {
    /// The element type.
    type VecInner;

    /// Applies `function` to each element and concatenates the results.
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>;

    /// Alias for [`MonadVec::flat_map`].
    #[inline]
    fn and_then<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(Self::VecInner) -> Vec<B>,
    {
        self.flat_map(function)
    }

    /// Repeats `next` once per element of `self`.
    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B>;

    /// Concatenates a vector of iterables.
    ///
    /// ```rust
    /// use adequate::typeclass::MonadVec;
    ///
    /// let flat: Vec<i32> = vec![vec![1, 2], vec![], vec![3]].flatten();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    fn flatten<B>(self) -> Vec<B>
    where
        Self::VecInner: IntoIterator<Item = B>;
}

impl<A> MonadVec for Vec<A> {
    type VecInner = A;

    #[inline]
    fn flat_map<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(A) -> Vec<B>,
    {
        self.into_iter().flat_map(function).collect()
    }

    fn then<B: Clone>(self, next: Vec<B>) -> Vec<B> {
        let mut result = Vec::with_capacity(self.len().saturating_mul(next.len()));
        for _ in self {
            result.extend(next.iter().cloned());
        }
        result
    }

    fn flatten<B>(self) -> Vec<B>
    where
        A: IntoIterator<Item = B>,
    {
        self.into_iter().flatten().collect()
    }
}
