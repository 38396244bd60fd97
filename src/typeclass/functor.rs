//! Functor type class - mapping over context values.
//!
//! A functor transforms the value(s) it carries while leaving its shape
//! alone: a `None` stays `None`, an `Err` keeps its error, a `Vec` keeps its
//! length and order.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::typeclass::{Functor, FunctorMut};
//!
//! let street: Option<&str> = Some("Limbo Ln");
//! assert_eq!(street.fmap(|s| s.len()), Some(8));
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.fmap(|s| s.len()), None);
//!
//! let words = vec!["sail", "the", "seas"];
//! assert_eq!(words.fmap_mut(str::len), vec![4, 3, 4]);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A type class for single-valued contexts that can have a function mapped
/// over their contents.
///
/// # Laws
///
/// ```text
/// fa.fmap(|x| x) == fa
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies `function` to the carried value, if there is one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::typeclass::Functor;
    ///
    /// let parsed: Result<i32, String> = Ok(20);
    /// assert_eq!(parsed.fmap(|n| n + 1), Ok(21));
    ///
    /// let failed: Result<i32, String> = Err("bad".into());
    /// assert_eq!(failed.fmap(|n| n + 1), Err("bad".into()));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Replaces the carried value with `value`, keeping the shape.
    ///
    /// ```rust
    /// use adequate::typeclass::Functor;
    ///
    /// assert_eq!(Some(5).replace("five"), Some("five"));
    /// assert_eq!(None::<i32>.replace("five"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the carried value.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

/// A functor over contexts holding any number of values.
///
/// The mapping function runs once per element, so it must be `FnMut`.
/// The result has the same length and order as the input.
///
/// ```rust
/// use adequate::typeclass::FunctorMut;
///
/// let mut calls = 0;
/// let doubled = vec![1, 2, 3].fmap_mut(|n| {
///     calls += 1;
///     n * 2
/// });
/// assert_eq!(doubled, vec![2, 4, 6]);
/// assert_eq!(calls, 3);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies `function` to every element, in order.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Like [`FunctorMut::fmap_mut`], borrowing the elements.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity(function(self.0))
    }
}

// =============================================================================
// Vec<T> Implementation
// =============================================================================

impl<T> FunctorMut for Vec<T> {
    #[inline]
    fn fmap_mut<B, F>(self, function: F) -> Vec<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    #[inline]
    fn fmap_ref_mut<B, F>(&self, function: F) -> Vec<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}
