//! Applicative type class - lifting values and combining independent contexts.
//!
//! An applicative functor adds two things to a functor:
//!
//! - `pure`, which puts a plain value into the context
//! - `apply`, which applies a function carried in one context to a value
//!   carried in another
//!
//! For `Option` and `Result` a missing value (or an error) on either side
//! makes the whole combination missing. For `Vec` the combination is the
//! full cross-product, function-major.
//!
//! # Laws
//!
//! ```text
//! pure(|x| x).apply(v)          == v                          // identity
//! pure(f).apply(pure(x))        == pure(f(x))                 // homomorphism
//! u.apply(pure(y))              == pure(|f| f(y)).apply(u)    // interchange
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::typeclass::{Applicative, ApplicativeVec, Functor};
//!
//! let add = |a: i32| move |b: i32| a + b;
//! assert_eq!(Some(2).fmap(add).apply(Some(3)), Some(5));
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
//! assert_eq!(functions.apply(vec![1, 2]), vec![2, 3, 10, 20]);
//! ```

use super::functor::Functor;
use super::identity::Identity;

/// A functor that can lift plain values and combine independent contexts.
///
/// # Laws
///
/// See the module documentation.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    ///
    /// ```rust
    /// use adequate::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two contexts with a binary function.
    ///
    /// ```rust
    /// use adequate::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |a, b| a + b), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |a, b| a + b), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three contexts with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs the two carried values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Keeps the left value, requiring both contexts to be present.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Keeps the right value, requiring both contexts to be present.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies the function carried by `self` to the value carried by `other`.
    ///
    /// ```rust
    /// use adequate::typeclass::Applicative;
    ///
    /// let increment = Some(|n: i32| n + 1);
    /// assert_eq!(increment.apply(Some(41)), Some(42));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E> {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C,
    {
        let a = self?;
        let b = other?;
        Ok(function(a, b))
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Result<B, E>,
        third: Result<C, E>,
        function: F,
    ) -> Result<D, E>
    where
        F: FnOnce(T, B, C) -> D,
    {
        let a = self?;
        let b = second?;
        let c = third?;
        Ok(function(a, b, c))
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
    {
        let function = self?;
        other.map(function)
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Identity<B>, function: F) -> Identity<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Identity(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Identity<B>, third: Identity<C>, function: F) -> Identity<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Identity(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity((self.0)(other.0))
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

/// Applicative operations for `Vec`, read as a non-deterministic value.
///
/// Every combination is the ordered cross-product, left-major: all results
/// for the first left element come before any result for the second. An
/// empty operand on either side absorbs the whole result.
///
/// ```rust
/// use adequate::typeclass::ApplicativeVec;
///
/// let one: Vec<i32> = <Vec<()> as ApplicativeVec>::pure(1);
/// assert_eq!(one, vec![1]);
///
/// assert_eq!(vec![1, 2].product(vec!['a']), vec![(1, 'a'), (2, 'a')]);
/// assert!(vec![1, 2].product(Vec::<char>::new()).is_empty());
/// ```
pub trait ApplicativeVec: Sized {
    /// The element type.
    type VecInner;

    /// The single-element vector `[value]`, the unit of [`ApplicativeVec::apply`].
    #[inline]
    fn pure<B>(value: B) -> Vec<B> {
        vec![value]
    }

    /// Combines every pair of elements with `function`.
    fn map2<B: Clone, C, F>(self, other: Vec<B>, function: F) -> Vec<C>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B) -> C;

    /// Combines every triple of elements with `function`.
    fn map3<B: Clone, C: Clone, D, F>(self, second: Vec<B>, third: Vec<C>, function: F) -> Vec<D>
    where
        Self::VecInner: Clone,
        F: FnMut(Self::VecInner, B, C) -> D;

    /// Pairs every element of `self` with every element of `other`.
    #[inline]
    fn product<B: Clone>(self, other: Vec<B>) -> Vec<(Self::VecInner, B)>
    where
        Self::VecInner: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies every function in `self`, in order, to every value in `other`.
    ///
    /// ```rust
    /// use adequate::typeclass::ApplicativeVec;
    ///
    /// let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 2];
    /// assert_eq!(functions.apply(vec![10, 20]), vec![11, 21, 20, 40]);
    /// ```
    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        Self::VecInner: FnMut(B) -> Output;
}

impl<A> ApplicativeVec for Vec<A> {
    type VecInner = A;

    fn map2<B: Clone, C, F>(self, other: Vec<B>, mut function: F) -> Vec<C>
    where
        A: Clone,
        F: FnMut(A, B) -> C,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for a in &self {
            for b in &other {
                result.push(function(a.clone(), b.clone()));
            }
        }
        result
    }

    fn map3<B: Clone, C: Clone, D, F>(
        self,
        second: Vec<B>,
        third: Vec<C>,
        mut function: F,
    ) -> Vec<D>
    where
        A: Clone,
        F: FnMut(A, B, C) -> D,
    {
        let capacity = self
            .len()
            .saturating_mul(second.len())
            .saturating_mul(third.len());
        let mut result = Vec::with_capacity(capacity);
        for a in &self {
            for b in &second {
                for c in &third {
                    result.push(function(a.clone(), b.clone(), c.clone()));
                }
            }
        }
        result
    }

    fn apply<B: Clone, Output>(self, other: Vec<B>) -> Vec<Output>
    where
        A: FnMut(B) -> Output,
    {
        let mut result = Vec::with_capacity(self.len().saturating_mul(other.len()));
        for mut function in self {
            result.extend(other.iter().cloned().map(&mut function));
        }
        result
    }
}
