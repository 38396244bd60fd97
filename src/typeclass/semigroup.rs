//! Semigroup type class - types with an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::typeclass::{Any, Semigroup, Sum};
//!
//! assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
//! assert_eq!(Sum(2).combine(Sum(3)), Sum(5));
//! assert_eq!(Any(false).combine(Any(true)), Any(true));
//! ```

use std::ops::{Add, Mul};

use super::Identity;
use super::wrappers::{All, Any, First, Last, Max, Min, Product, Sum};

/// A type with an associative `combine`.
pub trait Semigroup {
    /// Combines two values. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines a value with itself `count` times.
    ///
    /// Returns `None` when `count` is zero, since a semigroup has no empty
    /// value to return.
    ///
    /// ```rust
    /// use adequate::typeclass::Semigroup;
    ///
    /// assert_eq!(String::from("ab").combine_n(3), Some(String::from("ababab")));
    /// assert_eq!(String::from("ab").combine_n(0), None);
    /// ```
    fn combine_n(self, count: usize) -> Option<Self>
    where
        Self: Clone + Sized,
    {
        Self::reduce_all(std::iter::repeat_n(self, count))
    }

    /// Reduces a non-empty iterator; `None` when it is empty.
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` acts as the identity; two `Some`s combine their payloads.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (left, None) => left,
            (None, right) => right,
        }
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}
}

impl<T: Semigroup> Semigroup for Identity<T> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl<A: Ord> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        Self(std::cmp::max(self.0, other.0))
    }
}

impl<A: Ord> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        Self(std::cmp::min(self.0, other.0))
    }
}

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

impl<A> Semigroup for First<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0.or(other.0))
    }
}

impl<A> Semigroup for Last<A> {
    fn combine(self, other: Self) -> Self {
        Self(other.0.or(self.0))
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }
}
