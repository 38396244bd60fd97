//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! Self::empty().combine(a) == a   // left identity
//! a.combine(Self::empty()) == a   // right identity
//! ```
//!
//! The identity element is what lets [`Monoid::combine_all`] fold an empty
//! collection.
//!
//! ```rust
//! use adequate::typeclass::{Max, Monoid, Sum};
//!
//! assert_eq!(Sum::combine_all(Vec::<Sum<i32>>::new()), Sum(0));
//! assert_eq!(Max::combine_all(vec![Max(3), Max(8), Max(1)]), Max(8));
//! ```

use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};
use super::Identity;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// The identity element.
    fn empty() -> Self;

    /// Folds every element, starting from [`Monoid::empty`].
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<T: Monoid> Monoid for Identity<T> {
    fn empty() -> Self {
        Self(T::empty())
    }
}

/// Zero is taken as `A::default()`, which holds for every numeric primitive.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// One is taken as `A::from(1u8)`, which holds for every numeric primitive
/// wide enough to carry it.
impl<A: Mul<Output = A> + From<u8>> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::from(1))
    }
}

impl<A: Ord + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: Ord + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

impl<A> Monoid for First<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A> Monoid for Last<A> {
    fn empty() -> Self {
        Self(None)
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn empty() -> Self {
        (A::empty(), B::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_elements() {
        assert_eq!(String::empty(), "");
        assert!(Vec::<u8>::empty().is_empty());
        assert_eq!(Sum::<i64>::empty(), Sum(0));
        assert_eq!(Product::<u32>::empty(), Product(1));
        assert_eq!(Max::<i8>::empty(), Max(i8::MIN));
        assert_eq!(Min::<u16>::empty(), Min(u16::MAX));
        assert_eq!(All::empty(), All(true));
        assert_eq!(Any::empty(), Any(false));
        assert_eq!(First::<i32>::empty(), First(None));
    }

    #[rstest]
    fn combine_all_folds() {
        assert_eq!(Product::combine_all(vec![Product(2), Product(3), Product(4)]), Product(24));
        assert_eq!(All::combine_all(vec![All(true), All(false)]), All(false));
        assert_eq!(
            Last::combine_all(vec![Last(Some(1)), Last(None), Last(Some(3))]),
            Last(Some(3))
        );
        assert_eq!(String::combine_all(vec![String::from("a"), String::from("b")]), "ab");
    }

    #[rstest]
    fn option_of_semigroup_is_monoid() {
        let combined = Option::combine_all(vec![Some(Sum(1)), None, Some(Sum(4))]);
        assert_eq!(combined, Some(Sum(5)));
    }

    #[rstest]
    fn tuple_of_monoids() {
        let combined =
            <(Sum<i32>, Any)>::combine_all(vec![(Sum(1), Any(false)), (Sum(2), Any(true))]);
        assert_eq!(combined, (Sum(3), Any(true)));
    }
}
