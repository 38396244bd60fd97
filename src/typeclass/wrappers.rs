//! Newtype wrappers that pick a combining operation for a plain type.
//!
//! The same `i32` can be combined by addition ([`Sum`]), multiplication
//! ([`Product`]), [`Max`] or [`Min`]; a `bool` by conjunction ([`All`]) or
//! disjunction ([`Any`]); an `Option` by keeping the [`First`] or the
//! [`Last`] present value. Each wrapper gets its own `Semigroup` and
//! `Monoid` instance.

/// Additive semigroup/monoid (identity: zero).
///
/// ```rust
/// use adequate::typeclass::{Monoid, Sum};
///
/// let total = Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]);
/// assert_eq!(total, Sum(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sum<A>(pub A);

/// Multiplicative semigroup/monoid (identity: one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product<A>(pub A);

/// Keeps the larger value. A monoid when `A` is [`Bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Max<A>(pub A);

/// Keeps the smaller value. A monoid when `A` is [`Bounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Min<A>(pub A);

/// Boolean conjunction (identity: `true`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct All(pub bool);

/// Boolean disjunction (identity: `false`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Any(pub bool);

/// Keeps the leftmost present value (identity: `First(None)`).
///
/// ```rust
/// use adequate::typeclass::{First, Semigroup};
///
/// assert_eq!(First(None).combine(First(Some(2))).combine(First(Some(3))), First(Some(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct First<A>(pub Option<A>);

/// Keeps the rightmost present value (identity: `Last(None)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Last<A>(pub Option<A>);

macro_rules! impl_wrapper_accessors {
    ($($wrapper:ident),*) => {
        $(
            impl<A> $wrapper<A> {
                /// Wraps `value`.
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Unwraps the value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self(value)
                }
            }
        )*
    };
}

impl_wrapper_accessors!(Sum, Product, Max, Min);

/// Types with a least and a greatest value.
///
/// Needed for [`Max`] and [`Min`] to have an identity element.
pub trait Bounded {
    /// The least value.
    const MIN_VALUE: Self;

    /// The greatest value.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded {
    ($($numeric:ty),*) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = <$numeric>::MIN;
                const MAX_VALUE: Self = <$numeric>::MAX;
            }
        )*
    };
}

impl_bounded!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char);

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}
