//! The identity context.
//!
//! `Identity` holds exactly one value and adds no effect. It is the plain
//! "container" every functor explanation starts with, and it is the
//! simplest model against which the type class laws can be checked.

use super::TypeConstructor;

/// A context that wraps a value and does nothing else.
///
/// ```rust
/// use adequate::typeclass::{Functor, Identity};
///
/// let container = Identity::new(3);
/// assert_eq!(container.fmap(|n| n + 2), Identity(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
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

    /// Borrows the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> Identity<Identity<A>> {
    /// Removes one layer of nesting.
    ///
    /// ```rust
    /// use adequate::typeclass::Identity;
    ///
    /// assert_eq!(Identity(Identity(1)).flatten(), Identity(1));
    /// ```
    #[inline]
    pub fn flatten(self) -> Identity<A> {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}
