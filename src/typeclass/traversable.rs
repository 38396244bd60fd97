//! Traversable type class - turning a structure of effects inside out.
//!
//! `traverse` maps every element to an effect (`Option` or `Result`) and
//! collects the results, so a `Vec` of possibly-missing values becomes a
//! possibly-missing `Vec`. The first `None` or `Err`, in element order, stops
//! the traversal and becomes the result.
//!
//! ```rust
//! use adequate::typeclass::Traversable;
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "2"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, Some(vec![1, 2]));
//!
//! let parsed: Option<Vec<i32>> = vec!["1", "x"].traverse_option(|s| s.parse().ok());
//! assert_eq!(parsed, None);
//!
//! let sequenced = vec![Ok(1), Err("first"), Err("second")].sequence_result();
//! assert_eq!(sequenced, Err::<Vec<i32>, _>("first"));
//! ```

use super::higher::TypeConstructor;

/// A structure that can be traversed with an effectful function.
pub trait Traversable: TypeConstructor {
    /// Maps each element to an `Option`, succeeding only if every element does.
    fn traverse_option<B, F>(self, function: F) -> Option<Self::WithType<B>>
    where
        F: FnMut(Self::Inner) -> Option<B>;

    /// Maps each element to a `Result`, stopping at the first error.
    fn traverse_result<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Turns `Self<Option<X>>` into `Option<Self<X>>`.
    fn sequence_option<X>(self) -> Option<Self::WithType<X>>
    where
        Self: Sized + TypeConstructor<Inner = Option<X>>,
    {
        self.traverse_option(|element| element)
    }

    /// Turns `Self<Result<X, E>>` into `Result<Self<X>, E>`.
    fn sequence_result<X, E>(self) -> Result<Self::WithType<X>, E>
    where
        Self: Sized + TypeConstructor<Inner = Result<X, E>>,
    {
        self.traverse_result(|element| element)
    }
}

impl<A> Traversable for Option<A> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Option<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        match self {
            Some(value) => function(value).map(Some),
            None => Some(None),
        }
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Option<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.map(function).transpose()
    }
}

impl<T, E> Traversable for Result<T, E> {
    fn traverse_option<B, F>(self, mut function: F) -> Option<Result<B, E>>
    where
        F: FnMut(T) -> Option<B>,
    {
        match self {
            Ok(value) => function(value).map(Ok),
            Err(error) => Some(Err(error)),
        }
    }

    fn traverse_result<B, E2, F>(self, mut function: F) -> Result<Result<B, E>, E2>
    where
        F: FnMut(T) -> Result<B, E2>,
    {
        match self {
            Ok(value) => function(value).map(Ok),
            Err(error) => Ok(Err(error)),
        }
    }
}

impl<A> Traversable for Vec<A> {
    fn traverse_option<B, F>(self, function: F) -> Option<Vec<B>>
    where
        F: FnMut(A) -> Option<B>,
    {
        self.into_iter().map(function).collect()
    }

    fn traverse_result<B, E, F>(self, function: F) -> Result<Vec<B>, E>
    where
        F: FnMut(A) -> Result<B, E>,
    {
        self.into_iter().map(function).collect()
    }
}
