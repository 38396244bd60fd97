//! Type class traits for functional programming abstractions.
//!
//! - [`Functor`]: Mapping over a single-valued context
//! - [`FunctorMut`]: Mapping over multi-valued contexts such as `Vec`
//! - [`Applicative`] / [`ApplicativeVec`]: Lifting values and combining contexts
//! - [`Monad`] / [`MonadVec`]: Sequencing computations with dependency
//! - [`Traversable`]: Turning a structure of effects inside out
//! - [`Semigroup`] / [`Monoid`]: Associative combination with an identity
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no higher-kinded types. [`TypeConstructor`] uses a Generic
//! Associated Type so that `Option<A>` can name `Option<B>`, which is what
//! `fmap` needs to describe its result.
//!
//! ## Why two families of traits
//!
//! `Functor`, `Applicative` and `Monad` take `FnOnce` closures, which is all
//! a context holding at most one value needs. A `Vec` calls its closure once
//! per element, so the `*Mut`/`*Vec` traits take `FnMut` (and `Clone` where
//! the cross-product reuses values). Both families obey the same laws.
//!
//! # Examples
//!
//! ```rust
//! use adequate::typeclass::{Applicative, ApplicativeVec, Functor, Monad};
//!
//! // Absence short-circuits
//! let half = |n: i32| if n % 2 == 0 { Some(n / 2) } else { None };
//! assert_eq!(Some(8).flat_map(half).flat_map(half), Some(2));
//! assert_eq!(Some(6).flat_map(half).flat_map(half), None);
//!
//! // Vec as non-deterministic computation
//! let sums = vec![1, 2].map2(vec![10, 20], |a, b| a + b);
//! assert_eq!(sums, vec![11, 21, 12, 22]);
//!
//! let x: Option<i32> = <Option<()>>::pure(3);
//! assert_eq!(x.fmap(|n| n + 1), Some(4));
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod monad;
mod monoid;
pub mod pointfree;
mod semigroup;
mod traversable;
mod wrappers;

pub use applicative::{Applicative, ApplicativeVec};
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use monad::{Monad, MonadVec};
pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use traversable::Traversable;
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Product, Sum};
