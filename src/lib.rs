//! # adequate
//!
//! Typed functional contexts and the laws that bind them.
//!
//! ## Overview
//!
//! The crate gives a uniform `map` / `pure` / `apply` / `flat_map`
//! vocabulary to the contexts a functional program reaches for most often:
//!
//! - **Type Classes**: Functor, Applicative, Monad, Traversable,
//!   Semigroup and Monoid, with instances for `Option`, `Result`, `Vec`
//!   and [`Identity`](typeclass::Identity)
//! - **Task**: a lazy, memoized asynchronous computation that settles
//!   exactly once with a value or a rejection
//! - **Natural Transformations**: structure-preserving conversions between
//!   contexts, each with a fixed and documented policy
//! - **Function Composition**: `compose!`, `pipe!` and a few combinators
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and instances
//! - `compose`: Function composition utilities
//! - `task`: The asynchronous [`Task`](task::Task) context (tokio based)
//! - `natural`: Natural transformations
//! - `serde`: `Serialize`/`Deserialize` for the wrapper types
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use adequate::prelude::*;
//!
//! let length = Some("fooo".to_string()).fmap(|text| text.len());
//! assert_eq!(length, Some(4));
//!
//! let pairs = vec![1, 2].product(vec!['a', 'b']);
//! assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use adequate::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "task")]
    pub use crate::task::*;

    #[cfg(feature = "natural")]
    pub use crate::natural::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "task")]
pub mod task;

#[cfg(feature = "natural")]
pub mod natural;
