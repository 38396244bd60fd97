//! Function composition utilities.
//!
//! - [`compose!`]: right-to-left composition, `compose!(f, g)(x) == f(g(x))`
//! - [`pipe!`]: left-to-right application, `pipe!(x, g, f) == f(g(x))`
//! - [`identity`], [`constant`], [`flip`]: small combinators that keep
//!   showing up in law statements
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//!
//! ```
//! use adequate::{compose, pipe};
//!
//! let exclaim = |text: String| text + "!";
//! let shout = |text: &str| text.to_uppercase();
//!
//! let angry = compose!(exclaim, shout);
//! assert_eq!(angry("send in the clowns"), "SEND IN THE CLOWNS!");
//! assert_eq!(pipe!("hi", shout, exclaim), "HI!");
//! ```

mod compose_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, flip, identity};

pub use crate::compose;
pub use crate::pipe;
