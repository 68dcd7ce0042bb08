//! A generic optional-value container, [`Maybe`], and a chain built on top of
//! it, [`MaybeMonad`], which threads a value through a series of steps and
//! stops running them as soon as one of them comes up empty.
//!
//! ```rust
//! use maybe_monad::{Maybe, MaybeMonad};
//!
//! let result = MaybeMonad::new(5)
//!     .bind(|n| n + 2)
//!     .bind(|n| Maybe::new(n + 1))
//!     .predicate(|n| *n > 0)
//!     .extract();
//!
//! assert!(result.has_value());
//! assert_eq!(result.get(), 8);
//!
//! // once a step fails, nothing after it runs
//! let failed = MaybeMonad::new(1)
//!     .bind(|n| n + 1)
//!     .predicate(|n| *n > 10)
//!     .bind(|_| -> i32 { unreachable!() })
//!     .extract();
//!
//! assert!(failed.is_empty());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod maybe;
mod monad;

pub use maybe::{EmptyAccess, Maybe};
pub use monad::MaybeMonad;

#[allow(unused)]
pub(crate) fn log_short_circuit(step: &'static str) {
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(step, "chain is empty, skipping");
    }
}
