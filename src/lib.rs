//! Vectorized multi-value replacement over arrays of unsigned integers.
//!
//! The main entry point is [`compute::replace::multi_replace`]: every value
//! equal to one of the `keys` is replaced by the `replacements` entry at the
//! same position, the first matching key winning. All operators are pure:
//! they never mutate their arguments and return freshly allocated results,
//! except for the explicit `*_assign` variants.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod array;
pub mod datatypes;
pub mod error;
pub mod types;

#[cfg(feature = "compute")]
#[cfg_attr(docsrs, doc(cfg(feature = "compute")))]
pub mod compute;

pub mod util;
