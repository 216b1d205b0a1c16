//! Contains [`UIntArray`], the dynamically-typed array of this crate.
mod uint;

pub use uint::UIntArray;
