//! Contains [`PrimitiveType`], the runtime tag of the physical types of this crate.
mod physical_type;

pub use physical_type::*;
