//! Contains operators over arrays of unsigned integers. This module's general design is
//! that each operator has two interfaces, a statically-typed version and a dynamically-typed
//! version.
//! The statically-typed version expects slices of a concrete [`crate::types::NativeType`];
//! the dynamically-typed version expects [`crate::array::UIntArray`] and errors if the
//! physical types of its arguments are not supported.
//! Dynamically-typed operators have an auxiliary function, `can_*`, that returns
//! true if the operator can be applied to the particular [`crate::datatypes::PrimitiveType`].

pub mod replace;
