//! Traits and implementations to handle _all types_ used in this crate.
//!
//! The physical types used in this crate are the native unsigned integers
//! `u8`, `u16`, `u32` and `u64`. The most important trait is [`NativeType`],
//! the generic bound of every kernel in [`crate::compute`].
mod native;
pub use native::*;

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}
