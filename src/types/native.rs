use std::hash::Hash;

use num::traits::{PrimInt, Unsigned};

use crate::array::UIntArray;
use crate::datatypes::PrimitiveType;

/// Sealed trait implemented by all physical types that the kernels of this
/// crate operate on: the unsigned fixed-width integers.
/// All O(N) allocations in this crate are done for this trait alone.
pub trait NativeType:
    super::private::Sealed
    + PrimInt
    + Unsigned
    + Hash
    + Send
    + Sync
    + Sized
    + Copy
    + std::fmt::Debug
    + std::fmt::Display
    + Default
    + 'static
{
    /// The corresponding variant of [`PrimitiveType`].
    const PRIMITIVE: PrimitiveType;

    /// Returns the values of `array` when it holds `Self`, `None` otherwise.
    fn downcast_ref(array: &UIntArray) -> Option<&[Self]>;

    /// Wraps `values` into the corresponding variant of [`UIntArray`].
    fn into_array(values: Vec<Self>) -> UIntArray;
}

macro_rules! native_type {
    ($type:ty, $variant:ident) => {
        impl NativeType for $type {
            const PRIMITIVE: PrimitiveType = PrimitiveType::$variant;

            #[inline]
            fn downcast_ref(array: &UIntArray) -> Option<&[Self]> {
                match array {
                    UIntArray::$variant(values) => Some(values.as_slice()),
                    _ => None,
                }
            }

            #[inline]
            fn into_array(values: Vec<Self>) -> UIntArray {
                UIntArray::$variant(values)
            }
        }
    };
}

native_type!(u8, UInt8);
native_type!(u16, UInt16);
native_type!(u32, UInt32);
native_type!(u64, UInt64);
