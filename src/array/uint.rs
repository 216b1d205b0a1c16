use crate::datatypes::PrimitiveType;
use crate::types::NativeType;

/// An owned, dynamically-typed array of unsigned integers.
///
/// This is the container of the dynamically-typed kernels (e.g.
/// [`crate::compute::replace::multi_replace_dyn`]); statically-typed kernels
/// operate on slices of [`NativeType`] directly.
/// # Example
/// ```
/// use multireplace::array::UIntArray;
/// use multireplace::datatypes::PrimitiveType;
///
/// let array = UIntArray::from(vec![1u32, 2, 3]);
/// assert_eq!(array.data_type(), PrimitiveType::UInt32);
/// assert_eq!(array.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UIntArray {
    /// Values of type `u8`
    UInt8(Vec<u8>),
    /// Values of type `u16`
    UInt16(Vec<u16>),
    /// Values of type `u32`
    UInt32(Vec<u32>),
    /// Values of type `u64`
    UInt64(Vec<u64>),
}

macro_rules! with_match_values {
    ($array:expr, | $values:ident | $body:expr) => {
        match $array {
            UIntArray::UInt8($values) => $body,
            UIntArray::UInt16($values) => $body,
            UIntArray::UInt32($values) => $body,
            UIntArray::UInt64($values) => $body,
        }
    };
}

impl UIntArray {
    /// The [`PrimitiveType`] of the values of this array.
    #[inline]
    pub fn data_type(&self) -> PrimitiveType {
        match self {
            UIntArray::UInt8(_) => PrimitiveType::UInt8,
            UIntArray::UInt16(_) => PrimitiveType::UInt16,
            UIntArray::UInt32(_) => PrimitiveType::UInt32,
            UIntArray::UInt64(_) => PrimitiveType::UInt64,
        }
    }

    /// The number of values in this array.
    #[inline]
    pub fn len(&self) -> usize {
        with_match_values!(self, |values| values.len())
    }

    /// Whether this array has no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the values as `&[T]`, or `None` when `T` is not the physical type of this array.
    #[inline]
    pub fn values<T: NativeType>(&self) -> Option<&[T]> {
        T::downcast_ref(self)
    }
}

impl<T: NativeType> From<Vec<T>> for UIntArray {
    #[inline]
    fn from(values: Vec<T>) -> Self {
        T::into_array(values)
    }
}

impl<T: NativeType> From<&[T]> for UIntArray {
    #[inline]
    fn from(values: &[T]) -> Self {
        T::into_array(values.to_vec())
    }
}
