/// The set of physical types accepted by the kernels of this crate: the
/// unique in-memory representations of an unsigned integer array.
/// Each variant has a one-to-one mapping to a [`crate::types::NativeType`]
/// and to a variant of [`crate::array::UIntArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// An unsigned 8-bit integer.
    UInt8,
    /// An unsigned 16-bit integer.
    UInt16,
    /// An unsigned 32-bit integer.
    UInt32,
    /// An unsigned 64-bit integer.
    UInt64,
}

impl PrimitiveType {
    /// The size in bytes of a single value of this type.
    #[inline]
    pub fn byte_width(&self) -> usize {
        match self {
            PrimitiveType::UInt8 => 1,
            PrimitiveType::UInt16 => 2,
            PrimitiveType::UInt32 => 4,
            PrimitiveType::UInt64 => 8,
        }
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
