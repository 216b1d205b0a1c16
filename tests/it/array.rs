use multireplace::array::UIntArray;
use multireplace::datatypes::PrimitiveType;

#[test]
fn data_types() {
    let cases = [
        (UIntArray::from(vec![1u8]), PrimitiveType::UInt8, 1),
        (UIntArray::from(vec![1u16]), PrimitiveType::UInt16, 2),
        (UIntArray::from(vec![1u32]), PrimitiveType::UInt32, 4),
        (UIntArray::from(vec![1u64]), PrimitiveType::UInt64, 8),
    ];
    for (array, data_type, width) in cases.iter() {
        assert_eq!(array.data_type(), *data_type);
        assert_eq!(data_type.byte_width(), *width);
    }
}

#[test]
fn from_slice() {
    let values: &[u16] = &[1, 2, 3];
    let array = UIntArray::from(values);
    assert_eq!(array, UIntArray::UInt16(vec![1, 2, 3]));
    assert_eq!(array.values::<u16>(), Some(values));
}

#[test]
fn display_type() {
    assert_eq!(PrimitiveType::UInt32.to_string(), "UInt32");
}
