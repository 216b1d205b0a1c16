use multireplace::error::Error;

#[test]
fn is_std_error() {
    let error: Box<dyn std::error::Error + Send + Sync> = Box::new(Error::DimensionMismatch {
        keys: 1,
        replacements: 2,
    });
    assert_eq!(
        error.to_string(),
        "Dimension mismatch: 1 keys but 2 replacements"
    );
}

#[test]
fn display_invalid_argument() {
    let error = Error::InvalidArgumentError("bad".to_string());
    assert_eq!(error.to_string(), "Invalid argument error: bad");
}
