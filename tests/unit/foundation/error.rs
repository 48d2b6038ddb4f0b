use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SlideFxError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SlideFxError::config("x").to_string().contains("config error:"));
    assert!(SlideFxError::shape("x").to_string().contains("shape error:"));
    assert!(
        SlideFxError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SlideFxError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde_variant() {
    let err: SlideFxError = serde_json::from_str::<u64>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, SlideFxError::Serde(_)));
}
