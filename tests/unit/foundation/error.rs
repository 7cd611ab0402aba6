use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PitchError::configuration("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(
        PitchError::invalid_range("x")
            .to_string()
            .contains("invalid range:")
    );
    assert!(
        PitchError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(
        PitchError::evaluation("x")
            .to_string()
            .contains("evaluation error:")
    );
    assert!(
        PitchError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PitchError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
