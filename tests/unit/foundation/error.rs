use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ForgeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        ForgeError::empty_segmentation("sheet.png")
            .to_string()
            .contains("empty segmentation:")
    );
    assert!(
        ForgeError::grammar_mismatch("Foo_Bar")
            .to_string()
            .contains("grammar mismatch: Foo_Bar")
    );
    assert!(
        ForgeError::invalid_timing("x")
            .to_string()
            .contains("invalid timing:")
    );
    assert!(
        ForgeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn item_level_classification() {
    assert!(ForgeError::empty_segmentation("a").is_item_level());
    assert!(ForgeError::unrecognized_direction("a").is_item_level());
    assert!(ForgeError::grammar_mismatch("a").is_item_level());
    assert!(ForgeError::duplicate_axis_values("a").is_item_level());
    assert!(!ForgeError::validation("a").is_item_level());
    assert!(!ForgeError::invalid_timing("a").is_item_level());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ForgeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_become_serde() {
    let err: ForgeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ForgeError::Serde(_)));
}
