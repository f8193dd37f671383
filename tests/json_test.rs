//! JSON façade tests: base64 image payloads must round-trip losslessly
//! with the binary form.

mod common;

use cashletter::File;
use common::*;

#[test]
fn test_base64_image_payload_reaches_the_wire() {
    // A JSON document carrying base64 "hello, world" must serialize to ICL
    // bytes containing the literal payload in the image data region.
    let json = mock_check_file(b"hello, world").to_json().unwrap();
    let text = String::from_utf8(json.clone()).unwrap();
    assert!(text.contains("aGVsbG8sIHdvcmxk"));
    assert!(!text.contains("hello, world"));

    let file = File::from_json(&json).unwrap();
    let bytes = write_bytes(&file);
    assert!(bytes
        .windows(b"hello, world".len())
        .any(|w| w == b"hello, world"));
}

#[test]
fn test_json_roundtrip_is_structural_identity() {
    let file = mock_check_file(b"payload");
    let restored = File::from_json(&file.to_json().unwrap()).unwrap();
    assert_eq!(restored, file);
    restored.validate().unwrap();
}

#[test]
fn test_json_field_names_match_field_tables() {
    let text = String::from_utf8(mock_check_file(b"x").to_json().unwrap()).unwrap();
    for key in [
        "\"immediateDestination\"",
        "\"cashLetters\"",
        "\"collectionTypeIndicator\"",
        "\"bundles\"",
        "\"payorBankRoutingNumber\"",
        "\"itemAmount\"",
        "\"imageViews\"",
        "\"imageData\"",
        "\"bundleTotalAmount\"",
        "\"cashLetterCount\"",
    ] {
        assert!(text.contains(key), "missing {key} in JSON output");
    }
}

#[test]
fn test_malformed_json_is_error() {
    assert!(File::from_json(b"{not json").is_err());
}
