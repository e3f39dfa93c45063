use super::*;

#[test]
fn configuration_display() {
    let err = CoreError::configuration("bad or zero run size");
    assert_eq!(
        err.to_string(),
        "configuration error: bad or zero run size"
    );
}

#[test]
fn internal_invariant_display_carries_tag() {
    let err = CoreError::internal("forward-ref-range", "index 42 out of range");
    assert_eq!(
        err.to_string(),
        "internal invariant violation [forward-ref-range]: index 42 out of range"
    );
}

#[test]
fn resource_display() {
    let err = CoreError::resource("out of memory");
    assert_eq!(err.to_string(), "resource error: out of memory");
}
