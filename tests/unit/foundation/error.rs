use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DlavidError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DlavidError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert_eq!(
        DlavidError::parse(7, "expected two tokens").to_string(),
        "parse error on line 7: expected two tokens"
    );
}

#[test]
fn out_of_bounds_names_coordinate_and_canvas() {
    let err = DlavidError::OutOfBounds {
        x: 10,
        y: -3,
        width: 10,
        height: 12,
    };
    let msg = err.to_string();
    assert!(msg.contains("(10, -3)"));
    assert!(msg.contains("10x12"));
}

#[test]
fn io_and_other_preserve_source() {
    let err: DlavidError = std::io::Error::other("disk full").into();
    assert!(matches!(err, DlavidError::Io(_)));
    assert!(err.to_string().contains("disk full"));

    let err = DlavidError::Other(anyhow::Error::new(std::io::Error::other("boom")));
    assert!(err.to_string().contains("boom"));
}
