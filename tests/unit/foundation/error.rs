use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::raster_unavailable("x")
            .to_string()
            .contains("rasterizer unavailable:")
    );
    assert!(IconError::render("x").to_string().contains("render error:"));
}

#[test]
fn only_raster_unavailable_is_flagged_as_such() {
    assert!(IconError::raster_unavailable("no backend").is_raster_unavailable());
    assert!(!IconError::render("bad svg").is_raster_unavailable());
    assert!(!IconError::Other(anyhow::anyhow!("disk full")).is_raster_unavailable());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
