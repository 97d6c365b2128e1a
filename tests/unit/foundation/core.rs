use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(ScrollProgress::new(-0.5).get(), 0.0);
    assert_eq!(ScrollProgress::new(1.5).get(), 1.0);
    assert_eq!(ScrollProgress::new(f64::NAN).get(), 0.0);
    assert_eq!(ScrollProgress::new(0.25).get(), 0.25);
}

#[test]
fn viewport_validates_extents() {
    assert!(Viewport::new(1280.0, 800.0).is_ok());
    assert!(Viewport::new(-1.0, 800.0).is_err());
    assert!(Viewport::new(1280.0, f64::INFINITY).is_err());
}

#[test]
fn viewport_rect_follows_scroll() {
    let vp = Viewport::new(100.0, 50.0).unwrap();
    let r = vp.rect_at(200.0);
    assert_eq!(r.y0, 200.0);
    assert_eq!(r.y1, 250.0);
    assert_eq!(r.width(), 100.0);
}
