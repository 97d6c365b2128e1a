use super::*;
use serde_json::json;

#[test]
fn parses_css_lengths() {
    assert_eq!("0%".parse::<Length>().unwrap(), Length::Percent(0.0));
    assert_eq!("100%".parse::<Length>().unwrap(), Length::Percent(100.0));
    assert_eq!("12px".parse::<Length>().unwrap(), Length::Px(12.0));
    assert_eq!(" -4.5 ".parse::<Length>().unwrap(), Length::Px(-4.5));
    assert!("wide".parse::<Length>().is_err());
}

#[test]
fn length_display_trims_zeros() {
    assert_eq!(Length::Percent(50.0).to_string(), "50%");
    assert_eq!(Length::Px(12.25).to_string(), "12.25px");
    assert_eq!(Length::Px(-0.0).to_string(), "0px");
}

#[test]
fn length_lerp_requires_same_unit() {
    let a = Length::Percent(0.0);
    let b = Length::Percent(100.0);
    assert_eq!(Length::lerp(&a, &b, 0.25), Length::Percent(25.0));
    assert!(a.is_compatible(&b));
    assert!(!a.is_compatible(&Length::Px(1.0)));
}

#[test]
fn length_resolves_against_extent() {
    assert_eq!(Length::Percent(25.0).resolve(400.0), 100.0);
    assert_eq!(Length::Px(7.0).resolve(400.0), 7.0);
}

#[test]
fn length_deserializes_numbers_and_strings() {
    let l: Length = serde_json::from_value(json!(40)).unwrap();
    assert_eq!(l, Length::Px(40.0));
    let l: Length = serde_json::from_value(json!("40%")).unwrap();
    assert_eq!(l, Length::Percent(40.0));
}

#[test]
fn parses_hex_rgb_and_rgba() {
    let c = Rgba::from_hex("#FFD700").unwrap();
    assert_eq!(c.to_rgba8(), [255, 215, 0, 255]);

    let c: Rgba = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert!(Rgba::from_hex("#abc").is_err());
    assert!(Rgba::from_hex("#zzzzzz").is_err());
}

#[test]
fn color_interpolates_per_channel() {
    let a = Rgba::from_hex("#000000").unwrap();
    let b = Rgba::from_hex("#ff8000").unwrap();
    let mid = Rgba::lerp(&a, &b, 0.5);
    assert_eq!(mid.to_rgba8(), [128, 64, 0, 255]);
    assert_eq!(mid.to_string(), "#804000");
}
