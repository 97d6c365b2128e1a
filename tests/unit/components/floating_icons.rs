use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn start_positions_follow_index_seeded_formula() {
    let expected = [
        (-115.47153635116598, -113.75685871056241),
        (-153.840877914952, -152.12620027434843),
        (-192.210219478738, -190.49554183813444),
        (169.420438957476, 171.13511659807955),
        (131.05109739369, 132.76577503429354),
    ];
    for (i, (x, y)) in expected.into_iter().enumerate() {
        let p = start_position(i);
        assert!(approx(p.x, x), "x[{i}] = {}", p.x);
        assert!(approx(p.y, y), "y[{i}] = {}", p.y);
    }
}

#[test]
fn icons_travel_from_scatter_to_formation() {
    let icons = FloatingIcons::showcase().unwrap();
    assert_eq!(icons.len(), 8);

    let start = icons.frame(ScrollProgress::START);
    let end = icons.frame(ScrollProgress::END);
    assert_eq!(start.icons[3].translate, start_position(3));
    assert_eq!(end.icons[3].translate, Vec2::new(60.0, 60.0));
    assert_eq!(end.icons[0].color.to_string(), "#ffd700");
}

#[test]
fn shared_channels_follow_their_tables() {
    let icons = FloatingIcons::showcase().unwrap();

    let f = icons.frame(ScrollProgress::START);
    assert_eq!(f.icons[0].opacity, 0.0);
    assert!(approx(f.icons[0].scale, 0.3));
    assert_eq!(f.icons[0].rotate_deg, 360.0);
    assert_eq!(f.caption_opacity, 0.0);

    let f = icons.frame(ScrollProgress::new(0.5));
    assert!(approx(f.icons[0].opacity, 0.75));
    assert!(approx(f.icons[0].scale, 0.7));
    assert!(approx(f.icons[0].rotate_deg, 180.0));
    assert!(approx(f.caption_opacity, 0.5));

    let f = icons.frame(ScrollProgress::new(0.9));
    assert_eq!(f.icons[0].opacity, 1.0);
    assert_eq!(f.caption_opacity, 1.0);
}

#[test]
fn rejects_non_finite_positions() {
    let def = FloatingIconDef {
        kind: IconKind::Star,
        color: Rgba::rgba(1.0, 1.0, 1.0, 1.0),
        position: Vec2::new(f64::NAN, 0.0),
    };
    assert!(FloatingIcons::new(&[def]).is_err());
}
