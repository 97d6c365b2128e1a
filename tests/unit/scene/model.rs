use super::*;

#[test]
fn minimal_scene_fills_defaults() {
    let def: SceneDef = serde_json::from_value(serde_json::json!({
        "viewport": { "width": 1440, "height": 900 },
        "sections": [{ "id": "stats", "rect": { "top": 900, "height": 1200 } }]
    }))
    .unwrap();
    assert_eq!(def.desktop_min_width, 1024.0);
    assert_eq!(def.near_top_threshold, 100.0);
    assert_eq!(def.in_view.amount, 0.5);
    assert!(def.sections[0].components.is_empty());
    assert_eq!(
        def.sections[0].rect.to_rect(1440.0),
        Rect::new(0.0, 900.0, 1440.0, 2100.0)
    );
}

#[test]
fn components_use_snake_case_tags() {
    let def: SceneDef = serde_json::from_value(serde_json::json!({
        "viewport": { "width": 1440, "height": 900 },
        "sections": [{
            "id": "hero",
            "rect": { "top": 0, "height": 2000 },
            "components": [
                { "counter": { "id": "years", "label": "56 years" } },
                { "columns": { "id": "cols" } },
                { "parallax": { "id": "blocks", "window": ["start end", "end start"] } },
                { "reveal_stack": { "id": "stack", "cards": [{ "id": "a" }, { "id": "b" }] } },
                { "floating_icons": { "id": "icons", "icons": [
                    { "kind": "star", "color": "#FFD700", "position": [-80, -60] },
                    { "kind": "heart", "color": "#FF6B6B", "position": { "x": 80, "y": -40 } }
                ] } },
                { "fade": { "id": "copy", "rect": { "top": 300, "height": 80, "width": 600 } } }
            ]
        }]
    }))
    .unwrap();

    let comps = &def.sections[0].components;
    let ids: Vec<&str> = comps.iter().map(ComponentDef::id).collect();
    assert_eq!(ids, ["years", "cols", "blocks", "stack", "icons", "copy"]);

    match &comps[0] {
        ComponentDef::Counter(c) => {
            assert_eq!(c.config.duration, 2.0);
            assert!(c.rect.is_none());
        }
        other => panic!("unexpected {other:?}"),
    }
    match &comps[1] {
        ComponentDef::Columns(c) => assert_eq!(c.count, 8),
        other => panic!("unexpected {other:?}"),
    }
    match &comps[2] {
        ComponentDef::Parallax(p) => assert_eq!(p.amplitudes.len(), 6),
        other => panic!("unexpected {other:?}"),
    }
    match &comps[4] {
        ComponentDef::FloatingIcons(f) => {
            let icons = f.icons.as_ref().unwrap();
            assert_eq!(icons[0].position, Vec2Def { x: -80.0, y: -60.0 });
            assert_eq!(icons[1].position, Vec2Def { x: 80.0, y: -40.0 });
            let converted = FloatingIconDef::from(&icons[1]);
            assert_eq!(converted.position, Vec2::new(80.0, -40.0));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(comps[5].rect().unwrap().width, Some(600.0));
}

#[test]
fn bad_scroll_offset_is_rejected_while_parsing() {
    let res = SceneDef::from_json_str(
        r#"{
            "viewport": { "width": 800, "height": 600 },
            "sections": [{
                "id": "s",
                "rect": { "top": 0, "height": 10 },
                "components": [{ "columns": { "id": "c", "window": ["start nowhere", "end start"] } }]
            }]
        }"#,
    );
    assert!(res.is_err());
}
