use super::*;

#[test]
fn splits_currency_and_unit_text() {
    let d = LabelDescriptor::parse("£33m");
    assert_eq!(d.prefix, "£");
    assert_eq!(d.magnitude, Some(33.0));
    assert_eq!(d.rest, "m");

    let d = LabelDescriptor::parse("600k sq ft");
    assert_eq!(d.prefix, "");
    assert_eq!(d.magnitude, Some(600.0));
    assert_eq!(d.rest, "k sq ft");
}

#[test]
fn final_value_round_trips_label() {
    for label in [
        "£33m",
        "£47m",
        "56 years",
        "15",
        "600k sq ft",
        "£1 billion",
        "1.5m",
        "2.30x",
        "007 agents",
    ] {
        let d = LabelDescriptor::parse(label);
        assert_eq!(d.compose(d.target()), label, "{label}");
    }
}

#[test]
fn intermediate_values_floor() {
    let d = LabelDescriptor::parse("56 years");
    assert_eq!(d.compose(0.0), "0 years");
    assert_eq!(d.compose(41.97), "41 years");

    let d = LabelDescriptor::parse("£1.5bn");
    assert_eq!(d.compose(0.99), "£0.9bn");
}

#[test]
fn interleaved_text_is_preserved() {
    let d = LabelDescriptor::parse("1 of 2 things");
    assert_eq!(d.magnitude, Some(1.0));
    assert_eq!(d.rest, " of 2 things");
    assert_eq!(d.compose(0.0), "0 of 2 things");
}

#[test]
fn second_decimal_point_stays_literal() {
    let d = LabelDescriptor::parse("v1.2.3");
    assert_eq!(d.magnitude, Some(1.2));
    assert_eq!(d.rest, ".3");
    assert_eq!(d.compose(1.2), "v1.2.3");
}

#[test]
fn trailing_period_is_not_part_of_magnitude() {
    let d = LabelDescriptor::parse("15.");
    assert_eq!(d.magnitude, Some(15.0));
    assert_eq!(d.decimals, 0);
    assert_eq!(d.compose(15.0), "15.");
}

#[test]
fn missing_magnitude_shows_literal_text_only() {
    let d = LabelDescriptor::parse("Award winning");
    assert_eq!(d.magnitude, None);
    assert_eq!(d.target(), 0.0);
    assert_eq!(d.compose(12.0), "Award winning");

    let d = LabelDescriptor::parse("");
    assert_eq!(d.compose(0.0), "");
}

#[test]
fn only_zero_padded_labels_keep_their_width() {
    let d = LabelDescriptor::parse("007 agents");
    assert_eq!(d.pad_digits, 3);
    assert_eq!(d.compose(5.0), "005 agents");

    let d = LabelDescriptor::parse("600k sq ft");
    assert_eq!(d.pad_digits, 1);
    assert_eq!(d.compose(7.2), "7k sq ft");
}

#[test]
fn overlong_fractions_are_capped_to_f64_precision() {
    let label = format!("0.{}%", "1".repeat(400));
    let d = LabelDescriptor::parse(&label);
    assert_eq!(d.decimals, MAX_DECIMALS);
    assert_eq!(d.rest, "%");

    let text = d.compose(d.target());
    assert!(!text.contains("NaN"), "{text}");
    assert!(text.starts_with("0.11111"), "{text}");
    assert!(text.ends_with('%'), "{text}");
    assert!(d.floor_value(0.5).is_finite());
}
