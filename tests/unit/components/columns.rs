use super::*;

#[test]
fn first_half_fills_left_and_reveals_text() {
    let cols = ProgressiveColumns::new(DEFAULT_COLUMN_COUNT).unwrap();
    let f = cols.frame(ScrollProgress::new(0.25));
    assert_eq!(f.columns.len(), 8);
    assert_eq!(f.columns[0].left_fill, Length::Percent(50.0));
    assert_eq!(f.columns[0].right_fill, Length::Percent(0.0));
    assert_eq!(f.text_reveal, Length::Percent(50.0));
    assert_eq!(f.text_disappear, Length::Percent(100.0));
}

#[test]
fn second_half_fills_right_and_wipes_text() {
    let cols = ProgressiveColumns::new(DEFAULT_COLUMN_COUNT).unwrap();
    let f = cols.frame(ScrollProgress::new(0.75));
    assert_eq!(f.columns[7].left_fill, Length::Percent(100.0));
    assert_eq!(f.columns[7].right_fill, Length::Percent(50.0));
    assert_eq!(f.text_reveal, Length::Percent(100.0));
    assert_eq!(f.text_disappear, Length::Percent(50.0));

    let f = cols.frame(ScrollProgress::END);
    assert_eq!(f.columns[0].right_fill, Length::Percent(100.0));
    assert_eq!(f.text_disappear, Length::Percent(0.0));
}

#[test]
fn separators_skip_last_column() {
    let cols = ProgressiveColumns::new(3).unwrap();
    let f = cols.frame(ScrollProgress::START);
    let seps: Vec<bool> = f.columns.iter().map(|c| c.separator).collect();
    assert_eq!(seps, vec![true, true, false]);
}

#[test]
fn zero_columns_rejected() {
    assert!(ProgressiveColumns::new(0).is_err());
}
