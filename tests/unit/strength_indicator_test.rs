//! Unit tests for the strength bar derivation.

use passgen::types::generator::StrengthRating;
use passgen::ui::strength_indicator::{bars, slot_fill, BarColor, SLOT_COUNT};
use rstest::rstest;

#[test]
fn test_unset_strength_renders_empty() {
    for index in 0..SLOT_COUNT {
        assert_eq!(slot_fill(index, None), None);
    }
    assert_eq!(bars(None), [None; SLOT_COUNT]);
}

#[test]
fn test_medium_fills_three_yellow_bars() {
    let y = Some(BarColor::Yellow);
    assert_eq!(bars(Some(StrengthRating::Medium)), [y, y, y, None]);
}

#[rstest]
#[case(StrengthRating::TooWeak, BarColor::Red, 1)]
#[case(StrengthRating::Weak, BarColor::Orange, 2)]
#[case(StrengthRating::Medium, BarColor::Yellow, 3)]
#[case(StrengthRating::Strong, BarColor::Lime, 4)]
fn test_fill_count_and_color(#[case] rating: StrengthRating, #[case] color: BarColor, #[case] filled: usize) {
    let rendered = bars(Some(rating));
    assert_eq!(rendered.iter().filter(|b| b.is_some()).count(), filled);
    // Filled bars are contiguous from the left and share the rating color.
    for (index, bar) in rendered.iter().enumerate() {
        if index < filled {
            assert_eq!(*bar, Some(color));
        } else {
            assert_eq!(*bar, None);
        }
    }
}

#[test]
fn test_color_names_match_stylesheet() {
    let names: Vec<&str> = [BarColor::Red, BarColor::Orange, BarColor::Yellow, BarColor::Lime]
        .iter()
        .map(|c| c.as_str())
        .collect();
    assert_eq!(names, vec!["red", "orange", "yellow", "lime"]);
    assert_eq!(serde_json::to_value(BarColor::Lime).unwrap(), serde_json::json!("lime"));
}
