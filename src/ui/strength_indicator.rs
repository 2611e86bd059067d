//! Strength bar rendering.
//!
//! Four slots left to right. Slot `i` is filled when `i <= strength`, and
//! every filled slot uses the colour of the achieved rating.

use serde::Serialize;

use crate::types::generator::StrengthRating;

/// Number of bars shown next to the strength label.
pub const SLOT_COUNT: usize = 4;

/// Fill colour of a strength bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarColor {
    Red,
    Orange,
    Yellow,
    Lime,
}

impl BarColor {
    pub fn for_rating(rating: StrengthRating) -> Self {
        match rating {
            StrengthRating::TooWeak => BarColor::Red,
            StrengthRating::Weak => BarColor::Orange,
            StrengthRating::Medium => BarColor::Yellow,
            StrengthRating::Strong => BarColor::Lime,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BarColor::Red => "red",
            BarColor::Orange => "orange",
            BarColor::Yellow => "yellow",
            BarColor::Lime => "lime",
        }
    }
}

/// Fill of a single slot; `None` renders the slot empty.
pub fn slot_fill(index: usize, strength: Option<StrengthRating>) -> Option<BarColor> {
    let rating = strength?;
    (index <= rating.value() as usize).then(|| BarColor::for_rating(rating))
}

pub fn bars(strength: Option<StrengthRating>) -> [Option<BarColor>; SLOT_COUNT] {
    std::array::from_fn(|index| slot_fill(index, strength))
}
