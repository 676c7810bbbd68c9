//! Train cards and their colors.

use crate::bag::Bag;
use crate::constants::{CARDS_PER_COLOR, LOCOMOTIVE_COUNT};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// The eight colors a route or a train car card can have.
///
/// # JSON
/// Colors are serialized in lowercase.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCountMacro,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Color {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
}

/// A train card: one car card per [`Color`], plus the locomotive, which
/// matches any color.
///
/// The variant order is canonical: it fixes both the multiset sort order and
/// the index-based wire encoding. The locomotive deliberately sorts last.
///
/// # JSON
/// Cards are serialized in lowercase.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumCountMacro,
    EnumIter,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Card {
    Black,
    Blue,
    Green,
    Orange,
    Pink,
    Red,
    White,
    Yellow,
    Locomotive,
}

impl Card {
    /// All cards, in canonical order. The position of a card in this slice
    /// is its index on the wire.
    pub const ALL: [Card; 9] = [
        Card::Black,
        Card::Blue,
        Card::Green,
        Card::Orange,
        Card::Pink,
        Card::Red,
        Card::White,
        Card::Yellow,
        Card::Locomotive,
    ];

    /// The car card of the given color.
    pub fn of(color: Color) -> Self {
        match color {
            Color::Black => Card::Black,
            Color::Blue => Card::Blue,
            Color::Green => Card::Green,
            Color::Orange => Card::Orange,
            Color::Pink => Card::Pink,
            Color::Red => Card::Red,
            Color::White => Card::White,
            Color::Yellow => Card::Yellow,
        }
    }

    /// The color of this card, or `None` for the locomotive.
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Black => Some(Color::Black),
            Card::Blue => Some(Color::Blue),
            Card::Green => Some(Color::Green),
            Card::Orange => Some(Color::Orange),
            Card::Pink => Some(Color::Pink),
            Card::Red => Some(Color::Red),
            Card::White => Some(Color::White),
            Card::Yellow => Some(Color::Yellow),
            Card::Locomotive => None,
        }
    }

    /// Whether this card is the locomotive.
    ///
    /// # Examples
    /// ```
    /// use rail_duel::card::Card;
    ///
    /// assert!(Card::Locomotive.is_locomotive());
    /// assert!(!Card::Red.is_locomotive());
    /// ```
    #[inline]
    pub fn is_locomotive(&self) -> bool {
        *self == Card::Locomotive
    }
}

/// The full train card multiset a match is played with: 12 car cards of each
/// color and 14 locomotives, 110 cards total.
pub fn all_cards() -> Bag<Card> {
    let mut cards = Bag::new();
    for color in Color::iter() {
        cards.add_n(CARDS_PER_COLOR as u32, Card::of(color));
    }
    cards.add_n(LOCOMOTIVE_COUNT as u32, Card::Locomotive);
    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::EnumCount;

    #[test]
    fn card_count() {
        assert_eq!(Color::COUNT, 8);
        assert_eq!(Card::COUNT, 9);
    }

    #[test]
    fn card_to_string() {
        assert_eq!(Card::Orange.to_string(), "orange");
        assert_eq!(Card::Locomotive.to_string(), "locomotive");
    }

    #[test]
    fn card_color_round_trip() {
        for color in Color::iter() {
            assert_eq!(Card::of(color).color(), Some(color));
        }
        assert_eq!(Card::Locomotive.color(), None);
    }

    #[test]
    fn locomotive_sorts_last() {
        let mut cards: Vec<Card> = Card::iter().collect();
        cards.sort();
        assert_eq!(cards.last(), Some(&Card::Locomotive));
    }

    #[test]
    fn card_to_json() -> serde_json::Result<()> {
        assert_eq!(serde_json::to_string(&Card::Blue)?, r#""blue""#);
        assert_eq!(
            serde_json::to_string(&Card::Locomotive)?,
            r#""locomotive""#
        );
        Ok(())
    }

    #[test]
    fn json_to_card() -> serde_json::Result<()> {
        assert_eq!(serde_json::from_str::<Card>(r#""green""#)?, Card::Green);
        Ok(())
    }

    #[test]
    fn invalid_json_to_card() {
        assert!(serde_json::from_str::<Card>(r#""turquoise""#).is_err());
    }

    #[test]
    fn all_cards_composition() {
        let cards = all_cards();
        assert_eq!(cards.size(), 110);
        assert_eq!(cards.count_of(&Card::Locomotive), 14);
        for color in Color::iter() {
            assert_eq!(cards.count_of(&Card::of(color)), 12);
        }
    }
}
