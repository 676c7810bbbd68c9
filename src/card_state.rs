//! The shared card piles: face-up display, draw deck and discards.

use crate::bag::Bag;
use crate::card::Card;
use crate::constants::FACE_UP_CARDS_COUNT;
use crate::deck::Deck;

use rand::Rng;
use serde::Serialize;
use smallvec::SmallVec;

/// The part of the card piles both players can see: the five face-up
/// cards, and the sizes of the deck and the discard pile.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PublicCardState {
    face_up_cards: SmallVec<[Card; FACE_UP_CARDS_COUNT]>,
    deck_size: usize,
    discards_size: u32,
}

impl PublicCardState {
    /// Builds a public card state.
    ///
    /// Returns an `Err` if the number of face-up cards is not exactly five.
    pub fn new(
        face_up_cards: SmallVec<[Card; FACE_UP_CARDS_COUNT]>,
        deck_size: usize,
        discards_size: u32,
    ) -> Result<Self, String> {
        if face_up_cards.len() != FACE_UP_CARDS_COUNT {
            return Err(format!(
                "There must be exactly {} face-up cards, got {}.",
                FACE_UP_CARDS_COUNT,
                face_up_cards.len()
            ));
        }
        Ok(Self {
            face_up_cards,
            deck_size,
            discards_size,
        })
    }

    /// The five face-up cards, by slot.
    pub fn face_up_cards(&self) -> &[Card] {
        &self.face_up_cards
    }

    /// The face-up card in the given slot.
    ///
    /// Returns an `Err` if `slot` is not in `0..5`.
    pub fn face_up_card(&self, slot: usize) -> Result<Card, String> {
        self.face_up_cards
            .get(slot)
            .copied()
            .ok_or_else(|| format!("There is no face-up slot {}.", slot))
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn is_deck_empty(&self) -> bool {
        self.deck_size == 0
    }

    pub fn discards_size(&self) -> u32 {
        self.discards_size
    }
}

/// The full card piles, face-down parts included. Only the engine holds
/// one of these; players see the [`PublicCardState`] view.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardState {
    face_up_cards: SmallVec<[Card; FACE_UP_CARDS_COUNT]>,
    deck: Deck<Card>,
    discards: Bag<Card>,
}

impl CardState {
    /// Deals the top five cards of the deck face up and keeps the rest as
    /// the draw pile, with no discards.
    ///
    /// Returns an `Err` if the deck holds fewer than five cards.
    pub fn of(deck: Deck<Card>) -> Result<Self, String> {
        if deck.size() < FACE_UP_CARDS_COUNT {
            return Err(format!(
                "A card state needs at least {} cards to start, got {}.",
                FACE_UP_CARDS_COUNT,
                deck.size()
            ));
        }
        let face_up_cards = deck.top_cards(FACE_UP_CARDS_COUNT)?.to_vec().into();
        let deck = deck.without_top_cards(FACE_UP_CARDS_COUNT)?;
        Ok(Self {
            face_up_cards,
            deck,
            discards: Bag::new(),
        })
    }

    /// The five face-up cards, by slot.
    pub fn face_up_cards(&self) -> &[Card] {
        &self.face_up_cards
    }

    /// The face-up card in the given slot.
    pub fn face_up_card(&self, slot: usize) -> Result<Card, String> {
        self.face_up_cards
            .get(slot)
            .copied()
            .ok_or_else(|| format!("There is no face-up slot {}.", slot))
    }

    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn discards_size(&self) -> u32 {
        self.discards.size()
    }

    /// Replaces the face-up card in `slot` with the top card of the deck.
    /// The replaced card is the one the player takes into their hand.
    ///
    /// Returns an `Err` if `slot` is not in `0..5` or if the deck is empty.
    pub fn with_drawn_face_up_card(&self, slot: usize) -> Result<Self, String> {
        if slot >= FACE_UP_CARDS_COUNT {
            return Err(format!("There is no face-up slot {}.", slot));
        }
        let replacement = self.deck.top_card()?;
        let mut face_up_cards = self.face_up_cards.clone();
        face_up_cards[slot] = replacement;
        Ok(Self {
            face_up_cards,
            deck: self.deck.without_top_card()?,
            discards: self.discards.clone(),
        })
    }

    /// The card on top of the deck.
    pub fn top_deck_card(&self) -> Result<Card, String> {
        self.deck.top_card()
    }

    /// The same state without the top card of the deck.
    pub fn without_top_deck_card(&self) -> Result<Self, String> {
        Ok(Self {
            face_up_cards: self.face_up_cards.clone(),
            deck: self.deck.without_top_card()?,
            discards: self.discards.clone(),
        })
    }

    /// Reshuffles the discard pile into a fresh deck.
    ///
    /// Returns an `Err` if the deck is not empty yet.
    pub fn with_deck_recreated_from_discards(&self, rng: &mut impl Rng) -> Result<Self, String> {
        if !self.deck.is_empty() {
            return Err(String::from(
                "Cannot recreate the deck while it still holds cards.",
            ));
        }
        Ok(Self {
            face_up_cards: self.face_up_cards.clone(),
            deck: Deck::of(&self.discards, rng),
            discards: Bag::new(),
        })
    }

    /// Adds the given cards to the discard pile.
    pub fn with_more_discarded_cards(&self, additional: &Bag<Card>) -> Self {
        Self {
            face_up_cards: self.face_up_cards.clone(),
            deck: self.deck.clone(),
            discards: self.discards.union(additional),
        }
    }

    /// The public view of this state.
    pub fn public(&self) -> PublicCardState {
        PublicCardState {
            face_up_cards: self.face_up_cards.clone(),
            deck_size: self.deck.size(),
            discards_size: self.discards.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use smallvec::smallvec;

    fn full_card_state(seed: u64) -> CardState {
        let mut rng = StdRng::seed_from_u64(seed);
        CardState::of(Deck::of(&card::all_cards(), &mut rng)).unwrap()
    }

    #[test]
    fn public_card_state_needs_five_face_up_cards() {
        assert!(PublicCardState::new(smallvec![Card::Red; 4], 10, 0).is_err());
        assert!(PublicCardState::new(smallvec![Card::Red; 5], 10, 0).is_ok());
    }

    #[test]
    fn public_card_state_accessors() {
        let state = PublicCardState::new(smallvec![Card::Red; 5], 3, 7).unwrap();
        assert_eq!(state.face_up_card(0), Ok(Card::Red));
        assert!(state.face_up_card(5).is_err());
        assert_eq!(state.deck_size(), 3);
        assert!(!state.is_deck_empty());
        assert_eq!(state.discards_size(), 7);
    }

    #[test]
    fn of_deals_five_face_up_cards() {
        let state = full_card_state(4);
        assert_eq!(state.face_up_cards().len(), 5);
        assert_eq!(state.deck_size(), 105);
        assert_eq!(state.discards_size(), 0);
    }

    #[test]
    fn of_rejects_tiny_decks() {
        let mut rng = StdRng::seed_from_u64(0);
        let deck = Deck::of(&Bag::of(4, Card::Blue), &mut rng);
        assert!(CardState::of(deck).is_err());
    }

    #[test]
    fn with_drawn_face_up_card_replaces_the_slot() {
        let state = full_card_state(11);
        let replacement = state.top_deck_card().unwrap();

        let next = state.with_drawn_face_up_card(2).unwrap();
        assert_eq!(next.face_up_card(2), Ok(replacement));
        assert_eq!(next.deck_size(), state.deck_size() - 1);

        // Other slots are untouched.
        for slot in [0, 1, 3, 4] {
            assert_eq!(next.face_up_card(slot), state.face_up_card(slot));
        }

        assert!(state.with_drawn_face_up_card(5).is_err());
    }

    #[test]
    fn without_top_deck_card_shrinks_the_deck() {
        let state = full_card_state(8);
        let next = state.without_top_deck_card().unwrap();
        assert_eq!(next.deck_size(), state.deck_size() - 1);
        assert_eq!(next.face_up_cards(), state.face_up_cards());
    }

    #[test]
    fn discards_accumulate_and_recreate_the_deck() {
        let mut rng = StdRng::seed_from_u64(3);
        let deck = Deck::of(&Bag::of(5, Card::Green), &mut rng);
        let state = CardState::of(deck).unwrap();
        assert!(state.is_deck_empty());

        let discarded = state
            .with_more_discarded_cards(&Bag::of_two(2, Card::Red, 1, Card::Locomotive));
        assert_eq!(discarded.discards_size(), 3);

        let recreated = discarded
            .with_deck_recreated_from_discards(&mut rng)
            .unwrap();
        assert_eq!(recreated.deck_size(), 3);
        assert_eq!(recreated.discards_size(), 0);
    }

    #[test]
    fn deck_recreation_requires_an_empty_deck() {
        let state = full_card_state(9);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(state.with_deck_recreated_from_discards(&mut rng).is_err());
    }

    #[test]
    fn public_view_matches() {
        let state = full_card_state(5);
        let public = state.public();
        assert_eq!(public.face_up_cards(), state.face_up_cards());
        assert_eq!(public.deck_size(), state.deck_size());
        assert_eq!(public.discards_size(), state.discards_size());
    }
}
