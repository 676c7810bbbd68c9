//! An immutable, shuffled draw pile.

use crate::bag::Bag;

use im::Vector;
use rand::seq::SliceRandom;
use rand::Rng;

/// An ordered pile of cards, drawn from the top.
///
/// Decks are persistent: taking or dropping the top cards returns a new deck
/// that shares its tail with the original instead of copying it, so keeping
/// consecutive game snapshots around stays cheap.
///
/// # Examples
/// ```
/// use rail_duel::bag::Bag;
/// use rail_duel::deck::Deck;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let deck = Deck::of(&Bag::of_two(3, 'a', 2, 'b'), &mut rng);
///
/// assert_eq!(deck.size(), 5);
/// assert_eq!(deck.without_top_card().unwrap().size(), 4);
/// // The original deck is untouched.
/// assert_eq!(deck.size(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<T: Clone> {
    cards: Vector<T>,
}

impl<T: Ord + Clone> Deck<T> {
    /// Shuffles the given multiset into a deck, using the caller-supplied
    /// random source. Callers control reproducibility: tests pass a seeded
    /// generator and get the same deck every time.
    pub fn of(cards: &Bag<T>, rng: &mut impl Rng) -> Self {
        let mut shuffled = cards.to_vec();
        shuffled.shuffle(rng);
        Self {
            cards: shuffled.into_iter().collect(),
        }
    }

    /// Number of cards left in the deck.
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card currently on top of the deck.
    ///
    /// Returns an `Err` if the deck is empty.
    pub fn top_card(&self) -> Result<T, String> {
        self.cards
            .front()
            .cloned()
            .ok_or_else(|| String::from("Cannot look at the top card of an empty deck."))
    }

    /// The same deck without its top card.
    ///
    /// Returns an `Err` if the deck is empty.
    pub fn without_top_card(&self) -> Result<Self, String> {
        self.without_top_cards(1)
            .map_err(|_| String::from("Cannot remove the top card of an empty deck."))
    }

    /// The `count` cards on top of the deck, as a multiset.
    ///
    /// Returns an `Err` if `count` exceeds the deck's size.
    pub fn top_cards(&self, count: usize) -> Result<Bag<T>, String> {
        if count > self.size() {
            return Err(format!(
                "Cannot take {} cards from a deck of {}.",
                count,
                self.size()
            ));
        }
        Ok(self.cards.iter().take(count).cloned().collect())
    }

    /// The same deck without its `count` top cards.
    ///
    /// Returns an `Err` if `count` exceeds the deck's size.
    pub fn without_top_cards(&self, count: usize) -> Result<Self, String> {
        if count > self.size() {
            return Err(format!(
                "Cannot drop {} cards from a deck of {}.",
                count,
                self.size()
            ));
        }
        let mut cards = self.cards.clone();
        let rest = cards.split_off(count);
        Ok(Self { cards: rest })
    }
}
