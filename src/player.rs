//! Player identity, turn actions and the player abstraction.

use crate::bag::Bag;
use crate::card::Card;
use crate::game_state::PublicGameState;
use crate::player_state::PlayerState;
use crate::route::Route;
use crate::ticket::Ticket;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

/// One of the two players of a match.
///
/// # JSON
/// Player ids are serialized in lowercase.
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
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both player ids, in canonical order. The position of an id in this
    /// slice is its index on the wire.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// The other player.
    pub fn next(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// This player's dense index, for indexing per-player arrays.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The three kinds of actions a player can take on their turn.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum TurnKind {
    /// Draw three tickets and keep at least one.
    #[strum(serialize = "draw tickets")]
    DrawTickets,
    /// Draw two cards, each from the deck or a face-up slot.
    #[strum(serialize = "draw cards")]
    DrawCards,
    /// Attempt to claim a route.
    #[strum(serialize = "claim route")]
    ClaimRoute,
}

impl TurnKind {
    /// All turn kinds, in canonical order. The position of a kind in this
    /// slice is its index on the wire.
    pub const ALL: [TurnKind; 3] = [
        TurnKind::DrawTickets,
        TurnKind::DrawCards,
        TurnKind::ClaimRoute,
    ];
}

/// Where a player draws a card from: the face-down deck, or one of the
/// five face-up slots.
///
/// On the wire the deck is the sentinel index `-1` and face-up slots are
/// their index in `0..5`; in the engine the distinction is a proper sum
/// type so no code ever interprets `-1` as a slot.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DrawSlot {
    Deck,
    FaceUp(usize),
}

impl DrawSlot {
    /// The wire encoding of this slot.
    pub fn to_index(&self) -> i32 {
        match self {
            DrawSlot::Deck => crate::constants::DECK_SLOT,
            DrawSlot::FaceUp(slot) => *slot as i32,
        }
    }

    /// Decodes a wire slot index.
    ///
    /// Returns an `Err` for anything but `-1` and `0..5`.
    pub fn from_index(index: i32) -> Result<Self, String> {
        match index {
            crate::constants::DECK_SLOT => Ok(DrawSlot::Deck),
            slot if (0..crate::constants::FACE_UP_CARDS_COUNT as i32).contains(&slot) => {
                Ok(DrawSlot::FaceUp(slot as usize))
            }
            other => Err(format!("{} is not a valid draw slot.", other)),
        }
    }
}

/// A player of the match, local or remote.
///
/// The engine drives the match by calling these methods; implementations
/// answer by asking a human, running a bot, or forwarding the call over
/// the network. Every method can fail, since a remote player's connection
/// can drop at any point.
pub trait Player {
    /// Tells the player their own id and both players' names.
    fn init_players(&mut self, own_id: PlayerId, names: &[String; 2]) -> Result<(), String>;

    /// Passes the player a plain-text event description.
    fn receive_info(&mut self, info: &str) -> Result<(), String>;

    /// Updates the player's view: the new public state of the match and
    /// their own full state.
    fn update_state(
        &mut self,
        public_state: &PublicGameState,
        own_state: &PlayerState,
    ) -> Result<(), String>;

    /// Hands the player the five tickets they were dealt at the start of
    /// the match.
    fn set_initial_ticket_choice(&mut self, tickets: &Bag<Ticket>) -> Result<(), String>;

    /// Asks which of the initially dealt tickets the player keeps. Must
    /// follow [`Player::set_initial_ticket_choice`].
    fn choose_initial_tickets(&mut self) -> Result<Bag<Ticket>, String>;

    /// Asks, at the start of the player's turn, which action they take.
    fn next_turn(&mut self) -> Result<TurnKind, String>;

    /// Asks which of the drawn tickets the player keeps.
    fn choose_tickets(&mut self, options: &Bag<Ticket>) -> Result<Bag<Ticket>, String>;

    /// Asks where the player draws a card from. Called once per drawn
    /// card, so twice in a card-drawing turn.
    fn draw_slot(&mut self) -> Result<DrawSlot, String>;

    /// Asks which route the player is attempting to claim.
    fn claimed_route(&mut self) -> Result<&'static Route, String>;

    /// Asks which cards the player initially commits to the claim.
    fn initial_claim_cards(&mut self) -> Result<Bag<Card>, String>;

    /// Asks how the player pays a tunnel's additional cards. Returning an
    /// empty bag abandons the claim.
    fn choose_additional_cards(&mut self, options: &[Bag<Card>]) -> Result<Bag<Card>, String>;
}
