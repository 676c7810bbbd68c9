//! The complete state of a match, as an immutable snapshot.

use crate::bag::Bag;
use crate::card::{self, Card};
use crate::card_state::{CardState, PublicCardState};
use crate::constants::{INITIAL_CARDS_COUNT, LAST_TURN_CAR_THRESHOLD};
use crate::deck::Deck;
use crate::player::PlayerId;
use crate::player_state::{PlayerState, PublicPlayerState};
use crate::route::Route;
use crate::ticket::Ticket;

use rand::Rng;

/// The part of the match state both players can see.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicGameState {
    tickets_count: usize,
    card_state: PublicCardState,
    current_player: PlayerId,
    player_states: [PublicPlayerState; 2],
    last_player: Option<PlayerId>,
}

impl PublicGameState {
    pub fn new(
        tickets_count: usize,
        card_state: PublicCardState,
        current_player: PlayerId,
        player_states: [PublicPlayerState; 2],
        last_player: Option<PlayerId>,
    ) -> Self {
        Self {
            tickets_count,
            card_state,
            current_player,
            player_states,
            last_player,
        }
    }

    /// How many tickets are left in the ticket deck.
    pub fn tickets_count(&self) -> usize {
        self.tickets_count
    }

    /// Whether a ticket-drawing turn is possible at all.
    pub fn can_draw_tickets(&self) -> bool {
        self.tickets_count > 0
    }

    pub fn card_state(&self) -> &PublicCardState {
        &self.card_state
    }

    /// Whether a card-drawing turn is possible: together, the deck and the
    /// discards must be able to refill the five face-up slots.
    pub fn can_draw_cards(&self) -> bool {
        self.card_state.deck_size() + self.card_state.discards_size() as usize
            >= crate::constants::FACE_UP_CARDS_COUNT
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    pub fn player_state(&self, id: PlayerId) -> &PublicPlayerState {
        &self.player_states[id.index()]
    }

    pub fn current_player_state(&self) -> &PublicPlayerState {
        self.player_state(self.current_player)
    }

    /// Every route claimed by either player.
    pub fn claimed_routes(&self) -> Vec<&'static Route> {
        self.player_states
            .iter()
            .flat_map(|state| state.routes().iter().copied())
            .collect()
    }

    /// The player who will play last, once the end of the match has been
    /// triggered.
    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }
}

/// The full state of a match. Immutable: every operation returns a new
/// snapshot, leaving the previous one usable.
#[derive(Clone, Debug)]
pub struct GameState {
    tickets: Deck<Ticket>,
    card_state: CardState,
    current_player: PlayerId,
    player_states: [PlayerState; 2],
    last_player: Option<PlayerId>,
}

impl GameState {
    /// The state a match starts in: shuffled ticket and card decks, four
    /// cards dealt to each player, five cards face up, and a randomly
    /// picked first player.
    pub fn initial(tickets: &Bag<Ticket>, rng: &mut impl Rng) -> Result<Self, String> {
        let ticket_deck = Deck::of(tickets, rng);
        let mut card_deck = Deck::of(&card::all_cards(), rng);

        let player_states: [PlayerState; 2] =
            array_init::try_array_init(|_| -> Result<PlayerState, String> {
                let hand = card_deck.top_cards(INITIAL_CARDS_COUNT)?;
                card_deck = card_deck.without_top_cards(INITIAL_CARDS_COUNT)?;
                PlayerState::initial(hand)
            })?;

        let current_player = PlayerId::ALL[rng.gen_range(0..PlayerId::ALL.len())];

        Ok(Self {
            tickets: ticket_deck,
            card_state: CardState::of(card_deck)?,
            current_player,
            player_states,
            last_player: None,
        })
    }

    pub fn tickets_count(&self) -> usize {
        self.tickets.size()
    }

    pub fn can_draw_tickets(&self) -> bool {
        !self.tickets.is_empty()
    }

    pub fn can_draw_cards(&self) -> bool {
        self.card_state.deck_size() + self.card_state.discards_size() as usize
            >= crate::constants::FACE_UP_CARDS_COUNT
    }

    pub fn card_state(&self) -> &CardState {
        &self.card_state
    }

    pub fn current_player_id(&self) -> PlayerId {
        self.current_player
    }

    pub fn player_state(&self, id: PlayerId) -> &PlayerState {
        &self.player_states[id.index()]
    }

    pub fn current_player_state(&self) -> &PlayerState {
        self.player_state(self.current_player)
    }

    pub fn last_player(&self) -> Option<PlayerId> {
        self.last_player
    }

    /// The `count` tickets on top of the ticket deck.
    pub fn top_tickets(&self, count: usize) -> Result<Bag<Ticket>, String> {
        self.tickets.top_cards(count)
    }

    /// The same state without the `count` top tickets.
    pub fn without_top_tickets(&self, count: usize) -> Result<Self, String> {
        Ok(Self {
            tickets: self.tickets.without_top_cards(count)?,
            ..self.clone()
        })
    }

    /// The card on top of the deck.
    pub fn top_card(&self) -> Result<Card, String> {
        self.card_state.top_deck_card()
    }

    /// The same state without the top card of the deck. The card goes
    /// nowhere; callers decide whether it lands in a hand or the discards.
    pub fn without_top_card(&self) -> Result<Self, String> {
        Ok(Self {
            card_state: self.card_state.without_top_deck_card()?,
            ..self.clone()
        })
    }

    /// The same state with the given cards added to the discard pile.
    pub fn with_more_discarded_cards(&self, discarded: &Bag<Card>) -> Self {
        Self {
            card_state: self.card_state.with_more_discarded_cards(discarded),
            ..self.clone()
        }
    }

    /// The same state, with the deck recreated from the discards if it ran
    /// out. A no-op otherwise.
    pub fn with_cards_deck_recreated_if_needed(&self, rng: &mut impl Rng) -> Result<Self, String> {
        if !self.card_state.is_deck_empty() {
            return Ok(self.clone());
        }
        Ok(Self {
            card_state: self.card_state.with_deck_recreated_from_discards(rng)?,
            ..self.clone()
        })
    }

    /// Records the tickets a player kept from their initial deal.
    ///
    /// Returns an `Err` if the player already has tickets.
    pub fn with_initially_chosen_tickets(
        &self,
        player_id: PlayerId,
        chosen: &Bag<Ticket>,
    ) -> Result<Self, String> {
        let player_state = self.player_state(player_id);
        if player_state.ticket_count() > 0 {
            return Err(format!(
                "Player {} has already chosen their initial tickets.",
                player_id
            ));
        }
        let mut player_states = self.player_states.clone();
        player_states[player_id.index()] = player_state.with_added_tickets(chosen);
        Ok(Self {
            player_states,
            ..self.clone()
        })
    }

    /// Resolves a ticket-drawing turn: the drawn tickets leave the deck,
    /// and the chosen ones join the current player's hand.
    ///
    /// Returns an `Err` if the chosen tickets are not a subset of the
    /// drawn ones, or if none were kept.
    pub fn with_chosen_additional_tickets(
        &self,
        drawn: &Bag<Ticket>,
        chosen: &Bag<Ticket>,
    ) -> Result<Self, String> {
        if chosen.is_empty() {
            return Err(String::from("At least one drawn ticket must be kept."));
        }
        if !drawn.contains_all(chosen) {
            return Err(String::from(
                "The chosen tickets must come from the drawn ones.",
            ));
        }
        let mut player_states = self.player_states.clone();
        player_states[self.current_player.index()] =
            self.current_player_state().with_added_tickets(chosen);
        Ok(Self {
            tickets: self.tickets.without_top_cards(drawn.size() as usize)?,
            player_states,
            ..self.clone()
        })
    }

    /// Resolves drawing the face-up card in `slot`: it joins the current
    /// player's hand and is replaced from the deck.
    pub fn with_drawn_face_up_card(&self, slot: usize) -> Result<Self, String> {
        let drawn = self.card_state.face_up_card(slot)?;
        let mut player_states = self.player_states.clone();
        player_states[self.current_player.index()] =
            self.current_player_state().with_added_card(drawn);
        Ok(Self {
            card_state: self.card_state.with_drawn_face_up_card(slot)?,
            player_states,
            ..self.clone()
        })
    }

    /// Resolves drawing the top card of the deck into the current player's
    /// hand.
    pub fn with_blindly_drawn_card(&self) -> Result<Self, String> {
        let drawn = self.card_state.top_deck_card()?;
        let mut player_states = self.player_states.clone();
        player_states[self.current_player.index()] =
            self.current_player_state().with_added_card(drawn);
        Ok(Self {
            card_state: self.card_state.without_top_deck_card()?,
            player_states,
            ..self.clone()
        })
    }

    /// Resolves a successful route claim by the current player: the claim
    /// cards leave their hand and land on the discard pile.
    pub fn with_claimed_route(
        &self,
        route: &'static Route,
        claim_cards: &Bag<Card>,
    ) -> Result<Self, String> {
        let mut player_states = self.player_states.clone();
        player_states[self.current_player.index()] = self
            .current_player_state()
            .with_claimed_route(route, claim_cards)?;
        Ok(Self {
            card_state: self.card_state.with_more_discarded_cards(claim_cards),
            player_states,
            ..self.clone()
        })
    }

    /// Whether the turn that just finished triggers the end of the match:
    /// the current player's cars dropped to two or fewer, and the last
    /// player is not recorded yet.
    pub fn last_turn_begins(&self) -> bool {
        self.last_player.is_none()
            && self.current_player_state().car_count() <= LAST_TURN_CAR_THRESHOLD
    }

    /// Ends the current player's turn: records them as the last player if
    /// they triggered the end of the match, and hands the turn over.
    pub fn for_next_turn(&self) -> Self {
        let last_player = if self.last_turn_begins() {
            Some(self.current_player)
        } else {
            self.last_player
        };
        Self {
            current_player: self.current_player.next(),
            last_player,
            ..self.clone()
        }
    }

    /// The public view of this state.
    pub fn public(&self) -> PublicGameState {
        PublicGameState {
            tickets_count: self.tickets.size(),
            card_state: self.card_state.public(),
            current_player: self.current_player,
            player_states: array_init::array_init(|i| self.player_states[i].public()),
            last_player: self.last_player,
        }
    }
}
