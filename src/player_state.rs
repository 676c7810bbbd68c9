//! Per-player state: tickets, hand cards and claimed routes.

use crate::bag::Bag;
use crate::card::Card;
use crate::constants::{ADDITIONAL_TUNNEL_CARDS, CAR_COUNT, INITIAL_CARDS_COUNT};
use crate::partition::StationPartitionBuilder;
use crate::route::Route;
use crate::ticket::Ticket;

/// The part of a player's state their opponent can see: how many tickets
/// and cards they hold, and which routes they have claimed.
#[derive(Clone, Debug, PartialEq)]
pub struct PublicPlayerState {
    ticket_count: usize,
    card_count: usize,
    routes: Vec<&'static Route>,
}

impl PublicPlayerState {
    pub fn new(ticket_count: usize, card_count: usize, routes: Vec<&'static Route>) -> Self {
        Self {
            ticket_count,
            card_count,
            routes,
        }
    }

    pub fn ticket_count(&self) -> usize {
        self.ticket_count
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// The routes this player has claimed, in claim order.
    pub fn routes(&self) -> &[&'static Route] {
        &self.routes
    }

    /// How many cars the player has left: the initial allotment minus the
    /// total length of their claimed routes.
    pub fn car_count(&self) -> u32 {
        let used: u32 = self.routes.iter().map(|route| route.length()).sum();
        CAR_COUNT.saturating_sub(used)
    }

    /// The points earned from claimed routes alone.
    pub fn claim_points(&self) -> i32 {
        self.routes.iter().map(|route| route.claim_points()).sum()
    }
}

/// A player's full state. Only the engine and the player themself see it.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerState {
    tickets: Bag<Ticket>,
    cards: Bag<Card>,
    routes: Vec<&'static Route>,
}

impl PlayerState {
    /// The state a player starts the match with: their four dealt cards,
    /// no tickets and no routes.
    ///
    /// Returns an `Err` if the number of dealt cards is not exactly four.
    pub fn initial(cards: Bag<Card>) -> Result<Self, String> {
        if cards.size() != INITIAL_CARDS_COUNT as u32 {
            return Err(format!(
                "A player starts with exactly {} cards, got {}.",
                INITIAL_CARDS_COUNT,
                cards.size()
            ));
        }
        Ok(Self {
            tickets: Bag::new(),
            cards,
            routes: Vec::new(),
        })
    }

    /// Builds a state from its parts. Mostly useful to the wire codec,
    /// which reconstitutes player states received over the network.
    pub fn new(tickets: Bag<Ticket>, cards: Bag<Card>, routes: Vec<&'static Route>) -> Self {
        Self {
            tickets,
            cards,
            routes,
        }
    }

    pub fn tickets(&self) -> &Bag<Ticket> {
        &self.tickets
    }

    pub fn cards(&self) -> &Bag<Card> {
        &self.cards
    }

    pub fn routes(&self) -> &[&'static Route] {
        &self.routes
    }

    pub fn ticket_count(&self) -> usize {
        self.tickets.size() as usize
    }

    pub fn card_count(&self) -> usize {
        self.cards.size() as usize
    }

    pub fn car_count(&self) -> u32 {
        self.public().car_count()
    }

    pub fn claim_points(&self) -> i32 {
        self.public().claim_points()
    }

    /// The same state with the given tickets added.
    pub fn with_added_tickets(&self, tickets: &Bag<Ticket>) -> Self {
        Self {
            tickets: self.tickets.union(tickets),
            cards: self.cards.clone(),
            routes: self.routes.clone(),
        }
    }

    /// The same state with one more card in hand.
    pub fn with_added_card(&self, card: Card) -> Self {
        let mut cards = self.cards.clone();
        cards.add(card);
        Self {
            tickets: self.tickets.clone(),
            cards,
            routes: self.routes.clone(),
        }
    }

    /// Whether the player could possibly claim the route: enough cars left
    /// and at least one playable card combination.
    pub fn can_claim_route(&self, route: &'static Route) -> bool {
        self.car_count() >= route.length() && !self.possible_claim_cards(route).is_empty()
    }

    /// The combinations from [`Route::possible_claim_cards`] the player can
    /// actually pay with their hand, in the same canonical order. Empty if
    /// the player lacks the cars for the route.
    pub fn possible_claim_cards(&self, route: &'static Route) -> Vec<Bag<Card>> {
        if self.car_count() < route.length() {
            return Vec::new();
        }
        route
            .possible_claim_cards()
            .into_iter()
            .filter(|combination| self.cards.contains_all(combination))
            .collect()
    }

    /// All the ways the player can pay the additional cards demanded by a
    /// tunnel claim, given the cards they initially committed.
    ///
    /// Each option is a sub-multiset of the remaining hand, restricted to
    /// cards usable for the claim (the initial cards' colors, plus
    /// locomotives). Options are sorted by ascending locomotive count.
    ///
    /// Returns an `Err` if `additional_count` is not in `1..=3`, or if
    /// `initial_cards` is empty or mixes more than two kinds of cards.
    pub fn possible_additional_cards(
        &self,
        additional_count: u32,
        initial_cards: &Bag<Card>,
    ) -> Result<Vec<Bag<Card>>, String> {
        if additional_count == 0 || additional_count > ADDITIONAL_TUNNEL_CARDS as u32 {
            return Err(format!(
                "The additional cards count must be between 1 and {}, got {}.",
                ADDITIONAL_TUNNEL_CARDS, additional_count
            ));
        }
        if initial_cards.is_empty() || initial_cards.distinct_count() > 2 {
            return Err(String::from(
                "The initial claim cards must hold one or two kinds of cards.",
            ));
        }

        let usable: Bag<Card> = self
            .cards
            .difference(initial_cards)
            .iter()
            .filter(|card| card.is_locomotive() || initial_cards.contains(card))
            .copied()
            .collect();

        let mut options = usable.subsets_of_size(additional_count);
        options.sort_by_key(|option| option.count_of(&Card::Locomotive));
        Ok(options)
    }

    /// The state after successfully claiming a route: the route joins the
    /// player's network and the claim cards leave their hand.
    ///
    /// Returns an `Err` if the hand does not hold the claim cards, or if
    /// the player lacks the cars for the route.
    pub fn with_claimed_route(
        &self,
        route: &'static Route,
        claim_cards: &Bag<Card>,
    ) -> Result<Self, String> {
        if !self.cards.contains_all(claim_cards) {
            return Err(format!(
                "Cannot pay {} for route {}: the hand does not hold those cards.",
                claim_cards,
                route.id()
            ));
        }
        if self.car_count() < route.length() {
            return Err(format!(
                "Cannot claim route {}: only {} cars left for a length of {}.",
                route.id(),
                self.car_count(),
                route.length()
            ));
        }
        let mut routes = self.routes.clone();
        routes.push(route);
        Ok(Self {
            tickets: self.tickets.clone(),
            cards: self.cards.difference(claim_cards),
            routes,
        })
    }

    /// The points the player's tickets are worth, given the connectivity of
    /// their claimed routes. Unfulfilled tickets count negatively.
    pub fn ticket_points(&self) -> i32 {
        let max_id = self
            .routes
            .iter()
            .flat_map(|route| route.stations())
            .map(|station| station.id())
            .max();
        let station_count = max_id.map_or(0, |id| id + 1);

        let mut builder = StationPartitionBuilder::new(station_count);
        for route in &self.routes {
            let [s1, s2] = route.stations();
            builder.connect(s1, s2);
        }
        let connectivity = builder.build();

        self.tickets
            .iter()
            .map(|ticket| ticket.points(&connectivity))
            .sum()
    }

    /// The player's total points: claimed routes plus tickets, without the
    /// longest-trail bonus.
    pub fn final_points(&self) -> i32 {
        self.claim_points() + self.ticket_points()
    }

    /// The public view of this state.
    pub fn public(&self) -> PublicPlayerState {
        PublicPlayerState::new(
            self.ticket_count(),
            self.card_count(),
            self.routes.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::board;

    fn initial_with(cards: Bag<Card>) -> PlayerState {
        PlayerState::initial(cards).unwrap()
    }

    fn hand(cards: &[Card]) -> Bag<Card> {
        cards.iter().copied().collect()
    }

    #[test]
    fn initial_needs_four_cards() {
        assert!(PlayerState::initial(Bag::of(3, Card::Red)).is_err());
        assert!(PlayerState::initial(Bag::of(5, Card::Red)).is_err());

        let state = initial_with(Bag::of(4, Card::Red));
        assert_eq!(state.card_count(), 4);
        assert_eq!(state.ticket_count(), 0);
        assert!(state.routes().is_empty());
        assert_eq!(state.car_count(), CAR_COUNT);
    }

    #[test]
    fn tickets_and_cards_accumulate() {
        let state = initial_with(Bag::of(4, Card::Blue));

        let tickets: Bag<Ticket> = [board::tickets()[0].clone()].into_iter().collect();
        let state = state.with_added_tickets(&tickets).with_added_card(Card::Red);

        assert_eq!(state.ticket_count(), 1);
        assert_eq!(state.card_count(), 5);
    }

    #[test]
    fn possible_claim_cards_filters_by_hand() {
        // BOS_NYC_1 is a yellow surface route of length 2.
        let route = board::route_by_id("BOS_NYC_1").unwrap();

        let state = initial_with(hand(&[Card::Yellow, Card::Yellow, Card::Red, Card::Blue]));
        assert_eq!(
            state.possible_claim_cards(route),
            vec![Bag::of(2, Card::Yellow)]
        );
        assert!(state.can_claim_route(route));

        let state = initial_with(hand(&[Card::Yellow, Card::Red, Card::Red, Card::Blue]));
        assert!(state.possible_claim_cards(route).is_empty());
        assert!(!state.can_claim_route(route));
    }

    #[test]
    fn claiming_spends_cards_and_records_the_route() {
        let route = board::route_by_id("BOS_NYC_1").unwrap();
        let state = initial_with(hand(&[Card::Yellow, Card::Yellow, Card::Red, Card::Blue]));

        let claimed = state
            .with_claimed_route(route, &Bag::of(2, Card::Yellow))
            .unwrap();
        assert_eq!(claimed.card_count(), 2);
        assert_eq!(claimed.routes(), &[route]);
        assert_eq!(claimed.car_count(), CAR_COUNT - 2);
        assert_eq!(claimed.claim_points(), 2);
    }

    #[test]
    fn claiming_without_the_cards_fails() {
        let route = board::route_by_id("BOS_NYC_1").unwrap();
        let state = initial_with(Bag::of(4, Card::Red));
        assert!(state
            .with_claimed_route(route, &Bag::of(2, Card::Yellow))
            .is_err());
    }

    #[test]
    fn possible_additional_cards_restricts_to_usable_cards() {
        let mut cards = Bag::new();
        cards.add_n(3, Card::Green);
        cards.add_n(2, Card::Locomotive);
        cards.add_n(2, Card::Red);
        let state = PlayerState {
            tickets: Bag::new(),
            cards,
            routes: Vec::new(),
        };

        // Two greens committed: one green and two locomotives remain
        // usable; red cards never qualify.
        let initial = Bag::of(2, Card::Green);
        let options = state.possible_additional_cards(2, &initial).unwrap();

        assert_eq!(
            options,
            vec![
                Bag::of_two(1, Card::Green, 1, Card::Locomotive),
                Bag::of(2, Card::Locomotive),
            ]
        );
    }

    #[test]
    fn possible_additional_cards_sorted_by_locomotive_count() {
        let mut cards = Bag::new();
        cards.add_n(4, Card::Blue);
        cards.add_n(3, Card::Locomotive);
        let state = PlayerState {
            tickets: Bag::new(),
            cards,
            routes: Vec::new(),
        };

        let initial = Bag::of(2, Card::Blue);
        let options = state.possible_additional_cards(2, &initial).unwrap();

        assert_eq!(
            options,
            vec![
                Bag::of(2, Card::Blue),
                Bag::of_two(1, Card::Blue, 1, Card::Locomotive),
                Bag::of(2, Card::Locomotive),
            ]
        );
    }

    #[test]
    fn possible_additional_cards_preconditions() {
        let state = initial_with(Bag::of(4, Card::Blue));

        assert!(state.possible_additional_cards(0, &Bag::of(1, Card::Blue)).is_err());
        assert!(state.possible_additional_cards(4, &Bag::of(1, Card::Blue)).is_err());
        assert!(state.possible_additional_cards(2, &Bag::new()).is_err());

        let mixed: Bag<Card> = hand(&[Card::Blue, Card::Red, Card::Green]);
        assert!(state.possible_additional_cards(2, &mixed).is_err());
    }

    #[test]
    fn ticket_points_reflect_connectivity() {
        // New York - Atlanta (6): fulfilled through Washington and Raleigh.
        let ticket = Ticket::of(crate::station::Station::NewYork, crate::station::Station::Atlanta, 6);
        let tickets: Bag<Ticket> = [ticket].into_iter().collect();

        let unfulfilled = initial_with(Bag::of(4, Card::Red)).with_added_tickets(&tickets);
        assert_eq!(unfulfilled.ticket_points(), -6);

        let mut state = unfulfilled;
        for id in ["NYC_WAS_1", "RAL_WAS_1", "ATL_RAL_1"] {
            let route = board::route_by_id(id).unwrap();
            state = PlayerState {
                tickets: state.tickets.clone(),
                cards: state.cards.clone(),
                routes: {
                    let mut routes = state.routes.clone();
                    routes.push(route);
                    routes
                },
            };
        }
        assert_eq!(state.ticket_points(), 6);
        assert_eq!(state.final_points(), state.claim_points() + 6);
    }

    #[test]
    fn public_view_hides_the_hand() {
        let route = board::route_by_id("SEA_POR_1").unwrap();
        let state = initial_with(hand(&[Card::Red, Card::Red, Card::Blue, Card::Green]))
            .with_claimed_route(route, &Bag::of(1, Card::Red))
            .unwrap();

        let public = state.public();
        assert_eq!(public.ticket_count(), 0);
        assert_eq!(public.card_count(), 3);
        assert_eq!(public.routes(), &[route]);
        assert_eq!(public.car_count(), CAR_COUNT - 1);
        assert_eq!(public.claim_points(), 1);
    }
}
