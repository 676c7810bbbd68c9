//! Spelling game values as wire text and back.
//!
//! Scalars are decimal integers; free text is Base64, so it can never
//! clash with a separator. Enumerated values (player ids, turn kinds,
//! cards, routes, tickets) travel as their index in the canonical list
//! both sides share. Lists join their elements with `','`, lists of card
//! multisets with `';'`, composite states with `';'`, and the full public
//! game state with `':'`.

use crate::bag::Bag;
use crate::board;
use crate::card::Card;
use crate::card_state::PublicCardState;
use crate::game_state::PublicGameState;
use crate::net::error::DecodeError;
use crate::player::{PlayerId, TurnKind};
use crate::player_state::{PlayerState, PublicPlayerState};
use crate::route::Route;
use crate::ticket::Ticket;

/// A value with a wire spelling.
///
/// Deserialization must accept exactly what serialization produces;
/// anything else is a [`DecodeError`], which callers treat as fatal for
/// the connection.
pub trait Serde: Sized {
    fn serialize(&self) -> String;
    fn deserialize(raw: &str) -> Result<Self, DecodeError>;
}

impl Serde for i32 {
    fn serialize(&self) -> String {
        self.to_string()
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        raw.parse()
            .map_err(|_| DecodeError::InvalidInt(raw.to_string()))
    }
}

impl Serde for u32 {
    fn serialize(&self) -> String {
        self.to_string()
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        raw.parse()
            .map_err(|_| DecodeError::InvalidInt(raw.to_string()))
    }
}

impl Serde for usize {
    fn serialize(&self) -> String {
        self.to_string()
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        raw.parse()
            .map_err(|_| DecodeError::InvalidInt(raw.to_string()))
    }
}

impl Serde for String {
    fn serialize(&self) -> String {
        base64::encode(self.as_bytes())
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        let bytes = base64::decode(raw)?;
        Ok(String::from_utf8(bytes)?)
    }
}

fn serialize_indexed<T: PartialEq>(all: &[T], value: &T, what: &'static str) -> String {
    match all.iter().position(|candidate| candidate == value) {
        Some(index) => index.to_string(),
        // The canonical lists are exhaustive, so this cannot happen.
        None => unreachable!("{} not in its canonical list", what),
    }
}

fn deserialize_indexed<'a, T>(
    all: &'a [T],
    raw: &str,
    what: &'static str,
) -> Result<&'a T, DecodeError> {
    let index = usize::deserialize(raw)?;
    all.get(index)
        .ok_or(DecodeError::IndexOutOfRange { what, index })
}

impl Serde for PlayerId {
    fn serialize(&self) -> String {
        serialize_indexed(&PlayerId::ALL, self, "player id")
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        deserialize_indexed(&PlayerId::ALL, raw, "player ids").copied()
    }
}

impl Serde for TurnKind {
    fn serialize(&self) -> String {
        serialize_indexed(&TurnKind::ALL, self, "turn kind")
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        deserialize_indexed(&TurnKind::ALL, raw, "turn kinds").copied()
    }
}

impl Serde for Card {
    fn serialize(&self) -> String {
        serialize_indexed(&Card::ALL, self, "card")
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        deserialize_indexed(&Card::ALL, raw, "cards").copied()
    }
}

impl Serde for &'static Route {
    fn serialize(&self) -> String {
        serialize_indexed(board::routes(), *self, "route")
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        deserialize_indexed(board::routes(), raw, "routes")
    }
}

impl Serde for Ticket {
    fn serialize(&self) -> String {
        serialize_indexed(board::tickets(), self, "ticket")
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        deserialize_indexed(board::tickets(), raw, "tickets").cloned()
    }
}

/// An optional last player: the empty string stands for "not yet known".
impl Serde for Option<PlayerId> {
    fn serialize(&self) -> String {
        match self {
            Some(id) => id.serialize(),
            None => String::new(),
        }
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        if raw.is_empty() {
            Ok(None)
        } else {
            PlayerId::deserialize(raw).map(Some)
        }
    }
}

/// Joins the elements' spellings with `','`. The empty list is the empty
/// string.
pub fn serialize_list<'a, T, I>(items: I) -> String
where
    T: Serde + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .map(Serde::serialize)
        .collect::<Vec<_>>()
        .join(",")
}

pub fn deserialize_list<T: Serde>(raw: &str) -> Result<Vec<T>, DecodeError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(T::deserialize).collect()
}

/// A multiset travels as the `','`-joined list of its elements, repeats
/// included, in the bag's sorted order.
pub fn serialize_bag<T: Serde + Ord + Clone>(bag: &Bag<T>) -> String {
    serialize_list(bag.iter())
}

pub fn deserialize_bag<T: Serde + Ord + Clone>(raw: &str) -> Result<Bag<T>, DecodeError> {
    Ok(deserialize_list(raw)?.into_iter().collect())
}

/// A list of card multisets joins its bags with `';'`.
pub fn serialize_bag_list<T: Serde + Ord + Clone>(bags: &[Bag<T>]) -> String {
    bags.iter()
        .map(serialize_bag)
        .collect::<Vec<_>>()
        .join(";")
}

pub fn deserialize_bag_list<T: Serde + Ord + Clone>(
    raw: &str,
) -> Result<Vec<Bag<T>>, DecodeError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    raw.split(';').map(deserialize_bag).collect()
}

fn split_exact<'a>(
    raw: &'a str,
    separator: char,
    count: usize,
    what: &str,
) -> Result<Vec<&'a str>, DecodeError> {
    let parts: Vec<&str> = raw.split(separator).collect();
    if parts.len() != count {
        return Err(DecodeError::Malformed(format!(
            "a {} has {} fields, got {}",
            what,
            count,
            parts.len()
        )));
    }
    Ok(parts)
}

impl Serde for PublicCardState {
    fn serialize(&self) -> String {
        format!(
            "{};{};{}",
            serialize_list(self.face_up_cards().iter()),
            self.deck_size().serialize(),
            self.discards_size().serialize()
        )
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        let parts = split_exact(raw, ';', 3, "card state")?;
        let face_up: Vec<Card> = deserialize_list(parts[0])?;
        let deck_size = usize::deserialize(parts[1])?;
        let discards_size = u32::deserialize(parts[2])?;
        PublicCardState::new(face_up.into(), deck_size, discards_size)
            .map_err(DecodeError::Malformed)
    }
}

impl Serde for PublicPlayerState {
    fn serialize(&self) -> String {
        format!(
            "{};{};{}",
            self.ticket_count().serialize(),
            self.card_count().serialize(),
            serialize_list(self.routes().iter())
        )
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        let parts = split_exact(raw, ';', 3, "public player state")?;
        Ok(PublicPlayerState::new(
            usize::deserialize(parts[0])?,
            usize::deserialize(parts[1])?,
            deserialize_list(parts[2])?,
        ))
    }
}

impl Serde for PlayerState {
    fn serialize(&self) -> String {
        format!(
            "{};{};{}",
            serialize_bag(self.tickets()),
            serialize_bag(self.cards()),
            serialize_list(self.routes().iter())
        )
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        let parts = split_exact(raw, ';', 3, "player state")?;
        Ok(PlayerState::new(
            deserialize_bag(parts[0])?,
            deserialize_bag(parts[1])?,
            deserialize_list(parts[2])?,
        ))
    }
}

impl Serde for PublicGameState {
    fn serialize(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}:{}",
            self.tickets_count().serialize(),
            self.card_state().serialize(),
            self.current_player_id().serialize(),
            self.player_state(PlayerId::One).serialize(),
            self.player_state(PlayerId::Two).serialize(),
            self.last_player().serialize()
        )
    }

    fn deserialize(raw: &str) -> Result<Self, DecodeError> {
        let parts = split_exact(raw, ':', 6, "game state")?;
        Ok(PublicGameState::new(
            usize::deserialize(parts[0])?,
            PublicCardState::deserialize(parts[1])?,
            PlayerId::deserialize(parts[2])?,
            [
                PublicPlayerState::deserialize(parts[3])?,
                PublicPlayerState::deserialize(parts[4])?,
            ],
            <Option<PlayerId>>::deserialize(parts[5])?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    #[test]
    fn integers_round_trip() {
        assert_eq!((-1i32).serialize(), "-1");
        assert_eq!(i32::deserialize("-1"), Ok(-1));
        assert!(i32::deserialize("five").is_err());
        assert!(u32::deserialize("-1").is_err());
    }

    #[test]
    fn strings_travel_as_base64() {
        let name = String::from("Charles");
        assert_eq!(name.serialize(), "Q2hhcmxlcw==");
        assert_eq!(String::deserialize("Q2hhcmxlcw=="), Ok(name));

        // Separators in the text cannot leak into the frame.
        let tricky = String::from("a:b;c,d e");
        let encoded = tricky.serialize();
        assert!(!encoded.contains([':', ';', ',', ' ']));
        assert_eq!(String::deserialize(&encoded), Ok(tricky));

        assert!(String::deserialize("not base64!").is_err());
    }

    #[test]
    fn enums_travel_by_canonical_index() {
        assert_eq!(PlayerId::Two.serialize(), "1");
        assert_eq!(PlayerId::deserialize("0"), Ok(PlayerId::One));
        assert!(PlayerId::deserialize("2").is_err());

        assert_eq!(TurnKind::ClaimRoute.serialize(), "2");
        assert_eq!(TurnKind::deserialize("0"), Ok(TurnKind::DrawTickets));

        assert_eq!(Card::Locomotive.serialize(), "8");
        assert_eq!(Card::deserialize("8"), Ok(Card::Locomotive));
        assert!(Card::deserialize("9").is_err());
    }

    #[test]
    fn routes_and_tickets_travel_by_index() {
        let route = &board::routes()[17];
        let raw = route.serialize();
        assert_eq!(raw, "17");
        let decoded = <&'static Route>::deserialize(&raw).unwrap();
        assert!(std::ptr::eq(route, decoded));
        assert!(<&'static Route>::deserialize("100").is_err());

        let ticket = board::tickets()[4].clone();
        assert_eq!(ticket.serialize(), "4");
        assert_eq!(Ticket::deserialize("4"), Ok(ticket));
    }

    #[test]
    fn optional_player_id_uses_the_empty_string() {
        assert_eq!(None::<PlayerId>.serialize(), "");
        assert_eq!(Some(PlayerId::Two).serialize(), "1");
        assert_eq!(<Option<PlayerId>>::deserialize(""), Ok(None));
        assert_eq!(
            <Option<PlayerId>>::deserialize("0"),
            Ok(Some(PlayerId::One))
        );
    }

    #[test]
    fn lists_and_bags_round_trip() {
        let cards = vec![Card::Red, Card::Blue, Card::Red];
        assert_eq!(serialize_list(cards.iter()), "5,1,5");

        let bag: Bag<Card> = cards.into_iter().collect();
        // Bags serialize in sorted order.
        assert_eq!(serialize_bag(&bag), "1,5,5");
        assert_eq!(deserialize_bag::<Card>("1,5,5"), Ok(bag));

        assert_eq!(deserialize_list::<Card>(""), Ok(Vec::new()));
        assert_eq!(serialize_bag(&Bag::<Card>::new()), "");
    }

    #[test]
    fn bag_lists_join_with_semicolons() {
        let options = vec![
            Bag::of(2, Card::Blue),
            Bag::of_two(1, Card::Blue, 1, Card::Locomotive),
        ];
        let raw = serialize_bag_list(&options);
        assert_eq!(raw, "1,1;1,8");
        assert_eq!(deserialize_bag_list::<Card>(&raw), Ok(options));
        assert_eq!(deserialize_bag_list::<Card>(""), Ok(Vec::new()));
    }

    #[test]
    fn card_state_round_trips() {
        let state = PublicCardState::new(
            smallvec![Card::Black, Card::White, Card::Locomotive, Card::Red, Card::Red],
            40,
            6,
        )
        .unwrap();
        let raw = state.serialize();
        assert_eq!(raw, "0,6,8,5,5;40;6");
        assert_eq!(PublicCardState::deserialize(&raw), Ok(state));

        // Four face-up cards is not a valid state.
        assert!(PublicCardState::deserialize("0,6,8,5;40;6").is_err());
    }

    #[test]
    fn player_states_round_trip() {
        let public = PublicPlayerState::new(3, 7, vec![&board::routes()[2], &board::routes()[9]]);
        let raw = public.serialize();
        assert_eq!(raw, "3;7;2,9");
        assert_eq!(PublicPlayerState::deserialize(&raw), Ok(public));

        let full = PlayerState::new(
            [board::tickets()[0].clone()].into_iter().collect(),
            Bag::of_two(2, Card::Green, 1, Card::Locomotive),
            vec![&board::routes()[5]],
        );
        let raw = full.serialize();
        assert_eq!(raw, "0;2,2,8;5");
        assert_eq!(PlayerState::deserialize(&raw), Ok(full));
    }

    #[test]
    fn game_state_round_trips() {
        let card_state = PublicCardState::new(smallvec![Card::Blue; 5], 30, 12).unwrap();
        let state = PublicGameState::new(
            20,
            card_state,
            PlayerId::Two,
            [
                PublicPlayerState::new(2, 4, vec![&board::routes()[0]]),
                PublicPlayerState::new(1, 9, Vec::new()),
            ],
            None,
        );

        let raw = state.serialize();
        assert_eq!(raw, "20:1,1,1,1,1;30;12:1:2;4;0:1;9;:");
        assert_eq!(PublicGameState::deserialize(&raw), Ok(state));
    }

    #[test]
    fn malformed_composites_are_rejected() {
        assert!(PublicGameState::deserialize("20:1;30;12:1").is_err());
        assert!(PublicPlayerState::deserialize("3;7").is_err());
        assert!(PlayerState::deserialize("0;2,2,8;5;extra").is_err());
    }
}
