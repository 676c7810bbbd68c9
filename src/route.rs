//! Static route definitions and their claim-card combinatorics.

use crate::bag::Bag;
use crate::card::{Card, Color};
use crate::constants::{
    ADDITIONAL_TUNNEL_CARDS, MAX_ROUTE_LENGTH, MIN_ROUTE_LENGTH, ROUTE_CLAIM_POINTS,
};
use crate::station::Station;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::Display;

/// Whether a route runs on the surface or through a tunnel.
///
/// Claiming a tunnel involves the extra-payment sub-protocol: three cards
/// are drawn from the deck and may force the claimer to pay more cards.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    Surface,
    Tunnel,
}

/// A fixed edge of the map: two distinct endpoint stations, a length, a
/// level, and an optional color (`None` means any color is accepted).
///
/// Routes are static data; the whole engine passes them around as
/// `&'static Route` references into [`crate::board::routes`].
#[derive(Debug, Eq, PartialEq)]
pub struct Route {
    id: &'static str,
    station1: Station,
    station2: Station,
    length: u32,
    level: Level,
    color: Option<Color>,
}

impl Route {
    /// Builds a route definition.
    ///
    /// Panics if the two endpoints are the same station or if the length is
    /// outside `1..=6`; route definitions are static data, so either is a
    /// defect in the board tables.
    pub fn new(
        id: &'static str,
        station1: Station,
        station2: Station,
        length: u32,
        level: Level,
        color: Option<Color>,
    ) -> Self {
        assert!(station1 != station2, "route {} endpoints must differ", id);
        assert!(
            (MIN_ROUTE_LENGTH..=MAX_ROUTE_LENGTH).contains(&length),
            "route {} length {} out of range",
            id,
            length
        );
        Self {
            id,
            station1,
            station2,
            length,
            level,
            color,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn station1(&self) -> Station {
        self.station1
    }

    pub fn station2(&self) -> Station {
        self.station2
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// The color required to claim this route, or `None` if any single
    /// color is accepted.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Both endpoints, in definition order.
    pub fn stations(&self) -> [Station; 2] {
        [self.station1, self.station2]
    }

    /// The endpoint opposite to `station`, or `None` if `station` is not an
    /// endpoint of this route.
    pub fn station_opposite(&self, station: Station) -> Option<Station> {
        if station == self.station1 {
            Some(self.station2)
        } else if station == self.station2 {
            Some(self.station1)
        } else {
            None
        }
    }

    /// Points granted for claiming this route.
    ///
    /// # Examples
    /// ```
    /// use rail_duel::board;
    ///
    /// let route = board::route_by_id("BOS_NYC_1").unwrap();
    /// assert_eq!(route.claim_points(), 2);
    /// ```
    pub fn claim_points(&self) -> i32 {
        ROUTE_CLAIM_POINTS[self.length as usize]
    }

    /// Every card combination that could legally be played to (attempt to)
    /// claim this route.
    ///
    /// The order is canonical: combinations with fewer locomotives come
    /// first, colors enumerate in [`Color`] order within the same
    /// locomotive count, and for tunnels the all-locomotive set comes last.
    /// Surface routes accept no locomotive mixing: a colored surface route
    /// has exactly one combination, a neutral one has one per color.
    pub fn possible_claim_cards(&self) -> Vec<Bag<Card>> {
        let mut combinations = Vec::new();

        match self.level {
            Level::Tunnel => {
                for locomotives in 0..self.length {
                    let cars = self.length - locomotives;
                    match self.color {
                        Some(color) => combinations.push(Bag::of_two(
                            cars,
                            Card::of(color),
                            locomotives,
                            Card::Locomotive,
                        )),
                        None => {
                            for color in Color::iter() {
                                combinations.push(Bag::of_two(
                                    cars,
                                    Card::of(color),
                                    locomotives,
                                    Card::Locomotive,
                                ));
                            }
                        }
                    }
                }
                combinations.push(Bag::of(self.length, Card::Locomotive));
            }
            Level::Surface => match self.color {
                Some(color) => combinations.push(Bag::of(self.length, Card::of(color))),
                None => {
                    for color in Color::iter() {
                        combinations.push(Bag::of(self.length, Card::of(color)));
                    }
                }
            },
        }

        combinations
    }

    /// How many additional cards claiming this tunnel costs, given the
    /// cards initially committed and the three cards drawn from the deck:
    /// one per drawn card that is a locomotive or matches a committed card.
    ///
    /// Returns an `Err` if this route is not a tunnel, or if the number of
    /// drawn cards is not exactly three.
    pub fn additional_claim_cards_count(
        &self,
        claim_cards: &Bag<Card>,
        drawn_cards: &Bag<Card>,
    ) -> Result<u32, String> {
        if self.level != Level::Tunnel {
            return Err(format!(
                "Route {} is not a tunnel: no additional cards can be due.",
                self.id
            ));
        }
        if drawn_cards.size() != ADDITIONAL_TUNNEL_CARDS as u32 {
            return Err(format!(
                "A tunnel claim draws exactly {} cards, got {}.",
                ADDITIONAL_TUNNEL_CARDS,
                drawn_cards.size()
            ));
        }

        Ok(drawn_cards
            .entries()
            .filter(|(card, _)| card.is_locomotive() || claim_cards.contains(card))
            .map(|(_, count)| count)
            .sum())
    }
}
