//! Destination tickets and their scoring.

use crate::partition::StationPartition;
use crate::station::Station;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// A single origin/destination pair worth `points` if connected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Trip {
    from: Station,
    to: Station,
    points: i32,
}

impl Trip {
    /// Builds a trip between two distinct stations, worth a strictly
    /// positive number of points.
    pub fn new(from: Station, to: Station, points: i32) -> Self {
        assert!(from != to, "a trip must link two distinct stations");
        assert!(points > 0, "a trip must be worth a positive number of points");
        Self { from, to, points }
    }

    /// Every trip from one of the `from` stations to one of the `to`
    /// stations, all worth `points`.
    pub fn all(from: &[Station], to: &[Station], points: i32) -> Vec<Trip> {
        from.iter()
            .flat_map(|&f| to.iter().map(move |&t| Trip::new(f, t, points)))
            .collect()
    }

    pub fn from(&self) -> Station {
        self.from
    }

    pub fn to(&self) -> Station {
        self.to
    }

    /// The trip's value under the given connectivity: `points` if the two
    /// endpoints are connected, `-points` otherwise.
    pub fn points(&self, connectivity: &StationPartition) -> i32 {
        if connectivity.connected(self.from, self.to) {
            self.points
        } else {
            -self.points
        }
    }
}

/// A destination ticket: one or more trips sharing the same origin, of
/// which only the most valuable one counts.
///
/// Tickets order and compare by their display text, which is unique per
/// ticket on a given map.
///
/// # Examples
/// ```
/// use rail_duel::station::Station;
/// use rail_duel::ticket::Ticket;
///
/// let ticket = Ticket::of(Station::Boston, Station::Miami, 12);
/// assert_eq!(ticket.to_string(), "Boston - Miami (12)");
/// ```
#[derive(Clone, Debug)]
pub struct Ticket {
    trips: Vec<Trip>,
    text: String,
}

impl Ticket {
    /// Builds a ticket from its trips, which must be non-empty and all
    /// share the same origin station.
    pub fn new(trips: Vec<Trip>) -> Self {
        assert!(!trips.is_empty(), "a ticket needs at least one trip");
        let from = trips[0].from;
        assert!(
            trips.iter().all(|trip| trip.from == from),
            "all trips of a ticket must share their origin"
        );

        let text = Self::compute_text(&trips);
        Self { trips, text }
    }

    /// A single-trip ticket.
    pub fn of(from: Station, to: Station, points: i32) -> Self {
        Self::new(vec![Trip::new(from, to, points)])
    }

    /// The ticket's display text: `"From - To (points)"` for a single trip,
    /// `"From - {To1 (p1), To2 (p2)}"` with sorted destinations otherwise.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The points this ticket is worth under the given connectivity: the
    /// maximum over its trips, so an unfulfilled ticket costs the points of
    /// its cheapest trip.
    pub fn points(&self, connectivity: &StationPartition) -> i32 {
        self.trips
            .iter()
            .map(|trip| trip.points(connectivity))
            .max()
            .unwrap_or(0)
    }

    fn compute_text(trips: &[Trip]) -> String {
        let destinations: BTreeSet<String> = trips
            .iter()
            .map(|trip| format!("{} ({})", trip.to, trip.points))
            .collect();
        let destinations: Vec<String> = destinations.into_iter().collect();

        if destinations.len() == 1 {
            format!("{} - {}", trips[0].from, destinations[0])
        } else {
            format!("{} - {{{}}}", trips[0].from, destinations.join(", "))
        }
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Ticket {}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}
