//! Continuous trails through a player's claimed routes.

use crate::route::Route;
use crate::station::Station;

use std::fmt;

/// A continuous trail: a sequence of routes where each route starts at the
/// station the previous one ended at. A trail may visit the same station
/// several times, but never reuses a route.
#[derive(Clone, Debug)]
pub struct Trail {
    routes: Vec<&'static Route>,
    endpoints: Option<(Station, Station)>,
    length: u32,
}

impl Trail {
    fn empty() -> Self {
        Self {
            routes: Vec::new(),
            endpoints: None,
            length: 0,
        }
    }

    fn single(route: &'static Route, from: Station, to: Station) -> Self {
        Self {
            routes: vec![route],
            endpoints: Some((from, to)),
            length: route.length(),
        }
    }

    /// The longest trail that can be formed from the given routes.
    ///
    /// The search extends every partial trail by one unclaimed route per
    /// generation and keeps the first longest trail it encounters, so the
    /// result is deterministic for a given route order. With no routes at
    /// all the returned trail has length 0 and no endpoints.
    pub fn longest(routes: &[&'static Route]) -> Trail {
        let mut longest = Trail::empty();
        let mut trails: Vec<Trail> = routes
            .iter()
            .flat_map(|&route| {
                let [s1, s2] = route.stations();
                [Trail::single(route, s1, s2), Trail::single(route, s2, s1)]
            })
            .collect();

        while !trails.is_empty() {
            let mut extended = Vec::new();
            for trail in trails {
                if trail.length > longest.length {
                    longest = trail.clone();
                }
                let Some((_, tail)) = trail.endpoints else {
                    continue;
                };
                for &route in routes {
                    if trail.contains(route) {
                        continue;
                    }
                    if let Some(next) = route.station_opposite(tail) {
                        extended.push(trail.extended(route, next));
                    }
                }
            }
            trails = extended;
        }

        longest
    }

    fn contains(&self, route: &'static Route) -> bool {
        self.routes.iter().any(|&r| std::ptr::eq(r, route))
    }

    fn extended(&self, route: &'static Route, new_tail: Station) -> Trail {
        let mut routes = self.routes.clone();
        routes.push(route);
        let (head, _) = self.endpoints.unwrap_or((new_tail, new_tail));
        Trail {
            routes,
            endpoints: Some((head, new_tail)),
            length: self.length + route.length(),
        }
    }

    /// Total length of the trail's routes.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The trail's first station, or `None` for the empty trail.
    pub fn station1(&self) -> Option<Station> {
        self.endpoints.map(|(s1, _)| s1)
    }

    /// The trail's last station, or `None` for the empty trail.
    pub fn station2(&self) -> Option<Station> {
        self.endpoints.map(|(_, s2)| s2)
    }

    /// The routes forming the trail, in order.
    pub fn routes(&self) -> &[&'static Route] {
        &self.routes
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.endpoints {
            Some((s1, s2)) => write!(f, "{} - {} ({})", s1, s2, self.length),
            None => write!(f, "(empty trail)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::board;

    fn claimed(ids: &[&str]) -> Vec<&'static Route> {
        ids.iter()
            .map(|id| board::route_by_id(id).unwrap())
            .collect()
    }

    #[test]
    fn empty_trail() {
        let trail = Trail::longest(&[]);
        assert_eq!(trail.length(), 0);
        assert_eq!(trail.station1(), None);
        assert_eq!(trail.station2(), None);
        assert_eq!(trail.to_string(), "(empty trail)");
    }

    #[test]
    fn single_route_trail() {
        let routes = claimed(&["ELP_PHX_1"]);
        let trail = Trail::longest(&routes);
        assert_eq!(trail.length(), 3);
    }

    #[test]
    fn line_of_routes() {
        // El Paso - Phoenix (3), Phoenix - Denver (5), Denver - Kansas
        // City (4), Kansas City - Oklahoma City (2), Oklahoma City -
        // Dallas (2).
        let routes = claimed(&[
            "ELP_PHX_1",
            "DEN_PHX_1",
            "DEN_KSC_1",
            "KSC_OKC_1",
            "DAL_OKC_1",
        ]);
        let trail = Trail::longest(&routes);
        assert_eq!(trail.length(), 16);
    }

    #[test]
    fn loop_uses_every_route() {
        // Portland - Salt Lake City (6), Salt Lake City - Helena (3),
        // Helena - Seattle (6), Seattle - Portland (1) form a cycle.
        let routes = claimed(&["POR_SLC_1", "HEL_SLC_1", "HEL_SEA_1", "SEA_POR_1"]);
        let trail = Trail::longest(&routes);
        assert_eq!(trail.length(), 16);
    }

    #[test]
    fn disconnected_components_keep_the_longer_one() {
        // Miami - New Orleans (6) on its own beats the eastern pair
        // Boston - New York (2) + New York - Washington (2).
        let routes = claimed(&["MIA_NOR_1", "BOS_NYC_1", "NYC_WAS_1"]);
        let trail = Trail::longest(&routes);
        assert_eq!(trail.length(), 6);
    }

    #[test]
    fn trail_never_reuses_a_route() {
        // Two parallel Seattle - Portland routes can be chained through
        // their shared endpoints, but each only once.
        let routes = claimed(&["SEA_POR_1", "SEA_POR_2"]);
        let trail = Trail::longest(&routes);
        assert_eq!(trail.length(), 2);
    }

    #[test]
    fn trail_display() {
        let routes = claimed(&["LVG_LAX_1"]);
        let trail = Trail::longest(&routes);
        let text = trail.to_string();
        assert!(text.contains("Las Vegas") || text.contains("Los Angeles"));
        assert!(text.contains("(2)"));
    }
}
