//! The static map: every route and every ticket a match is played with.

use crate::card::Color;
use crate::route::{Level, Route};
use crate::station::Station;
use crate::ticket::Ticket;

use lazy_static::lazy_static;

/// Convenience macro to declare a route of the map. Without a trailing
/// color the route accepts any single color.
macro_rules! route {
    ($id:literal, $s1:ident, $s2:ident, $len:literal, $level:ident) => {
        Route::new(
            $id,
            Station::$s1,
            Station::$s2,
            $len,
            Level::$level,
            None,
        )
    };
    ($id:literal, $s1:ident, $s2:ident, $len:literal, $level:ident, $color:ident) => {
        Route::new(
            $id,
            Station::$s1,
            Station::$s2,
            $len,
            Level::$level,
            Some(Color::$color),
        )
    };
}

/// Convenience macro to declare a single-trip ticket.
macro_rules! ticket {
    ($from:ident, $to:ident, $points:literal) => {
        Ticket::of(Station::$from, Station::$to, $points)
    };
}

lazy_static! {
    static ref ALL_ROUTES: Vec<Route> = build_routes();
    static ref ALL_TICKETS: Vec<Ticket> = build_tickets();
}

/// Every route of the map, in canonical order.
///
/// Parallel routes between the same two stations are separate entries,
/// with ids suffixed `_1` and `_2`. The position of a route in this slice
/// is its index on the wire.
pub fn routes() -> &'static [Route] {
    &ALL_ROUTES
}

/// Every ticket of the map, in canonical order. The position of a ticket
/// in this slice is its index on the wire.
pub fn tickets() -> &'static [Ticket] {
    &ALL_TICKETS
}

/// Looks a route up by its id.
pub fn route_by_id(id: &str) -> Option<&'static Route> {
    ALL_ROUTES.iter().find(|route| route.id() == id)
}

fn build_routes() -> Vec<Route> {
    vec![
        // Atlanta.
        route!("ATL_CHA_1", Atlanta, Charleston, 2, Surface),
        route!("ATL_MIA_1", Atlanta, Miami, 5, Surface, Blue),
        route!("ATL_NSH_1", Atlanta, Nashville, 1, Surface),
        route!("ATL_NOR_1", Atlanta, NewOrleans, 5, Surface, Orange),
        route!("ATL_NOR_2", Atlanta, NewOrleans, 5, Surface, Yellow),
        route!("ATL_RAL_1", Atlanta, Raleigh, 2, Surface),
        route!("ATL_RAL_2", Atlanta, Raleigh, 2, Surface),
        // Boston.
        route!("BOS_MTR_1", Boston, Montreal, 2, Surface),
        route!("BOS_MTR_2", Boston, Montreal, 2, Surface),
        route!("BOS_NYC_1", Boston, NewYork, 2, Surface, Yellow),
        route!("BOS_NYC_2", Boston, NewYork, 2, Surface, Red),
        // Calgary.
        route!("CGY_HEL_1", Calgary, Helena, 4, Tunnel),
        route!("CGY_SEA_1", Calgary, Seattle, 4, Tunnel),
        route!("CGY_VAN_1", Calgary, Vancouver, 3, Tunnel),
        route!("CGY_WIN_1", Calgary, Winnipeg, 6, Surface, White),
        // Charleston.
        route!("CHA_MIA_1", Charleston, Miami, 4, Surface, Pink),
        route!("CHA_RAL_1", Charleston, Raleigh, 2, Surface),
        // Chicago.
        route!("CHI_DUL_1", Chicago, Duluth, 3, Surface, Red),
        route!("CHI_OMA_1", Chicago, Omaha, 4, Surface, Blue),
        route!("CHI_PIT_1", Chicago, Pittsburgh, 3, Surface, Black),
        route!("CHI_PIT_2", Chicago, Pittsburgh, 3, Surface, Orange),
        route!("CHI_STL_1", Chicago, SaintLouis, 2, Surface, Green),
        route!("CHI_STL_2", Chicago, SaintLouis, 2, Surface, White),
        route!("CHI_TOR_1", Chicago, Toronto, 4, Surface, White),
        // Dallas.
        route!("DAL_ELP_1", Dallas, ElPaso, 4, Surface, Red),
        route!("DAL_HOU_1", Dallas, Houston, 1, Surface),
        route!("DAL_HOU_2", Dallas, Houston, 1, Surface),
        route!("DAL_LIT_1", Dallas, LittleRock, 2, Surface),
        route!("DAL_OKC_1", Dallas, OklahomaCity, 2, Surface),
        route!("DAL_OKC_2", Dallas, OklahomaCity, 2, Surface),
        // Denver.
        route!("DEN_HEL_1", Denver, Helena, 4, Surface, Green),
        route!("DEN_KSC_1", Denver, KansasCity, 4, Surface, Black),
        route!("DEN_KSC_2", Denver, KansasCity, 4, Surface, Orange),
        route!("DEN_OKC_1", Denver, OklahomaCity, 4, Surface, Red),
        route!("DEN_OMA_1", Denver, Omaha, 4, Surface, Pink),
        route!("DEN_PHX_1", Denver, Phoenix, 5, Tunnel, White),
        route!("DEN_SLC_1", Denver, SaltLakeCity, 3, Tunnel, Red),
        route!("DEN_SLC_2", Denver, SaltLakeCity, 3, Tunnel, Yellow),
        route!("DEN_SAF_1", Denver, SantaFe, 2, Tunnel),
        // Duluth.
        route!("DUL_HEL_1", Duluth, Helena, 6, Surface, Orange),
        route!("DUL_OMA_1", Duluth, Omaha, 2, Surface),
        route!("DUL_OMA_2", Duluth, Omaha, 2, Surface),
        route!("DUL_SSM_1", Duluth, SaultStMarie, 3, Surface),
        route!("DUL_TOR_1", Duluth, Toronto, 6, Surface, Pink),
        route!("DUL_WIN_1", Duluth, Winnipeg, 4, Surface, Black),
        // El Paso.
        route!("ELP_HOU_1", ElPaso, Houston, 6, Surface, Green),
        route!("ELP_LAX_1", ElPaso, LosAngeles, 6, Surface, Black),
        route!("ELP_OKC_1", ElPaso, OklahomaCity, 5, Surface, Yellow),
        route!("ELP_PHX_1", ElPaso, Phoenix, 3, Surface),
        route!("ELP_SAF_1", ElPaso, SantaFe, 2, Tunnel),
        // Helena.
        route!("HEL_OMA_1", Helena, Omaha, 5, Surface, Red),
        route!("HEL_SLC_1", Helena, SaltLakeCity, 3, Tunnel, Pink),
        route!("HEL_SEA_1", Helena, Seattle, 6, Tunnel, Yellow),
        route!("HEL_WIN_1", Helena, Winnipeg, 4, Surface, Blue),
        // Houston.
        route!("HOU_NOR_1", Houston, NewOrleans, 2, Surface),
        // Kansas City.
        route!("KSC_STL_1", KansasCity, SaintLouis, 2, Surface, Blue),
        route!("KSC_STL_2", KansasCity, SaintLouis, 2, Surface, Pink),
        route!("KSC_OKC_1", KansasCity, OklahomaCity, 2, Surface),
        route!("KSC_OKC_2", KansasCity, OklahomaCity, 2, Surface),
        route!("KSC_OMA_1", KansasCity, Omaha, 1, Surface),
        route!("KSC_OMA_2", KansasCity, Omaha, 1, Surface),
        // Las Vegas.
        route!("LVG_LAX_1", LasVegas, LosAngeles, 2, Surface),
        route!("LVG_SLC_1", LasVegas, SaltLakeCity, 3, Tunnel, Orange),
        // Little Rock.
        route!("LIT_NSH_1", LittleRock, Nashville, 3, Surface, White),
        route!("LIT_NOR_1", LittleRock, NewOrleans, 3, Surface),
        route!("LIT_OKC_1", LittleRock, OklahomaCity, 2, Surface),
        route!("LIT_STL_1", LittleRock, SaintLouis, 2, Surface),
        // Los Angeles.
        route!("LAX_PHX_1", LosAngeles, Phoenix, 3, Surface),
        route!("LAX_SFO_1", LosAngeles, SanFrancisco, 3, Surface, Pink),
        route!("LAX_SFO_2", LosAngeles, SanFrancisco, 3, Surface, Yellow),
        // Miami.
        route!("MIA_NOR_1", Miami, NewOrleans, 6, Surface, Red),
        // Montréal.
        route!("MTR_NYC_1", Montreal, NewYork, 3, Surface, Blue),
        route!("MTR_SSM_1", Montreal, SaultStMarie, 5, Surface, Black),
        route!("MTR_TOR_1", Montreal, Toronto, 3, Surface),
        // Nashville.
        route!("NSH_PIT_1", Nashville, Pittsburgh, 4, Surface, Yellow),
        route!("NSH_RAL_1", Nashville, Raleigh, 3, Surface, Black),
        route!("NSH_STL_1", Nashville, SaintLouis, 2, Surface),
        // New York.
        route!("NYC_PIT_1", NewYork, Pittsburgh, 2, Surface, Green),
        route!("NYC_PIT_2", NewYork, Pittsburgh, 2, Surface, White),
        route!("NYC_WAS_1", NewYork, Washington, 2, Surface, Black),
        route!("NYC_WAS_2", NewYork, Washington, 2, Surface, Orange),
        // Oklahoma City.
        route!("OKC_SAF_1", OklahomaCity, SantaFe, 3, Surface, Blue),
        // Phoenix.
        route!("PHX_SAF_1", Phoenix, SantaFe, 3, Tunnel),
        // Pittsburgh.
        route!("PIT_RAL_1", Pittsburgh, Raleigh, 2, Surface),
        route!("PIT_STL_1", Pittsburgh, SaintLouis, 5, Surface, Green),
        route!("PIT_TOR_1", Pittsburgh, Toronto, 2, Surface),
        route!("PIT_WAS_1", Pittsburgh, Washington, 2, Surface),
        // Portland.
        route!("POR_SLC_1", Portland, SaltLakeCity, 6, Tunnel, Blue),
        route!("POR_SFO_1", Portland, SanFrancisco, 5, Surface, Green),
        route!("POR_SFO_2", Portland, SanFrancisco, 5, Surface, Pink),
        // Raleigh.
        route!("RAL_WAS_1", Raleigh, Washington, 2, Surface),
        route!("RAL_WAS_2", Raleigh, Washington, 2, Surface),
        // Salt Lake City.
        route!("SLC_SFO_1", SaltLakeCity, SanFrancisco, 5, Tunnel, Orange),
        route!("SLC_SFO_2", SaltLakeCity, SanFrancisco, 5, Tunnel, White),
        // Sault St. Marie.
        route!("SSM_TOR_1", SaultStMarie, Toronto, 2, Surface),
        route!("SSM_WIN_1", SaultStMarie, Winnipeg, 6, Surface),
        // Seattle.
        route!("SEA_POR_1", Seattle, Portland, 1, Surface),
        route!("SEA_POR_2", Seattle, Portland, 1, Surface),
        route!("SEA_VAN_1", Seattle, Vancouver, 1, Surface),
        route!("SEA_VAN_2", Seattle, Vancouver, 1, Surface),
    ]
}

fn build_tickets() -> Vec<Ticket> {
    vec![
        ticket!(Boston, Miami, 12),
        ticket!(Calgary, Phoenix, 13),
        ticket!(Calgary, SaltLakeCity, 7),
        ticket!(Chicago, NewOrleans, 7),
        ticket!(Chicago, SantaFe, 9),
        ticket!(Dallas, NewYork, 11),
        ticket!(Denver, ElPaso, 4),
        ticket!(Denver, Pittsburgh, 11),
        ticket!(Duluth, ElPaso, 10),
        ticket!(Duluth, Houston, 8),
        ticket!(Helena, LosAngeles, 8),
        ticket!(KansasCity, Houston, 5),
        ticket!(LosAngeles, Chicago, 16),
        ticket!(LosAngeles, Miami, 20),
        ticket!(LosAngeles, NewYork, 21),
        ticket!(Montreal, Atlanta, 9),
        ticket!(Montreal, NewOrleans, 13),
        ticket!(NewYork, Atlanta, 6),
        ticket!(Portland, Nashville, 17),
        ticket!(Portland, Phoenix, 11),
        ticket!(SanFrancisco, Atlanta, 17),
        ticket!(SaultStMarie, Nashville, 8),
        ticket!(SaultStMarie, OklahomaCity, 9),
        ticket!(Seattle, LosAngeles, 9),
        ticket!(Seattle, NewYork, 22),
        ticket!(Toronto, Miami, 10),
        ticket!(Vancouver, Montreal, 20),
        ticket!(Vancouver, SantaFe, 13),
        ticket!(Winnipeg, Houston, 12),
        ticket!(Winnipeg, LittleRock, 11),
    ]
}
