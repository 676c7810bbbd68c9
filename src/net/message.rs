//! The message kinds of the wire protocol.

use crate::net::error::DecodeError;

use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

/// The first field of every protocol line: which [`crate::player::Player`]
/// method the engine is invoking.
///
/// Kinds ending in a question (ticket choices, turns, draws, claims)
/// expect a reply line; the others are one-way notifications.
#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
pub enum MessageKind {
    #[strum(serialize = "INIT_PLAYERS")]
    InitPlayers,
    #[strum(serialize = "RECEIVE_INFO")]
    ReceiveInfo,
    #[strum(serialize = "UPDATE_STATE")]
    UpdateState,
    #[strum(serialize = "SET_INITIAL_TICKETS")]
    SetInitialTickets,
    #[strum(serialize = "CHOOSE_INITIAL_TICKETS")]
    ChooseInitialTickets,
    #[strum(serialize = "NEXT_TURN")]
    NextTurn,
    #[strum(serialize = "CHOOSE_TICKETS")]
    ChooseTickets,
    #[strum(serialize = "DRAW_SLOT")]
    DrawSlot,
    #[strum(serialize = "ROUTE")]
    Route,
    #[strum(serialize = "CARDS")]
    Cards,
    #[strum(serialize = "CHOOSE_ADDITIONAL_CARDS")]
    ChooseAdditionalCards,
}

impl MessageKind {
    /// Parses the kind field of a received line.
    pub fn parse(raw: &str) -> Result<Self, DecodeError> {
        Self::from_str(raw).map_err(|_| DecodeError::UnknownMessageKind(raw.to_string()))
    }
}
