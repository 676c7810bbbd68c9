//! Engine and wire protocol for a two-player, turn-based network-building
//! board game: players collect train cards, claim route segments between
//! stations, and try to fulfill destination tickets.
//!
//! The engine is an immutable state machine ([`game_state::GameState`] and
//! friends): every rule-level operation produces a new snapshot. One full
//! match is driven by [`game::play`], which repeatedly asks the two
//! [`player::Player`] actors for decisions. An actor can live in the same
//! process, or on the other end of a TCP socket via the [`net`] module.

pub mod bag;
pub mod board;
pub mod card;
pub mod card_state;
pub mod channel;
pub mod constants;
pub mod deck;
pub mod game;
pub mod game_state;
pub mod net;
pub mod partition;
pub mod player;
pub mod player_state;
pub mod route;
pub mod station;
pub mod ticket;
pub mod trail;
