//! Rule constants shared across the engine.

/// Number of cars each player starts the game with.
pub const CAR_COUNT: u32 = 45;

/// Number of tickets dealt to each player at the start of the game.
pub const INITIAL_TICKETS_COUNT: usize = 5;

/// Number of train cards dealt to each player at the start of the game.
pub const INITIAL_CARDS_COUNT: usize = 4;

/// Number of tickets drawn on a draw-tickets turn.
pub const IN_GAME_TICKETS_COUNT: usize = 3;

/// Number of publicly visible face-up card slots.
pub const FACE_UP_CARDS_COUNT: usize = 5;

/// Number of card draws a draw-cards turn consists of.
pub const CARD_DRAWS_PER_TURN: usize = 2;

/// Number of cards drawn from the deck when a tunnel claim is attempted.
pub const ADDITIONAL_TUNNEL_CARDS: usize = 3;

/// Wire encoding of "draw from the blind deck" in a draw-slot answer.
pub const DECK_SLOT: i32 = -1;

/// Number of cards of each non-locomotive color in the full card set.
pub const CARDS_PER_COLOR: usize = 12;

/// Number of locomotive cards in the full card set.
pub const LOCOMOTIVE_COUNT: usize = 14;

/// Minimum and maximum route lengths.
pub const MIN_ROUTE_LENGTH: u32 = 1;
pub const MAX_ROUTE_LENGTH: u32 = 6;

/// Points granted for claiming a route, indexed by route length.
/// Index 0 is unused (no route has length 0).
pub const ROUTE_CLAIM_POINTS: [i32; 7] = [0, 1, 2, 4, 7, 10, 15];

/// Bonus granted to the player(s) with the strictly longest trail.
pub const LONGEST_TRAIL_BONUS_POINTS: i32 = 10;

/// A player's car count at or below this value triggers the last round.
pub const LAST_TURN_CAR_THRESHOLD: u32 = 2;
