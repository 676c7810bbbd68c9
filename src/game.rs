//! The match driver: runs a complete match between two players.

use crate::bag::Bag;
use crate::constants::{
    ADDITIONAL_TUNNEL_CARDS, INITIAL_TICKETS_COUNT, IN_GAME_TICKETS_COUNT,
    LONGEST_TRAIL_BONUS_POINTS,
};
use crate::game_state::GameState;
use crate::player::{DrawSlot, Player, PlayerId, TurnKind};
use crate::route::Level;
use crate::ticket::Ticket;
use crate::trail::Trail;

use log::{debug, info};
use rand::Rng;

/// How a finished match ended: both players' total points, and the winner
/// (`None` for a draw).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatchOutcome {
    pub points: [i32; 2],
    pub winner: Option<PlayerId>,
}

/// Plays a complete match and returns its outcome.
///
/// The engine deals the initial tickets and cards, then drives turns until
/// the end-of-match round completes: once a player ends a turn with two
/// cars or fewer, every player gets exactly one more turn, the recorded
/// last player playing the final one.
///
/// Any rule violation by a player, and any failed player call, aborts the
/// match with an `Err`.
pub fn play(
    mut players: [&mut dyn Player; 2],
    names: &[String; 2],
    tickets: &Bag<Ticket>,
    rng: &mut impl Rng,
) -> Result<MatchOutcome, String> {
    for id in PlayerId::ALL {
        players[id.index()].init_players(id, names)?;
    }

    let mut state = GameState::initial(tickets, rng)?;
    info!(
        "match starts, {} plays first",
        names[state.current_player_id().index()]
    );
    broadcast_info(
        &mut players,
        &format!("{} will play first.", names[state.current_player_id().index()]),
    )?;

    // Initial ticket choice: five dealt to each player, of which they keep
    // at least one.
    for id in PlayerId::ALL {
        let dealt = state.top_tickets(INITIAL_TICKETS_COUNT)?;
        players[id.index()].set_initial_ticket_choice(&dealt)?;
        state = state.without_top_tickets(INITIAL_TICKETS_COUNT)?;

        broadcast_state(&mut players, &state)?;
        let chosen = players[id.index()].choose_initial_tickets()?;
        if chosen.is_empty() {
            return Err(format!(
                "{} must keep at least one initial ticket.",
                names[id.index()]
            ));
        }
        if !dealt.contains_all(&chosen) {
            return Err(format!(
                "{} kept tickets they were not dealt.",
                names[id.index()]
            ));
        }
        state = state.with_initially_chosen_tickets(id, &chosen)?;
    }
    for id in PlayerId::ALL {
        broadcast_info(
            &mut players,
            &format!(
                "{} kept {} ticket(s).",
                names[id.index()],
                state.player_state(id).ticket_count()
            ),
        )?;
    }

    loop {
        let current = state.current_player_id();
        let name = &names[current.index()];
        broadcast_info(&mut players, &format!("{} can play.", name))?;
        broadcast_state(&mut players, &state)?;

        let turn_kind = players[current.index()].next_turn()?;
        debug!("{} plays: {}", name, turn_kind);

        match turn_kind {
            TurnKind::DrawTickets => {
                state = play_draw_tickets(&mut players, state, name)?;
            }
            TurnKind::DrawCards => {
                state = play_draw_cards(&mut players, state, name, rng)?;
            }
            TurnKind::ClaimRoute => {
                state = play_claim_route(&mut players, state, name, rng)?;
            }
        }

        if state.last_turn_begins() {
            broadcast_info(
                &mut players,
                &format!(
                    "The last turn begins: {} has {} car(s) left.",
                    name,
                    state.current_player_state().car_count()
                ),
            )?;
        }

        let finished = state.last_player() == Some(current);
        state = state.for_next_turn();
        if finished {
            break;
        }
    }

    finish(&mut players, state, names)
}

fn play_draw_tickets(
    players: &mut [&mut dyn Player; 2],
    state: GameState,
    name: &str,
) -> Result<GameState, String> {
    if !state.can_draw_tickets() {
        return Err(format!("{} drew tickets from an empty ticket deck.", name));
    }
    // Late in the match fewer than three tickets may remain.
    let draw_count = IN_GAME_TICKETS_COUNT.min(state.tickets_count());
    let drawn = state.top_tickets(draw_count)?;
    broadcast_info(players, &format!("{} drew {} tickets.", name, draw_count))?;

    let current = state.current_player_id();
    let chosen = players[current.index()].choose_tickets(&drawn)?;
    let state = state.with_chosen_additional_tickets(&drawn, &chosen)?;
    broadcast_info(
        players,
        &format!("{} kept {} ticket(s).", name, chosen.size()),
    )?;
    Ok(state)
}

fn play_draw_cards(
    players: &mut [&mut dyn Player; 2],
    mut state: GameState,
    name: &str,
    rng: &mut impl Rng,
) -> Result<GameState, String> {
    // The turn is legal if the piles can refill the display when it
    // starts; the two draws themselves may leave fewer than five cards.
    if !state.can_draw_cards() {
        return Err(format!("{} drew cards from exhausted piles.", name));
    }
    for _ in 0..crate::constants::CARD_DRAWS_PER_TURN {
        state = state.with_cards_deck_recreated_if_needed(rng)?;
        // The player sees the current display, refreshed if the deck was
        // just recreated, before every pick.
        broadcast_state(players, &state)?;

        let current = state.current_player_id();
        match players[current.index()].draw_slot()? {
            DrawSlot::Deck => {
                state = state.with_blindly_drawn_card()?;
                broadcast_info(players, &format!("{} drew a card from the deck.", name))?;
            }
            DrawSlot::FaceUp(slot) => {
                let card = state.card_state().face_up_card(slot)?;
                state = state.with_drawn_face_up_card(slot)?;
                broadcast_info(
                    players,
                    &format!("{} drew the face-up {} card.", name, card),
                )?;
            }
        }
    }
    Ok(state)
}

fn play_claim_route(
    players: &mut [&mut dyn Player; 2],
    mut state: GameState,
    name: &str,
    rng: &mut impl Rng,
) -> Result<GameState, String> {
    let current = state.current_player_id();
    let route = players[current.index()].claimed_route()?;
    let initial_cards = players[current.index()].initial_claim_cards()?;

    let playable = state.current_player_state().possible_claim_cards(route);
    if !playable.iter().any(|combination| *combination == initial_cards) {
        return Err(format!(
            "{} cannot claim route {} with {}.",
            name,
            route.id(),
            initial_cards
        ));
    }

    if route.level() == Level::Surface {
        state = state.with_claimed_route(route, &initial_cards)?;
        broadcast_info(
            players,
            &format!("{} claimed route {} with {}.", name, route.id(), initial_cards),
        )?;
        return Ok(state);
    }

    // Tunnel claim: three cards drawn from the deck decide whether the
    // claim demands additional cards.
    broadcast_info(
        players,
        &format!("{} is attempting to claim tunnel {}.", name, route.id()),
    )?;

    let mut drawn = Bag::new();
    for _ in 0..ADDITIONAL_TUNNEL_CARDS {
        state = state.with_cards_deck_recreated_if_needed(rng)?;
        drawn.add(state.top_card()?);
        state = state.without_top_card()?;
    }
    state = state.with_more_discarded_cards(&drawn);
    let additional_count = route.additional_claim_cards_count(&initial_cards, &drawn)?;
    broadcast_info(
        players,
        &format!(
            "The drawn tunnel cards are {}, demanding {} additional card(s).",
            drawn, additional_count
        ),
    )?;

    if additional_count == 0 {
        state = state.with_claimed_route(route, &initial_cards)?;
        broadcast_info(
            players,
            &format!("{} claimed route {} with {}.", name, route.id(), initial_cards),
        )?;
        return Ok(state);
    }

    let options = state
        .current_player_state()
        .possible_additional_cards(additional_count, &initial_cards)?;
    let chosen = if options.is_empty() {
        Bag::new()
    } else {
        players[current.index()].choose_additional_cards(&options)?
    };

    if chosen.is_empty() {
        broadcast_info(players, &format!("{} did not claim route {}.", name, route.id()))?;
        return Ok(state);
    }
    if !options.contains(&chosen) {
        return Err(format!(
            "{} paid additional cards they could not play: {}.",
            name, chosen
        ));
    }

    let claim_cards = initial_cards.union(&chosen);
    state = state.with_claimed_route(route, &claim_cards)?;
    broadcast_info(
        players,
        &format!("{} claimed route {} with {}.", name, route.id(), claim_cards),
    )?;
    Ok(state)
}

fn finish(
    players: &mut [&mut dyn Player; 2],
    state: GameState,
    names: &[String; 2],
) -> Result<MatchOutcome, String> {
    broadcast_state(players, &state)?;

    let trails: [Trail; 2] = [
        Trail::longest(state.player_state(PlayerId::One).routes()),
        Trail::longest(state.player_state(PlayerId::Two).routes()),
    ];
    let mut points = [
        state.player_state(PlayerId::One).final_points(),
        state.player_state(PlayerId::Two).final_points(),
    ];

    // The longest-trail bonus goes to the strictly longer trail; a tie
    // rewards both players.
    let longest = trails.iter().map(Trail::length).max().unwrap_or(0);
    for id in PlayerId::ALL {
        if trails[id.index()].length() == longest {
            points[id.index()] += LONGEST_TRAIL_BONUS_POINTS;
            broadcast_info(
                players,
                &format!(
                    "{} gets the {}-point bonus for the longest trail ({}).",
                    names[id.index()],
                    LONGEST_TRAIL_BONUS_POINTS,
                    trails[id.index()]
                ),
            )?;
        }
    }

    let winner = winner_of(points);
    match winner {
        Some(id) => {
            broadcast_info(
                players,
                &format!(
                    "{} wins with {} points against {}.",
                    names[id.index()],
                    points[id.index()],
                    points[id.next().index()]
                ),
            )?;
        }
        None => {
            broadcast_info(
                players,
                &format!("The match is a draw at {} points.", points[0]),
            )?;
        }
    }
    info!("match over: {:?}, winner {:?}", points, winner);

    Ok(MatchOutcome { points, winner })
}

fn winner_of(points: [i32; 2]) -> Option<PlayerId> {
    match points[0].cmp(&points[1]) {
        std::cmp::Ordering::Greater => Some(PlayerId::One),
        std::cmp::Ordering::Less => Some(PlayerId::Two),
        std::cmp::Ordering::Equal => None,
    }
}

fn broadcast_info(players: &mut [&mut dyn Player; 2], info: &str) -> Result<(), String> {
    debug!("{}", info);
    for player in players.iter_mut() {
        player.receive_info(info)?;
    }
    Ok(())
}

fn broadcast_state(players: &mut [&mut dyn Player; 2], state: &GameState) -> Result<(), String> {
    let public = state.public();
    for id in PlayerId::ALL {
        players[id.index()].update_state(&public, state.player_state(id))?;
    }
    Ok(())
}
