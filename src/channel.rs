//! A [`Player`] backed by a pair of single-slot channels.
//!
//! The engine thread calls the [`Player`] methods; whatever drives the
//! actual decisions (a UI thread, a bot loop) sits on the other end of a
//! [`PlayerEndpoint`] and answers one request at a time. Both channels
//! have a single slot, so the two sides proceed in lockstep.

use crate::bag::Bag;
use crate::card::Card;
use crate::game_state::PublicGameState;
use crate::player::{DrawSlot, Player, PlayerId, TurnKind};
use crate::player_state::PlayerState;
use crate::route::Route;
use crate::ticket::Ticket;

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};

/// A decision or notification forwarded to the deciding side.
#[derive(Clone, Debug)]
pub enum Request {
    InitPlayers {
        own_id: PlayerId,
        names: [String; 2],
    },
    ReceiveInfo(String),
    UpdateState {
        public_state: PublicGameState,
        own_state: PlayerState,
    },
    SetInitialTicketChoice(Bag<Ticket>),
    ChooseInitialTickets,
    NextTurn,
    ChooseTickets(Bag<Ticket>),
    DrawSlot,
    ClaimedRoute,
    InitialClaimCards,
    ChooseAdditionalCards(Vec<Bag<Card>>),
}

/// The deciding side's answer to a value-returning [`Request`].
#[derive(Clone, Debug)]
pub enum Response {
    Tickets(Bag<Ticket>),
    Turn(TurnKind),
    Slot(DrawSlot),
    Route(&'static Route),
    Cards(Bag<Card>),
}

/// The deciding side's end: receives requests, sends responses.
pub struct PlayerEndpoint {
    requests: Receiver<Request>,
    responses: SyncSender<Response>,
}

impl PlayerEndpoint {
    /// Blocks until the engine's next request.
    ///
    /// Returns an `Err` once the engine side is gone.
    pub fn recv(&self) -> Result<Request, String> {
        self.requests
            .recv()
            .map_err(|_| String::from("The engine hung up."))
    }

    /// Answers the pending value-returning request.
    pub fn send(&self, response: Response) -> Result<(), String> {
        self.responses
            .send(response)
            .map_err(|_| String::from("The engine hung up."))
    }
}

/// The engine's end: a [`Player`] that forwards every call through the
/// channels and blocks until the deciding side answers.
pub struct ChannelPlayer {
    requests: SyncSender<Request>,
    responses: Receiver<Response>,
}

/// Creates a connected player/endpoint pair.
pub fn channel_player() -> (ChannelPlayer, PlayerEndpoint) {
    let (request_tx, request_rx) = sync_channel(1);
    let (response_tx, response_rx) = sync_channel(1);
    (
        ChannelPlayer {
            requests: request_tx,
            responses: response_rx,
        },
        PlayerEndpoint {
            requests: request_rx,
            responses: response_tx,
        },
    )
}

impl ChannelPlayer {
    fn send(&self, request: Request) -> Result<(), String> {
        self.requests
            .send(request)
            .map_err(|_| String::from("The deciding side hung up."))
    }

    fn recv(&self) -> Result<Response, String> {
        self.responses
            .recv()
            .map_err(|_| String::from("The deciding side hung up."))
    }
}

impl Player for ChannelPlayer {
    fn init_players(&mut self, own_id: PlayerId, names: &[String; 2]) -> Result<(), String> {
        self.send(Request::InitPlayers {
            own_id,
            names: names.clone(),
        })
    }

    fn receive_info(&mut self, info: &str) -> Result<(), String> {
        self.send(Request::ReceiveInfo(info.to_string()))
    }

    fn update_state(
        &mut self,
        public_state: &PublicGameState,
        own_state: &PlayerState,
    ) -> Result<(), String> {
        self.send(Request::UpdateState {
            public_state: public_state.clone(),
            own_state: own_state.clone(),
        })
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Bag<Ticket>) -> Result<(), String> {
        self.send(Request::SetInitialTicketChoice(tickets.clone()))
    }

    fn choose_initial_tickets(&mut self) -> Result<Bag<Ticket>, String> {
        self.send(Request::ChooseInitialTickets)?;
        match self.recv()? {
            Response::Tickets(tickets) => Ok(tickets),
            other => Err(format!("Expected a ticket choice, got {:?}.", other)),
        }
    }

    fn next_turn(&mut self) -> Result<TurnKind, String> {
        self.send(Request::NextTurn)?;
        match self.recv()? {
            Response::Turn(kind) => Ok(kind),
            other => Err(format!("Expected a turn kind, got {:?}.", other)),
        }
    }

    fn choose_tickets(&mut self, options: &Bag<Ticket>) -> Result<Bag<Ticket>, String> {
        self.send(Request::ChooseTickets(options.clone()))?;
        match self.recv()? {
            Response::Tickets(tickets) => Ok(tickets),
            other => Err(format!("Expected a ticket choice, got {:?}.", other)),
        }
    }

    fn draw_slot(&mut self) -> Result<DrawSlot, String> {
        self.send(Request::DrawSlot)?;
        match self.recv()? {
            Response::Slot(slot) => Ok(slot),
            other => Err(format!("Expected a draw slot, got {:?}.", other)),
        }
    }

    fn claimed_route(&mut self) -> Result<&'static Route, String> {
        self.send(Request::ClaimedRoute)?;
        match self.recv()? {
            Response::Route(route) => Ok(route),
            other => Err(format!("Expected a route, got {:?}.", other)),
        }
    }

    fn initial_claim_cards(&mut self) -> Result<Bag<Card>, String> {
        self.send(Request::InitialClaimCards)?;
        match self.recv()? {
            Response::Cards(cards) => Ok(cards),
            other => Err(format!("Expected claim cards, got {:?}.", other)),
        }
    }

    fn choose_additional_cards(&mut self, options: &[Bag<Card>]) -> Result<Bag<Card>, String> {
        self.send(Request::ChooseAdditionalCards(options.to_vec()))?;
        match self.recv()? {
            Response::Cards(cards) => Ok(cards),
            other => Err(format!("Expected additional cards, got {:?}.", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::thread;

    #[test]
    fn requests_and_responses_pair_up() {
        let (mut player, endpoint) = channel_player();

        let deciding = thread::spawn(move || {
            loop {
                match endpoint.recv() {
                    Ok(Request::ReceiveInfo(_)) => {}
                    Ok(Request::NextTurn) => {
                        endpoint.send(Response::Turn(TurnKind::DrawCards)).unwrap();
                    }
                    Ok(Request::DrawSlot) => {
                        endpoint.send(Response::Slot(DrawSlot::Deck)).unwrap();
                    }
                    Ok(_) => panic!("unexpected request"),
                    Err(_) => break,
                }
            }
        });

        player.receive_info("the match starts").unwrap();
        assert_eq!(player.next_turn(), Ok(TurnKind::DrawCards));
        assert_eq!(player.draw_slot(), Ok(DrawSlot::Deck));
        assert_eq!(player.draw_slot(), Ok(DrawSlot::Deck));

        drop(player);
        deciding.join().unwrap();
    }

    #[test]
    fn hung_up_endpoint_fails_the_calls() {
        let (mut player, endpoint) = channel_player();
        drop(endpoint);

        assert!(player.receive_info("anyone there?").is_err());
        assert!(player.next_turn().is_err());
    }
}
