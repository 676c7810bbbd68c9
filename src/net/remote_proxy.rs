//! The engine-side stand-in for a player on the other end of a socket.

use crate::bag::Bag;
use crate::card::Card;
use crate::game_state::PublicGameState;
use crate::net::error::NetError;
use crate::net::message::MessageKind;
use crate::net::serdes::{self, Serde};
use crate::player::{DrawSlot, Player, PlayerId, TurnKind};
use crate::player_state::PlayerState;
use crate::route::Route;
use crate::ticket::Ticket;

use log::debug;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::TcpStream;

/// A [`Player`] whose decisions happen on the far side of a TCP
/// connection.
///
/// Every call serializes to one protocol line; calls that return a value
/// then block until the peer's one-line reply. All I/O is synchronous,
/// matching the strictly turn-based protocol: at most one question is in
/// flight at a time.
pub struct RemotePlayerProxy {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl RemotePlayerProxy {
    /// Wraps an accepted connection.
    pub fn new(stream: TcpStream) -> Result<Self, NetError> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            reader,
            writer: BufWriter::new(stream),
        })
    }

    fn send(&mut self, kind: MessageKind, args: &[String]) -> Result<(), NetError> {
        let mut line = kind.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        debug!("proxy -> {}", line);
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    fn receive(&mut self) -> Result<String, NetError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(NetError::ConnectionClosed);
        }
        let line = line.trim_end_matches('\n').to_string();
        debug!("proxy <- {}", line);
        Ok(line)
    }
}

impl Player for RemotePlayerProxy {
    fn init_players(&mut self, own_id: PlayerId, names: &[String; 2]) -> Result<(), String> {
        self.send(
            MessageKind::InitPlayers,
            &[own_id.serialize(), serdes::serialize_list(names.iter())],
        )
        .map_err(|e| e.to_string())
    }

    fn receive_info(&mut self, info: &str) -> Result<(), String> {
        self.send(MessageKind::ReceiveInfo, &[info.to_string().serialize()])
            .map_err(|e| e.to_string())
    }

    fn update_state(
        &mut self,
        public_state: &PublicGameState,
        own_state: &PlayerState,
    ) -> Result<(), String> {
        self.send(
            MessageKind::UpdateState,
            &[public_state.serialize(), own_state.serialize()],
        )
        .map_err(|e| e.to_string())
    }

    fn set_initial_ticket_choice(&mut self, tickets: &Bag<Ticket>) -> Result<(), String> {
        self.send(
            MessageKind::SetInitialTickets,
            &[serdes::serialize_bag(tickets)],
        )
        .map_err(|e| e.to_string())
    }

    fn choose_initial_tickets(&mut self) -> Result<Bag<Ticket>, String> {
        let reply = self
            .send(MessageKind::ChooseInitialTickets, &[])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        serdes::deserialize_bag(&reply).map_err(|e| e.to_string())
    }

    fn next_turn(&mut self) -> Result<TurnKind, String> {
        let reply = self
            .send(MessageKind::NextTurn, &[])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        TurnKind::deserialize(&reply).map_err(|e| e.to_string())
    }

    fn choose_tickets(&mut self, options: &Bag<Ticket>) -> Result<Bag<Ticket>, String> {
        let reply = self
            .send(MessageKind::ChooseTickets, &[serdes::serialize_bag(options)])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        serdes::deserialize_bag(&reply).map_err(|e| e.to_string())
    }

    fn draw_slot(&mut self) -> Result<DrawSlot, String> {
        let reply = self
            .send(MessageKind::DrawSlot, &[])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        let index = i32::deserialize(&reply).map_err(|e| e.to_string())?;
        DrawSlot::from_index(index)
    }

    fn claimed_route(&mut self) -> Result<&'static Route, String> {
        let reply = self
            .send(MessageKind::Route, &[])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        <&'static Route>::deserialize(&reply).map_err(|e| e.to_string())
    }

    fn initial_claim_cards(&mut self) -> Result<Bag<Card>, String> {
        let reply = self
            .send(MessageKind::Cards, &[])
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        serdes::deserialize_bag(&reply).map_err(|e| e.to_string())
    }

    fn choose_additional_cards(&mut self, options: &[Bag<Card>]) -> Result<Bag<Card>, String> {
        let reply = self
            .send(
                MessageKind::ChooseAdditionalCards,
                &[serdes::serialize_bag_list(options)],
            )
            .and_then(|_| self.receive())
            .map_err(|e| e.to_string())?;
        serdes::deserialize_bag(&reply).map_err(|e| e.to_string())
    }
}
