//! The player-side loop that serves a local [`Player`] to a remote engine.

use crate::game_state::PublicGameState;
use crate::net::error::{DecodeError, NetError};
use crate::net::message::MessageKind;
use crate::net::serdes::{self, Serde};
use crate::player::{Player, PlayerId, TurnKind};
use crate::player_state::PlayerState;

use log::debug;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};

/// Runs a local [`Player`] against a remote engine.
///
/// [`run`](RemotePlayerClient::run) reads one protocol line at a time,
/// invokes the matching player method, and writes the one-line reply when
/// the message asks for one. A malformed line means the peers are out of
/// sync, and fails the connection instead of being skipped.
pub struct RemotePlayerClient<P: Player> {
    player: P,
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl<P: Player> RemotePlayerClient<P> {
    /// Wraps an established connection.
    pub fn new(player: P, stream: TcpStream) -> Result<Self, NetError> {
        let reader = BufReader::new(stream.try_clone()?);
        Ok(Self {
            player,
            reader,
            writer: BufWriter::new(stream),
        })
    }

    /// Connects to the engine at `addr`.
    pub fn connect(player: P, addr: impl ToSocketAddrs) -> Result<Self, NetError> {
        let stream = TcpStream::connect(addr)?;
        Self::new(player, stream)
    }

    /// Serves the player until the engine closes the connection, which is
    /// how a finished match ends on this side.
    pub fn run(&mut self) -> Result<(), NetError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(());
            }
            let line = line.trim_end_matches('\n');
            debug!("client <- {}", line);
            self.handle(line)?;
        }
    }

    fn handle(&mut self, line: &str) -> Result<(), NetError> {
        let (kind_raw, rest) = line.split_once(' ').unwrap_or((line, ""));
        match MessageKind::parse(kind_raw)? {
            MessageKind::InitPlayers => {
                let (own_id_raw, names_raw) = split_args(rest)?;
                let own_id = PlayerId::deserialize(own_id_raw)?;
                let names: Vec<String> = serdes::deserialize_list(names_raw)?;
                let names: [String; 2] = names.try_into().map_err(|_| {
                    DecodeError::Malformed(String::from("expected exactly two player names"))
                })?;
                self.player
                    .init_players(own_id, &names)
                    .map_err(NetError::Player)
            }
            MessageKind::ReceiveInfo => {
                let info = String::deserialize(rest)?;
                self.player.receive_info(&info).map_err(NetError::Player)
            }
            MessageKind::UpdateState => {
                let (public_raw, own_raw) = split_args(rest)?;
                let public_state = PublicGameState::deserialize(public_raw)?;
                let own_state = PlayerState::deserialize(own_raw)?;
                self.player
                    .update_state(&public_state, &own_state)
                    .map_err(NetError::Player)
            }
            MessageKind::SetInitialTickets => {
                let tickets = serdes::deserialize_bag(rest)?;
                self.player
                    .set_initial_ticket_choice(&tickets)
                    .map_err(NetError::Player)
            }
            MessageKind::ChooseInitialTickets => {
                let chosen = self
                    .player
                    .choose_initial_tickets()
                    .map_err(NetError::Player)?;
                self.reply(&serdes::serialize_bag(&chosen))
            }
            MessageKind::NextTurn => {
                let kind = self.player.next_turn().map_err(NetError::Player)?;
                self.reply(&TurnKind::serialize(&kind))
            }
            MessageKind::ChooseTickets => {
                let options = serdes::deserialize_bag(rest)?;
                let chosen = self
                    .player
                    .choose_tickets(&options)
                    .map_err(NetError::Player)?;
                self.reply(&serdes::serialize_bag(&chosen))
            }
            MessageKind::DrawSlot => {
                let slot = self.player.draw_slot().map_err(NetError::Player)?;
                self.reply(&slot.to_index().serialize())
            }
            MessageKind::Route => {
                let route = self.player.claimed_route().map_err(NetError::Player)?;
                self.reply(&route.serialize())
            }
            MessageKind::Cards => {
                let cards = self.player.initial_claim_cards().map_err(NetError::Player)?;
                self.reply(&serdes::serialize_bag(&cards))
            }
            MessageKind::ChooseAdditionalCards => {
                let options = serdes::deserialize_bag_list(rest)?;
                let chosen = self
                    .player
                    .choose_additional_cards(&options)
                    .map_err(NetError::Player)?;
                self.reply(&serdes::serialize_bag(&chosen))
            }
        }
    }

    fn reply(&mut self, payload: &str) -> Result<(), NetError> {
        debug!("client -> {}", payload);
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn split_args(rest: &str) -> Result<(&str, &str), DecodeError> {
    rest.split_once(' ')
        .ok_or_else(|| DecodeError::Malformed(format!("expected two fields, got {:?}", rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bag::Bag;
    use crate::card::Card;
    use crate::net::remote_proxy::RemotePlayerProxy;
    use crate::player::DrawSlot;
    use crate::route::Route;
    use crate::ticket::Ticket;
    use crate::{board, game_state};

    use std::net::TcpListener;
    use std::thread;

    /// Answers every question with a fixed decision and records what it
    /// was told.
    struct ScriptedPlayer {
        own_id: Option<PlayerId>,
        infos: Vec<String>,
        dealt_tickets: Option<Bag<Ticket>>,
    }

    impl ScriptedPlayer {
        fn new() -> Self {
            Self {
                own_id: None,
                infos: Vec::new(),
                dealt_tickets: None,
            }
        }
    }

    impl Player for ScriptedPlayer {
        fn init_players(&mut self, own_id: PlayerId, _names: &[String; 2]) -> Result<(), String> {
            self.own_id = Some(own_id);
            Ok(())
        }

        fn receive_info(&mut self, info: &str) -> Result<(), String> {
            self.infos.push(info.to_string());
            Ok(())
        }

        fn update_state(
            &mut self,
            _public_state: &game_state::PublicGameState,
            _own_state: &PlayerState,
        ) -> Result<(), String> {
            Ok(())
        }

        fn set_initial_ticket_choice(&mut self, tickets: &Bag<Ticket>) -> Result<(), String> {
            self.dealt_tickets = Some(tickets.clone());
            Ok(())
        }

        fn choose_initial_tickets(&mut self) -> Result<Bag<Ticket>, String> {
            let dealt = self.dealt_tickets.as_ref().ok_or("no tickets dealt")?;
            Ok(dealt.iter().take(2).cloned().collect())
        }

        fn next_turn(&mut self) -> Result<TurnKind, String> {
            Ok(TurnKind::DrawCards)
        }

        fn choose_tickets(&mut self, options: &Bag<Ticket>) -> Result<Bag<Ticket>, String> {
            Ok(options.iter().take(1).cloned().collect())
        }

        fn draw_slot(&mut self) -> Result<DrawSlot, String> {
            Ok(DrawSlot::FaceUp(2))
        }

        fn claimed_route(&mut self) -> Result<&'static Route, String> {
            Ok(&board::routes()[0])
        }

        fn initial_claim_cards(&mut self) -> Result<Bag<Card>, String> {
            Ok(Bag::of(2, Card::Red))
        }

        fn choose_additional_cards(&mut self, options: &[Bag<Card>]) -> Result<Bag<Card>, String> {
            Ok(options.first().cloned().unwrap_or_default())
        }
    }

    #[test]
    fn proxy_and_client_converse_over_loopback() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client_thread = thread::spawn(move || {
            let player = ScriptedPlayer::new();
            let mut client = RemotePlayerClient::connect(player, addr).unwrap();
            client.run().unwrap();
            client.player
        });

        let (stream, _) = listener.accept().unwrap();
        let mut proxy = RemotePlayerProxy::new(stream).unwrap();

        let names = [String::from("Ada"), String::from("Charles")];
        proxy.init_players(PlayerId::Two, &names).unwrap();
        proxy.receive_info("Ada will play first.").unwrap();

        let dealt: Bag<Ticket> = board::tickets().iter().take(5).cloned().collect();
        proxy.set_initial_ticket_choice(&dealt).unwrap();
        let kept = proxy.choose_initial_tickets().unwrap();
        assert_eq!(kept.size(), 2);
        assert!(dealt.contains_all(&kept));

        assert_eq!(proxy.next_turn(), Ok(TurnKind::DrawCards));
        assert_eq!(proxy.draw_slot(), Ok(DrawSlot::FaceUp(2)));

        let route = proxy.claimed_route().unwrap();
        assert!(std::ptr::eq(route, &board::routes()[0]));
        assert_eq!(proxy.initial_claim_cards(), Ok(Bag::of(2, Card::Red)));

        let options = vec![Bag::of(1, Card::Locomotive)];
        assert_eq!(
            proxy.choose_additional_cards(&options),
            Ok(Bag::of(1, Card::Locomotive))
        );

        // Closing the proxy ends the client's serve loop.
        drop(proxy);
        let served = client_thread.join().unwrap();
        assert_eq!(served.own_id, Some(PlayerId::Two));
        assert_eq!(served.infos, vec![String::from("Ada will play first.")]);
    }
}
