//! Relay wire shapes.
//!
//! The relay server pairs two connections into a room and forwards move,
//! restart, timeout, and interaction payloads verbatim without interpreting
//! them. Field names here are pinned to the JSON an unmodified peer and
//! relay expect; changing them breaks interop.

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{Color, Square};

/// A committed move record. Relayed verbatim to the peer, which replays it
/// through the session's remote-apply path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveMessage {
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreated {
    pub room_id: String,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerJoined {
    pub color: Color,
}

/// Connection identifiers for both seats, sent when a room fills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStart {
    pub white: String,
    pub black: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeMove {
    pub room_id: String,
    #[serde(rename = "move")]
    pub mv: MoveMessage,
}

/// A side's clock ran out; the relay declares the opponent the winner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeOut {
    pub room_id: String,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverTimeout {
    pub winner: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInteraction {
    pub room_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub from_color: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiveInteraction {
    #[serde(rename = "type")]
    pub kind: String,
    pub from_color: Color,
}

/// Events a client emits toward the relay. Room-only events carry the bare
/// room id as their payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    CreateRoom,
    JoinRoom(String),
    MakeMove(MakeMove),
    LeaveRoom(String),
    RequestRestart(String),
    TimeOut(TimeOut),
    SendInteraction(SendInteraction),
}

impl ClientEvent {
    pub fn event_name(&self) -> &'static str {
        match self {
            ClientEvent::CreateRoom => "create_room",
            ClientEvent::JoinRoom(_) => "join_room",
            ClientEvent::MakeMove(_) => "make_move",
            ClientEvent::LeaveRoom(_) => "leave_room",
            ClientEvent::RequestRestart(_) => "request_restart",
            ClientEvent::TimeOut(_) => "time_out",
            ClientEvent::SendInteraction(_) => "send_interaction",
        }
    }

    /// JSON payload for the event, `None` for payload-free events.
    pub fn payload(&self) -> Result<Option<serde_json::Value>, serde_json::Error> {
        let value = match self {
            ClientEvent::CreateRoom => return Ok(None),
            ClientEvent::JoinRoom(room_id)
            | ClientEvent::LeaveRoom(room_id)
            | ClientEvent::RequestRestart(room_id) => serde_json::to_value(room_id)?,
            ClientEvent::MakeMove(msg) => serde_json::to_value(msg)?,
            ClientEvent::TimeOut(msg) => serde_json::to_value(msg)?,
            ClientEvent::SendInteraction(msg) => serde_json::to_value(msg)?,
        };
        Ok(Some(value))
    }
}

/// Events the relay pushes to a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    RoomCreated(RoomCreated),
    PlayerJoined(PlayerJoined),
    GameStart(GameStart),
    OpponentMove(MoveMessage),
    /// Discard current state and reinitialize to the standard start; may
    /// arrive at any time.
    GameRestart,
    GameOverTimeout(GameOverTimeout),
    OpponentDisconnected,
    ErrorMessage(String),
    ReceiveInteraction(ReceiveInteraction),
}

impl ServerEvent {
    pub fn event_name(&self) -> &'static str {
        match self {
            ServerEvent::RoomCreated(_) => "room_created",
            ServerEvent::PlayerJoined(_) => "player_joined",
            ServerEvent::GameStart(_) => "game_start",
            ServerEvent::OpponentMove(_) => "opponent_move",
            ServerEvent::GameRestart => "game_restart",
            ServerEvent::GameOverTimeout(_) => "game_over_timeout",
            ServerEvent::OpponentDisconnected => "opponent_disconnected",
            ServerEvent::ErrorMessage(_) => "error_message",
            ServerEvent::ReceiveInteraction(_) => "receive_interaction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClientEvent, MakeMove, MoveMessage, RoomCreated, TimeOut};
    use crate::game_state::chess_types::{Color, Square};
    use serde_json::json;

    #[test]
    fn move_message_wire_shape_is_exact() {
        let msg = MoveMessage {
            from: Square::new(6, 4),
            to: Square::new(4, 4),
            color: Color::White,
        };
        let value = serde_json::to_value(&msg).expect("serializes");
        assert_eq!(
            value,
            json!({
                "from": {"row": 6, "col": 4},
                "to": {"row": 4, "col": 4},
                "color": "white",
            })
        );
    }

    #[test]
    fn make_move_envelope_uses_room_id_and_move_keys() {
        let event = ClientEvent::MakeMove(MakeMove {
            room_id: "AB12CD".to_owned(),
            mv: MoveMessage {
                from: Square::new(1, 0),
                to: Square::new(3, 0),
                color: Color::Black,
            },
        });
        assert_eq!(event.event_name(), "make_move");
        let payload = event.payload().expect("serializes").expect("has payload");
        assert_eq!(
            payload,
            json!({
                "roomId": "AB12CD",
                "move": {
                    "from": {"row": 1, "col": 0},
                    "to": {"row": 3, "col": 0},
                    "color": "black",
                },
            })
        );
    }

    #[test]
    fn room_only_events_carry_the_bare_room_id() {
        let event = ClientEvent::RequestRestart("ZZ99XX".to_owned());
        assert_eq!(event.event_name(), "request_restart");
        let payload = event.payload().expect("serializes").expect("has payload");
        assert_eq!(payload, json!("ZZ99XX"));
    }

    #[test]
    fn inbound_payloads_parse_from_relay_json() {
        let created: RoomCreated =
            serde_json::from_value(json!({"roomId": "QQ00QQ", "color": "white"}))
                .expect("room_created parses");
        assert_eq!(created.color, Color::White);

        let timeout: TimeOut =
            serde_json::from_value(json!({"roomId": "QQ00QQ", "color": "black"}))
                .expect("time_out parses");
        assert_eq!(timeout.color, Color::Black);
    }
}
