//! WebSocket message DTOs for the bingo session.
//!
//! Every frame is a JSON object tagged by `type` (kebab-case).

use serde::{Deserialize, Serialize};

use crate::domain::GameError;

/// Server to client message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageType {
    Connected,
    Ack,
    UpdateGroups,
    PlayerJoined,
    GameStarted,
    CellMarked,
    NextTurn,
    GameWon,
    GameReset,
}

/// A request frame sent by a client
///
/// ```json
/// {"type": "mark-cell", "request_id": "7", "group_name": "room1", "number": 13}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRequest {
    /// Echoed back in the ack so the client can match it to its request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(flatten)]
    pub event: ClientEvent,
}

/// The event carried by a client request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    CreateGroup { group_name: String },
    JoinGroup { group_name: String },
    StartGame { group_name: String },
    MarkCell { group_name: String, number: i64 },
    ResetGame { group_name: String },
}

impl ClientEvent {
    /// Wire name of the event, used in acks and logs.
    pub fn name(&self) -> &'static str {
        match self {
            ClientEvent::CreateGroup { .. } => "create-group",
            ClientEvent::JoinGroup { .. } => "join-group",
            ClientEvent::StartGame { .. } => "start-game",
            ClientEvent::MarkCell { .. } => "mark-cell",
            ClientEvent::ResetGame { .. } => "reset-game",
        }
    }
}

/// Sent to a connection right after the upgrade
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedMessage {
    pub r#type: MessageType,
    pub player_id: String,
    /// Joinable group names
    pub groups: Vec<String>,
}

/// Reply to a single client request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckMessage {
    pub r#type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    pub event: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error code, see `GameError::code`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<String>>,
}

impl AckMessage {
    pub fn success(request_id: Option<String>, event: &str) -> Self {
        Self {
            r#type: MessageType::Ack,
            request_id,
            event: event.to_string(),
            success: true,
            message: None,
            error: None,
            players: None,
        }
    }

    pub fn failure(request_id: Option<String>, event: &str, error: &GameError) -> Self {
        Self {
            r#type: MessageType::Ack,
            request_id,
            event: event.to_string(),
            success: false,
            message: Some(error.to_string()),
            error: Some(error.code().to_string()),
            players: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_players(mut self, players: Vec<String>) -> Self {
        self.players = Some(players);
        self
    }
}

/// Joinable group list, sent to every connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupsMessage {
    pub r#type: MessageType,
    pub groups: Vec<String>,
}

/// Current membership of a group; also sent after a departure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerJoinedMessage {
    pub r#type: MessageType,
    pub group_name: String,
    pub players: Vec<String>,
}

/// Game start, sent to each player with only that player's board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStartedMessage {
    pub r#type: MessageType,
    pub group_name: String,
    /// 5x5, row-major
    pub board: Vec<Vec<u8>>,
    pub players: Vec<String>,
    pub current_player: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellMarkedMessage {
    pub r#type: MessageType,
    pub group_name: String,
    pub number: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextTurnMessage {
    pub r#type: MessageType,
    pub group_name: String,
    pub player_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameWonMessage {
    pub r#type: MessageType,
    pub group_name: String,
    pub player_id: String,
    pub completed_lines: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameResetMessage {
    pub r#type: MessageType,
    pub group_name: String,
    pub players: Vec<String>,
}
