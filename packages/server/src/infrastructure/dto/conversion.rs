//! Conversion logic from domain entities to DTOs.

use bingo_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Group, GroupName, PlayerId, Timestamp};
use crate::infrastructure::dto::{http, websocket as dto};

fn player_strings(players: &[PlayerId]) -> Vec<String> {
    players.iter().map(|p| p.as_str().to_string()).collect()
}

fn rfc3339(timestamp: Timestamp) -> String {
    timestamp_to_jst_rfc3339(timestamp.value()).unwrap_or_default()
}

// ========================================
// Domain Entity → WebSocket DTO
// ========================================

impl dto::UpdateGroupsMessage {
    pub fn new(groups: &[GroupName]) -> Self {
        Self {
            r#type: dto::MessageType::UpdateGroups,
            groups: groups.iter().map(|g| g.as_str().to_string()).collect(),
        }
    }
}

impl dto::PlayerJoinedMessage {
    pub fn new(group: &GroupName, players: &[PlayerId]) -> Self {
        Self {
            r#type: dto::MessageType::PlayerJoined,
            group_name: group.as_str().to_string(),
            players: player_strings(players),
        }
    }
}

impl dto::GameResetMessage {
    pub fn new(group: &GroupName, players: &[PlayerId]) -> Self {
        Self {
            r#type: dto::MessageType::GameReset,
            group_name: group.as_str().to_string(),
            players: player_strings(players),
        }
    }
}

impl dto::GameStartedMessage {
    /// The start message for `player`, carrying only that player's board.
    ///
    /// Returns `None` if the group has not dealt `player` a board.
    pub fn for_player(group: &Group, player: &PlayerId) -> Option<Self> {
        let board = group.board(player)?;
        let current_player = group.current_player()?;
        Some(Self {
            r#type: dto::MessageType::GameStarted,
            group_name: group.name().as_str().to_string(),
            board: board.to_values(),
            players: player_strings(group.players()),
            current_player: current_player.as_str().to_string(),
        })
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<&Group> for http::GroupSummaryDto {
    fn from(group: &Group) -> Self {
        Self {
            name: group.name().as_str().to_string(),
            status: group.status().as_str().to_string(),
            players: player_strings(group.players()),
            created_at: rfc3339(group.created_at()),
        }
    }
}

impl From<&Group> for http::GroupDetailDto {
    fn from(group: &Group) -> Self {
        let current_player = if group.is_joinable() {
            None
        } else {
            group.current_player().map(|p| p.as_str().to_string())
        };
        Self {
            name: group.name().as_str().to_string(),
            status: group.status().as_str().to_string(),
            players: player_strings(group.players()),
            current_player,
            marked_numbers: group.marked_numbers().iter().map(|n| n.value()).collect(),
            created_at: rfc3339(group.created_at()),
        }
    }
}
