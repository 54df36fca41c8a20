//! HTTP API response DTOs for the bingo session.

use serde::{Deserialize, Serialize};

/// Group summary for list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSummaryDto {
    pub name: String,
    pub status: String,
    pub players: Vec<String>,
    pub created_at: String, // ISO 8601
}

/// Group detail for detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDetailDto {
    pub name: String,
    pub status: String,
    pub players: Vec<String>,
    /// `None` while waiting
    pub current_player: Option<String>,
    pub marked_numbers: Vec<u8>,
    pub created_at: String, // ISO 8601
}
