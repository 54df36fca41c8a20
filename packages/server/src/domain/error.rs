//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// PlayerId validation error
    #[error("PlayerId cannot be empty")]
    PlayerIdEmpty,

    /// PlayerId too long error
    #[error("PlayerId cannot exceed {max} characters (got {actual})")]
    PlayerIdTooLong { max: usize, actual: usize },

    /// GroupName validation error
    #[error("Group name cannot be empty")]
    GroupNameEmpty,

    /// GroupName too long error
    #[error("Group name cannot exceed {max} characters (got {actual})")]
    GroupNameTooLong { max: usize, actual: usize },

    /// BingoNumber out of range error
    #[error("Number must be between {min} and {max} (got {actual})")]
    NumberOutOfRange { min: u8, max: u8, actual: i64 },

    /// Board is not a 5x5 permutation of 1..=25
    #[error("Board must contain every number from 1 to 25 exactly once: {0}")]
    InvalidBoard(String),
}

/// Errors produced by the group / game state machine.
///
/// Every variant is recoverable and reported to the requesting connection only;
/// the state is validated before it is mutated, so an error never leaves a group
/// half-updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Group already exists.")]
    AlreadyExists,

    #[error("Invalid group name: {0}")]
    InvalidGroupName(String),

    #[error("Group not found.")]
    NotFound,

    #[error("Cannot join group: the game has already started.")]
    NotJoinable,

    #[error("You are already a member of this group.")]
    AlreadyMember,

    #[error("Not enough players to start the game: at least {required} required (current: {current})")]
    InsufficientPlayers { required: usize, current: usize },

    #[error("The game has already started.")]
    AlreadyStarted,

    #[error("It's not your turn!")]
    NotYourTurn,

    #[error("Cell already marked!")]
    AlreadyMarked,

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Game has not started!")]
    GameNotStarted,

    #[error("Only the group creator can {action}.")]
    Unauthorized { action: &'static str },
}

impl GameError {
    /// Stable machine-readable code sent to clients in failure acks.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::AlreadyExists => "already-exists",
            GameError::InvalidGroupName(_) => "invalid-group-name",
            GameError::NotFound => "not-found",
            GameError::NotJoinable => "not-joinable",
            GameError::AlreadyMember => "already-member",
            GameError::InsufficientPlayers { .. } => "insufficient-players",
            GameError::AlreadyStarted => "already-started",
            GameError::NotYourTurn => "not-your-turn",
            GameError::AlreadyMarked => "already-marked",
            GameError::InvalidNumber(_) => "invalid-number",
            GameError::GameNotStarted => "game-not-started",
            GameError::Unauthorized { .. } => "unauthorized",
        }
    }
}

/// Errors related to pushing messages to connected clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MessagePushError {
    /// The target client is not registered
    #[error("Client '{0}' not found")]
    ClientNotFound(String),

    /// The client's channel is closed
    #[error("Failed to push message: {0}")]
    PushFailed(String),
}
