//! Domain layer: bingo rules, group lifecycle and the seams to the outside.

pub mod board;
pub mod entity;
pub mod error;
pub mod factory;
pub mod message_pusher;
pub mod registry;
pub mod repository;
pub mod turn;
pub mod value_object;
pub mod win;

pub use board::{BOARD_SIZE, Board, LINE_COUNT};
pub use entity::{DepartureEffect, Group, GroupStatus, MIN_PLAYERS_TO_START, MarkOutcome};
pub use error::{GameError, MessagePushError, ValueObjectError};
pub use factory::{BoardFactory, PlayerIdFactory};
pub use message_pusher::{MessagePusher, PusherChannel};
pub use registry::{CellMarked, Departure, GroupRegistry};
pub use repository::GroupRepository;
pub use value_object::{BingoNumber, GroupName, PlayerId, Timestamp};
pub use win::{WIN_THRESHOLD, completed_lines, is_win};

#[cfg(test)]
pub use message_pusher::MockMessagePusher;
