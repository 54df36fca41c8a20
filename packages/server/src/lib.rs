//! Turn-based multiplayer bingo session server.
//!
//! Players form named groups over a WebSocket connection, the group creator
//! starts a game, every player is dealt a random 5x5 board, and players take
//! turns marking numbers that count on everyone's board. The first player to
//! complete five lines on their own board wins.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod bootstrap;
