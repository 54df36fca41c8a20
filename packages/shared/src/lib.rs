//! Shared utilities for the bingo session server.
//!
//! - `logger`: tracing subscriber setup
//! - `time`: clock abstraction and JST timestamp helpers

pub mod logger;
pub mod time;
