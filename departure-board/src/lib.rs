//! Interactive departure board.
//!
//! Keeps a session's train departures in memory, sorted by destination,
//! and saves them to or loads them from JSON files on request.

pub mod command;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;
pub mod storage;
pub mod store;
