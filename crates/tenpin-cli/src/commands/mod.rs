//! CLI command implementations.

pub mod config;
pub mod game;
pub mod init;
pub mod score;
pub mod trace;
pub mod version;
