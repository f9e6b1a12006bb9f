//! CLI command implementations.
//!
//! Each command renders its output as a string so `main` decides where it goes.

pub mod board;
pub mod export;
pub mod history;
pub mod replay;
pub mod save;
