//! A terminal front end for `reversi-rules`: two people share one keyboard.
//!
//! Everything here is presentation. Rules, turn order, passes and scoring
//! all come from the engine.

pub mod command;
pub mod config;
pub mod render;
pub mod session;
