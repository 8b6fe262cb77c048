#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod code;
pub mod command;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod counter;
mod game;
pub mod input;
mod leaderboard;
#[cfg(feature = "std")]
mod logging;
mod printer;
mod random;
mod reveal;
mod session;

pub use code::Code;
pub use command::{
    ChainBuilder, CommandChain, CommandContext, CommandHandler, FallbackHandler, Outcome,
};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use counter::{count, BullsAndCows};
pub use game::*;
#[cfg(feature = "std")]
pub use input::LineReader;
pub use input::{LineSource, ScriptedInput};
pub use leaderboard::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
pub use printer::*;
pub use random::*;
pub use reveal::RevealMask;
pub use session::*;
