use crate::{counter::BullsAndCows, leaderboard::Leaderboard, reveal::RevealMask};

/// Everything the game tells the player.
#[derive(Debug, Clone, Copy)]
pub enum Message<'a> {
    EnterName,
    Welcome,
    GameRules,
    /// Ask for the next command.
    Prompt,
    /// Result of a well-formed guess.
    GuessResult(BullsAndCows),
    /// Numeric input with the wrong number of digits.
    WrongLength { expected: usize, got: usize },
    /// Signed numeric input, which can never be a code.
    NotACode(&'a str),
    /// Current state of the reveal mask after a `help`.
    RevealMask(&'a RevealMask),
    /// `help` requested with no reveals left.
    CheatsExhausted,
    Unrecognized(&'a str),
    Solved {
        player: &'a str,
        attempts: u32,
        cheats: usize,
    },
    Leaderboard(&'a Leaderboard),
    /// Offer another round after a win.
    PlayAgain,
    Goodbye,
}

/// Renders [`Message`]s to the player.
pub trait Printer {
    fn print(&mut self, message: Message<'_>);
}
