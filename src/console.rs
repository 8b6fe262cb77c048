#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::{
    config::{
        CODE_LEN, HELP_COMMAND, LEADERBOARD_DISPLAY, MAX_CHEATS, QUIT_COMMAND, RESTART_COMMAND,
    },
    leaderboard::Leaderboard,
    printer::{Message, Printer},
};

/// How the leaderboard is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeaderboardFormat {
    #[default]
    Table,
    Json,
}

/// [`Printer`] writing human-readable text to any writer, stdout by default.
pub struct ConsolePrinter<W: Write> {
    out: W,
    format: LeaderboardFormat,
}

impl ConsolePrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsolePrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            format: LeaderboardFormat::default(),
        }
    }

    pub fn with_format(mut self, format: LeaderboardFormat) -> Self {
        self.format = format;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, message: Message<'_>) -> io::Result<()> {
        let out = &mut self.out;
        match message {
            Message::EnterName => {
                write!(out, "Enter your name: ")?;
            }
            Message::Welcome => {
                writeln!(out)?;
                writeln!(out, "╔════════════════════════════════════════════════╗")?;
                writeln!(out, "║            WELCOME TO BULLS AND COWS           ║")?;
                writeln!(out, "╚════════════════════════════════════════════════╝")?;
            }
            Message::GameRules => {
                writeln!(
                    out,
                    "Guess the secret {}-digit number. A bull is a right digit in the",
                    CODE_LEN
                )?;
                writeln!(out, "right place, a cow is a right digit in the wrong place.")?;
                writeln!(
                    out,
                    "Commands: '{}' reveals a digit (up to {} times), '{}' starts over,",
                    HELP_COMMAND, MAX_CHEATS, RESTART_COMMAND
                )?;
                writeln!(out, "'{}' leaves the game.", QUIT_COMMAND)?;
            }
            Message::Prompt => {
                write!(out, "\nEnter your guess or command: ")?;
            }
            Message::GuessResult(result) if result.is_solved() => {
                writeln!(out, "🎯 {} bulls! That's the number.", result.bulls)?;
            }
            Message::GuessResult(result) => {
                writeln!(
                    out,
                    "Wrong number! Bulls: {}, Cows: {}",
                    result.bulls, result.cows
                )?;
            }
            Message::WrongLength { expected, got } => {
                writeln!(
                    out,
                    "✗ Your guess has {} digits; the secret has {}.",
                    got, expected
                )?;
            }
            Message::NotACode(number) => {
                writeln!(
                    out,
                    "✗ {} is not a guess; enter {} digits without a sign.",
                    number, CODE_LEN
                )?;
            }
            Message::RevealMask(mask) => {
                writeln!(out, "The number looks like {}.", mask)?;
            }
            Message::CheatsExhausted => {
                writeln!(out, "No more digits to reveal.")?;
            }
            Message::Unrecognized(command) => {
                writeln!(out, "✗ Incorrect guess or command: '{}'", command)?;
            }
            Message::Solved {
                player,
                attempts,
                cheats,
            } => {
                writeln!(out)?;
                write!(
                    out,
                    "🎉 Congratulations {}! You guessed the secret number in {} attempts",
                    player, attempts
                )?;
                if cheats > 0 {
                    write!(out, " and {} reveals", cheats)?;
                }
                writeln!(out, ".")?;
            }
            Message::Leaderboard(board) => {
                self.render_leaderboard(board)?;
            }
            Message::PlayAgain => {
                write!(
                    out,
                    "\nType '{}' to play again or anything else to exit: ",
                    RESTART_COMMAND
                )?;
            }
            Message::Goodbye => {
                writeln!(out, "Good bye!")?;
            }
        }
        self.out.flush()
    }

    fn render_leaderboard(&mut self, board: &Leaderboard) -> io::Result<()> {
        let top = board.top(LEADERBOARD_DISPLAY);
        if self.format == LeaderboardFormat::Json {
            let json = serde_json::to_string_pretty(&top).map_err(io::Error::other)?;
            return writeln!(self.out, "{}", json);
        }
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "    ╔══════════════════════════════════╗")?;
        writeln!(out, "    ║            LEADERBOARD           ║")?;
        writeln!(out, "    ╠══════════════════════════════════╣")?;
        if top.is_empty() {
            writeln!(out, "    ║ {:<32} ║", "No scores yet")?;
        }
        for (i, score) in top.iter().enumerate() {
            writeln!(
                out,
                "    ║ {:>2}. {:<20} {:>7} ║",
                i + 1,
                score.player(),
                score.attempts()
            )?;
        }
        writeln!(out, "    ╚══════════════════════════════════╝")
    }
}

impl<W: Write> Printer for ConsolePrinter<W> {
    fn print(&mut self, message: Message<'_>) {
        if let Err(e) = self.render(message) {
            log::warn!("failed to write to console: {}", e);
        }
    }
}
