#![allow(dead_code)]

use std::collections::VecDeque;

use bulls_and_cows::{Message, Printer, RandomSource};

/// Random source replaying fixed values; each value is clamped into the
/// requested range. Returns `min` once the script runs out.
pub struct ScriptedRandom {
    values: VecDeque<u32>,
    pub calls: Vec<(u32, u32)>,
}

impl ScriptedRandom {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            calls: Vec::new(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn generate(&mut self, min: u32, max: u32) -> u32 {
        self.calls.push((min, max));
        self.values
            .pop_front()
            .map(|v| v.clamp(min, max))
            .unwrap_or(min)
    }
}

/// Owned copy of a printed [`Message`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    EnterName,
    Welcome,
    GameRules,
    Prompt,
    Guess { bulls: u8, cows: u8 },
    WrongLength { expected: usize, got: usize },
    NotACode(String),
    Mask(String),
    CheatsExhausted,
    Unrecognized(String),
    Solved { player: String, attempts: u32, cheats: usize },
    Leaderboard(Vec<(String, u32)>),
    PlayAgain,
    Goodbye,
}

#[derive(Default)]
pub struct RecordingPrinter {
    pub events: Vec<Event>,
}

impl RecordingPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, event: &Event) -> usize {
        self.events.iter().filter(|e| *e == event).count()
    }

    /// Events other than the prompt and banner noise.
    pub fn replies(&self) -> Vec<Event> {
        self.events
            .iter()
            .filter(|e| {
                !matches!(
                    e,
                    Event::Prompt | Event::Welcome | Event::GameRules | Event::EnterName
                )
            })
            .cloned()
            .collect()
    }
}

impl Printer for RecordingPrinter {
    fn print(&mut self, message: Message<'_>) {
        let event = match message {
            Message::EnterName => Event::EnterName,
            Message::Welcome => Event::Welcome,
            Message::GameRules => Event::GameRules,
            Message::Prompt => Event::Prompt,
            Message::GuessResult(r) => Event::Guess {
                bulls: r.bulls,
                cows: r.cows,
            },
            Message::WrongLength { expected, got } => Event::WrongLength { expected, got },
            Message::NotACode(number) => Event::NotACode(number.to_string()),
            Message::RevealMask(mask) => Event::Mask(mask.to_string()),
            Message::CheatsExhausted => Event::CheatsExhausted,
            Message::Unrecognized(cmd) => Event::Unrecognized(cmd.to_string()),
            Message::Solved {
                player,
                attempts,
                cheats,
            } => Event::Solved {
                player: player.to_string(),
                attempts,
                cheats,
            },
            Message::Leaderboard(board) => Event::Leaderboard(
                board
                    .ranked()
                    .iter()
                    .map(|s| (s.player().to_string(), s.attempts()))
                    .collect(),
            ),
            Message::PlayAgain => Event::PlayAgain,
            Message::Goodbye => Event::Goodbye,
        };
        self.events.push(event);
    }
}
