//! Command interpretation chain.
//!
//! Each line of player input is offered to a list of [`CommandHandler`]s in
//! registration order. The first handler that recognises the input acts on it.
//! Input nobody claims ends up in the chain's [`FallbackHandler`], which every
//! chain must have; [`ChainBuilder::build`] refuses to produce a chain without
//! one.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::{
    code::Code,
    common::{ChainError, CodeError},
    config::{HELP_COMMAND, QUIT_COMMAND, RESTART_COMMAND},
    game::{GameState, RevealOutcome},
    printer::{Message, Printer},
    random::RandomSource,
};

/// What the session loop should do after a command was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading commands.
    Continue,
    /// Throw away the current play-through and start a new one.
    Restart,
    /// Leave the game loop without recording a score.
    Quit,
}

/// Everything a handler may touch while processing one command.
pub struct CommandContext<'a> {
    pub state: &'a mut GameState,
    pub rng: &'a mut dyn RandomSource,
    pub printer: &'a mut dyn Printer,
}

/// A link in the chain. Returns `None` to pass the command on.
pub trait CommandHandler {
    fn handle(&self, command: &str, ctx: &mut CommandContext<'_>) -> Option<Outcome>;
}

/// The end of the chain; always consumes the command.
pub trait FallbackHandler {
    fn handle(&self, command: &str, ctx: &mut CommandContext<'_>) -> Outcome;
}

pub struct CommandChain {
    handlers: Vec<Box<dyn CommandHandler>>,
    fallback: Box<dyn FallbackHandler>,
}

impl CommandChain {
    /// The standard game chain: guess, help, restart, quit, unrecognized.
    pub fn standard() -> Result<Self, ChainError> {
        ChainBuilder::new()
            .with(GuessHandler)
            .with(HelpHandler)
            .with(RestartHandler)
            .with(QuitHandler)
            .fallback(UnrecognizedHandler)
            .build()
    }

    /// Number of handlers in front of the fallback.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route `command` to the first handler that accepts it.
    pub fn dispatch(&self, command: &str, ctx: &mut CommandContext<'_>) -> Outcome {
        let command = command.trim();
        for handler in &self.handlers {
            if let Some(outcome) = handler.handle(command, ctx) {
                return outcome;
            }
        }
        self.fallback.handle(command, ctx)
    }
}

/// Assembles a [`CommandChain`] handler by handler.
#[derive(Default)]
pub struct ChainBuilder {
    handlers: Vec<Box<dyn CommandHandler>>,
    fallback: Option<Box<dyn FallbackHandler>>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler after the ones already registered.
    pub fn with<H: CommandHandler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Set the handler receiving everything the others decline.
    pub fn fallback<F: FallbackHandler + 'static>(mut self, handler: F) -> Self {
        self.fallback = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Result<CommandChain, ChainError> {
        let fallback = self.fallback.ok_or(ChainError::MissingTerminal)?;
        log::debug!(
            "command chain built with {} handlers and a fallback",
            self.handlers.len()
        );
        Ok(CommandChain {
            handlers: self.handlers,
            fallback,
        })
    }
}

/// Any input that reads as an integer is a guess. Only an unsigned number of
/// exactly `CODE_LEN` digits is scored; other numbers are rejected without
/// touching the game.
pub struct GuessHandler;

/// Whether `command` is an optionally signed run of ASCII digits.
fn is_integer(command: &str) -> bool {
    let digits = command.strip_prefix(['+', '-']).unwrap_or(command);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl CommandHandler for GuessHandler {
    fn handle(&self, command: &str, ctx: &mut CommandContext<'_>) -> Option<Outcome> {
        if !is_integer(command) {
            return None;
        }
        match Code::parse(command) {
            Ok(guess) => {
                let result = ctx.state.evaluate(&guess);
                log::debug!(
                    "guess {} -> {} bulls, {} cows",
                    guess,
                    result.bulls,
                    result.cows
                );
                ctx.printer.print(Message::GuessResult(result));
            }
            Err(CodeError::WrongLength { expected, got }) => {
                ctx.printer.print(Message::WrongLength { expected, got });
            }
            Err(e) => {
                log::debug!("numeric input {:?} is not a code: {}", command, e);
                ctx.printer.print(Message::NotACode(command));
            }
        }
        Some(Outcome::Continue)
    }
}

/// `help` reveals one more digit of the secret.
pub struct HelpHandler;

impl CommandHandler for HelpHandler {
    fn handle(&self, command: &str, ctx: &mut CommandContext<'_>) -> Option<Outcome> {
        if !command.eq_ignore_ascii_case(HELP_COMMAND) {
            return None;
        }
        match ctx.state.reveal(&mut *ctx.rng) {
            RevealOutcome::Revealed(pos) => {
                log::debug!("revealed position {}", pos);
            }
            RevealOutcome::Exhausted => {
                ctx.printer.print(Message::CheatsExhausted);
            }
        }
        ctx.printer.print(Message::RevealMask(ctx.state.mask()));
        Some(Outcome::Continue)
    }
}

/// `restart` starts over with a new secret.
pub struct RestartHandler;

impl CommandHandler for RestartHandler {
    fn handle(&self, command: &str, _ctx: &mut CommandContext<'_>) -> Option<Outcome> {
        command
            .eq_ignore_ascii_case(RESTART_COMMAND)
            .then_some(Outcome::Restart)
    }
}

/// `quit` leaves the game.
pub struct QuitHandler;

impl CommandHandler for QuitHandler {
    fn handle(&self, command: &str, _ctx: &mut CommandContext<'_>) -> Option<Outcome> {
        command
            .eq_ignore_ascii_case(QUIT_COMMAND)
            .then_some(Outcome::Quit)
    }
}

/// Tells the player the input made no sense and carries on.
pub struct UnrecognizedHandler;

impl FallbackHandler for UnrecognizedHandler {
    fn handle(&self, command: &str, ctx: &mut CommandContext<'_>) -> Outcome {
        ctx.printer.print(Message::Unrecognized(command));
        Outcome::Continue
    }
}
