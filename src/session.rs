//! Interactive game loop tying input, command chain and printer together.

use alloc::string::{String, ToString};

use crate::{
    command::{CommandChain, CommandContext, Outcome},
    config::{DEFAULT_PLAYER_NAME, RESTART_COMMAND},
    game::GameState,
    input::LineSource,
    leaderboard::{Leaderboard, Score},
    printer::{Message, Printer},
    random::RandomSource,
};

/// How a call to [`GameSession::run`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The secret was guessed; the score has been added to the leaderboard.
    Won(Score),
    /// The player quit or input ran out.
    Quit,
}

/// One player's sitting at the game: any number of play-throughs sharing a
/// player name and a leaderboard.
pub struct GameSession<I: LineSource, P: Printer, R: RandomSource> {
    chain: CommandChain,
    input: I,
    printer: P,
    rng: R,
    leaderboard: Leaderboard,
    player_name: Option<String>,
    state: GameState,
}

impl<I: LineSource, P: Printer, R: RandomSource> GameSession<I, P, R> {
    /// Wire a session and draw the first secret.
    pub fn new(chain: CommandChain, input: I, printer: P, mut rng: R) -> anyhow::Result<Self> {
        let state = GameState::random(&mut rng)?;
        Ok(Self {
            chain,
            input,
            printer,
            rng,
            leaderboard: Leaderboard::new(),
            player_name: None,
            state,
        })
    }

    /// Preset the player name so it is never asked for.
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = Some(name.into());
        self
    }

    /// Start a new play-through: fresh secret, counters and reveal mask cleared.
    /// The player name and leaderboard are kept.
    pub fn initialize(&mut self) -> anyhow::Result<()> {
        self.state = GameState::random(&mut self.rng)?;
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Play until the secret is guessed or the player leaves.
    ///
    /// Every line read counts as an attempt, whatever it turns out to be.
    pub fn run(&mut self) -> anyhow::Result<SessionEnd> {
        if self.state.is_solved() {
            self.initialize()?;
        }
        if self.player_name.is_none() {
            self.printer.print(Message::EnterName);
            let Some(line) = self.input.read_line()? else {
                return Ok(SessionEnd::Quit);
            };
            let name = line.trim();
            let name = if name.is_empty() { DEFAULT_PLAYER_NAME } else { name };
            self.player_name = Some(name.to_string());
        }
        self.greet();

        while !self.state.is_solved() {
            self.printer.print(Message::Prompt);
            let Some(line) = self.input.read_line()? else {
                log::info!("input closed, leaving the game");
                return Ok(SessionEnd::Quit);
            };
            self.state.record_attempt();

            let mut ctx = CommandContext {
                state: &mut self.state,
                rng: &mut self.rng,
                printer: &mut self.printer,
            };
            match self.chain.dispatch(&line, &mut ctx) {
                Outcome::Continue => {}
                Outcome::Restart => {
                    log::info!("player restarted the game");
                    self.initialize()?;
                    self.greet();
                }
                Outcome::Quit => {
                    log::info!("player quit");
                    return Ok(SessionEnd::Quit);
                }
            }
        }

        let player = self.player_name().unwrap_or(DEFAULT_PLAYER_NAME);
        let score = Score::new(player, self.state.guess_attempts());
        log::info!(
            "{} solved the secret in {} attempts ({} reveals)",
            score.player(),
            score.attempts(),
            self.state.cheat_attempts()
        );
        self.leaderboard.add(score.clone());
        self.printer.print(Message::Solved {
            player: score.player(),
            attempts: score.attempts(),
            cheats: self.state.cheat_attempts(),
        });
        self.printer.print(Message::Leaderboard(&self.leaderboard));
        Ok(SessionEnd::Won(score))
    }

    /// Keep running games until the player declines another one.
    pub fn play(&mut self) -> anyhow::Result<()> {
        loop {
            match self.run()? {
                SessionEnd::Quit => break,
                SessionEnd::Won(_) => {
                    self.printer.print(Message::PlayAgain);
                    match self.input.read_line()? {
                        Some(line) if line.trim().eq_ignore_ascii_case(RESTART_COMMAND) => {}
                        _ => break,
                    }
                }
            }
        }
        self.printer.print(Message::Goodbye);
        Ok(())
    }

    fn greet(&mut self) {
        self.printer.print(Message::Welcome);
        self.printer.print(Message::GameRules);
    }
}
