use crate::{
    code::Code,
    config::{MAX_CHEATS, SECRET_MAX, SECRET_MIN},
    counter::{self, BullsAndCows},
    random::RandomSource,
    reveal::RevealMask,
};

/// Result of a `help` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// A hidden slot at this position was disclosed.
    Revealed(usize),
    /// The cheat budget is spent; nothing changed.
    Exhausted,
}

/// Mutable state of a single play-through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: Code,
    mask: RevealMask,
    guess_attempts: u32,
    solved: bool,
}

impl GameState {
    /// Fresh state around a known secret.
    pub fn new(secret: Code) -> Self {
        Self {
            secret,
            mask: RevealMask::new(),
            guess_attempts: 0,
            solved: false,
        }
    }

    /// Fresh state with a secret drawn from `rng`.
    pub fn random(rng: &mut dyn RandomSource) -> anyhow::Result<Self> {
        let n = rng.generate(SECRET_MIN, SECRET_MAX);
        let secret = Code::from_number(n).map_err(|e| anyhow::anyhow!(e))?;
        log::trace!("secret drawn: {}", secret);
        Ok(Self::new(secret))
    }

    pub fn secret(&self) -> &Code {
        &self.secret
    }

    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    /// Input lines consumed during this play-through.
    pub fn guess_attempts(&self) -> u32 {
        self.guess_attempts
    }

    /// Successful `help` requests, always equal to the revealed slot count.
    pub fn cheat_attempts(&self) -> usize {
        self.mask.revealed()
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn record_attempt(&mut self) {
        self.guess_attempts = self.guess_attempts.saturating_add(1);
    }

    /// Score `guess` against the secret, marking the game solved on a full match.
    pub fn evaluate(&mut self, guess: &Code) -> BullsAndCows {
        let result = counter::count(&self.secret, guess);
        if result.is_solved() {
            self.solved = true;
        }
        result
    }

    /// Disclose one more secret digit unless the cheat budget is spent.
    pub fn reveal(&mut self, rng: &mut dyn RandomSource) -> RevealOutcome {
        if self.cheat_attempts() >= MAX_CHEATS {
            return RevealOutcome::Exhausted;
        }
        match self.mask.reveal_random(&self.secret, rng) {
            Some(pos) => RevealOutcome::Revealed(pos),
            None => RevealOutcome::Exhausted,
        }
    }
}
