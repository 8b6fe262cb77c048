//! Partial disclosure of the secret through the `help` command.

use core::fmt;

use crate::code::Code;
use crate::config::{CODE_LEN, HIDDEN_SLOT};
use crate::random::RandomSource;

/// Per-position record of which secret digits were disclosed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevealMask {
    slots: [Option<u8>; CODE_LEN],
}

impl RevealMask {
    /// A mask with every slot hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots already revealed.
    pub fn revealed(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.revealed() == CODE_LEN
    }

    /// Reveal one hidden slot chosen uniformly at random, copying its digit
    /// from `secret`. Returns the revealed position, or `None` when nothing
    /// is left to reveal.
    pub fn reveal_random(&mut self, secret: &Code, rng: &mut dyn RandomSource) -> Option<usize> {
        let mut hidden = [0usize; CODE_LEN];
        let mut n = 0;
        for (i, slot) in self.slots.iter().enumerate() {
            if slot.is_none() {
                hidden[n] = i;
                n += 1;
            }
        }
        if n == 0 {
            return None;
        }
        let pick = rng.generate(0, (n - 1) as u32) as usize;
        let pos = hidden[pick.min(n - 1)];
        self.slots[pos] = secret.digit(pos);
        Some(pos)
    }
}

impl fmt::Display for RevealMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in self.slots {
            match slot {
                Some(d) => write!(f, "{}", d)?,
                None => write!(f, "{}", HIDDEN_SLOT)?,
            }
        }
        Ok(())
    }
}
