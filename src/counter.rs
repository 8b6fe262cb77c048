//! Bulls and cows scoring.

use crate::code::Code;
use crate::config::CODE_LEN;

/// Outcome of comparing a guess against the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BullsAndCows {
    /// Right digit in the right position.
    pub bulls: u8,
    /// Right digit in the wrong position.
    pub cows: u8,
}

impl BullsAndCows {
    /// `true` when every digit is a bull.
    pub fn is_solved(&self) -> bool {
        self.bulls as usize == CODE_LEN
    }
}

/// Count bulls and cows of `guess` against `secret`.
///
/// Cows are counted over the positions that are not bulls, per digit value
/// taking the smaller of the two remaining counts, so repeated digits are
/// never matched more than once.
pub fn count(secret: &Code, guess: &Code) -> BullsAndCows {
    let mut bulls = 0u8;
    let mut secret_left = [0u8; 10];
    let mut guess_left = [0u8; 10];

    for (&s, &g) in secret.digits().iter().zip(guess.digits().iter()) {
        if s == g {
            bulls += 1;
        } else {
            secret_left[s as usize] += 1;
            guess_left[g as usize] += 1;
        }
    }

    let cows = secret_left
        .iter()
        .zip(guess_left.iter())
        .map(|(&s, &g)| s.min(g))
        .sum();

    BullsAndCows { bulls, cows }
}
