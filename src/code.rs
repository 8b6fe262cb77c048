//! Fixed-length digit codes used for both the secret and the player's guesses.

use core::fmt;

use crate::common::CodeError;
use crate::config::CODE_LEN;

/// An ordered sequence of exactly [`CODE_LEN`] decimal digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Code {
    digits: [u8; CODE_LEN],
}

impl Code {
    /// Build a code from a number, left-padding with zeros.
    pub fn from_number(mut n: u32) -> Result<Self, CodeError> {
        let original = n;
        let mut digits = [0u8; CODE_LEN];
        for slot in digits.iter_mut().rev() {
            *slot = (n % 10) as u8;
            n /= 10;
        }
        if n != 0 {
            return Err(CodeError::OutOfRange(original));
        }
        Ok(Self { digits })
    }

    /// Parse a string made of exactly [`CODE_LEN`] ASCII digits.
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        if input.is_empty() {
            return Err(CodeError::Empty);
        }
        if let Some(ch) = input.chars().find(|c| !c.is_ascii_digit()) {
            return Err(CodeError::NotADigit(ch));
        }
        let len = input.len();
        if len != CODE_LEN {
            return Err(CodeError::WrongLength {
                expected: CODE_LEN,
                got: len,
            });
        }
        let mut digits = [0u8; CODE_LEN];
        for (slot, b) in digits.iter_mut().zip(input.bytes()) {
            *slot = b - b'0';
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8; CODE_LEN] {
        &self.digits
    }

    /// Digit at `index`, or `None` when out of range.
    pub fn digit(&self, index: usize) -> Option<u8> {
        self.digits.get(index).copied()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Code::parse(s)
    }
}
