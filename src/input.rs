//! Line-oriented input sources.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};

/// Supplies one line of player input at a time.
pub trait LineSource {
    /// Next line without its trailing newline, or `None` at end of input.
    fn read_line(&mut self) -> anyhow::Result<Option<String>>;
}

/// Pre-recorded input, useful for scripted games.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            lines: lines.into_iter().map(|l| l.as_ref().to_string()).collect(),
        }
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

#[cfg(feature = "std")]
pub use reader::LineReader;

#[cfg(feature = "std")]
mod reader {
    use std::io::BufRead;

    use super::*;

    /// [`LineSource`] over any buffered reader, typically stdin.
    pub struct LineReader<B: BufRead> {
        inner: B,
    }

    impl<B: BufRead> LineReader<B> {
        pub fn new(inner: B) -> Self {
            Self { inner }
        }
    }

    impl LineReader<std::io::StdinLock<'static>> {
        pub fn stdin() -> Self {
            Self::new(std::io::stdin().lock())
        }
    }

    impl<B: BufRead> LineSource for LineReader<B> {
        fn read_line(&mut self) -> anyhow::Result<Option<String>> {
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim_end_matches(['\n', '\r']);
            Ok(Some(trimmed.to_string()))
        }
    }
}
