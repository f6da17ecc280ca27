//! Scrollback log.
//!
//! Bounded line history shown next to the calculator. Oldest lines drop off
//! once the limit is reached.

use std::collections::VecDeque;

/// Bounded line buffer.
#[derive(Debug, Default)]
pub struct Scrollback {
    lines: VecDeque<String>,
    max: usize,
}

impl Scrollback {
    pub fn new(max: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            max,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.max {
            self.lines.pop_front();
        }
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    /// Returns the number of buffered lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing is buffered.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
