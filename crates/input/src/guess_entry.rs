//! Four-slot digit entry for Mastermind guesses.
//!
//! Typing a digit fills the current slot and advances to the next one (the
//! last slot keeps focus). Erasing clears the current slot, or steps back and
//! clears the previous one when the current slot is already empty.

use crate::types::{Code, Digit, CODE_LENGTH, MAX_DIGIT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessEntry {
    slots: [Option<Digit>; CODE_LENGTH],
    cursor: usize,
}

impl GuessEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<Digit>; CODE_LENGTH] {
        &self.slots
    }

    /// Index of the focused slot
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Type a digit into the focused slot
    ///
    /// Returns false (and changes nothing) for values above 9.
    pub fn input_digit(&mut self, digit: Digit) -> bool {
        if digit > MAX_DIGIT {
            return false;
        }
        self.slots[self.cursor] = Some(digit);
        if self.cursor + 1 < CODE_LENGTH {
            self.cursor += 1;
        }
        true
    }

    pub fn erase(&mut self) {
        if self.slots[self.cursor].is_some() {
            self.slots[self.cursor] = None;
        } else if self.cursor > 0 {
            self.cursor -= 1;
            self.slots[self.cursor] = None;
        }
    }

    /// Number of empty slots
    pub fn missing(&self) -> usize {
        self.slots.iter().filter(|s| s.is_none()).count()
    }

    /// The complete guess, or None while any slot is empty
    pub fn guess(&self) -> Option<Code> {
        let mut code = [0; CODE_LENGTH];
        for (out, slot) in code.iter_mut().zip(self.slots.iter()) {
            *out = (*slot)?;
        }
        Some(code)
    }

    /// Empty every slot and focus the first one
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
