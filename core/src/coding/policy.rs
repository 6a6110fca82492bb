//! coding/policy.rs
//! Code numbering, width growth and dictionary reset, shared by both sides.

use crate::config::CodecConfig;
use crate::constants::{Code, START_CODE};

/// Bits needed to write `code`: `floor(log2(code)) + 1`.
#[inline]
pub fn bit_length(code: Code) -> u8 {
    (Code::BITS - code.leading_zeros()) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingState {
    /// Next entry will be coded with the given value.
    Filling(Code),
    /// `STOP_CODE` has been emitted or consumed.
    Done,
}

/// What happened when a pair was accounted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A code was assigned; numbering continues.
    Assigned(Code),
    /// The assigned code filled the dictionary; clear it and restart at
    /// `START_CODE`.
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodePolicy {
    max_code: Code,
    next_code: Code,
    resets: u64,
    done: bool,
}

impl CodePolicy {
    pub fn new(max_code: Code) -> Self {
        debug_assert!(max_code > START_CODE);
        Self {
            max_code,
            next_code: START_CODE,
            resets: 0,
            done: false,
        }
    }

    pub fn from_config(config: &CodecConfig) -> Self {
        Self::new(config.max_code)
    }

    /// Code the next dictionary entry will receive.
    #[inline]
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// Width of the code field for the pair about to be produced or consumed.
    #[inline]
    pub fn width(&self) -> u8 {
        bit_length(self.next_code)
    }

    /// Account for one pair: its entry takes `next_code`.
    pub fn advance(&mut self) -> Step {
        debug_assert!(!self.done, "advance after STOP_CODE");
        let assigned = self.next_code;
        self.next_code += 1;
        if self.next_code == self.max_code {
            self.next_code = START_CODE;
            self.resets += 1;
            return Step::Reset;
        }
        Step::Assigned(assigned)
    }

    /// Enter the terminal state.
    pub fn finish(&mut self) {
        self.done = true;
    }

    pub fn state(&self) -> CodingState {
        if self.done {
            CodingState::Done
        } else {
            CodingState::Filling(self.next_code)
        }
    }

    /// Resets performed so far.
    pub fn resets(&self) -> u64 {
        self.resets
    }
}
