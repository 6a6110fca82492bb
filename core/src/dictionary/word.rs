//! dictionary/word.rs
//! Decoder word table: code -> reconstructed word.

use crate::constants::{Code, Symbol, EMPTY_CODE};

/// Immutable byte sequence standing for one code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Word {
    syms: Box<[Symbol]>,
}

impl Word {
    /// The zero-length word.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_slice(syms: &[Symbol]) -> Self {
        Self { syms: syms.into() }
    }

    /// A new word equal to `self` followed by `sym`.
    pub fn append(&self, sym: Symbol) -> Word {
        let mut syms = Vec::with_capacity(self.syms.len() + 1);
        syms.extend_from_slice(&self.syms);
        syms.push(sym);
        Word { syms: syms.into_boxed_slice() }
    }

    pub fn as_bytes(&self) -> &[Symbol] {
        &self.syms
    }

    pub fn len(&self) -> usize {
        self.syms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syms.is_empty()
    }
}

impl AsRef<[u8]> for Word {
    fn as_ref(&self) -> &[u8] {
        &self.syms
    }
}

/// Fixed-capacity table indexed by code. Slot `EMPTY_CODE` always holds the
/// empty word; `STOP_CODE` is never filled.
#[derive(Debug, Clone)]
pub struct WordTable {
    words: Vec<Option<Word>>,
    live: usize,
}

impl WordTable {
    /// Table for codes `[0, max_code)` with only `EMPTY_CODE` present.
    pub fn new(max_code: Code) -> Self {
        let mut words = vec![None; max_code as usize];
        words[EMPTY_CODE as usize] = Some(Word::empty());
        Self { words, live: 1 }
    }

    pub fn get(&self, code: Code) -> Option<&Word> {
        self.words.get(code as usize).and_then(Option::as_ref)
    }

    /// Store `word` at `code`, returning a reference to the stored copy.
    pub fn insert(&mut self, code: Code, word: Word) -> &Word {
        debug_assert!(code != EMPTY_CODE, "EMPTY_CODE is never reassigned");
        let slot = &mut self.words[code as usize];
        if slot.is_none() {
            self.live += 1;
        }
        slot.insert(word)
    }

    /// Drop every entry except `EMPTY_CODE`.
    pub fn reset(&mut self) {
        for (code, slot) in self.words.iter_mut().enumerate() {
            if code != EMPTY_CODE as usize {
                *slot = None;
            }
        }
        self.live = 1;
    }

    /// Live entries including `EMPTY_CODE`.
    pub fn len(&self) -> usize {
        self.live
    }

    /// True when only `EMPTY_CODE` is left.
    pub fn is_empty(&self) -> bool {
        self.live == 1
    }
}
