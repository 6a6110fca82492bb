//! dictionary/mod.rs
//! The two views of one logical dictionary.
//!
//! - `Trie` (encoder): symbol sequence -> code, walked one symbol at a time.
//! - `WordTable` (decoder): code -> reconstructed word.
//!
//! Both start an epoch holding only `EMPTY_CODE`, gain exactly one entry per
//! pair, and drop everything but `EMPTY_CODE` when the policy resets.

pub mod trie;
pub mod word;

pub use trie::*;
pub use word::*;
