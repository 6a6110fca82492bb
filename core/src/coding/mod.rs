//! coding/mod.rs
//! Adaptive coding control and the two run loops it drives.
//!
//! `CodePolicy` is the single source of truth for code numbering, code width
//! and reset timing. The encoder's trie walk and the decoder's table walk both
//! consult it after every pair, so their numbering cannot drift.

pub mod policy;
pub mod encode;
pub mod decode;

pub use policy::*;
pub use encode::*;
pub use decode::*;
