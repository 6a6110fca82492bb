//! constants.rs
//! Reserved codes, alphabet and buffer sizes shared by encoder and decoder.

/// A code names one dictionary entry. Codes never reach `max_code`, so the
/// default capacity (2^16) still fits the 16-bit widths on the wire.
pub type Code = u32;

/// One input byte.
pub type Symbol = u8;

/// Sentinel closing a compressed body. Never a dictionary entry.
pub const STOP_CODE: Code = 0;
/// Code of the zero-length word. Present in every epoch, never reassigned.
pub const EMPTY_CODE: Code = 1;
/// First code handed to a real dictionary entry.
pub const START_CODE: Code = 2;

/// Number of distinct symbols.
pub const ALPHABET: usize = 256;
/// Bits in one symbol field on the wire.
pub const SYMBOL_BITS: u8 = 8;

/// Default dictionary capacity (codes are drawn from `[START_CODE, 2^16)`).
pub const DEFAULT_MAX_CODE: Code = 1 << 16;
/// Smallest capacity that leaves room for at least two real entries.
pub const MIN_MAX_CODE: Code = 4;
/// Largest supported capacity.
pub const MAX_CODE_LIMIT: Code = 1 << 16;

/// Default size of the symbol and pair I/O buffers.
pub const BLOCK: usize = 4096;

/// File header magic. Written in the producing machine's byte order.
pub const MAGIC: u32 = 0x8BAD_BEEF;

/// Permission bits recorded when the source has none (e.g. stdin).
pub const DEFAULT_PROTECTION: u32 = 0o644;
