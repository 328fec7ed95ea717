//! Bit-set primitives and precomputed attack tables for an 8×8 board.
//!
//! This crate provides:
//! - [`Bitboard`] - 64-bit set-of-squares representation with efficient
//!   operations
//! - Magic-hashed O(1) sliding attack lookups ([`bishop_attacks`],
//!   [`rook_attacks`], [`queen_attacks`])
//! - Precomputed leaper tables ([`knight_attacks`], [`king_attacks`],
//!   [`pawn_attacks`])
//! - Pairwise square geometry ([`between`], [`ray`], [`aligned`])
//!
//! # Architecture
//!
//! Every table is built exactly once, on first use, from a single slow
//! ray-casting generator, then read without locking for the life of the
//! process. Sliding lookups hash the masked occupancy with a per-square
//! multiplier into one shared flat table; leaper and relation tables are
//! plain per-square arrays.
//!
//! # Example
//!
//! ```
//! use tabula_attacks::{rook_attacks, Bitboard};
//! use tabula_core::{File, Rank, Square};
//!
//! let blocker = Square::new(File::A, Rank::R2);
//! let attacks = rook_attacks(Square::A1, Bitboard::from_square(blocker));
//! assert!(attacks.contains(blocker));
//! assert!(!attacks.contains(Square::new(File::A, Rank::R3)));
//! ```

pub mod attacks;
mod bitboard;

pub use attacks::{
    aligned, between, bishop_attacks, king_attacks, knight_attacks, pawn_attacks, queen_attacks,
    ray, rook_attacks, tables, MagicEntry, TableError, Tables,
};
pub use bitboard::Bitboard;
