//! Board coordinate types for an 8×8 grid.
//!
//! This crate provides the value types the bit-set engine is built on:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`Color`] for the two players
//!
//! Squares use little-endian rank-file indexing (a1 = 0, b1 = 1, ...,
//! h8 = 63); every consumer of these types shares that convention.

mod color;
mod square;

pub use color::Color;
pub use square::{File, Rank, Square};
