//! Attack table construction and lookup for all piece kinds.
//!
//! Everything here is precomputed exactly once, in dependency order: the
//! magic slider tables first, then the leaper tables, then the pairwise
//! relation tables (which read the slider tables). After construction the
//! bundle is immutable and every lookup is a pure read, safe to share
//! across threads without locking.

mod magics;
mod rays;
mod sliding;

use std::sync::OnceLock;

use thiserror::Error;

use crate::Bitboard;
use magics::SliderTables;
use rays::RelationTables;
use sliding::{
    sliding_attacks, BLACK_PAWN_DELTAS, KING_DELTAS, KNIGHT_DELTAS, WHITE_PAWN_DELTAS,
};
use tabula_core::{Color, Square};

pub use magics::MagicEntry;

/// Errors raised while populating the shared attack table.
///
/// A collision means a supplied magic factor hashed two occupancy subsets
/// with different attack sets to the same slot. The table cannot be
/// trusted, so construction refuses to finish.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("magic factor {factor:#018x} collides on square {square}")]
    MagicCollision { square: Square, factor: u64 },
}

/// The complete precomputed table bundle.
///
/// Normally reached through [`tables`]; building a separate instance is
/// only useful for validating constants in isolation.
pub struct Tables {
    sliders: SliderTables,
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    relations: RelationTables,
}

impl Tables {
    /// Builds every table, failing on the first magic collision.
    pub fn build() -> Result<Tables, TableError> {
        let sliders = magics::build_slider_tables()?;
        let relations = rays::build_relation_tables(&sliders);
        Ok(Tables {
            sliders,
            knight: leaper_table(&KNIGHT_DELTAS),
            king: leaper_table(&KING_DELTAS),
            pawn: [
                leaper_table(&WHITE_PAWN_DELTAS),
                leaper_table(&BLACK_PAWN_DELTAS),
            ],
            relations,
        })
    }

    /// Returns bishop attacks from `sq` given the occupied squares.
    #[inline]
    pub fn bishop_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders.bishop_attacks(sq, occupied)
    }

    /// Returns rook attacks from `sq` given the occupied squares.
    #[inline]
    pub fn rook_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.sliders.rook_attacks(sq, occupied)
    }

    /// Returns queen attacks from `sq` given the occupied squares.
    ///
    /// The bishop and rook sets are disjoint (no square is both diagonal
    /// and orthogonal to `sq`), so xor and union coincide.
    #[inline]
    pub fn queen_attacks(&self, sq: Square, occupied: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupied) ^ self.rook_attacks(sq, occupied)
    }

    /// Returns knight attacks from `sq`.
    #[inline]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        self.knight[sq.index() as usize]
    }

    /// Returns king attacks from `sq`.
    #[inline]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        self.king[sq.index() as usize]
    }

    /// Returns the capture squares of a pawn of `color` on `sq`.
    #[inline]
    pub fn pawn_attacks(&self, sq: Square, color: Color) -> Bitboard {
        self.pawn[color.index()][sq.index() as usize]
    }

    /// Returns the squares strictly between `a` and `b`, or the empty set
    /// when they share no rank, file, or diagonal.
    #[inline]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        self.relations.between(a, b)
    }

    /// Returns the full line through `a` and `b` (endpoints included,
    /// clipped to the board), or the empty set when they are not aligned.
    #[inline]
    pub fn ray(&self, a: Square, b: Square) -> Bitboard {
        self.relations.ray(a, b)
    }

    /// Returns true if `c` lies on the line through `a` and `b`.
    #[inline]
    pub fn aligned(&self, a: Square, b: Square, c: Square) -> bool {
        self.ray(a, b).contains(c)
    }

    /// Returns the hash descriptor for bishop lookups on `sq`.
    #[inline]
    pub fn bishop_magic(&self, sq: Square) -> &MagicEntry {
        self.sliders.bishop_magic(sq)
    }

    /// Returns the hash descriptor for rook lookups on `sq`.
    #[inline]
    pub fn rook_magic(&self, sq: Square) -> &MagicEntry {
        self.sliders.rook_magic(sq)
    }
}

/// One table lookup per square: the generator with a fully occupied board
/// stops every ray after its first step, which is exactly a leaper.
fn leaper_table(deltas: &[i8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for sq in Bitboard::FULL {
        table[sq.index() as usize] = sliding_attacks(sq, Bitboard::FULL, deltas);
    }
    table
}

static TABLES: OnceLock<Tables> = OnceLock::new();

/// Returns the process-wide table bundle, building it on first use.
///
/// A malformed magic constant is a fatal startup failure, not a per-call
/// error: by the time attacks are queried the tables must be trustworthy.
pub fn tables() -> &'static Tables {
    TABLES.get_or_init(|| Tables::build().expect("baked-in magic factors hash collision-free"))
}

/// Returns bishop attacks from `sq` given the occupied squares.
#[inline]
pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    tables().bishop_attacks(sq, occupied)
}

/// Returns rook attacks from `sq` given the occupied squares.
#[inline]
pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    tables().rook_attacks(sq, occupied)
}

/// Returns queen attacks from `sq` given the occupied squares.
#[inline]
pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    tables().queen_attacks(sq, occupied)
}

/// Returns knight attacks from `sq`.
#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    tables().knight_attacks(sq)
}

/// Returns king attacks from `sq`.
#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    tables().king_attacks(sq)
}

/// Returns the capture squares of a pawn of `color` on `sq`.
#[inline]
pub fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    tables().pawn_attacks(sq, color)
}

/// Returns the squares strictly between `a` and `b`.
#[inline]
pub fn between(a: Square, b: Square) -> Bitboard {
    tables().between(a, b)
}

/// Returns the full line through `a` and `b`, clipped to the board.
#[inline]
pub fn ray(a: Square, b: Square) -> Bitboard {
    tables().ray(a, b)
}

/// Returns true if `c` lies on the line through `a` and `b`.
#[inline]
pub fn aligned(a: Square, b: Square, c: Square) -> bool {
    tables().aligned(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{File, Rank};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    #[test]
    fn knight_attacks_center() {
        assert_eq!(knight_attacks(sq("d4")).count(), 8);
    }

    #[test]
    fn knight_attacks_corner() {
        let attacks = knight_attacks(Square::A1);
        assert_eq!(attacks.count(), 2);
        assert!(attacks.contains(sq("b3")));
        assert!(attacks.contains(sq("c2")));
    }

    #[test]
    fn knight_attacks_edge() {
        assert_eq!(knight_attacks(sq("a4")).count(), 4);
    }

    #[test]
    fn king_attacks_center() {
        assert_eq!(king_attacks(sq("d4")).count(), 8);
    }

    #[test]
    fn king_attacks_corner() {
        let attacks = king_attacks(Square::A1);
        assert_eq!(attacks.count(), 3);
        assert!(attacks.contains(Square::B1));
        assert!(attacks.contains(sq("a2")));
        assert!(attacks.contains(sq("b2")));
    }

    #[test]
    fn pawn_attacks_are_color_asymmetric() {
        let white = pawn_attacks(sq("d4"), Color::White);
        assert_eq!(white.count(), 2);
        assert!(white.contains(sq("c5")));
        assert!(white.contains(sq("e5")));

        let black = pawn_attacks(sq("d4"), Color::Black);
        assert_eq!(black.count(), 2);
        assert!(black.contains(sq("c3")));
        assert!(black.contains(sq("e3")));
    }

    #[test]
    fn pawn_attacks_edge_file() {
        let white = pawn_attacks(sq("a4"), Color::White);
        assert_eq!(white.count(), 1);
        assert!(white.contains(sq("b5")));
    }

    #[test]
    fn pawn_attacks_last_rank() {
        assert!(pawn_attacks(Square::D8, Color::White).is_empty());
        assert!(pawn_attacks(Square::D1, Color::Black).is_empty());
    }

    #[test]
    fn leaper_tables_are_single_delta_steps() {
        // A leaper reaches each in-range, non-wrapping delta target exactly
        // once; no occupancy can change that
        fn single_steps(sq: Square, deltas: &[i8]) -> Bitboard {
            let mut expected = Bitboard::EMPTY;
            for &delta in deltas {
                match sq.offset(delta) {
                    Some(to) if sq.distance(to) <= 2 => expected.set(to),
                    _ => {}
                }
            }
            expected
        }

        for sq in Bitboard::FULL {
            assert_eq!(
                knight_attacks(sq),
                single_steps(sq, &sliding::KNIGHT_DELTAS),
                "knight on {sq}"
            );
            assert_eq!(
                king_attacks(sq),
                single_steps(sq, &sliding::KING_DELTAS),
                "king on {sq}"
            );
            assert_eq!(
                pawn_attacks(sq, Color::White),
                single_steps(sq, &sliding::WHITE_PAWN_DELTAS),
                "white pawn on {sq}"
            );
            assert_eq!(
                pawn_attacks(sq, Color::Black),
                single_steps(sq, &sliding::BLACK_PAWN_DELTAS),
                "black pawn on {sq}"
            );
        }
    }

    #[test]
    fn rook_blocked_on_the_file() {
        let attacks = rook_attacks(Square::A1, Bitboard::from_square(sq("a2")));
        let mut expected = Bitboard::from_rank(Rank::R1);
        expected.clear(Square::A1);
        expected.set(sq("a2"));
        assert_eq!(attacks, expected);
    }

    #[test]
    fn bishop_center_reach() {
        assert_eq!(bishop_attacks(sq("d4"), Bitboard::EMPTY).count(), 13);
    }

    #[test]
    fn queen_combines_both_sliders() {
        let occupied = Bitboard::EMPTY;
        let d4 = sq("d4");
        assert_eq!(queen_attacks(d4, occupied).count(), 27);
        assert_eq!(
            queen_attacks(d4, occupied),
            bishop_attacks(d4, occupied) | rook_attacks(d4, occupied)
        );
    }

    #[test]
    fn bishop_and_rook_attacks_are_disjoint() {
        // No square is simultaneously diagonal and orthogonal to another,
        // which is what makes the xor in queen_attacks safe
        let occupancies = [
            Bitboard::EMPTY,
            Bitboard::FULL,
            Bitboard::CORNERS,
            Bitboard::new(0x5555_5555_5555_5555),
            Bitboard::new(0x1234_5678_9abc_def0),
        ];
        for sq in Bitboard::FULL {
            for &occupied in &occupancies {
                let bishop = bishop_attacks(sq, occupied);
                let rook = rook_attacks(sq, occupied);
                assert!((bishop & rook).is_empty(), "overlap on {sq}");
                assert_eq!(queen_attacks(sq, occupied), bishop | rook);
            }
        }
    }

    #[test]
    fn slider_scenarios_with_blockers() {
        let d4 = sq("d4");
        let blockers = Bitboard::from_square(sq("e5")) | Bitboard::from_square(sq("c3"));
        let attacks = bishop_attacks(d4, blockers);
        assert!(attacks.contains(sq("e5")));
        assert!(attacks.contains(sq("c3")));
        assert!(!attacks.contains(sq("f6")));
        assert!(!attacks.contains(sq("b2")));

        let blockers = Bitboard::from_square(sq("d6"));
        let attacks = rook_attacks(d4, blockers);
        assert!(attacks.contains(sq("d6")));
        assert!(!attacks.contains(sq("d7")));
    }

    #[test]
    fn build_is_repeatable() {
        // An independent bundle agrees with the shared one
        let fresh = Tables::build().unwrap();
        let occupied = Bitboard::new(0x00aa_5500_aa55_00aa);
        for name in ["a1", "e4", "h8"] {
            let square = sq(name);
            assert_eq!(
                fresh.rook_attacks(square, occupied),
                rook_attacks(square, occupied)
            );
            assert_eq!(
                fresh.bishop_attacks(square, occupied),
                bishop_attacks(square, occupied)
            );
        }
    }

    #[test]
    fn magic_entries_are_exposed_per_square() {
        let entry = tables().rook_magic(Square::A1);
        assert_eq!(entry.mask.count(), 12);
        let entry = tables().bishop_magic(Square::new(File::D, Rank::R4));
        assert_eq!(entry.mask.count(), 9);
    }
}
