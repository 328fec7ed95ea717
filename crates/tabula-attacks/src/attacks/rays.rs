//! Pairwise square geometry: between and ray tables.
//!
//! Built once from the populated slider tables. `between[a][b]` holds the
//! open segment strictly between two aligned squares; `ray[a][b]` holds the
//! whole line through them, endpoints included, clipped to the board. Both
//! are empty when the squares share no rank, file, or diagonal.

use super::magics::SliderTables;
use crate::Bitboard;
use tabula_core::Square;

pub(crate) struct RelationTables {
    between: [[Bitboard; 64]; 64],
    ray: [[Bitboard; 64]; 64],
}

impl RelationTables {
    #[inline]
    pub(crate) fn between(&self, a: Square, b: Square) -> Bitboard {
        self.between[a.index() as usize][b.index() as usize]
    }

    #[inline]
    pub(crate) fn ray(&self, a: Square, b: Square) -> Bitboard {
        self.ray[a.index() as usize][b.index() as usize]
    }
}

/// Builds both 64×64 matrices. Alignment is decided by membership in the
/// empty-board rook reach (rank or file) or, failing that, the empty-board
/// bishop reach (diagonal); the matching kind's attack sets then carve out
/// the segment and the line.
pub(crate) fn build_relation_tables(sliders: &SliderTables) -> RelationTables {
    let mut between = [[Bitboard::EMPTY; 64]; 64];
    let mut ray = [[Bitboard::EMPTY; 64]; 64];

    for a in Bitboard::FULL {
        let rook_reach = sliders.rook_attacks(a, Bitboard::EMPTY);
        let bishop_reach = sliders.bishop_attacks(a, Bitboard::EMPTY);

        for b in Bitboard::FULL {
            let (ai, bi) = (a.index() as usize, b.index() as usize);
            let endpoints = Bitboard::from_square(a) | Bitboard::from_square(b);

            if rook_reach.contains(b) {
                between[ai][bi] = sliders.rook_attacks(a, Bitboard::from_square(b))
                    & sliders.rook_attacks(b, Bitboard::from_square(a));
                ray[ai][bi] =
                    endpoints | (rook_reach & sliders.rook_attacks(b, Bitboard::EMPTY));
            } else if bishop_reach.contains(b) {
                between[ai][bi] = sliders.bishop_attacks(a, Bitboard::from_square(b))
                    & sliders.bishop_attacks(b, Bitboard::from_square(a));
                ray[ai][bi] =
                    endpoints | (bishop_reach & sliders.bishop_attacks(b, Bitboard::EMPTY));
            }
        }
    }

    RelationTables { between, ray }
}
