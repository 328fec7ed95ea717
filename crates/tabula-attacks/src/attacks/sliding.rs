//! Ray-casting attack generation.
//!
//! The slow reference generator every table in this crate is populated
//! against. It walks linear-index deltas one step at a time, so it covers
//! sliders (partial occupancy) and leapers (full-board occupancy, which
//! stops every ray after its first step) with the same code.

use crate::Bitboard;
use tabula_core::Square;

pub(crate) const ROOK_DELTAS: [i8; 4] = [8, 1, -8, -1];
pub(crate) const BISHOP_DELTAS: [i8; 4] = [9, 7, -9, -7];
pub(crate) const KING_DELTAS: [i8; 8] = [9, 8, 7, 1, -9, -8, -7, -1];
pub(crate) const KNIGHT_DELTAS: [i8; 8] = [17, 15, 10, 6, -17, -15, -10, -6];
pub(crate) const WHITE_PAWN_DELTAS: [i8; 2] = [7, 9];
pub(crate) const BLACK_PAWN_DELTAS: [i8; 2] = [-7, -9];

/// Computes the squares reachable from `sq` along each delta.
///
/// Each delta is walked independently: the ray stops when a step leaves the
/// 0-63 range, wraps around a board edge, or lands on an occupied square.
/// The first occupied square is included (attacks model capture of the
/// blocker), then the ray stops. Results are unioned across deltas.
///
/// The wrap check rejects a step whose Chebyshev span exceeds 2. Legitimate
/// steps from the delta sets above span at most 2 (the knight), while any
/// edge wrap they can produce jumps most of the board width. The bound has
/// not been validated for other delta sets.
pub(crate) fn sliding_attacks(sq: Square, occupied: Bitboard, deltas: &[i8]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;

    for &delta in deltas {
        let mut previous = sq;
        while let Some(current) = previous.offset(delta) {
            if previous.distance(current) > 2 {
                break;
            }
            attacks.set(current);
            if occupied.contains(current) {
                break;
            }
            previous = current;
        }
    }

    attacks
}
