//! Compact move identifier codec.
//!
//! A move is a single integer in `[0, 1225)` packing a source cell and a
//! 5x5 destination offset: `id = 25 * (7*y + x) + 5 * dv + du`, where
//! `(du, dv)` are the offset axes biased by +2. The dense encoding is what
//! makes the flat move table possible; all arithmetic lives here so the
//! rest of the engine never hand-computes it inline.

use crate::board::board_types::BOARD_SIZE;
use crate::errors::{EngineError, EngineResult};

/// Number of distinct move identifiers: 49 source cells x 25 offsets.
pub const MOVE_COUNT: usize = 1225;

/// Side length of the offset window. Offsets span `[-2, 2]` on both axes.
pub const OFFSET_RANGE: usize = 5;

/// A validated move identifier in `[0, 1225)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveId(u16);

impl MoveId {
    /// Encode a source cell and raw offset indices (`du`, `dv` in `[0, 5)`).
    ///
    /// Inputs are expected in-range by construction; this is enforced with
    /// debug assertions rather than a fallible return because the move
    /// generator is the only internal producer.
    #[inline]
    pub fn encode(x: usize, y: usize, du: usize, dv: usize) -> Self {
        debug_assert!(x < BOARD_SIZE && y < BOARD_SIZE);
        debug_assert!(du < OFFSET_RANGE && dv < OFFSET_RANGE);
        let piece = y * BOARD_SIZE + x;
        MoveId((piece * OFFSET_RANGE * OFFSET_RANGE + dv * OFFSET_RANGE + du) as u16)
    }

    /// Encode a move from explicit source and destination cells.
    ///
    /// Host-facing convenience; both cells must be on the board and within
    /// the 5x5 offset window of each other.
    pub fn from_cells(from_x: usize, from_y: usize, to_x: usize, to_y: usize) -> Option<Self> {
        if from_x >= BOARD_SIZE || from_y >= BOARD_SIZE || to_x >= BOARD_SIZE || to_y >= BOARD_SIZE
        {
            return None;
        }
        let du = to_x as i32 - from_x as i32 + 2;
        let dv = to_y as i32 - from_y as i32 + 2;
        if !(0..OFFSET_RANGE as i32).contains(&du) || !(0..OFFSET_RANGE as i32).contains(&dv) {
            return None;
        }
        Some(Self::encode(from_x, from_y, du as usize, dv as usize))
    }

    /// The raw dense index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Source cell coordinates `(x, y)`.
    #[inline]
    pub const fn source(self) -> (usize, usize) {
        let piece = self.0 as usize / (OFFSET_RANGE * OFFSET_RANGE);
        (piece % BOARD_SIZE, piece / BOARD_SIZE)
    }

    /// Signed destination offset `(dx, dy)`, each in `[-2, 2]`.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        let mv = self.0 as usize % (OFFSET_RANGE * OFFSET_RANGE);
        (
            (mv % OFFSET_RANGE) as i32 - 2,
            (mv / OFFSET_RANGE) as i32 - 2,
        )
    }

    /// Destination coordinates as raw signed values; may lie off the board
    /// for ids the generator would never mark legal.
    #[inline]
    pub const fn destination(self) -> (i32, i32) {
        let (x, y) = self.source();
        let (dx, dy) = self.offset();
        (x as i32 + dx, y as i32 + dy)
    }

    /// True when either offset axis has magnitude 2: the source cell is
    /// vacated. Adjacent (non-zero) offsets clone instead.
    #[inline]
    pub const fn is_jump(self) -> bool {
        let (dx, dy) = self.offset();
        dx.abs() == 2 || dy.abs() == 2
    }

    /// Iterator over every representable move id in ascending order.
    pub fn all() -> impl Iterator<Item = MoveId> {
        (0..MOVE_COUNT as u16).map(MoveId)
    }
}

impl TryFrom<u16> for MoveId {
    type Error = EngineError;

    /// Boundary guard for raw ids arriving from a host. Internal code
    /// constructs ids only through `encode`.
    fn try_from(raw: u16) -> EngineResult<Self> {
        if (raw as usize) < MOVE_COUNT {
            Ok(MoveId(raw))
        } else {
            Err(EngineError::MoveIdOutOfRange(raw))
        }
    }
}
