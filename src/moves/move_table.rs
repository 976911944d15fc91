//! Dense legal-move set keyed by move id.
//!
//! One flag per representable move identifier. A table is produced fresh by
//! every generator call and threaded down the search stack by value; nothing
//! about it is shared or global, so concurrent searches can never alias each
//! other's scratch state.

use crate::moves::move_codec::{MoveId, MOVE_COUNT};

/// Fixed-size legal-move set over all 1225 move identifiers.
#[derive(Debug, Clone)]
pub struct MoveTable {
    flags: [bool; MOVE_COUNT],
}

impl Default for MoveTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTable {
    /// An all-false table (no legal moves recorded).
    #[inline]
    pub const fn new() -> Self {
        Self {
            flags: [false; MOVE_COUNT],
        }
    }

    #[inline]
    pub fn set(&mut self, id: MoveId) {
        self.flags[id.index()] = true;
    }

    #[inline]
    pub fn is_legal(&self, id: MoveId) -> bool {
        self.flags[id.index()]
    }

    /// True when at least one move is recorded.
    ///
    /// An all-false table is the terminal "mover is blocked" signal; callers
    /// must use this probe rather than scanning the flags themselves.
    #[inline]
    pub fn any_legal(&self) -> bool {
        self.flags.iter().any(|&legal| legal)
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.flags.iter().filter(|&&legal| legal).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.any_legal()
    }

    /// Recorded move ids in ascending id order.
    pub fn iter_legal(&self) -> impl Iterator<Item = MoveId> + '_ {
        MoveId::all().filter(move |id| self.flags[id.index()])
    }
}
