use std::collections::HashSet;

use crate::player::Player;
use crate::position::Position;

/// A maximal chain of same-colored stones, together with its liberties
/// (the empty on-board points adjacent to any stone of the chain).
///
/// Connectivity and maximality are invariants maintained by the board, not
/// checked here; a string only guarantees that its liberty set never
/// overlaps its stone set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoString {
    color: Player,
    stones: HashSet<Position>,
    liberties: HashSet<Position>,
}

impl GoString {
    pub fn new(
        color: Player,
        stones: impl IntoIterator<Item = Position>,
        liberties: impl IntoIterator<Item = Position>,
    ) -> Self {
        let stones: HashSet<Position> = stones.into_iter().collect();
        let liberties = liberties
            .into_iter()
            .filter(|p| !stones.contains(p))
            .collect();
        GoString {
            color,
            stones,
            liberties,
        }
    }

    pub fn color(&self) -> Player {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Position> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Position> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn add_liberty(&mut self, point: Position) {
        self.liberties.insert(point);
    }

    pub fn remove_liberty(&mut self, point: Position) {
        self.liberties.remove(&point);
    }

    /// Combine this string with an adjacent same-colored one. The merged
    /// liberty set is the union of both minus the combined stones, so a
    /// string never counts its own occupied points as liberties.
    ///
    /// Merging strings of different colors is a caller bug and panics.
    pub fn merged_with(self, other: GoString) -> GoString {
        assert_eq!(
            self.color, other.color,
            "cannot merge strings of different colors"
        );
        let mut stones = self.stones;
        stones.extend(other.stones);
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        GoString {
            color: self.color,
            stones,
            liberties,
        }
    }
}
