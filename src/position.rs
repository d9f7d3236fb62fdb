/// A board coordinate, 1-indexed in both dimensions. `(1, 1)` is the
/// top-left point; row and column 0 are always off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Position { row, col }
    }

    /// The four orthogonally adjacent points, in up/down/left/right order.
    /// No bounds filtering happens here: some of the returned points may lie
    /// off the board, and it is the board's job to ignore those. Row 1's
    /// up-neighbor wraps to row 255, which no board contains.
    pub fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.row.wrapping_sub(1), self.col),
            Position::new(self.row.wrapping_add(1), self.col),
            Position::new(self.row, self.col.wrapping_sub(1)),
            Position::new(self.row, self.col.wrapping_add(1)),
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
