use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

use crate::group::GoString;
use crate::player::Player;
use crate::position::Position;

pub const STANDARD_ROWS: u8 = 19;
pub const STANDARD_COLS: u8 = 19;

/// Board dimensions. Converts from a single integer (square board) or an
/// explicit `(rows, cols)` pair, so `GameState::new_game(9)` and
/// `GameState::new_game((9, 13))` both work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardSize {
    pub rows: u8,
    pub cols: u8,
}

impl From<u8> for BoardSize {
    fn from(size: u8) -> Self {
        BoardSize {
            rows: size,
            cols: size,
        }
    }
}

impl From<(u8, u8)> for BoardSize {
    fn from((rows, cols): (u8, u8)) -> Self {
        BoardSize { rows, cols }
    }
}

/// Recoverable placement failures. These are reachable from untrusted move
/// input, so they are reported as values rather than asserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("point {0} is off the board")]
    OffBoard(Position),
    #[error("point {0} is already occupied")]
    Occupied(Position),
}

/// Index of a string in the board's arena. Every stone of a chain maps to
/// the same id, so a liberty update through one stone is seen through all
/// of them. Ids are never reused within a board's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct StringId(u32);

/// The mutable grid of stone strings. Occupied points map to an id into the
/// string arena; merged and captured strings leave tombstones behind.
#[derive(Clone, Debug)]
pub struct Board {
    num_rows: u8,
    num_cols: u8,
    grid: HashMap<Position, StringId>,
    strings: Vec<Option<GoString>>,
}

impl Board {
    pub fn new(num_rows: u8, num_cols: u8) -> Self {
        Board {
            num_rows,
            num_cols,
            grid: HashMap::new(),
            strings: Vec::new(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_ROWS, STANDARD_COLS)
    }

    pub fn num_rows(&self) -> u8 {
        self.num_rows
    }

    pub fn num_cols(&self) -> u8 {
        self.num_cols
    }

    pub fn is_on_grid(&self, point: Position) -> bool {
        (1..=self.num_rows).contains(&point.row) && (1..=self.num_cols).contains(&point.col)
    }

    /// The side occupying `point`, if any. Off-grid lookups simply miss.
    pub fn get(&self, point: Position) -> Option<Player> {
        self.grid.get(&point).map(|&id| self.string(id).color())
    }

    /// The string occupying `point`, if any.
    pub fn get_string(&self, point: Position) -> Option<&GoString> {
        self.grid.get(&point).map(|&id| self.string(id))
    }

    /// Place a stone for `player` at `point`, merging it into any adjacent
    /// same-colored strings and capturing any opposing strings this leaves
    /// without liberties.
    ///
    /// Captures are resolved last, after all merging and after the placed
    /// point has been removed from opposing liberty sets, so the
    /// zero-liberty check sees the final board.
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    pub fn place_stone(&mut self, player: Player, point: Position) -> Result<(), PlaceError> {
        if !self.is_on_grid(point) {
            return Err(PlaceError::OffBoard(point));
        }
        if self.grid.contains_key(&point) {
            return Err(PlaceError::Occupied(point));
        }

        let mut liberties: Vec<Position> = Vec::new();
        // Distinct by string identity: two neighbor stones of one existing
        // string must not be double-counted.
        let mut adjacent_same_color: Vec<StringId> = Vec::new();
        let mut adjacent_opposite_color: Vec<StringId> = Vec::new();

        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.grid.get(&neighbor) {
                None => liberties.push(neighbor),
                Some(&id) => {
                    if self.string(id).color() == player {
                        if !adjacent_same_color.contains(&id) {
                            adjacent_same_color.push(id);
                        }
                    } else if !adjacent_opposite_color.contains(&id) {
                        adjacent_opposite_color.push(id);
                    }
                }
            }
        }

        let mut new_string = GoString::new(player, [point], liberties);
        for id in adjacent_same_color {
            new_string = new_string.merged_with(self.take_string(id));
        }

        let new_id = self.insert_string(new_string);
        let stones: Vec<Position> = self.string(new_id).stones().iter().copied().collect();
        for stone in stones {
            self.grid.insert(stone, new_id);
        }

        for &id in &adjacent_opposite_color {
            self.string_mut(id).remove_liberty(point);
        }
        for id in adjacent_opposite_color {
            if self.string(id).num_liberties() == 0 {
                self.remove_string(id);
            }
        }

        Ok(())
    }

    /// Remove a captured string: clear its stones from the grid and hand
    /// each freed point back as a liberty to every other adjacent string
    /// (surviving opponents and the capturing string alike).
    #[cfg_attr(feature = "hotpath", hotpath::measure)]
    fn remove_string(&mut self, id: StringId) {
        let string = self.take_string(id);
        for &stone in string.stones() {
            for neighbor in stone.neighbors() {
                match self.grid.get(&neighbor) {
                    Some(&neighbor_id) if neighbor_id != id => {
                        self.string_mut(neighbor_id).add_liberty(stone);
                    }
                    _ => {}
                }
            }
            self.grid.remove(&stone);
        }
    }

    fn string(&self, id: StringId) -> &GoString {
        self.strings[id.0 as usize]
            .as_ref()
            .expect("grid points at a removed string")
    }

    fn string_mut(&mut self, id: StringId) -> &mut GoString {
        self.strings[id.0 as usize]
            .as_mut()
            .expect("grid points at a removed string")
    }

    fn take_string(&mut self, id: StringId) -> GoString {
        self.strings[id.0 as usize]
            .take()
            .expect("grid points at a removed string")
    }

    fn insert_string(&mut self, string: GoString) -> StringId {
        self.strings.push(Some(string));
        StringId(self.strings.len() as u32 - 1)
    }
}

/// Boards compare by position: dimensions plus the color occupying every
/// point. Arena layout and string ids are an implementation detail and two
/// boards reached by different move orders may disagree on them.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        if self.num_rows != other.num_rows || self.num_cols != other.num_cols {
            return false;
        }
        if self.grid.len() != other.grid.len() {
            return false;
        }
        self.grid.keys().all(|&point| self.get(point) == other.get(point))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 1..=self.num_rows {
            write!(f, "|")?;

            for col in 1..=self.num_cols {
                let c = if let Some(player) = self.get(Position::new(row, col)) {
                    player.to_char()
                } else {
                    '.'
                };

                write!(f, "{}", c)?;
                write!(f, "|")?;
            }

            writeln!(f)?;
        }

        // Column numbers
        write!(f, " ")?;
        for col in 1..=self.num_cols {
            write!(f, "{} ", col)?;
        }
        writeln!(f)?;

        Ok(())
    }
}
