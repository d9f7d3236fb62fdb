use crate::position::Position;

/// A single action by the side to move: place a stone, pass, or resign.
/// Being an enum, exactly one alternative is active by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(Position),
    Pass,
    Resign,
}

impl Move {
    pub fn play(position: Position) -> Self {
        Move::Play(position)
    }

    pub fn pass() -> Self {
        Move::Pass
    }

    pub fn resign() -> Self {
        Move::Resign
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }

    pub fn position(&self) -> Option<Position> {
        match self {
            Move::Play(position) => Some(*position),
            Move::Pass | Move::Resign => None,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Play(position) => write!(f, "Play{}", position),
            Move::Pass => write!(f, "Pass"),
            Move::Resign => write!(f, "Resign"),
        }
    }
}
