use std::sync::Arc;

use crate::board::{Board, BoardSize, PlaceError};
use crate::player::Player;
use crate::position::Position;
use crate::r#move::Move;

/// One turn of a game: the board after the last move, the side to move, and
/// a link to the state the move was applied to.
///
/// States are never mutated once built. `apply_move` copies the board for a
/// play (pass and resign share it), so every state in the `previous` chain
/// stays a valid snapshot, safe to share across threads.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Arc<Board>,
    next_player: Player,
    previous: Option<Arc<GameState>>,
    last_move: Option<Move>,
}

impl GameState {
    /// Start a game on an empty board, Black to move. `size` is a single
    /// integer for a square board or a `(rows, cols)` pair.
    pub fn new_game(size: impl Into<BoardSize>) -> GameState {
        let size = size.into();
        GameState {
            board: Arc::new(Board::new(size.rows, size.cols)),
            next_player: Player::Black,
            previous: None,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn previous(&self) -> Option<&GameState> {
        self.previous.as_deref()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Apply a move for the side to move and return the resulting state.
    /// A play lands on a copy of the board; pass and resign share the
    /// current board unchanged. On a placement error (occupied or
    /// off-board point) no state changes hands.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, PlaceError> {
        let board = match mv {
            Move::Play(point) => {
                let mut next = Board::clone(&self.board);
                next.place_stone(self.next_player, point)?;
                Arc::new(next)
            }
            Move::Pass | Move::Resign => Arc::clone(&self.board),
        };
        Ok(GameState {
            board,
            next_player: self.next_player.other(),
            previous: Some(Arc::new(self.clone())),
            last_move: Some(mv),
        })
    }

    /// True after a resignation, or after two consecutive passes. This is
    /// the minimal move-sequence termination rule: no scoring, no
    /// positional-repetition detection.
    pub fn is_over(&self) -> bool {
        let last_move = match self.last_move {
            Some(mv) => mv,
            None => return false,
        };
        if last_move.is_resign() {
            return true;
        }
        match self.previous.as_ref().and_then(|prev| prev.last_move) {
            Some(second_last_move) => last_move.is_pass() && second_last_move.is_pass(),
            None => false,
        }
    }

    /// Would `mv`, played by `player`, leave its own string without
    /// liberties? Simulated on a throwaway copy of the current board, so
    /// captures are resolved first: a move that captures an opposing string
    /// gains the freed liberties and is never flagged here.
    ///
    /// Non-play moves, and plays that fail outright (occupied or off-board
    /// point), are not self-capture.
    pub fn is_move_self_capture(&self, player: Player, mv: Move) -> bool {
        let point = match mv {
            Move::Play(point) => point,
            Move::Pass | Move::Resign => return false,
        };
        let mut next_board = Board::clone(&self.board);
        if next_board.place_stone(player, point).is_err() {
            return false;
        }
        match next_board.get_string(point) {
            Some(new_string) => new_string.num_liberties() == 0,
            None => false,
        }
    }

    /// Full legality check for the side to move: the game is still running,
    /// the point is an empty on-grid point (for a play), and the play is
    /// not a self-capture. Ko is not tracked here.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        if self.is_over() {
            return false;
        }
        match mv {
            Move::Pass | Move::Resign => true,
            Move::Play(point) => {
                self.board.is_on_grid(point)
                    && self.board.get(point).is_none()
                    && !self.is_move_self_capture(self.next_player, mv)
            }
        }
    }

    /// The winner, if the game ended by resignation. Games ended by two
    /// passes need scoring, which lives outside this crate, so they report
    /// `None` here.
    pub fn winner(&self) -> Option<Player> {
        match self.last_move {
            // The resigner is the player who made the last move.
            Some(Move::Resign) => Some(self.next_player),
            _ => None,
        }
    }

    /// All moves so far in play order, reconstructed from the `previous`
    /// chain.
    pub fn move_history(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut state = self;
        while let Some(mv) = state.last_move {
            moves.push(mv);
            match state.previous.as_deref() {
                Some(prev) => state = prev,
                None => break,
            }
        }
        moves.reverse();
        moves
    }

    /// Convenience passthrough to [`Board::get`].
    pub fn get(&self, point: Position) -> Option<Player> {
        self.board.get(point)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GameState(next: {}, last: {:?}, over: {})\n{}",
            self.next_player,
            self.last_move,
            self.is_over(),
            self.board
        )
    }
}
