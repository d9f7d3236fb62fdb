pub mod board;
pub mod game;
pub mod group;
pub mod r#move;
pub mod player;
pub mod position;

#[cfg(feature = "serde")]
pub mod serde_support;

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn goban_strings(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use player::Player;
    use python_bindings::*;
    m.add_class::<PyBoard>()?;
    m.add_class::<PyGameState>()?;
    m.add_class::<PyMove>()?;
    m.add("BLACK", Player::Black as i8)?;
    m.add("WHITE", Player::White as i8)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::board::{Board, PlaceError};
    use crate::game::GameState;
    use crate::player::Player;
    use crate::position::Position;
    use crate::r#move::Move;

    fn place_err(e: PlaceError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    }

    fn player_arg(i: i8) -> PyResult<Player> {
        Player::from_int(i).ok_or_else(|| {
            PyErr::new::<pyo3::exceptions::PyValueError, _>("Player must be BLACK or WHITE")
        })
    }

    fn check_dims(rows: usize, cols: usize) -> PyResult<()> {
        if !(2..=25).contains(&rows) || !(2..=25).contains(&cols) {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Board dimensions must be between 2 and 25",
            ));
        }
        Ok(())
    }

    #[pyclass(name = "Board")]
    #[derive(Clone)]
    pub struct PyBoard {
        board: Board,
    }

    #[pymethods]
    impl PyBoard {
        #[new]
        pub fn new(num_rows: usize, num_cols: usize) -> PyResult<Self> {
            check_dims(num_rows, num_cols)?;
            Ok(PyBoard {
                board: Board::new(num_rows as u8, num_cols as u8),
            })
        }

        #[staticmethod]
        pub fn standard() -> Self {
            PyBoard {
                board: Board::standard(),
            }
        }

        pub fn num_rows(&self) -> usize {
            self.board.num_rows() as usize
        }

        pub fn num_cols(&self) -> usize {
            self.board.num_cols() as usize
        }

        pub fn is_on_grid(&self, row: usize, col: usize) -> bool {
            self.board.is_on_grid(Position::new(row as u8, col as u8))
        }

        pub fn get(&self, row: usize, col: usize) -> Option<i8> {
            self.board
                .get(Position::new(row as u8, col as u8))
                .map(|p| p as i8)
        }

        pub fn place_stone(&mut self, player: i8, row: usize, col: usize) -> PyResult<()> {
            let player = player_arg(player)?;
            self.board
                .place_stone(player, Position::new(row as u8, col as u8))
                .map_err(place_err)
        }

        pub fn num_liberties(&self, row: usize, col: usize) -> Option<usize> {
            self.board
                .get_string(Position::new(row as u8, col as u8))
                .map(|s| s.num_liberties())
        }

        pub fn __str__(&self) -> String {
            self.board.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Board(num_rows={}, num_cols={})",
                self.board.num_rows(),
                self.board.num_cols()
            )
        }
    }

    #[pyclass(name = "GameState")]
    #[derive(Clone)]
    pub struct PyGameState {
        state: GameState,
    }

    #[pymethods]
    impl PyGameState {
        #[staticmethod]
        pub fn new_game(num_rows: usize, num_cols: usize) -> PyResult<Self> {
            check_dims(num_rows, num_cols)?;
            Ok(PyGameState {
                state: GameState::new_game((num_rows as u8, num_cols as u8)),
            })
        }

        pub fn apply_move(&self, move_: &PyMove) -> PyResult<PyGameState> {
            let state = self.state.apply_move(move_.move_).map_err(place_err)?;
            Ok(PyGameState { state })
        }

        pub fn is_over(&self) -> bool {
            self.state.is_over()
        }

        pub fn is_move_self_capture(&self, player: i8, move_: &PyMove) -> PyResult<bool> {
            let player = player_arg(player)?;
            Ok(self.state.is_move_self_capture(player, move_.move_))
        }

        pub fn is_legal_move(&self, move_: &PyMove) -> bool {
            self.state.is_legal_move(move_.move_)
        }

        pub fn next_player(&self) -> i8 {
            self.state.next_player() as i8
        }

        pub fn winner(&self) -> Option<i8> {
            self.state.winner().map(|p| p as i8)
        }

        pub fn get(&self, row: usize, col: usize) -> Option<i8> {
            self.state.get(Position::new(row as u8, col as u8)).map(|p| p as i8)
        }

        pub fn last_move(&self) -> Option<PyMove> {
            self.state.last_move().map(|move_| PyMove { move_ })
        }

        pub fn previous(&self) -> Option<PyGameState> {
            self.state.previous().map(|state| PyGameState {
                state: state.clone(),
            })
        }

        pub fn move_history(&self) -> Vec<PyMove> {
            self.state
                .move_history()
                .into_iter()
                .map(|move_| PyMove { move_ })
                .collect()
        }

        pub fn __str__(&self) -> String {
            self.state.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "GameState(next_player={:?}, over={})",
                self.state.next_player(),
                self.state.is_over()
            )
        }
    }

    #[pyclass(name = "Move")]
    #[derive(Clone, Debug)]
    pub struct PyMove {
        pub(crate) move_: Move,
    }

    #[pymethods]
    impl PyMove {
        #[staticmethod]
        pub fn play(row: usize, col: usize) -> Self {
            PyMove {
                move_: Move::play(Position::new(row as u8, col as u8)),
            }
        }

        #[staticmethod]
        pub fn pass_move() -> Self {
            PyMove { move_: Move::pass() }
        }

        #[staticmethod]
        pub fn resign() -> Self {
            PyMove {
                move_: Move::resign(),
            }
        }

        pub fn is_play(&self) -> bool {
            self.move_.is_play()
        }

        pub fn is_pass(&self) -> bool {
            self.move_.is_pass()
        }

        pub fn is_resign(&self) -> bool {
            self.move_.is_resign()
        }

        pub fn row(&self) -> Option<usize> {
            self.move_.position().map(|p| p.row as usize)
        }

        pub fn col(&self) -> Option<usize> {
            self.move_.position().map(|p| p.col as usize)
        }

        pub fn __str__(&self) -> String {
            self.move_.to_string()
        }

        pub fn __repr__(&self) -> String {
            match &self.move_ {
                Move::Play(point) => format!("Move.play({}, {})", point.row, point.col),
                Move::Pass => "Move.pass_move()".to_string(),
                Move::Resign => "Move.resign()".to_string(),
            }
        }

        pub fn __eq__(&self, other: &PyMove) -> bool {
            self.move_ == other.move_
        }

        pub fn __hash__(&self) -> u64 {
            use std::hash::{Hash, Hasher};
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            self.move_.hash(&mut hasher);
            hasher.finish()
        }
    }
}
