use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::game::GameState;
use crate::position::Position;
use crate::r#move::Move;

// A game serializes as "RxC:moves". The board itself is never written out:
// the move sequence plus the dimensions reconstruct it exactly on replay.

fn move_token(mv: &Move) -> String {
    match mv {
        Move::Play(point) => format!("{},{}", point.row, point.col),
        Move::Pass => "pass".to_string(),
        Move::Resign => "resign".to_string(),
    }
}

fn parse_move_token<E: serde::de::Error>(token: &str) -> Result<Move, E> {
    let token = token.trim();
    match token {
        "pass" => return Ok(Move::pass()),
        "resign" => return Ok(Move::resign()),
        _ => {}
    }

    let (row, col) = token
        .split_once(',')
        .ok_or_else(|| E::custom(format!("Invalid move format: {}", token)))?;
    let row: u8 = row
        .trim()
        .parse()
        .map_err(|e| E::custom(format!("Invalid row: {}", e)))?;
    let col: u8 = col
        .trim()
        .parse()
        .map_err(|e| E::custom(format!("Invalid column: {}", e)))?;

    Ok(Move::play(Position::new(row, col)))
}

impl Serialize for GameState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let moves: Vec<String> = self.move_history().iter().map(move_token).collect();
        let full = format!(
            "{}x{}:{}",
            self.board().num_rows(),
            self.board().num_cols(),
            moves.join(";")
        );
        serializer.serialize_str(&full)
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;

        let (dims, moves_str) = s
            .split_once(':')
            .ok_or_else(|| serde::de::Error::custom("Missing dimensions prefix"))?;
        let (rows, cols) = dims
            .split_once('x')
            .ok_or_else(|| serde::de::Error::custom("Invalid dimensions format"))?;
        let rows: u8 = rows
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid row count: {}", e)))?;
        let cols: u8 = cols
            .parse()
            .map_err(|e| serde::de::Error::custom(format!("Invalid column count: {}", e)))?;

        let mut state = GameState::new_game((rows, cols));

        if moves_str.is_empty() {
            return Ok(state);
        }

        for token in moves_str.split(';') {
            let mv = parse_move_token::<D::Error>(token)?;
            state = state
                .apply_move(mv)
                .map_err(|e| serde::de::Error::custom(format!("Invalid move: {}", e)))?;
        }

        Ok(state)
    }
}

impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&move_token(self))
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_move_token(&s)
    }
}
