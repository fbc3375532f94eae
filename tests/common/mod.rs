#![allow(dead_code)]

use nogo_mcts::{Board, Color, PlaceStatus, CELLS};

/// Board where only the first `limit` cells are playable, each once
///
/// Colors alternate starting with black; the game ends when the playable
/// cells are all taken.
#[derive(Clone, Debug)]
pub struct StripBoard {
    limit: usize,
    filled: Vec<bool>,
    side: Color,
    last: Option<usize>,
    pub history: Vec<usize>,
}

impl StripBoard {
    pub fn new(limit: usize) -> Self {
        StripBoard {
            limit,
            filled: vec![false; CELLS],
            side: Color::Black,
            last: None,
            history: Vec::new(),
        }
    }

    pub fn with_side(mut self, side: Color) -> Self {
        self.side = side;
        self
    }
}

impl Board for StripBoard {
    fn place(&mut self, cell: usize) -> PlaceStatus {
        if cell >= CELLS {
            return PlaceStatus::OutOfRange;
        }
        if cell >= self.limit {
            return PlaceStatus::Forbidden;
        }
        if self.filled[cell] {
            return PlaceStatus::Occupied;
        }
        self.filled[cell] = true;
        self.history.push(cell);
        self.last = Some(cell);
        self.side = self.side.opponent();
        PlaceStatus::Legal
    }

    fn side_to_move(&self) -> Color {
        self.side
    }

    fn last_move(&self) -> Option<usize> {
        self.last
    }
}
