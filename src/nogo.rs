//! 9x9 NoGo board
//!
//! NoGo is played like Go except that capturing is forbidden: a placement is
//! illegal if it would leave any group, the mover's own or the opponent's,
//! without liberties. The player left with no legal placement loses.

use std::fmt;

use crate::game_state::{Board, Color, PlaceStatus, BOARD_SIZE, CELLS};

/// A 9x9 NoGo position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoGoBoard {
    stones: [Option<Color>; CELLS],
    side_to_move: Color,
    last_move: Option<usize>,
}

impl NoGoBoard {
    /// Creates an empty board with black to move
    pub fn new() -> Self {
        NoGoBoard {
            stones: [None; CELLS],
            side_to_move: Color::Black,
            last_move: None,
        }
    }

    /// Returns a copy of this board with `color` to move
    pub fn with_side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Returns the stone on `cell`, if any
    pub fn stone(&self, cell: usize) -> Option<Color> {
        self.stones.get(cell).copied().flatten()
    }

    /// Puts or removes a stone without any rule checks
    ///
    /// Intended for setting up positions; the turn and last move are left
    /// as they are.
    pub fn set_stone(&mut self, cell: usize, stone: Option<Color>) {
        if cell < CELLS {
            self.stones[cell] = stone;
        }
    }

    /// Returns the number of stones on the board
    pub fn stone_count(&self) -> usize {
        self.stones.iter().filter(|s| s.is_some()).count()
    }

    fn neighbors(cell: usize) -> impl Iterator<Item = usize> {
        let row = cell / BOARD_SIZE;
        let col = cell % BOARD_SIZE;
        let up = (row > 0).then(|| cell - BOARD_SIZE);
        let down = (row + 1 < BOARD_SIZE).then(|| cell + BOARD_SIZE);
        let left = (col > 0).then(|| cell - 1);
        let right = (col + 1 < BOARD_SIZE).then(|| cell + 1);
        [up, down, left, right].into_iter().flatten()
    }

    /// Flood-fills the group containing `cell` and reports whether it
    /// touches at least one empty point.
    fn has_liberty(&self, cell: usize) -> bool {
        let color = match self.stones[cell] {
            Some(color) => color,
            None => return true,
        };

        let mut seen = [false; CELLS];
        let mut stack = vec![cell];
        seen[cell] = true;

        while let Some(current) = stack.pop() {
            for next in Self::neighbors(current) {
                match self.stones[next] {
                    None => return true,
                    Some(c) if c == color && !seen[next] => {
                        seen[next] = true;
                        stack.push(next);
                    }
                    _ => {}
                }
            }
        }

        false
    }

    /// Checks the no-capture and no-suicide rules for a stone already
    /// sitting on `cell`.
    fn placement_keeps_liberties(&self, cell: usize) -> bool {
        let mover = self.stones[cell];
        let captures = Self::neighbors(cell).any(|n| {
            self.stones[n].is_some() && self.stones[n] != mover && !self.has_liberty(n)
        });
        !captures && self.has_liberty(cell)
    }
}

impl Default for NoGoBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl Board for NoGoBoard {
    fn place(&mut self, cell: usize) -> PlaceStatus {
        if cell >= CELLS {
            return PlaceStatus::OutOfRange;
        }
        if self.stones[cell].is_some() {
            return PlaceStatus::Occupied;
        }

        self.stones[cell] = Some(self.side_to_move);
        if !self.placement_keeps_liberties(cell) {
            self.stones[cell] = None;
            return PlaceStatus::Forbidden;
        }

        self.side_to_move = self.side_to_move.opponent();
        self.last_move = Some(cell);
        PlaceStatus::Legal
    }

    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    fn last_move(&self) -> Option<usize> {
        self.last_move
    }
}

impl fmt::Display for NoGoBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE {
            write!(f, "{:>2}", row + 1)?;
            for col in 0..BOARD_SIZE {
                let symbol = match self.stones[row * BOARD_SIZE + col] {
                    Some(Color::Black) => 'O',
                    Some(Color::White) => '@',
                    None => '.',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }

        write!(f, "{} to move", self.side_to_move)
    }
}
