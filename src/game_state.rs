//! Traits and value types describing the board the search plays on.
//!
//! The engine never inspects the rules of the game directly. It only asks a
//! [`Board`] to attempt placements, and reads back whose turn it is and which
//! cell produced the current position.

use std::fmt;

/// Number of cells on the 9x9 grid
pub const BOARD_SIZE: usize = 9;

/// Total number of cells the search enumerates
pub const CELLS: usize = BOARD_SIZE * BOARD_SIZE;

/// Stone color, also used to name the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Returns the other color
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// Outcome of attempting a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceStatus {
    /// The stone was placed and the turn passed to the opponent
    Legal,
    /// The cell index is not on the board
    OutOfRange,
    /// The cell already holds a stone
    Occupied,
    /// The rules of the game forbid this placement
    Forbidden,
    /// The placement was made for the side that is not to move
    WrongTurn,
}

impl PlaceStatus {
    pub fn is_legal(self) -> bool {
        self == PlaceStatus::Legal
    }
}

/// Board collaborator used by the search
///
/// Implementations must be cheap to clone: the engine snapshots the board
/// for every node and probes legality on throwaway copies.
///
/// # Example
///
/// ```
/// use nogo_mcts::{Board, Color, NoGoBoard, PlaceStatus};
///
/// let mut board = NoGoBoard::new();
/// assert_eq!(board.side_to_move(), Color::Black);
/// assert_eq!(board.place(40), PlaceStatus::Legal);
/// assert_eq!(board.place(40), PlaceStatus::Occupied);
/// assert_eq!(board.last_move(), Some(40));
/// assert_eq!(board.legal_move_count(), 80);
/// ```
pub trait Board: Clone {
    /// Attempts to place a stone for the side to move at `cell`
    ///
    /// A non-legal result must leave the board unchanged.
    fn place(&mut self, cell: usize) -> PlaceStatus;

    /// Returns the color whose turn it is
    fn side_to_move(&self) -> Color;

    /// Returns the cell of the move that produced this position, if any
    fn last_move(&self) -> Option<usize>;

    /// Returns true if placing at `cell` would be legal
    fn is_legal(&self, cell: usize) -> bool {
        self.clone().place(cell).is_legal()
    }

    /// Returns every legal cell in ascending order
    fn legal_cells(&self) -> Vec<usize> {
        (0..CELLS).filter(|&cell| self.is_legal(cell)).collect()
    }

    /// Returns the number of legal cells
    fn legal_move_count(&self) -> usize {
        (0..CELLS).filter(|&cell| self.is_legal(cell)).count()
    }
}

/// A move chosen by a player
///
/// `Null` stands for "no move" and is what a player returns when it has
/// nothing legal to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Null,
    Place { cell: usize, color: Color },
}

impl Action {
    /// Creates a placement of `color` at `cell`
    pub fn place(cell: usize, color: Color) -> Self {
        Action::Place { cell, color }
    }

    /// Creates the null action
    pub fn null() -> Self {
        Action::Null
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Action::Null)
    }

    /// Returns the target cell, or `None` for the null action
    pub fn cell(&self) -> Option<usize> {
        match self {
            Action::Place { cell, .. } => Some(*cell),
            Action::Null => None,
        }
    }

    /// Returns the placing color, or `None` for the null action
    pub fn color(&self) -> Option<Color> {
        match self {
            Action::Place { color, .. } => Some(*color),
            Action::Null => None,
        }
    }

    /// Applies this action to `board`
    ///
    /// The null action is never legal. A placement for the wrong side is
    /// rejected without touching the board.
    pub fn apply<B: Board>(&self, board: &mut B) -> PlaceStatus {
        match *self {
            Action::Null => PlaceStatus::Forbidden,
            Action::Place { cell, color } => {
                if board.side_to_move() != color {
                    return PlaceStatus::WrongTurn;
                }
                board.place(cell)
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Null => write!(f, "null"),
            Action::Place { cell, color } => {
                let tag = match color {
                    Color::Black => 'B',
                    Color::White => 'W',
                };
                write!(f, "{}@{}", tag, cell)
            }
        }
    }
}
