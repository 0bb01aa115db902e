//! Line scanning and game-result evaluation.
//!
//! `evaluate` checks lines in a fixed priority order: rows 0, 1, 2, then
//! columns 0, 1, 2, then the main diagonal, then the anti-diagonal. Only
//! the first satisfied line is reported. On a 3x3 board with one move just
//! played the later checks are moot once a line completes, but the order
//! is part of the contract so results stay reproducible.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Symbol};

/// The kind of line a win was scored on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Row,
    Column,
    Diagonal,
}

/// Result of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// No line is complete and empty cells remain.
    InProgress,
    /// Three in a row for `symbol` on a `line` of the given kind.
    Win { symbol: Symbol, line: LineKind },
    /// All nine cells occupied with no complete line.
    Draw,
}

impl GameResult {
    /// Whether the game has ended (win or draw).
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// The winning symbol, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Symbol> {
        match self {
            GameResult::Win { symbol, .. } => Some(*symbol),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    /// Human-readable summary, suitable for a host's result banner.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "Game in progress."),
            GameResult::Win {
                symbol,
                line: LineKind::Row,
            } => write!(f, "{symbol} wins on a row."),
            GameResult::Win {
                symbol,
                line: LineKind::Column,
            } => write!(f, "{symbol} wins on a column."),
            GameResult::Win {
                symbol,
                line: LineKind::Diagonal,
            } => write!(f, "{symbol} wins on diagonal!"),
            GameResult::Draw => write!(f, "The game is a draw!"),
        }
    }
}

/// All eight lines in check-priority order: rows, columns, main diagonal,
/// anti-diagonal. Cell entries are row-major flat indices.
const LINES: [(LineKind, [usize; 3]); 8] = [
    (LineKind::Row, [0, 1, 2]),
    (LineKind::Row, [3, 4, 5]),
    (LineKind::Row, [6, 7, 8]),
    (LineKind::Column, [0, 3, 6]),
    (LineKind::Column, [1, 4, 7]),
    (LineKind::Column, [2, 5, 8]),
    (LineKind::Diagonal, [0, 4, 8]),
    (LineKind::Diagonal, [2, 4, 6]),
];

/// Evaluate a board snapshot.
///
/// Reports the first complete line in priority order, then a draw once the
/// board is full, otherwise [`GameResult::InProgress`]. Pure: no side
/// effects on the board.
///
/// ```
/// use tictactoe_engine::{evaluate, Board, GameResult};
///
/// assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
/// ```
#[must_use]
pub fn evaluate(board: &Board) -> GameResult {
    for (line, cells) in LINES {
        if let Some(symbol) = board.symbol_at(Coord::from_index(cells[0])) {
            if cells[1..]
                .iter()
                .all(|&i| board.symbol_at(Coord::from_index(i)) == Some(symbol))
            {
                return GameResult::Win { symbol, line };
            }
        }
    }

    if board.is_full() {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}

/// Whether the board holds a complete line for either symbol.
///
/// A full-board draw is not a winning state.
#[must_use]
pub fn is_winning_state(board: &Board) -> bool {
    matches!(evaluate(board), GameResult::Win { .. })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    fn board_from(moves: &[(u8, u8, Symbol)]) -> Board {
        let mut board = Board::new();
        for &(row, col, symbol) in moves {
            board.place_symbol(Coord::new(row, col), symbol).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameResult::InProgress);
        assert!(!is_winning_state(&Board::new()));
    }

    #[test]
    fn test_row_win() {
        for row in 0..3 {
            let board = board_from(&[
                (row, 0, Symbol::X),
                (row, 1, Symbol::X),
                (row, 2, Symbol::X),
            ]);
            assert_eq!(
                evaluate(&board),
                GameResult::Win {
                    symbol: Symbol::X,
                    line: LineKind::Row
                }
            );
        }
    }

    #[test]
    fn test_column_win() {
        for col in 0..3 {
            let board = board_from(&[
                (0, col, Symbol::O),
                (1, col, Symbol::O),
                (2, col, Symbol::O),
            ]);
            assert_eq!(
                evaluate(&board),
                GameResult::Win {
                    symbol: Symbol::O,
                    line: LineKind::Column
                }
            );
        }
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from(&[(0, 0, Symbol::X), (1, 1, Symbol::X), (2, 2, Symbol::X)]);
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                symbol: Symbol::X,
                line: LineKind::Diagonal
            }
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from(&[(0, 2, Symbol::O), (1, 1, Symbol::O), (2, 0, Symbol::O)]);
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                symbol: Symbol::O,
                line: LineKind::Diagonal
            }
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from(&[(0, 0, Symbol::X), (0, 1, Symbol::O), (0, 2, Symbol::X)]);
        assert_eq!(evaluate(&board), GameResult::InProgress);
    }

    #[test]
    fn test_row_reported_before_column() {
        // Row 0 and column 0 both complete for X. Row must be reported.
        let board = board_from(&[
            (0, 0, Symbol::X),
            (0, 1, Symbol::X),
            (0, 2, Symbol::X),
            (1, 0, Symbol::X),
            (2, 0, Symbol::X),
        ]);
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                symbol: Symbol::X,
                line: LineKind::Row
            }
        );
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        // Column 0 and the main diagonal both complete for X.
        let board = board_from(&[
            (0, 0, Symbol::X),
            (1, 0, Symbol::X),
            (2, 0, Symbol::X),
            (1, 1, Symbol::X),
            (2, 2, Symbol::X),
        ]);
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                symbol: Symbol::X,
                line: LineKind::Column
            }
        );
    }

    #[test]
    fn test_draw_only_at_nine_moves() {
        // X O X / X X O / O X O: no line, draw at the ninth move.
        let moves = [
            (0, 0, Symbol::X),
            (0, 1, Symbol::O),
            (0, 2, Symbol::X),
            (1, 0, Symbol::X),
            (1, 1, Symbol::X),
            (1, 2, Symbol::O),
            (2, 0, Symbol::O),
            (2, 1, Symbol::X),
            (2, 2, Symbol::O),
        ];

        let mut board = Board::new();
        for (placed, &(row, col, symbol)) in moves.iter().enumerate() {
            assert_eq!(
                evaluate(&board),
                GameResult::InProgress,
                "draw reported early at move {placed}"
            );
            board.place_symbol(Coord::new(row, col), symbol).unwrap();
        }
        assert_eq!(evaluate(&board), GameResult::Draw);
        assert!(!is_winning_state(&board));
    }

    #[test]
    fn test_win_lands_exactly_on_completing_move() {
        let mut board = Board::new();
        board.place_symbol(Coord::new(0, 0), Symbol::X).unwrap();
        board.place_symbol(Coord::new(0, 1), Symbol::X).unwrap();
        assert_eq!(evaluate(&board), GameResult::InProgress);

        board.place_symbol(Coord::new(1, 1), Symbol::O).unwrap();
        assert_eq!(evaluate(&board), GameResult::InProgress);

        board.place_symbol(Coord::new(0, 2), Symbol::X).unwrap();
        assert_eq!(
            evaluate(&board),
            GameResult::Win {
                symbol: Symbol::X,
                line: LineKind::Row
            }
        );
    }

    #[test]
    fn test_result_helpers() {
        let win = GameResult::Win {
            symbol: Symbol::O,
            line: LineKind::Column,
        };
        assert!(win.is_over());
        assert_eq!(win.winner(), Some(Symbol::O));

        assert!(GameResult::Draw.is_over());
        assert_eq!(GameResult::Draw.winner(), None);

        assert!(!GameResult::InProgress.is_over());
        assert_eq!(GameResult::InProgress.winner(), None);
    }

    #[test]
    fn test_result_display() {
        let row_win = GameResult::Win {
            symbol: Symbol::X,
            line: LineKind::Row,
        };
        assert_eq!(row_win.to_string(), "X wins on a row.");

        let diag_win = GameResult::Win {
            symbol: Symbol::O,
            line: LineKind::Diagonal,
        };
        assert_eq!(diag_win.to_string(), "O wins on diagonal!");

        assert_eq!(GameResult::Draw.to_string(), "The game is a draw!");
    }

    #[test]
    fn test_board_error_type_is_shared() {
        // Rules and board share the same error surface.
        let mut board = Board::new();
        board.place_symbol(Coord::new(0, 0), Symbol::X).unwrap();
        assert!(matches!(
            board.place_symbol(Coord::new(0, 0), Symbol::O),
            Err(GameError::InvalidMove { row: 0, col: 0 })
        ));
    }
}
