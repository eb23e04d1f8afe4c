use std::fmt;
use std::str::FromStr;

use crate::error::BoardParseError;
use crate::types::*;

/// A full 10x10 board including the sentinel ring.
///
/// `Board` is a plain `Copy` value: applying a move produces a new board and
/// never touches the one it was derived from, so search branches can hold
/// their own boards without any sharing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// The 64 play squares empty, the border filled with `Outer`.
    pub fn empty() -> Self {
        let mut b = Board {
            cells: [Cell::Outer; BOARD_CELLS],
        };
        for sq in play_squares() {
            b.cells[sq as usize] = Cell::Empty;
        }
        b
    }

    /// Standard starting position: White on 44/55, Black on 45/54.
    pub fn initial() -> Self {
        let mut b = Board::empty();
        b.cells[44] = Cell::White;
        b.cells[45] = Cell::Black;
        b.cells[54] = Cell::Black;
        b.cells[55] = Cell::White;
        b
    }

    /// Cell state at `sq`. Panics if `sq >= 100`.
    #[inline]
    pub fn cell(&self, sq: u8) -> Cell {
        self.cells[sq as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: u8, cell: Cell) {
        debug_assert!(is_play_square(sq), "write to sentinel cell {sq}");
        self.cells[sq as usize] = cell;
    }

    pub fn count(&self, player: Player) -> u32 {
        play_squares().filter(|&sq| self.cell(sq).is(player)).count() as u32
    }

    pub fn count_empty(&self) -> u32 {
        play_squares()
            .filter(|&sq| self.cell(sq) == Cell::Empty)
            .count() as u32
    }
}

pub fn initial_board() -> Board {
    Board::initial()
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   1 2 3 4 5 6 7 8")?;
        for row in 1..=8u8 {
            write!(f, "\n{row} ")?;
            for col in 1..=8u8 {
                write!(f, " {}", self.cell(row * 10 + col).symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses 8 rows of 8 symbols (`.`, `@`, `o`), rows separated by
    /// whitespace or `/`. Used by tests and tools to set up positions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == '/')
            .filter(|r| !r.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (r, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != 8 {
                return Err(BoardParseError::RowWidth { row: r + 1, len });
            }
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    '@' => Cell::Black,
                    'o' => Cell::White,
                    other => return Err(BoardParseError::Symbol(other)),
                };
                board.cells[(r + 1) * 10 + c + 1] = cell;
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
