use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Black, Player::White];

    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// State of one of the 100 cells. `Outer` only ever appears on the sentinel border.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
    Outer,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => '@',
            Cell::White => 'o',
            Cell::Outer => '?',
        }
    }

    /// True if the cell holds a disc of `player`. Never true for `Outer`.
    #[inline]
    pub fn is(self, player: Player) -> bool {
        self == Cell::from(player)
    }
}

impl From<Player> for Cell {
    fn from(p: Player) -> Cell {
        match p {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A disc placement on a play square, or a forced pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Play(u8),
    Pass,
}

impl Move {
    pub fn square(self) -> Option<u8> {
        match self {
            Move::Play(sq) => Some(sq),
            Move::Pass => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(sq) => f.write_str(&sq_to_coord(*sq)),
            Move::Pass => f.write_str("pass"),
        }
    }
}

// Helpers
//
// Cells are laid out on a 10-wide grid; row 0, row 9, column 0 and column 9 are
// the sentinel border. A play square's index is therefore `10 * row + col`.
pub const BOARD_CELLS: usize = 100;

pub fn row_of(sq: u8) -> u8 {
    sq / 10
}
pub fn col_of(sq: u8) -> u8 {
    sq % 10
}
pub fn square(row: u8, col: u8) -> Option<u8> {
    if (1..=8).contains(&row) && (1..=8).contains(&col) {
        Some(row * 10 + col)
    } else {
        None
    }
}

#[inline]
pub fn is_play_square(sq: u8) -> bool {
    (11..=88).contains(&sq) && (1..=8).contains(&col_of(sq))
}

/// The 64 play squares in ascending index order.
pub fn play_squares() -> impl Iterator<Item = u8> {
    (11u8..=88).filter(|&sq| is_play_square(sq))
}

pub fn sq_to_coord(sq: u8) -> String {
    format!("{}{}", row_of(sq), col_of(sq))
}

/// Parses a two-digit `rowcol` coordinate such as `34` (row 3, column 4).
pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.trim().as_bytes();
    if b.len() != 2 {
        return None;
    }
    if !b[0].is_ascii_digit() || !b[1].is_ascii_digit() {
        return None;
    }
    square(b[0] - b'0', b[1] - b'0')
}
