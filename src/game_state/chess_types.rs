//! Core piece, color, and coordinate types for the rules engine.
//!
//! The board is a plain 8x8 mailbox of optional pieces indexed
//! `[rank][file]`. Rank index 0 is the eighth rank (Black's back rank) and
//! rank index 7 is the first rank, matching the display orientation used by
//! the coordinate notation helpers.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction of this color's pawn advance.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank index a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank index this color's pawns start on.
    #[inline]
    pub const fn pawn_home_rank(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

/// Piece kind (color is carried separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece occupying a board square.
///
/// `has_moved` is tracked per physical piece instance for the lifetime of
/// the piece on the board; castling eligibility depends on it and it is
/// never inferred from position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }
}

/// A board coordinate: file 0..=7 (a..h) and rank 0..=7 (eighth rank down
/// to first rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: i8,
    pub rank: i8,
}

impl Position {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }

    /// Offset by a file/rank delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_file: i8, d_rank: i8) -> Option<Position> {
        let moved = Position::new(self.file + d_file, self.rank + d_rank);
        if moved.in_bounds() {
            Some(moved)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file_char = char::from(b'a' + self.file as u8);
            let rank_char = char::from(b'8' - self.rank as u8);
            write!(f, "{file_char}{rank_char}")
        } else {
            write!(f, "(file {}, rank {})", self.file, self.rank)
        }
    }
}

/// 8x8 mailbox board indexed `[rank][file]`.
///
/// The array is `Copy`, so "fresh structural copy" is a plain assignment;
/// two live game states never share a board.
pub type Board = [[Option<Piece>; 8]; 8];

/// Look up the piece on a square. Out-of-bounds positions read as empty.
#[inline]
pub fn piece_on(board: &Board, position: Position) -> Option<Piece> {
    if !position.in_bounds() {
        return None;
    }
    board[position.rank as usize][position.file as usize]
}

/// Overwrite a square. Out-of-bounds positions are ignored.
#[inline]
pub fn set_square(board: &mut Board, position: Position, piece: Option<Piece>) {
    if position.in_bounds() {
        board[position.rank as usize][position.file as usize] = piece;
    }
}
