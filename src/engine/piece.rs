//! Pieces and the move-legality rules for each kind.
//!
//! Sliding pieces (rook, bishop, queen, king) share one line-of-sight
//! tracer, [`trace_path`]; the `clear_*_path` wrappers add the shape
//! precondition for each line orientation. The knight is a leaper and only
//! checks its offset and the destination; the pawn carries its own state.

use crate::engine::grid::{Grid, Location};
use crate::engine::player::PlayerId;

/// The kind of a piece, with kind-specific state inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    /// `forward` is +1 or -1 depending on which side of the board the pawn
    /// started on; `has_moved` gates the two-step opening advance.
    Pawn { has_moved: bool, forward: i8 },
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    /// A connect-four token, carrying the owner's display character.
    Chip(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub owner: PlayerId,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(owner: PlayerId, kind: PieceKind) -> Self {
        Piece { owner, kind }
    }

    pub fn pawn(owner: PlayerId, forward: i8) -> Self {
        Piece::new(
            owner,
            PieceKind::Pawn {
                has_moved: false,
                forward,
            },
        )
    }

    pub fn chip(owner: PlayerId, token: char) -> Self {
        Piece::new(owner, PieceKind::Chip(token))
    }

    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    /// One-character display symbol.
    pub fn symbol(&self) -> char {
        match self.kind {
            PieceKind::Pawn { .. } => 'p',
            PieceKind::Rook => 'R',
            // K is taken by the king.
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Chip(token) => token,
        }
    }

    /// Record that this piece has moved. Only pawns care.
    pub fn mark_moved(&mut self) {
        if let PieceKind::Pawn { has_moved, .. } = &mut self.kind {
            *has_moved = true;
        }
    }

    /// Whether this piece may move from `from` to `to` on `grid`. Pure:
    /// never mutates the piece or the grid. Chips are dropped by their game,
    /// never moved, so they report every move as illegal.
    pub fn is_legal_move(&self, from: Location, to: Location, grid: &Grid) -> bool {
        if from == to || !grid.contains(to) {
            return false;
        }
        let dr = to.row as i64 - from.row as i64;
        let dc = to.col as i64 - from.col as i64;
        match self.kind {
            PieceKind::Rook => {
                clear_horizontal_path(self.owner, from, to, grid)
                    || clear_vertical_path(self.owner, from, to, grid)
            }
            PieceKind::Bishop => clear_diagonal_path(self.owner, from, to, grid),
            PieceKind::Queen => {
                clear_diagonal_path(self.owner, from, to, grid)
                    || clear_horizontal_path(self.owner, from, to, grid)
                    || clear_vertical_path(self.owner, from, to, grid)
            }
            // One step in any direction. The destination check is the same
            // as a one-cell trace: empty or an opposing piece.
            PieceKind::King => {
                dr.abs() <= 1 && dc.abs() <= 1 && trace_path(self.owner, from, to, grid)
            }
            PieceKind::Knight => {
                let shape = (dr.abs(), dc.abs());
                (shape == (2, 1) || shape == (1, 2)) && destination_open(self.owner, to, grid)
            }
            PieceKind::Pawn { has_moved, forward } => {
                self.pawn_move(has_moved, forward, dr, dc, to, grid)
            }
            PieceKind::Chip(_) => false,
        }
    }

    fn pawn_move(
        &self,
        has_moved: bool,
        forward: i8,
        dr: i64,
        dc: i64,
        to: Location,
        grid: &Grid,
    ) -> bool {
        let forward = i64::from(forward);
        if dc == 0 {
            let reach_ok = if has_moved {
                dr == forward
            } else {
                dr == forward || dr == 2 * forward
            };
            reach_ok && grid.get(to).map_or(false, |cell| cell.is_empty())
        } else if dc.abs() == 1 && dr == forward {
            // Diagonal capture only, onto an opposing piece.
            grid.get(to)
                .ok()
                .and_then(|cell| cell.piece())
                .is_some_and(|other| other.owner != self.owner)
        } else {
            false
        }
    }
}

/// Walk the straight or diagonal line from `from` to `to` in unit steps.
/// True iff every intermediate cell is empty and the destination is empty or
/// holds an opposing piece. Callers guarantee the line is straight or
/// diagonal and `from != to`; the direction is the sign of each axis delta.
pub fn trace_path(mover: PlayerId, from: Location, to: Location, grid: &Grid) -> bool {
    let step_r = (to.row as i64 - from.row as i64).signum();
    let step_c = (to.col as i64 - from.col as i64).signum();
    let mut row = from.row as i64 + step_r;
    let mut col = from.col as i64 + step_c;
    loop {
        let here = Location::new(row as usize, col as usize);
        let cell = match grid.get(here) {
            Ok(cell) => cell,
            Err(_) => return false,
        };
        if row == to.row as i64 && col == to.col as i64 {
            return cell.piece().map_or(true, |other| other.owner != mover);
        }
        if !cell.is_empty() {
            return false;
        }
        row += step_r;
        col += step_c;
    }
}

/// Trace a diagonal line; requires `|dr| == |dc|` and a nonzero delta.
pub fn clear_diagonal_path(mover: PlayerId, from: Location, to: Location, grid: &Grid) -> bool {
    let dr = to.row as i64 - from.row as i64;
    let dc = to.col as i64 - from.col as i64;
    dr != 0 && dr.abs() == dc.abs() && trace_path(mover, from, to, grid)
}

/// Trace along a row; requires `dr == 0` and a nonzero column delta.
pub fn clear_horizontal_path(mover: PlayerId, from: Location, to: Location, grid: &Grid) -> bool {
    from.row == to.row && from.col != to.col && trace_path(mover, from, to, grid)
}

/// Trace along a column; requires `dc == 0` and a nonzero row delta.
pub fn clear_vertical_path(mover: PlayerId, from: Location, to: Location, grid: &Grid) -> bool {
    from.col == to.col && from.row != to.row && trace_path(mover, from, to, grid)
}

fn destination_open(mover: PlayerId, to: Location, grid: &Grid) -> bool {
    match grid.get(to) {
        Ok(cell) => cell.piece().map_or(true, |other| other.owner != mover),
        Err(_) => false,
    }
}
