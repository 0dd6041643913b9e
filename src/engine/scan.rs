//! Alignment scanning: detection of k consecutive cells held by one owner.
//!
//! The scanner works on a snapshot of cell ownership. Rows are scanned
//! directly; columns via a transpose; diagonals by shearing each row so the
//! diagonals of the original grid become columns of the sheared grid, then
//! transposing and reusing the same run-length scan. One shear direction per
//! diagonal family: left-padding row `i` by `n-1-i` aligns the falling
//! diagonals, left-padding by `i` aligns the rising ones. Equality is by
//! owner, not piece kind.

use crate::engine::grid::{Grid, Location};
use crate::engine::player::PlayerId;

/// Which line orientations to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanDirections {
    pub rows: bool,
    pub cols: bool,
    pub diagonals: bool,
}

impl ScanDirections {
    pub fn all() -> Self {
        ScanDirections {
            rows: true,
            cols: true,
            diagonals: true,
        }
    }
}

type OwnerMatrix = Vec<Vec<Option<PlayerId>>>;

/// True iff some owner holds `k` consecutive cells (k >= 1) in any of the
/// requested orientations. Pure; works for any grid shape and any `k`.
pub fn has_consecutive(grid: &Grid, k: usize, directions: ScanDirections) -> bool {
    let owners = owner_matrix(grid);
    let mut configurations: Vec<OwnerMatrix> = Vec::with_capacity(4);
    if directions.rows {
        configurations.push(owners.clone());
    }
    if directions.cols {
        configurations.push(transpose(&owners));
    }
    if directions.diagonals {
        configurations.push(transpose(&shear_falling(&owners)));
        configurations.push(transpose(&shear_rising(&owners)));
    }

    configurations
        .iter()
        .flatten()
        .any(|line| has_run(line, k))
}

/// Run-length scan of one line: true iff some non-empty value repeats at
/// least `k` times consecutively.
fn has_run(line: &[Option<PlayerId>], k: usize) -> bool {
    let mut current: Option<PlayerId> = None;
    let mut run = 0usize;
    for cell in line {
        match cell {
            Some(owner) if current == Some(*owner) => run += 1,
            Some(owner) => {
                current = Some(*owner);
                run = 1;
            }
            None => {
                current = None;
                run = 0;
            }
        }
        if current.is_some() && run >= k {
            return true;
        }
    }
    false
}

fn owner_matrix(grid: &Grid) -> OwnerMatrix {
    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    grid.get(Location::new(row, col))
                        .ok()
                        .and_then(|cell| cell.piece())
                        .map(|piece| piece.owner)
                })
                .collect()
        })
        .collect()
}

fn transpose(matrix: &[Vec<Option<PlayerId>>]) -> OwnerMatrix {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };
    (0..first.len())
        .map(|col| matrix.iter().map(|row| row[col]).collect())
        .collect()
}

/// Offset row `i` so the falling (top-left to bottom-right) diagonals line
/// up vertically: prepend `n-1-i` empties and append `i`, where `n` is the
/// row count. Cell `(i, j)` lands in column `n-1 + (j - i)`.
fn shear_falling(matrix: &[Vec<Option<PlayerId>>]) -> OwnerMatrix {
    let n = matrix.len();
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut sheared = vec![None; n - 1 - i];
            sheared.extend(row.iter().copied());
            sheared.extend(std::iter::repeat(None).take(i));
            sheared
        })
        .collect()
}

/// The mirror shear: prepend `i`, append `n-1-i`, putting cell `(i, j)` in
/// column `i + j` and aligning the rising diagonals.
fn shear_rising(matrix: &[Vec<Option<PlayerId>>]) -> OwnerMatrix {
    let n = matrix.len();
    matrix
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut sheared = vec![None; i];
            sheared.extend(row.iter().copied());
            sheared.extend(std::iter::repeat(None).take(n - 1 - i));
            sheared
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::grid::Cell;
    use crate::engine::piece::{Piece, PieceKind};

    fn grid_with_owners(rows: usize, cols: usize, chips: &[(usize, usize, usize)]) -> Grid {
        let mut grid = Grid::new(rows, cols).unwrap();
        for &(row, col, owner) in chips {
            grid.set(
                Location::new(row, col),
                Cell::Occupied(Piece::chip(PlayerId(owner), 'X')),
            )
            .unwrap();
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_runs() {
        let grid = Grid::new(6, 7).unwrap();
        assert!(!has_consecutive(&grid, 1, ScanDirections::all()));
    }

    #[test]
    fn test_row_run_of_exactly_k() {
        let grid = grid_with_owners(6, 7, &[(5, 1, 0), (5, 2, 0), (5, 3, 0), (5, 4, 0)]);
        assert!(has_consecutive(&grid, 4, ScanDirections::all()));
        assert!(!has_consecutive(&grid, 5, ScanDirections::all()));
    }

    #[test]
    fn test_row_run_of_k_minus_one_is_not_enough() {
        let grid = grid_with_owners(6, 7, &[(5, 1, 0), (5, 2, 0), (5, 3, 0)]);
        assert!(!has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_column_run() {
        let grid = grid_with_owners(6, 7, &[(2, 3, 1), (3, 3, 1), (4, 3, 1), (5, 3, 1)]);
        assert!(has_consecutive(&grid, 4, ScanDirections::all()));
        assert!(!has_consecutive(
            &grid,
            4,
            ScanDirections {
                rows: true,
                cols: false,
                diagonals: true
            }
        ));
    }

    #[test]
    fn test_rising_diagonal_run() {
        let grid = grid_with_owners(6, 7, &[(5, 0, 0), (4, 1, 0), (3, 2, 0), (2, 3, 0)]);
        assert!(has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_falling_diagonal_run() {
        let grid = grid_with_owners(6, 7, &[(1, 1, 0), (2, 2, 0), (3, 3, 0), (4, 4, 0)]);
        assert!(has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_diagonal_needs_diagonals_enabled() {
        let grid = grid_with_owners(6, 7, &[(1, 1, 0), (2, 2, 0), (3, 3, 0), (4, 4, 0)]);
        assert!(!has_consecutive(
            &grid,
            4,
            ScanDirections {
                rows: true,
                cols: true,
                diagonals: false
            }
        ));
    }

    #[test]
    fn test_opponent_breaks_the_run() {
        let grid = grid_with_owners(
            6,
            7,
            &[(5, 0, 0), (5, 1, 0), (5, 2, 1), (5, 3, 0), (5, 4, 0)],
        );
        assert!(!has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_owner_identity_ignores_piece_kind() {
        // Different kinds with the same owner still count as one run.
        let mut grid = Grid::new(4, 4).unwrap();
        let kinds = [
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::Knight,
            PieceKind::King,
        ];
        for (col, kind) in kinds.into_iter().enumerate() {
            grid.set(
                Location::new(0, col),
                Cell::Occupied(Piece::new(PlayerId(0), kind)),
            )
            .unwrap();
        }
        assert!(has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_non_square_grid_diagonals() {
        // 3x8 grid with a 3-run on the rising diagonal.
        let grid = grid_with_owners(3, 8, &[(2, 5, 0), (1, 6, 0), (0, 7, 0)]);
        assert!(has_consecutive(&grid, 3, ScanDirections::all()));
        assert!(!has_consecutive(&grid, 4, ScanDirections::all()));
    }

    #[test]
    fn test_k_is_generic() {
        let grid = grid_with_owners(5, 5, &[(0, 0, 0), (0, 1, 0)]);
        assert!(has_consecutive(&grid, 2, ScanDirections::all()));
        assert!(!has_consecutive(&grid, 3, ScanDirections::all()));
    }
}
