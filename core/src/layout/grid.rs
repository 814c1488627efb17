//! Grid resolution — choose the grid size and place each pane in a cell.
//!
//! # Sizing
//!
//! With `n = max(pane_count, 1)`:
//!
//! - no fixed rows: `cols = fixed_cols` or `ceil(sqrt(n))`, then `rows = ceil(n / cols)`
//! - fixed rows `R`: `rows = R`, `cols = ceil(n / R)`; fixed cols is ignored
//!
//! # Placement
//!
//! Panes are placed in insertion order. Each pane scans the cells from the
//! top-left in row-major order and takes the first empty cell its pins
//! accept. A pane pinned outside the grid finds no cell and is left out.

use tracing::{debug, warn};

use crate::types::session::Session;


/// Grid size as `(rows, cols)`.
pub fn dimensions(pane_count: usize, fixed_rows: Option<usize>, fixed_cols: Option<usize>) -> (usize, usize) {
    let n = pane_count.max(1);
    match fixed_rows {
        None => {
            let cols = fixed_cols.unwrap_or_else(|| ceil_sqrt(n)).max(1);
            (n.div_ceil(cols), cols)
        }
        Some(rows) => {
            let rows = rows.max(1);
            (rows, n.div_ceil(rows))
        }
    }
}

/// Smallest `c` with `c * c >= n`.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}


/// A rows×cols matrix of pane indices into `Session::panes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<usize>>,
    dropped: Vec<usize>,
}

impl ResolvedGrid {
    pub fn empty(rows: usize, cols: usize) -> ResolvedGrid {
        ResolvedGrid {
            rows,
            cols,
            cells: vec![None; rows * cols],
            dropped: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Linear address of a cell, matching tmux pane numbering after the splits.
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Pane index occupying (`row`, `col`), if any.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells[self.flat_index(row, col)]
    }

    /// Occupied cells in row-major order as `(row, col, pane_index)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|pane| (idx / cols, idx % cols, pane)))
    }

    /// Panes that matched no cell, in insertion order.
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }
}


/// Place the session's panes into a grid of `Session::size()`.
pub fn resolve(session: &Session) -> ResolvedGrid {
    let (rows, cols) = session.size();
    let mut grid = ResolvedGrid::empty(rows, cols);

    for (pane_idx, pane) in session.panes.iter().enumerate() {
        let slot = (0..rows * cols).find(|&idx| {
            grid.cells[idx].is_none() && pane.accepts(idx / cols, idx % cols)
        });
        match slot {
            Some(idx) => grid.cells[idx] = Some(pane_idx),
            None => {
                warn!(
                    pane = pane_idx,
                    row = ?pane.row,
                    col = ?pane.col,
                    rows,
                    cols,
                    "pane has no free cell matching its pins; leaving it out of the layout"
                );
                grid.dropped.push(pane_idx);
            }
        }
    }

    debug!(rows, cols, placed = session.panes.len() - grid.dropped.len(), "resolved grid");
    grid
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pane::Pane;

    fn position_of(grid: &ResolvedGrid, pane: usize) -> Option<(usize, usize)> {
        grid.occupied()
            .find(|&(_, _, p)| p == pane)
            .map(|(row, col, _)| (row, col))
    }

    fn session_of(panes: Vec<Pane>) -> Session {
        Session {
            panes,
            ..Session::default()
        }
    }

    #[test]
    fn square_ish_sizes_without_pins() {
        assert_eq!(dimensions(0, None, None), (1, 1));
        assert_eq!(dimensions(1, None, None), (1, 1));
        assert_eq!(dimensions(2, None, None), (1, 2));
        assert_eq!(dimensions(3, None, None), (2, 2));
        assert_eq!(dimensions(4, None, None), (2, 2));
        assert_eq!(dimensions(5, None, None), (2, 3));
        assert_eq!(dimensions(7, None, None), (3, 3));
        assert_eq!(dimensions(10, None, None), (3, 4));
    }

    #[test]
    fn auto_size_invariants_hold() {
        for n in 1..200 {
            let (rows, cols) = dimensions(n, None, None);
            assert_eq!(cols, ceil_sqrt(n));
            assert_eq!(rows, n.div_ceil(cols));
            assert!(rows * cols >= n, "n={}", n);
        }
    }

    #[test]
    fn ceil_sqrt_exact_squares() {
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(9), 3);
        assert_eq!(ceil_sqrt(10), 4);
        assert_eq!(ceil_sqrt(16), 4);
        assert_eq!(ceil_sqrt(17), 5);
    }

    #[test]
    fn fixed_cols_sets_width() {
        assert_eq!(dimensions(5, None, Some(1)), (5, 1));
        assert_eq!(dimensions(5, None, Some(4)), (2, 4));
    }

    #[test]
    fn fixed_rows_wins_over_fixed_cols() {
        for n in 1..40 {
            for r in 1..6 {
                assert_eq!(dimensions(n, Some(r), Some(9)), (r, n.div_ceil(r)));
            }
        }
    }

    #[test]
    fn unpinned_fill_row_major() {
        let grid = resolve(&session_of(vec![Pane::new(), Pane::new(), Pane::new()]));
        assert_eq!((grid.rows(), grid.cols()), (2, 2));
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.get(0, 1), Some(1));
        assert_eq!(grid.get(1, 0), Some(2));
        assert_eq!(grid.get(1, 1), None);
    }

    #[test]
    fn full_pin_takes_exact_cell() {
        let grid = resolve(&session_of(vec![
            Pane::pinned(Some(1), Some(1)),
            Pane::new(),
            Pane::new(),
            Pane::new(),
        ]));
        assert_eq!(grid.get(1, 1), Some(0));
        assert_eq!(grid.get(0, 0), Some(1));
        assert_eq!(grid.get(0, 1), Some(2));
        assert_eq!(grid.get(1, 0), Some(3));
    }

    #[test]
    fn column_pin_takes_first_free_cell_in_that_column() {
        let grid = resolve(&session_of(vec![
            Pane::pinned(None, Some(0)),
            Pane::pinned(None, Some(0)),
            Pane::new(),
        ]));
        assert_eq!(position_of(&grid, 0), Some((0, 0)));
        assert_eq!(position_of(&grid, 1), Some((1, 0)));
        assert_eq!(position_of(&grid, 2), Some((0, 1)));
    }

    #[test]
    fn earlier_unpinned_pane_can_take_a_later_pin_target() {
        let grid = resolve(&session_of(vec![
            Pane::new(),
            Pane::pinned(Some(0), Some(0)),
            Pane::new(),
        ]));
        // pane 1 loses (0,0) to pane 0 and has nowhere else to go
        assert_eq!(grid.get(0, 0), Some(0));
        assert_eq!(grid.dropped(), &[1]);
        assert_eq!(position_of(&grid, 2), Some((0, 1)));
    }

    #[test]
    fn out_of_bounds_pin_is_dropped() {
        let grid = resolve(&session_of(vec![Pane::new(), Pane::pinned(Some(5), None)]));
        assert_eq!((grid.rows(), grid.cols()), (1, 2));
        assert_eq!(position_of(&grid, 1), None);
        assert_eq!(grid.dropped(), &[1]);
        assert_eq!(grid.occupied().count(), 1);
    }

    #[test]
    fn every_pane_placed_exactly_once() {
        let panes: Vec<Pane> = (0..11)
            .map(|i| if i % 3 == 0 { Pane::pinned(None, Some(i % 4)) } else { Pane::new() })
            .collect();
        let grid = resolve(&session_of(panes));
        assert!(grid.dropped().is_empty());
        let mut seen: Vec<usize> = grid.occupied().map(|(_, _, p)| p).collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..11).collect::<Vec<_>>());
    }

    #[test]
    fn empty_session_is_one_empty_cell() {
        let grid = resolve(&Session::default());
        assert_eq!((grid.rows(), grid.cols()), (1, 1));
        assert_eq!(grid.occupied().count(), 0);
    }
}
