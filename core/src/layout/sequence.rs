//! Directive sequencing — rebuild a resolved grid from one tmux pane.
//!
//! tmux only splits the current pane, so the grid is rebuilt by repeated
//! bisection: the window is first split vertically into row bands, then
//! each band is split horizontally into columns. Every split hands the new
//! pane `percent_of(idx, total)` of what remains, which leaves `total`
//! equal parts.
//!
//! Pane addressing relies on tmux numbering panes in split-creation order,
//! top-left to bottom-right, starting at 0 (the default `base-index`).
//! After all splits, pane `row * cols + col` is the cell at (`row`, `col`).

use tracing::debug;

use crate::command::{Directive, DirectiveList, Orientation};
use crate::layout::grid::ResolvedGrid;
use crate::types::session::Session;


/// Size of the new pane, in percent of the region being split, when
/// carving division `idx` out of `total` equal divisions.
///
/// `percent_of(1, 4) == 75`, `percent_of(2, 4) == 66`, `percent_of(3, 4) == 50`.
pub fn percent_of(idx: usize, total: usize) -> u32 {
    let remain = total.saturating_sub(idx);
    (remain * 100 / (remain + 1)) as u32
}


/// Emit the directives that reproduce `grid` and start each pane's commands.
///
/// Order: mouse option, row splits, per-row column splits, then for each
/// occupied cell a select followed by that pane's commands, and finally
/// the synchronize-panes option.
pub fn build(session: &Session, grid: &ResolvedGrid, cwd: &str) -> DirectiveList {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut list = DirectiveList::new();

    if session.mouse {
        list.push(Directive::enable_mouse());
    }

    for row in 1..rows {
        list.push(Directive::SplitWindow {
            orientation: Orientation::Vertical,
            percent: percent_of(row, rows),
            cwd: cwd.to_string(),
        });
    }

    for row in 0..rows {
        for col in 1..cols {
            list.push(Directive::SelectPane {
                index: grid.flat_index(row, col) - 1,
            });
            list.push(Directive::SplitWindow {
                orientation: Orientation::Horizontal,
                percent: percent_of(col, cols),
                cwd: cwd.to_string(),
            });
        }
    }

    for (row, col, pane_idx) in grid.occupied() {
        list.push(Directive::SelectPane {
            index: grid.flat_index(row, col),
        });
        list.extend(session.panes[pane_idx].commands().iter().cloned());
    }

    if session.sync {
        list.push(Directive::synchronize_panes());
    }

    debug!(rows, cols, directives = list.as_slice().len(), "built directive sequence");
    list
}
