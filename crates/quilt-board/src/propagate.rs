//! Constraint propagation: an arc-consistency worklist over the grid.

use std::collections::VecDeque;

use smallvec::SmallVec;

use quilt_core::{Catalog, Direction};

use crate::cell::Cell;

/// What one propagation pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct PropagationOutcome {
    /// Domain entries removed across all narrowed cells.
    pub(crate) reductions: u64,
    /// Cells popped from the worklist.
    pub(crate) visited: u64,
    /// Position of the first domain reduced to empty, if any.
    pub(crate) emptied: Option<(usize, usize)>,
}

/// Run the constraint-narrowing fixed point seeded from `seeds`.
///
/// For each cell taken off the worklist, every in-bounds neighbor's
/// domain is narrowed to the variants that still have at least one
/// compatible counterpart in the processed cell's domain for the shared
/// edge. Neighbors that changed are enqueued in turn; the sweep ends
/// when the worklist drains or some domain empties. Domains only
/// shrink, so termination is guaranteed.
///
/// Collapsed cells are narrowed like any other: a collapsed cell losing
/// its last variant is exactly how a contradiction against settled
/// tiles is detected.
pub(crate) fn propagate(
    cells: &mut [Cell],
    width: usize,
    height: usize,
    catalog: &dyn Catalog,
    seeds: impl IntoIterator<Item = usize>,
) -> PropagationOutcome {
    let mut outcome = PropagationOutcome::default();
    let mut queue: VecDeque<usize> = VecDeque::new();
    let mut queued = vec![false; cells.len()];

    for seed in seeds {
        if !queued[seed] {
            queued[seed] = true;
            queue.push_back(seed);
        }
    }

    while let Some(idx) = queue.pop_front() {
        queued[idx] = false;
        outcome.visited += 1;

        // Take the domain out so the neighbors can be narrowed against
        // it while the slice is mutably borrowed.
        let domain = std::mem::take(&mut cells[idx].domain);
        let (row, col) = (cells[idx].row, cells[idx].col);

        for (dir, nb_idx) in neighbors(row, col, width, height) {
            let neighbor = &mut cells[nb_idx];
            let before = neighbor.domain.len();
            neighbor
                .domain
                .retain(|&v| domain.iter().any(|&u| catalog.compatible(u, v, dir)));
            let removed = before - neighbor.domain.len();
            if removed == 0 {
                continue;
            }
            outcome.reductions += removed as u64;
            if neighbor.domain.is_empty() {
                outcome.emptied = Some((neighbor.row, neighbor.col));
                cells[idx].domain = domain;
                return outcome;
            }
            if !queued[nb_idx] {
                queued[nb_idx] = true;
                queue.push_back(nb_idx);
            }
        }

        cells[idx].domain = domain;
    }

    outcome
}

/// In-bounds neighbors of `(row, col)` as `(direction, row-major
/// index)` pairs, in N/E/S/W order. Boundary cells simply yield fewer
/// entries.
fn neighbors(
    row: usize,
    col: usize,
    width: usize,
    height: usize,
) -> SmallVec<[(Direction, usize); 4]> {
    let mut result = SmallVec::new();
    for dir in Direction::ALL {
        let (dr, dc) = dir.offset();
        let nr = row as i64 + dr;
        let nc = col as i64 + dc;
        if nr < 0 || nc < 0 || nr >= height as i64 || nc >= width as i64 {
            continue;
        }
        result.push((dir, nr as usize * width + nc as usize));
    }
    result
}
