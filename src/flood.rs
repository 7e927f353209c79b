//! Level-by-level flood fill that records every intermediate grid.
//!
//! Each BFS wave is repainted in one batch and captured as a snapshot, so a
//! caller can play the snapshots back to animate the fill spreading out from
//! the clicked cell.

use rustc_hash::FxHashSet;
use serde::Serialize;
use tracing::debug;

use crate::grid::{Grid, neighbors4};

/// Ordered fill states. `snapshots[0]` is the grid before the fill and the
/// last entry is the fully resolved grid; never empty.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FloodFill<C> {
    pub snapshots: Vec<Grid<C>>,
}

impl<C: Clone + PartialEq> FloodFill<C> {
    fn unchanged(grid: &Grid<C>) -> Self {
        Self {
            snapshots: vec![grid.clone()],
        }
    }

    /// Number of repaint waves (snapshots after the first).
    pub fn levels(&self) -> usize {
        self.snapshots.len() - 1
    }

    pub fn initial_grid(&self) -> &Grid<C> {
        &self.snapshots[0]
    }

    pub fn final_grid(&self) -> &Grid<C> {
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// `(row, col)` of every cell that differs between first and last snapshot.
    pub fn changed_cells(&self) -> Vec<(usize, usize)> {
        let (first, last) = (self.initial_grid(), self.final_grid());
        first
            .cells()
            .iter()
            .zip(last.cells())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| first.pos(i))
            .collect()
    }
}

/// Repaint the 4-connected region of the start cell's color to `target`,
/// one BFS level per snapshot.
///
/// Out-of-range starts, the empty grid, and a start already painted `target`
/// all return a single unchanged snapshot. The input grid is never modified.
pub fn flood_fill<C: Clone + PartialEq>(
    grid: &Grid<C>,
    row: isize,
    col: isize,
    target: &C,
) -> FloodFill<C> {
    let Some(start) = grid.checked_idx(row, col) else {
        return FloodFill::unchanged(grid);
    };
    let original = grid.cell(start).clone();
    if original == *target {
        return FloodFill::unchanged(grid);
    }

    let (rows, cols) = grid.dimensions();
    let mut visited = FxHashSet::default();
    visited.insert(start);
    let mut level = vec![start];
    let mut current = grid.clone();
    let mut snapshots = vec![grid.clone()];
    let mut repainted = 0;

    while !level.is_empty() {
        let paint: Vec<usize> = level
            .into_iter()
            .filter(|&i| *current.cell(i) == original)
            .collect();
        if paint.is_empty() {
            break;
        }

        current = current.with_cells(&paint, target);
        snapshots.push(current.clone());
        repainted += paint.len();

        let mut next = Vec::new();
        for &i in &paint {
            let (r, c) = current.pos(i);
            for (nr, nc) in neighbors4(r, c, rows, cols) {
                let ni = current.idx(nr, nc);
                if visited.insert(ni) {
                    next.push(ni);
                }
            }
        }
        level = next;
    }

    debug!(
        row,
        col,
        levels = snapshots.len() - 1,
        repainted,
        "flood fill resolved"
    );

    FloodFill { snapshots }
}
