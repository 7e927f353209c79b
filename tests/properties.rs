//! Property-based checks for flood fill and generation invariants.

use std::collections::{BTreeSet, VecDeque};
use std::ops::Range;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use wavefill::{Grid, flood_fill, generate};

// ===========================================================================
// Generators
// ===========================================================================

/// Small grids over a 3-token alphabet so regions actually form.
fn arb_grid_sized(dims: Range<usize>) -> impl Strategy<Value = Grid<u8>> {
    (dims.clone(), dims).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(0..3u8, cols), rows)
            .prop_map(|rows| Grid::from_rows(rows).unwrap())
    })
}

/// Includes the 0x0 grid and zero-length rows.
fn arb_grid() -> impl Strategy<Value = Grid<u8>> {
    arb_grid_sized(0..8)
}

/// Non-empty grid plus a valid start cell.
fn arb_grid_with_start() -> impl Strategy<Value = (Grid<u8>, usize, usize)> {
    arb_grid_sized(1..8).prop_flat_map(|g| {
        let (rows, cols) = g.dimensions();
        (Just(g), 0..rows, 0..cols)
    })
}

fn component(grid: &Grid<u8>, start: (usize, usize)) -> BTreeSet<(usize, usize)> {
    let (rows, cols) = grid.dimensions();
    let color = grid.cell(grid.idx(start.0, start.1));
    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some((r, c)) = queue.pop_front() {
        for (nr, nc) in wavefill::grid::neighbors4(r, c, rows, cols) {
            if grid.cell(grid.idx(nr, nc)) == color && seen.insert((nr, nc)) {
                queue.push_back((nr, nc));
            }
        }
    }
    seen
}

fn changed(a: &Grid<u8>, b: &Grid<u8>) -> BTreeSet<usize> {
    a.cells()
        .iter()
        .zip(b.cells())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The caller's grid is identical before and after a fill.
    #[test]
    fn fill_never_mutates_input(g in arb_grid(), r in 0..8isize, c in 0..8isize, t in 0..4u8) {
        let before = g.clone();
        let _ = flood_fill(&g, r, c, &t);
        prop_assert_eq!(g, before);
    }

    /// Exactly the start cell's 4-connected same-color component changes.
    #[test]
    fn fill_changes_exactly_the_component((g, r, c) in arb_grid_with_start(), t in 3..5u8) {
        let fill = flood_fill(&g, r as isize, c as isize, &t);
        let expected = component(&g, (r, c));
        let actual: BTreeSet<_> = fill.changed_cells().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    /// Each snapshot's changed set contains the previous one's.
    #[test]
    fn snapshots_grow_monotonically(g in arb_grid(), r in 0..8isize, c in 0..8isize, t in 0..4u8) {
        let fill = flood_fill(&g, r, c, &t);
        prop_assert_eq!(&fill.snapshots[0], &g);
        let sets: Vec<_> = fill.snapshots.iter().map(|s| changed(&g, s)).collect();
        for w in sets.windows(2) {
            prop_assert!(w[0].is_subset(&w[1]));
            prop_assert!(w[0].len() < w[1].len());
        }
    }

    /// Invalid starts and no-op targets give one unchanged snapshot.
    #[test]
    fn degenerate_fills_return_single_snapshot(g in arb_grid(), r in -20..20isize, c in -20..20isize) {
        let fill = if g.is_valid_position(r, c) {
            let same = *g.get(r, c).unwrap();
            flood_fill(&g, r, c, &same)
        } else {
            flood_fill(&g, r, c, &9)
        };
        prop_assert_eq!(fill.snapshots, vec![g]);
    }

    /// Grids without cells pass through unchanged, keeping their row count.
    #[test]
    fn cell_free_grids_pass_through(rows in 0..8usize, r in -4..4isize, c in -4..4isize, t in 0..4u8) {
        let g = Grid::<u8>::from_rows(vec![vec![]; rows]).unwrap();
        let fill = flood_fill(&g, r, c, &t);
        prop_assert_eq!(fill.snapshots.len(), 1);
        prop_assert_eq!(fill.snapshots[0].dimensions(), (rows, 0));
        prop_assert_eq!(fill.snapshots[0].to_rows().len(), rows);
    }

    /// Any in-range organicness fills the exact shape with palette colors.
    #[test]
    fn generated_grids_are_complete(rows in 1..25usize, cols in 1..25usize, o in 0..=100u32, seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let g = generate(rows, cols, o, &mut rng);
        prop_assert_eq!(g.dimensions(), (rows, cols));
        prop_assert_eq!(g.cells().len(), rows * cols);
        let palette = wavefill::color::DEFAULT_PALETTE;
        prop_assert!(g.cells().iter().all(|c| palette.contains(c)));
    }

    /// Same seed, same grid.
    #[test]
    fn generation_is_reproducible(rows in 1..16usize, cols in 1..16usize, o in 0..=100u32, seed in any::<u64>()) {
        let a = generate(rows, cols, o, &mut ChaCha8Rng::seed_from_u64(seed));
        let b = generate(rows, cols, o, &mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
