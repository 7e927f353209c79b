//! Procedural starting grids: colored territories grown from random seeds.
//!
//! Stages:
//! 1. [`seed`] places `territory_count` single-cell territories.
//! 2. [`grow`] expands them ring by ring with noise-biased admission.
//! 3. [`inherit`] colors whatever growth left unclaimed.
//!
//! Organicness 0 skips all of this and paints independent per-cell noise.

pub mod grow;
pub mod inherit;
pub mod seed;

use rand::{Rng, RngCore};
use tracing::debug;

use crate::color::Color;
use crate::config::{GeneratorParams, ParamsError};
use crate::grid::{Grid, neighbors4};
use crate::rng::pick;

/// A region growing from one seed cell. Cells are packed `row * cols + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Territory {
    pub color: Color,
    pub cells: Vec<usize>,
    /// Cells claimed last iteration whose neighbors are still to be tried.
    pub frontier: Vec<usize>,
}

impl Territory {
    pub fn seeded(color: Color, cell: usize) -> Self {
        Self {
            color,
            cells: vec![cell],
            frontier: vec![cell],
        }
    }

    /// No more growth possible.
    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.frontier.is_empty()
    }
}

/// Generate a `rows x cols` grid with default params.
///
/// `organicness` runs 0..=100. Zero dimensions or organicness above 100
/// yield the empty grid.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    organicness: u32,
    rng: &mut R,
) -> Grid<Color> {
    build(rows, cols, organicness, &GeneratorParams::default(), rng)
}

/// Like [`generate`], with explicit tuning params.
pub fn generate_with<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    organicness: u32,
    params: &GeneratorParams,
    rng: &mut R,
) -> Result<Grid<Color>, ParamsError> {
    params.validate()?;
    Ok(build(rows, cols, organicness, params, rng))
}

fn build<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    organicness: u32,
    params: &GeneratorParams,
    rng: &mut R,
) -> Grid<Color> {
    if rows == 0 || cols == 0 || organicness > 100 {
        return Grid::empty();
    }
    let n = rows * cols;

    if organicness == 0 {
        let data = (0..n).map(|_| *pick(rng, &params.palette)).collect();
        return Grid::from_flat(rows, cols, data);
    }

    // One noise seed per call so every admission roll samples the same field
    let noise_seed = rng.next_u32();
    let mut cells: Vec<Option<Color>> = vec![None; n];

    let count = seed::territory_count(rows, cols, organicness);
    let mut territories = seed::place_seeds(&mut cells, rows, cols, count, &params.palette, rng);
    let iterations = grow::grow_territories(
        &mut territories,
        &mut cells,
        rows,
        cols,
        organicness,
        noise_seed,
        params,
        rng,
    );
    let unclaimed = cells.iter().filter(|c| c.is_none()).count();
    let fallbacks =
        inherit::fill_unclaimed(&mut cells, rows, cols, params.inherit_radius, &params.palette, rng);

    debug!(
        rows,
        cols,
        organicness,
        territories = territories.len(),
        iterations,
        unclaimed,
        fallbacks,
        "generated territory grid"
    );

    let data: Vec<Color> = cells.into_iter().flatten().collect();
    Grid::from_flat(rows, cols, data)
}

/// Number of 4-connected single-color regions.
pub fn region_count<C: PartialEq>(grid: &Grid<C>) -> usize {
    let (rows, cols) = grid.dimensions();
    let mut seen = vec![false; rows * cols];
    let mut stack = Vec::new();
    let mut regions = 0;

    for start in 0..rows * cols {
        if seen[start] {
            continue;
        }
        regions += 1;
        seen[start] = true;
        stack.push(start);
        while let Some(i) = stack.pop() {
            let (r, c) = grid.pos(i);
            for (nr, nc) in neighbors4(r, c, rows, cols) {
                let ni = grid.idx(nr, nc);
                if !seen[ni] && grid.cell(ni) == grid.cell(start) {
                    seen[ni] = true;
                    stack.push(ni);
                }
            }
        }
    }

    regions
}
