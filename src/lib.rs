pub mod color;
pub mod config;
pub mod direction;
pub mod flood;
pub mod grid;
pub mod noise;
pub mod render;
pub mod rng;
pub mod territory;

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

pub use color::Color;
pub use config::{GeneratorParams, ParamsError};
pub use direction::Direction;
pub use flood::{FloodFill, flood_fill};
pub use grid::{Grid, GridError};
pub use territory::{generate, generate_with};

/// A repaint request: start cell and the color to spread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Click {
    pub row: isize,
    pub col: isize,
    pub color: Color,
}

/// Result of one click on a generated grid.
#[derive(Debug, Serialize)]
pub struct Repaint {
    pub row: isize,
    pub col: isize,
    pub color: Color,
    pub direction: Direction,
    pub snapshots: Vec<Grid<Color>>,
}

#[derive(Debug, Serialize)]
pub struct Session {
    pub rows: usize,
    pub cols: usize,
    pub organicness: u32,
    pub grid: Grid<Color>,
    pub repaint: Option<Repaint>,
}

pub struct Timing {
    pub name: &'static str,
    pub ms: f64,
}

/// Generate a grid, then apply `click` to it if given.
pub fn run<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    organicness: u32,
    params: &GeneratorParams,
    click: Option<Click>,
    rng: &mut R,
) -> Result<(Session, Vec<Timing>), ParamsError> {
    let mut timings = Vec::new();
    let total_start = Instant::now();

    let t = Instant::now();
    let grid = generate_with(rows, cols, organicness, params, rng)?;
    timings.push(Timing {
        name: "generate",
        ms: t.elapsed().as_secs_f64() * 1000.0,
    });

    let repaint = click.map(|Click { row, col, color }| {
        let t = Instant::now();
        let FloodFill { snapshots } = flood_fill(&grid, row, col, &color);
        timings.push(Timing {
            name: "flood_fill",
            ms: t.elapsed().as_secs_f64() * 1000.0,
        });
        Repaint {
            row,
            col,
            color,
            direction: Direction::classify(row, col, grid.rows(), grid.cols()),
            snapshots,
        }
    });

    timings.push(Timing {
        name: "TOTAL",
        ms: total_start.elapsed().as_secs_f64() * 1000.0,
    });

    let session = Session {
        rows,
        cols,
        organicness,
        grid,
        repaint,
    };

    Ok((session, timings))
}
