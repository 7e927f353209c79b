use rayon::prelude::*;

use crate::color::Color;
use crate::grid::Grid;

const GAP: [u8; 4] = [24, 24, 28, 255];

/// RGBA buffer plus its pixel size.
pub struct Image {
    pub rgba: Vec<u8>,
    pub w: usize,
    pub h: usize,
}

/// Render each grid cell as a `cell x cell` block.
pub fn render_grid(grid: &Grid<Color>, cell: usize) -> Image {
    let cell = cell.max(1);
    let w = grid.cols() * cell;
    let h = grid.rows() * cell;
    let mut rgba = vec![0u8; w * h * 4];
    if w == 0 {
        return Image { rgba, w, h };
    }

    rgba.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, row)| {
            let cells = grid.row(y / cell);
            for x in 0..w {
                let color = cells[x / cell].rgba();
                row[x * 4..x * 4 + 4].copy_from_slice(&color);
            }
        });

    Image { rgba, w, h }
}

/// Contact sheet: every snapshot side by side, separated by `gap` pixels.
pub fn render_strip(snapshots: &[Grid<Color>], cell: usize, gap: usize) -> Image {
    let frames: Vec<Image> = snapshots.par_iter().map(|g| render_grid(g, cell)).collect();
    let fw = frames.iter().map(|f| f.w).max().unwrap_or(0);
    let fh = frames.iter().map(|f| f.h).max().unwrap_or(0);
    if fw == 0 || fh == 0 {
        return Image {
            rgba: Vec::new(),
            w: 0,
            h: 0,
        };
    }
    let w = frames.len() * fw + frames.len().saturating_sub(1) * gap;
    let h = fh;

    let mut rgba = vec![0u8; w * h * 4];
    rgba.par_chunks_mut(w * 4)
        .enumerate()
        .for_each(|(y, row)| {
            for px in row.chunks_exact_mut(4) {
                px.copy_from_slice(&GAP);
            }
            for (k, f) in frames.iter().enumerate() {
                if y >= f.h {
                    continue;
                }
                let x0 = k * (fw + gap);
                let src = &f.rgba[y * f.w * 4..(y + 1) * f.w * 4];
                row[x0 * 4..(x0 + f.w) * 4].copy_from_slice(src);
            }
        });

    Image { rgba, w, h }
}
