use rand::Rng;

use crate::color::Color;
use crate::config::GeneratorParams;
use crate::grid::neighbors4;
use crate::noise::value_noise;

use super::Territory;

/// Grow every territory ring by ring until all frontiers are empty or
/// `rows * cols` iterations have run. Returns the number of iterations.
///
/// Each unclaimed 4-neighbor of a frontier cell is admitted with a
/// noise-modulated probability. Admitted cells are claimed immediately, so
/// territories later in the same iteration see them as taken.
pub fn grow_territories<R: Rng + ?Sized>(
    territories: &mut [Territory],
    cells: &mut [Option<Color>],
    rows: usize,
    cols: usize,
    organicness: u32,
    noise_seed: u32,
    params: &GeneratorParams,
    rng: &mut R,
) -> usize {
    let max_iterations = rows * cols;
    let mut iterations = 0;

    while iterations < max_iterations && territories.iter().any(|t| !t.is_sealed()) {
        for t in territories.iter_mut().filter(|t| !t.is_sealed()) {
            let frontier = std::mem::take(&mut t.frontier);
            for &i in &frontier {
                for (nr, nc) in neighbors4(i / cols, i % cols, rows, cols) {
                    let ni = nr * cols + nc;
                    if cells[ni].is_some() {
                        continue;
                    }
                    let noise = value_noise(
                        nr as f32 * params.noise_scale,
                        nc as f32 * params.noise_scale,
                        noise_seed,
                    );
                    if rng.gen_bool(params.growth_probability(noise, organicness)) {
                        cells[ni] = Some(t.color);
                        t.cells.push(ni);
                        t.frontier.push(ni);
                    }
                }
            }
        }
        iterations += 1;
    }

    iterations
}
