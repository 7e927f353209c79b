use rand::Rng;

use crate::color::Color;
use crate::rng::pick;

use super::Territory;

/// How many territories to seed. Interpolates linearly from the full cell
/// count at organicness 0 down to `max(2, floor(sqrt(n) / 2))` at 100,
/// clamped to `[1, n]`.
pub fn territory_count(rows: usize, cols: usize, organicness: u32) -> usize {
    let n = rows * cols;
    if n == 0 {
        return 0;
    }
    let min = ((n as f64).sqrt() / 2.0).floor().max(2.0);
    let t = f64::from(100 - organicness.min(100)) / 100.0;
    let count = (min + (n as f64 - min) * t).floor() as usize;
    count.clamp(1, n)
}

/// Drop `count` seeds at uniformly random cells, each with a random palette
/// color. A seed landing on an already seeded cell is skipped.
pub fn place_seeds<R: Rng + ?Sized>(
    cells: &mut [Option<Color>],
    rows: usize,
    cols: usize,
    count: usize,
    palette: &[Color],
    rng: &mut R,
) -> Vec<Territory> {
    let mut territories = Vec::with_capacity(count);
    for _ in 0..count {
        let r = rng.gen_range(0..rows);
        let c = rng.gen_range(0..cols);
        let color = *pick(rng, palette);
        let i = r * cols + c;
        if cells[i].is_some() {
            continue;
        }
        cells[i] = Some(color);
        territories.push(Territory::seeded(color, i));
    }
    territories
}
