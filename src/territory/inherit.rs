use rand::Rng;

use crate::color::Color;
use crate::rng::pick;

/// Window offsets within Chebyshev `radius`, nearest first by Manhattan
/// distance, ties broken row-major.
fn ranked_offsets(radius: usize) -> Vec<(isize, isize)> {
    let r = radius as isize;
    let mut offsets: Vec<(isize, isize)> = (-r..=r)
        .flat_map(|dr| (-r..=r).map(move |dc| (dr, dc)))
        .filter(|&o| o != (0, 0))
        .collect();
    offsets.sort_by_key(|&(dr, dc)| (dr.abs() + dc.abs(), dr, dc));
    offsets
}

/// Color every unclaimed cell from its nearest claimed neighbor inside the
/// window, or a random palette color when the window is empty. Cells are
/// visited row-major and see colors inherited earlier in the same pass.
/// Returns the number of cells that fell back to a random color.
pub fn fill_unclaimed<R: Rng + ?Sized>(
    cells: &mut [Option<Color>],
    rows: usize,
    cols: usize,
    radius: usize,
    palette: &[Color],
    rng: &mut R,
) -> usize {
    let offsets = ranked_offsets(radius);
    let mut fallbacks = 0;

    for i in 0..rows * cols {
        if cells[i].is_some() {
            continue;
        }
        let (r, c) = ((i / cols) as isize, (i % cols) as isize);
        let inherited = offsets.iter().find_map(|&(dr, dc)| {
            let (nr, nc) = (r + dr, c + dc);
            if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize {
                return None;
            }
            cells[nr as usize * cols + nc as usize]
        });
        cells[i] = Some(match inherited {
            Some(color) => color,
            None => {
                fallbacks += 1;
                *pick(rng, palette)
            }
        });
    }

    fallbacks
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const A: Color = Color::rgb(10, 0, 0);
    const B: Color = Color::rgb(0, 10, 0);

    #[test]
    fn offsets_are_ranked_by_manhattan_distance() {
        let o = ranked_offsets(2);
        assert_eq!(o.len(), 24);
        assert_eq!(&o[..4], &[(-1, 0), (0, -1), (0, 1), (1, 0)]);
        assert_eq!(o.last(), Some(&(2, 2)));
    }

    #[test]
    fn nearest_colored_cell_wins() {
        // (0,0) has B one step below and A two steps right
        let mut cells = vec![
            None, None, Some(A),
            Some(B), None, None,
            None, None, None,
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let fallbacks = fill_unclaimed(&mut cells, 3, 3, 2, &[A], &mut rng);
        assert_eq!(fallbacks, 0);
        let expected = [B, B, A, B, B, A, B, B, A].map(Some);
        assert_eq!(cells, expected);
    }

    #[test]
    fn empty_window_falls_back_to_palette() {
        let mut cells = vec![None; 4];
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let fallbacks = fill_unclaimed(&mut cells, 1, 4, 2, &[B], &mut rng);
        // first cell has nothing in range, the rest inherit from it
        assert_eq!(fallbacks, 1);
        assert!(cells.iter().all(|c| *c == Some(B)));
    }
}
