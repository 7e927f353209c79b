use serde::{Serialize, Serializer};

/// Row-major flat grid of color tokens. No per-cell objects.
///
/// A grid is a value: every "modifying" operation returns a new grid and the
/// receiver is left untouched. Storage is owned per instance, so two grids
/// never share cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<C> {
    data: Vec<C>,
    rows: usize,
    cols: usize,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl<C> Grid<C> {
    /// The degenerate 0x0 grid.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Build from a nested row sequence. Rows must all be the same length.
    /// Zero rows yields the empty grid; rows of zero length keep their count.
    pub fn from_rows(rows: Vec<Vec<C>>) -> Result<Self, GridError> {
        let Some(cols) = rows.first().map(Vec::len) else {
            return Ok(Self::empty());
        };
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found: r.len(),
            });
        }
        let n = rows.len();
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            rows: n,
            cols,
        })
    }

    /// Build from flat row-major cells. `data.len()` must equal `rows * cols`.
    pub(crate) fn from_flat(rows: usize, cols: usize, data: Vec<C>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        if rows == 0 {
            return Self::empty();
        }
        Self { data, rows, cols }
    }

    /// `(rows, cols)`; `(0, 0)` for the empty grid, `(n, 0)` for `n` empty rows.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// No cells. True for zero rows and for rows of zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn is_valid_position(&self, row: isize, col: isize) -> bool {
        self.checked_idx(row, col).is_some()
    }

    /// Flat index for a signed position, `None` when out of range.
    #[inline]
    pub fn checked_idx(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (r, c) = (row as usize, col as usize);
        (r < self.rows && c < self.cols).then(|| self.idx(r, c))
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Inverse of [`Grid::idx`].
    #[inline]
    pub fn pos(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// Color at `(row, col)`, or `None` for any position outside the grid.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Option<&C> {
        self.checked_idx(row, col).map(|i| &self.data[i])
    }

    #[inline]
    pub fn cell(&self, idx: usize) -> &C {
        &self.data[idx]
    }

    pub fn cells(&self) -> &[C] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[C] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Yields `rows` slices, empty ones when `cols == 0`.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[C]> {
        (0..self.rows).map(move |r| self.row(r))
    }
}

impl<C: Clone> Grid<C> {
    pub fn filled(rows: usize, cols: usize, color: C) -> Self {
        Self::from_flat(rows, cols, vec![color; rows * cols])
    }

    /// New grid equal to `self` except at `(row, col)`.
    /// An invalid position returns an unchanged copy.
    pub fn with_color(&self, row: isize, col: isize, color: C) -> Self {
        let mut out = self.clone();
        if let Some(i) = self.checked_idx(row, col) {
            out.data[i] = color;
        }
        out
    }

    /// New grid with every listed flat index set to `color`.
    pub fn with_cells(&self, cells: &[usize], color: &C) -> Self {
        let mut out = self.clone();
        for &i in cells {
            out.data[i] = color.clone();
        }
        out
    }

    pub fn to_rows(&self) -> Vec<Vec<C>> {
        self.iter_rows().map(<[C]>::to_vec).collect()
    }
}

/// Serializes as nested rows, the shape callers hand in.
impl<C: Serialize> Serialize for Grid<C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.iter_rows())
    }
}

/// 4-connected in-bounds neighbors (up, down, left, right). No wrapping.
pub fn neighbors4(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    let mut out = [(0usize, 0usize); 4];
    let mut n = 0;
    for (dr, dc) in offsets {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
            out[n] = (r as usize, c as usize);
            n += 1;
        }
    }
    out.into_iter().take(n)
}
