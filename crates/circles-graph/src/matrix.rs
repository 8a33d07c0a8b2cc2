//! Dense square weight storage.
//!
//! The matrix is stored as a single row-major `Vec<u32>` of `size * size`
//! cells. Indexing goes through [`WeightMatrix::get`] and
//! [`WeightMatrix::row`], which panic on out-of-range indices; callers in
//! this crate validate member indices before touching the matrix.

/// An `n × n` table of edge weights where `0` means "no edge".
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeightMatrix {
    size: usize,
    cells: Vec<u32>,
}

impl WeightMatrix {
    /// Allocate a zero-filled `size × size` matrix.
    ///
    /// `size` must not exceed [`MAX_MEMBERS`](crate::network::MAX_MEMBERS).
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Side length of the matrix.
    pub(crate) fn size(&self) -> usize {
        self.size
    }

    /// Weight stored at `(row, col)`.
    pub(crate) fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[self.offset(row, col)]
    }

    /// Write `weight` into both `(a, b)` and `(b, a)`, returning the old value.
    pub(crate) fn set_symmetric(&mut self, a: usize, b: usize, weight: u32) -> u32 {
        let ab = self.offset(a, b);
        let ba = self.offset(b, a);
        let previous = self.cells[ab];
        self.cells[ab] = weight;
        self.cells[ba] = weight;
        previous
    }

    /// Borrow one row of the matrix.
    pub(crate) fn row(&self, row: usize) -> &[u32] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over all rows in index order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &[u32]> {
        // chunks_exact panics on a zero chunk size; an empty matrix has no rows.
        self.cells.chunks_exact(self.size.max(1))
    }

    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} matrix",
            self.size
        );
        row * self.size + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroed_has_no_edges() {
        let matrix = WeightMatrix::zeroed(3);
        assert_eq!(matrix.size(), 3);
        assert!(matrix.rows().all(|row| row.iter().all(|&w| w == 0)));
        assert_eq!(matrix.rows().count(), 3);
    }

    #[test]
    fn test_set_symmetric_writes_both_cells() {
        let mut matrix = WeightMatrix::zeroed(4);
        let previous = matrix.set_symmetric(1, 3, 7);

        assert_eq!(previous, 0);
        assert_eq!(matrix.get(1, 3), 7);
        assert_eq!(matrix.get(3, 1), 7);
        assert_eq!(matrix.row(1), &[0, 0, 0, 7]);
        assert_eq!(matrix.row(3), &[0, 7, 0, 0]);
    }

    #[test]
    fn test_set_symmetric_returns_replaced_weight() {
        let mut matrix = WeightMatrix::zeroed(2);
        matrix.set_symmetric(0, 1, 5);
        assert_eq!(matrix.set_symmetric(1, 0, 9), 5);
        assert_eq!(matrix.get(0, 1), 9);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 matrix")]
    fn test_set_symmetric_out_of_range_panics() {
        let mut matrix = WeightMatrix::zeroed(2);
        matrix.set_symmetric(0, 2, 1);
    }
}
