//! The table of partial-match scores between prefixes of two sequences.

use core::fmt;

use crate::Recurrence;

/// A table of partial-match scores between prefixes of two sequences.
///
/// The table has one row per prefix of the target and one column per prefix
/// of the source, so it is `(target.len() + 1) x (source.len() + 1)`. The
/// value at `(i, j)` scores the first `i` symbols of the target against the
/// first `j` symbols of the source. Row 0 and column 0 are always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentTable {
    /// The rows of the table; every row has the same length.
    rows: Vec<Vec<usize>>,
}

impl AlignmentTable {
    /// Computes the table for two sequences.
    ///
    /// # Arguments
    ///
    /// * `source` - The sequence along the columns.
    /// * `target` - The sequence along the rows.
    /// * `recurrence` - How each cell is derived from its neighbours.
    pub fn new<T: PartialEq>(source: &[T], target: &[T], recurrence: Recurrence) -> Self {
        // The first row and column stay zero: an empty prefix matches nothing.
        let mut rows = vec![vec![0; source.len() + 1]; target.len() + 1];

        for (i, y) in target.iter().enumerate() {
            for (j, x) in source.iter().enumerate() {
                let base = rows[i][j + 1].max(rows[i + 1][j]);
                rows[i + 1][j + 1] = if x == y {
                    match recurrence {
                        Recurrence::Reference => base + 1,
                        Recurrence::Canonical => rows[i][j] + 1,
                    }
                } else {
                    base
                };
            }
        }

        Self { rows }
    }

    /// The rows of the table.
    #[must_use]
    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    /// The number of rows, one more than the length of the target.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// The number of columns, one more than the length of the source.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// The score at `(row, col)`, or `None` outside the table.
    ///
    /// `None` compares below every score, so it acts as negative infinity when
    /// neighbouring cells are compared.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// The score of the terminal cell, for the full sequences.
    #[must_use]
    pub fn score(&self) -> usize {
        self.rows.last().and_then(|r| r.last()).map_or(0, |&s| s)
    }
}

impl fmt::Display for AlignmentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            write!(f, "{i}:")?;
            for v in row {
                write!(f, " {v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn boundary() {
        let table = AlignmentTable::new(&chars("AB"), &chars("B"), Recurrence::Reference);

        let expected: Vec<Vec<usize>> = vec![vec![0, 0, 0], vec![0, 0, 1]];
        assert_eq!(table.rows(), expected.as_slice());
        assert_eq!((table.n_rows(), table.n_cols()), (2, 3));
        assert_eq!(table.score(), 1);
    }

    #[test]
    fn reference_corpus() {
        let table = AlignmentTable::new(&chars("AGCAT"), &chars("GAC"), Recurrence::Reference);

        #[rustfmt::skip]
        let expected: Vec<Vec<usize>> = vec![
            vec![0, 0, 0, 0, 0, 0],
            vec![0, 0, 1, 1, 1, 1],
            vec![0, 1, 1, 1, 2, 2],
            vec![0, 1, 1, 2, 2, 2],
        ];
        assert_eq!(table.rows(), expected.as_slice());
        assert_eq!(table.to_string(), "0: 0 0 0 0 0 0\n1: 0 0 1 1 1 1\n2: 0 1 1 1 2 2\n3: 0 1 1 2 2 2\n");
    }

    #[test]
    fn recurrences_disagree() {
        let (source, target) = (chars("AA"), chars("A"));

        let reference = AlignmentTable::new(&source, &target, Recurrence::Reference);
        let canonical = AlignmentTable::new(&source, &target, Recurrence::Canonical);

        assert_eq!(reference.rows()[1], vec![0, 1, 2]);
        assert_eq!(canonical.rows()[1], vec![0, 1, 1]);
        assert_eq!(reference.score(), 2);
        assert_eq!(canonical.score(), 1);
    }

    #[test]
    fn canonical_is_lcs_length() {
        let table = AlignmentTable::new(&chars("NAJIBPEPPERSEATS"), &chars("NAJIBEATSPEPPERS"), Recurrence::Canonical);
        // "NAJIB" followed by "PEPPERS".
        assert_eq!(table.score(), 12);
    }

    #[test]
    fn empty() {
        let table = AlignmentTable::new::<char>(&[], &[], Recurrence::Reference);
        assert_eq!(table.rows(), &[vec![0]]);
        assert_eq!(table.score(), 0);

        let table = AlignmentTable::new(&chars("ABC"), &[], Recurrence::Reference);
        assert_eq!((table.n_rows(), table.n_cols()), (1, 4));
        assert!(table.rows()[0].iter().all(|&v| v == 0));
    }

    #[test]
    fn out_of_range() {
        let table = AlignmentTable::new(&chars("AB"), &chars("B"), Recurrence::Reference);
        assert_eq!(table.get(1, 2), Some(1));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(0, 3), None);
        assert!(table.get(2, 0) < table.get(0, 0));
    }
}
