use serde::{Deserialize, Serialize};

use crate::CellIndex;

/// One candidate winning line: an ordered run of exactly `run_length`
/// collinear cells with a constant step direction.
///
/// Combinations are generated once at [`Table`](crate::Table) construction
/// and never mutated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination(pub Vec<CellIndex>);

impl Combination {
    pub fn cells(&self) -> &[CellIndex] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CellIndex> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for Combination {
    type Target = [CellIndex];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = &'a CellIndex;
    type IntoIter = std::slice::Iter<'a, CellIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Enumerates every winning line on a `size`×`size` grid for the given run
/// length.
///
/// Each direction is windowed: a row of length N holds `N-K+1` runs of K
/// consecutive columns, and the same formula bounds the columns and both
/// diagonal directions. For K ≤ N this yields `N*(N-K+1)` horizontals, the
/// same number of verticals, and `(N-K+1)^2` diagonals per slope.
///
/// Requires `1 <= run_length <= size`, which [`Table::new`](crate::Table::new)
/// has already validated.
pub(crate) fn winning_combinations(size: usize, run_length: usize) -> Vec<Combination> {
    let windows = size - run_length + 1;
    let mut combinations = Vec::with_capacity(2 * size * windows + 2 * windows * windows);

    // Horizontal runs
    for row in 0..size {
        for start in 0..windows {
            combinations.push(Combination(
                (0..run_length).map(|step| (row, start + step)).collect(),
            ));
        }
    }
    // Vertical runs
    for column in 0..size {
        for start in 0..windows {
            combinations.push(Combination(
                (0..run_length).map(|step| (start + step, column)).collect(),
            ));
        }
    }
    // Slope +1 diagonals (down-right)
    for row in 0..windows {
        for column in 0..windows {
            combinations.push(Combination(
                (0..run_length)
                    .map(|step| (row + step, column + step))
                    .collect(),
            ));
        }
    }
    // Slope -1 diagonals (down-left). The start column must leave room for
    // run_length - 1 steps to the left.
    for row in 0..windows {
        for column in (run_length - 1)..size {
            combinations.push(Combination(
                (0..run_length)
                    .map(|step| (row + step, column - step))
                    .collect(),
            ));
        }
    }
    combinations
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::BoardParamsInput;

    fn expected_total(size: usize, run_length: usize) -> usize {
        let windows = size - run_length + 1;
        2 * size * windows + 2 * windows * windows
    }

    #[test]
    fn classic_three_by_three() {
        let combinations = winning_combinations(3, 3);
        assert_eq!(combinations.len(), 8);
        assert!(combinations.contains(&Combination(vec![(0, 0), (0, 1), (0, 2)])));
        assert!(combinations.contains(&Combination(vec![(0, 0), (1, 0), (2, 0)])));
        assert!(combinations.contains(&Combination(vec![(0, 0), (1, 1), (2, 2)])));
        assert!(combinations.contains(&Combination(vec![(0, 2), (1, 1), (2, 0)])));
    }

    #[test]
    fn windowed_counts_for_short_runs() {
        // 4x4 board, run of 3: 8 horizontals, 8 verticals, 4 + 4 diagonals
        let combinations = winning_combinations(4, 3);
        assert_eq!(combinations.len(), 24);
        // The down-left diagonal starting at the top-right corner
        assert!(combinations.contains(&Combination(vec![(0, 3), (1, 2), (2, 1)])));
    }

    quickcheck! {
        fn combinations_have_run_length_in_bounds_cells(input: BoardParamsInput) -> bool {
            let BoardParamsInput { size, run_length } = input;
            winning_combinations(size, run_length).iter().all(|comb| {
                comb.len() == run_length
                    && comb.iter().all(|&(row, column)| row < size && column < size)
            })
        }

        fn combinations_are_collinear_with_constant_step(input: BoardParamsInput) -> bool {
            let BoardParamsInput { size, run_length } = input;
            winning_combinations(size, run_length).iter().all(|comb| {
                if run_length == 1 {
                    return true;
                }
                let (r0, c0) = comb[0];
                let (r1, c1) = comb[1];
                let step = (r1 as isize - r0 as isize, c1 as isize - c0 as isize);
                comb.windows(2).all(|pair| {
                    let (ra, ca) = pair[0];
                    let (rb, cb) = pair[1];
                    (rb as isize - ra as isize, cb as isize - ca as isize) == step
                })
            })
        }

        fn count_formulas_hold(input: BoardParamsInput) -> bool {
            let BoardParamsInput { size, run_length } = input;
            winning_combinations(size, run_length).len() == expected_total(size, run_length)
        }

        fn no_duplicate_combinations_as_sets(input: BoardParamsInput) -> bool {
            let BoardParamsInput { size, run_length } = input;
            if run_length == 1 {
                // All four directions degenerate to single cells, so the
                // windowed counts intentionally repeat them.
                return true;
            }
            let combinations = winning_combinations(size, run_length);
            let as_sets: BTreeSet<BTreeSet<(usize, usize)>> = combinations
                .iter()
                .map(|comb| comb.iter().copied().collect())
                .collect();
            as_sets.len() == combinations.len()
        }
    }
}
