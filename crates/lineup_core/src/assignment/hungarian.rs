//! Maximum-weight bipartite matching
//!
//! Rows are outfield slots, columns are candidate players. The rectangular
//! score matrix is padded to N×N, inverted into a cost matrix
//! (`ceiling - score`) and handed to Kuhn–Munkres in its min-cost form.
//! Costs are converted to fixed-point `i64` because the solver needs a
//! totally ordered weight type.

use crate::config::PaddingFill;
use pathfinding::kuhn_munkres::kuhn_munkres_min;
use pathfinding::matrix::Matrix;

/// Fixed-point scale for score → cost conversion (1e-9 resolution)
pub const COST_SCALE: f64 = 1e9;

/// Dense row-major R×C score matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl ScoreMatrix {
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    /// Build from nested rows. Returns `None` when rows differ in length.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        Some(Self { rows: rows.len(), cols, data: rows.concat() })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Largest entry, 0.0 for an empty matrix.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(0.0, f64::max)
    }

    /// Sum of the entries selected by `assignment` (row → column).
    pub fn total(&self, assignment: &[Option<usize>]) -> f64 {
        assignment
            .iter()
            .enumerate()
            .filter_map(|(row, col)| col.map(|c| self.get(row, c)))
            .sum()
    }
}

fn to_cost(value: f64) -> i64 {
    (value * COST_SCALE).round() as i64
}

/// Optimal row → column assignment maximizing the summed score.
///
/// The result has one entry per row; `None` marks a row left without a
/// column, which only happens when there are fewer columns than rows.
/// Entries must be finite and non-negative.
pub fn optimal_assignment(scores: &ScoreMatrix, padding: PaddingFill) -> Vec<Option<usize>> {
    let (rows, cols) = (scores.rows(), scores.cols());
    if rows == 0 {
        return Vec::new();
    }
    if cols == 0 {
        return vec![None; rows];
    }
    debug_assert!(
        scores.data.iter().all(|s| s.is_finite() && *s >= 0.0),
        "score matrix must be finite and non-negative"
    );

    let max_score = scores.max();
    let fill = match padding {
        PaddingFill::MatrixMax => max_score,
        PaddingFill::Value(v) => v,
    };
    let ceiling = max_score.max(fill);
    let n = rows.max(cols);

    let costs = Matrix::from_fn(n, n, |(r, c)| {
        let score = if r < rows && c < cols { scores.get(r, c) } else { fill };
        to_cost(ceiling - score)
    });

    let (_, assignments) = kuhn_munkres_min(&costs);

    // assignments[row] = column; padded columns are not real players
    let result: Vec<Option<usize>> =
        assignments.into_iter().take(rows).map(|c| (c < cols).then_some(c)).collect();

    tracing::debug!(rows, cols, n, total = scores.total(&result), "kuhn-munkres assignment");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&[f64]]) -> ScoreMatrix {
        let owned: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        ScoreMatrix::from_rows(&owned).unwrap()
    }

    /// Exhaustive optimum over all injective row → column maps.
    fn brute_force_best(scores: &ScoreMatrix) -> f64 {
        fn go(scores: &ScoreMatrix, row: usize, used: &mut Vec<bool>) -> f64 {
            if row == scores.rows() {
                return 0.0;
            }
            // Leaving a row empty is only legal when columns run out
            let mut best = if scores.cols() < scores.rows() {
                go(scores, row + 1, used)
            } else {
                f64::NEG_INFINITY
            };
            for c in 0..scores.cols() {
                if !used[c] {
                    used[c] = true;
                    best = best.max(scores.get(row, c) + go(scores, row + 1, used));
                    used[c] = false;
                }
            }
            best
        }
        go(scores, 0, &mut vec![false; scores.cols()])
    }

    fn assert_valid(result: &[Option<usize>], scores: &ScoreMatrix) {
        assert_eq!(result.len(), scores.rows());
        let mut seen = vec![false; scores.cols()];
        for col in result.iter().flatten() {
            assert!(*col < scores.cols());
            assert!(!seen[*col], "column {col} used twice");
            seen[*col] = true;
        }
        let assigned = result.iter().flatten().count();
        assert_eq!(assigned, scores.rows().min(scores.cols()));
    }

    /// Small deterministic LCG so the grid below needs no RNG crate.
    fn pseudo_random_matrix(rows: usize, cols: usize, seed: u64) -> ScoreMatrix {
        let mut state = seed;
        ScoreMatrix::from_fn(rows, cols, |_, _| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((state >> 33) % 1000) as f64 / 1000.0
        })
    }

    #[test]
    fn test_empty_rows() {
        let scores = ScoreMatrix::from_fn(0, 5, |_, _| 1.0);
        assert!(optimal_assignment(&scores, PaddingFill::MatrixMax).is_empty());
    }

    #[test]
    fn test_empty_columns() {
        let scores = ScoreMatrix::from_fn(3, 0, |_, _| 1.0);
        assert_eq!(optimal_assignment(&scores, PaddingFill::MatrixMax), vec![None, None, None]);
    }

    #[test]
    fn test_greedy_is_not_optimal_here() {
        // Greedy would take (0,0)=0.9 then (1,1)=0.1 → 1.0; optimum is 0.8+0.8
        let scores = matrix(&[&[0.9, 0.8], &[0.8, 0.1]]);
        let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
        assert_eq!(result, vec![Some(1), Some(0)]);
        assert!((scores.total(&result) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn test_more_columns_than_rows() {
        let scores = matrix(&[&[0.1, 0.5, 0.9, 0.2], &[0.1, 0.6, 0.95, 0.3]]);
        let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
        assert_valid(&result, &scores);
        assert!((scores.total(&result) - brute_force_best(&scores)).abs() < 1e-6);
    }

    #[test]
    fn test_more_rows_than_columns() {
        let scores = matrix(&[&[0.2, 0.1], &[0.9, 0.3], &[0.8, 0.7]]);
        let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
        assert_valid(&result, &scores);
        assert_eq!(result.iter().filter(|c| c.is_none()).count(), 1);
        assert!((scores.total(&result) - 1.6).abs() < 1e-6);
    }

    #[test]
    fn test_all_zero_scores_still_fill_rows() {
        let scores = ScoreMatrix::from_fn(3, 3, |_, _| 0.0);
        let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
        assert_valid(&result, &scores);
    }

    #[test]
    fn test_matches_brute_force_on_small_grid() {
        for rows in 1..=5 {
            for cols in 1..=5 {
                for seed in 0..4 {
                    let scores = pseudo_random_matrix(rows, cols, seed * 31 + (rows * 7 + cols) as u64);
                    let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
                    assert_valid(&result, &scores);
                    let best = brute_force_best(&scores);
                    assert!(
                        (scores.total(&result) - best).abs() < 1e-6,
                        "{rows}x{cols} seed {seed}: got {} want {best}",
                        scores.total(&result)
                    );
                }
            }
        }
    }

    #[test]
    fn test_padding_value_does_not_change_optimum() {
        for seed in 0..5 {
            let scores = pseudo_random_matrix(3, 6, seed);
            let a = optimal_assignment(&scores, PaddingFill::MatrixMax);
            let b = optimal_assignment(&scores, PaddingFill::Value(0.0));
            let c = optimal_assignment(&scores, PaddingFill::Value(1.0));
            assert!((scores.total(&a) - scores.total(&b)).abs() < 1e-6);
            assert!((scores.total(&a) - scores.total(&c)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_repeat_calls_agree() {
        let scores = pseudo_random_matrix(10, 30, 7);
        let first = optimal_assignment(&scores, PaddingFill::MatrixMax);
        let second = optimal_assignment(&scores, PaddingFill::MatrixMax);
        assert!((scores.total(&first) - scores.total(&second)).abs() < 1e-12);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(ScoreMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_none());
        let empty = ScoreMatrix::from_rows(&[]).unwrap();
        assert_eq!((empty.rows(), empty.cols()), (0, 0));
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn score_matrix() -> impl Strategy<Value = ScoreMatrix> {
            (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
                prop::collection::vec(0.0f64..=1.0, rows * cols)
                    .prop_map(move |data| ScoreMatrix::from_fn(rows, cols, |r, c| data[r * cols + c]))
            })
        }

        proptest! {
            /// Property: total equals the brute-force optimum
            #[test]
            fn prop_optimal_total(scores in score_matrix()) {
                let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
                prop_assert!((scores.total(&result) - brute_force_best(&scores)).abs() < 1e-6);
            }

            /// Property: no column is used twice and min(R, C) rows are filled
            #[test]
            fn prop_assignment_is_injective(scores in score_matrix()) {
                let result = optimal_assignment(&scores, PaddingFill::MatrixMax);
                let mut cols: Vec<usize> = result.iter().flatten().copied().collect();
                let assigned = cols.len();
                cols.sort_unstable();
                cols.dedup();
                prop_assert_eq!(cols.len(), assigned);
                prop_assert_eq!(assigned, scores.rows().min(scores.cols()));
            }

            /// Property: identical input, identical total
            #[test]
            fn prop_deterministic_total(scores in score_matrix()) {
                let a = optimal_assignment(&scores, PaddingFill::MatrixMax);
                let b = optimal_assignment(&scores, PaddingFill::MatrixMax);
                prop_assert!((scores.total(&a) - scores.total(&b)).abs() < 1e-12);
            }
        }
    }
}
