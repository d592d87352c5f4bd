use crate::aggregate::types::TimingStats;

const P5: f64 = 0.05;
const P95: f64 = 0.95;

impl TimingStats {
    /// Computes order statistics over `values`.
    ///
    /// Percentiles are nearest-rank by truncated index, so p5 and p95 are always
    /// observed values within `[min, max]`.
    ///
    /// # Panics
    ///
    /// If `values` is empty. Buckets only exist for kinds with samples, so an
    /// empty list here is a grouping bug.
    pub fn from_values(mut values: Vec<u64>) -> Self {
        assert!(
            !values.is_empty(),
            "cannot compute timing statistics over an empty sample list"
        );

        values.sort_unstable();

        let count = values.len();
        let sum: u128 = values.iter().map(|&v| u128::from(v)).sum();

        let (p5, p95) = match count {
            1 => (values[0], values[0]),
            2 => (values[0], values[1]),
            _ => (nearest_rank(&values, P5), nearest_rank(&values, P95)),
        };

        Self {
            min: values[0],
            max: values[count - 1],
            mean: sum as f64 / count as f64,
            p5: p5 as f64,
            p95: p95 as f64,
            count,
        }
    }
}

/// Value at index `floor(q * (n - 1))` of an ascending, non-empty slice.
pub(crate) fn nearest_rank(sorted: &[u64], q: f64) -> u64 {
    let last = sorted.len() - 1;
    let idx = (q * last as f64).floor() as usize;
    sorted[idx.min(last)]
}
