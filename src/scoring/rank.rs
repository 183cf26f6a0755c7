//! Midrank assignment shared by the rank-based scorers.

use ndarray::ArrayView1;

/// Assign 1-based ranks, averaging over tie groups.
///
/// Ties receive the mean of the ranks they span (midranks), which is what
/// both the Mann-Whitney formulation of AUC and Spearman's rho expect.
pub(crate) fn average_ranks(values: ArrayView1<f32>) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[a]
            .partial_cmp(&values[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranks = vec![0.0f64; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && values[order[j]] == values[order[i]] {
            j += 1;
        }
        // Ranks i+1 ..= j share the tie group; assign their mean.
        let midrank = (i + 1 + j) as f64 / 2.0;
        for &idx in &order[i..j] {
            ranks[idx] = midrank;
        }
        i = j;
    }
    ranks
}
