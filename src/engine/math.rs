//! Rounding and apportionment helpers
//!
//! Percentages live on a 0.1 grid. Splitting an amount across several
//! categories rounds each part to 0.1 on its own; the parts may fall a little
//! short of the amount being split but never exceed it.

/// Tolerance used when comparing rounded percentages
pub const EPSILON: f64 = 1e-6;

/// Round to one decimal place
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn to_tenths(x: f64) -> i64 {
    if x.is_finite() {
        (x * 10.0).round() as i64
    } else {
        0
    }
}

fn from_tenths(tenths: i64) -> f64 {
    tenths as f64 / 10.0
}

/// Split `total` across `weights` proportionally, on the 0.1 grid
///
/// Each part is `round1(weight / sum * total)`. When those rounded parts add
/// up to more than `total`, the surplus tenths are taken back from the parts
/// that rounded up the most (later entries first on ties). All-zero weights
/// split evenly. Parts are never negative and never exceed their weight when
/// `total` is at most the weight sum.
pub fn apportion(total: f64, weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let total = to_tenths(total).max(0);
    let mut weights: Vec<i64> = weights.iter().map(|w| to_tenths(*w).max(0)).collect();
    if weights.iter().all(|w| *w == 0) {
        weights.iter_mut().for_each(|w| *w = 1);
    }
    let weight_sum: i64 = weights.iter().sum();

    // Round half up, in tenths
    let mut shares: Vec<i64> = weights
        .iter()
        .map(|w| (2 * w * total + weight_sum) / (2 * weight_sum))
        .collect();
    let mut surplus = shares.iter().sum::<i64>() - total;

    if surplus > 0 {
        let gain = |i: usize| shares[i] * weight_sum - weights[i] * total;
        let mut order: Vec<usize> = (0..weights.len()).rev().collect();
        order.sort_by_key(|&i| std::cmp::Reverse(gain(i)));
        for i in order {
            if surplus == 0 {
                break;
            }
            if shares[i] > 0 {
                shares[i] -= 1;
                surplus -= 1;
            }
        }
    }

    shares.into_iter().map(from_tenths).collect()
}

/// Split `total` into `count` equal tenths that add up exactly
///
/// The first parts take one extra tenth each until the remainder is used.
pub fn split_evenly_exact(total: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let total = to_tenths(total).max(0);
    let n = count as i64;
    let (base, extra) = (total / n, total % n);
    (0..n)
        .map(|i| from_tenths(base + i64::from(i < extra)))
        .collect()
}
