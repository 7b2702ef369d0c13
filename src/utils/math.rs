use std::collections::HashMap;

/// Returns every value that attains the highest frequency in `values`,
/// in ascending order.
///
/// Values are grouped by exact equality, so `-0.0` and `0.0` count as one
/// value. NaN never equals itself and is skipped. An empty input (or one
/// holding only NaN) yields an empty vector.
pub fn modes(values: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<u64, usize> = HashMap::new();
    for &v in values {
        if v.is_nan() {
            continue;
        }
        *counts.entry(value_key(v)).or_insert(0) += 1;
    }

    let Some(&max) = counts.values().max() else {
        return Vec::new();
    };

    let mut out: Vec<f64> = counts
        .into_iter()
        .filter(|&(_, count)| count == max)
        .map(|(key, _)| f64::from_bits(key))
        .collect();
    out.sort_by(f64::total_cmp);
    out
}

/// Arithmetic mean, `None` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[inline]
fn value_key(v: f64) -> u64 {
    // folds -0.0 onto 0.0
    if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
}
