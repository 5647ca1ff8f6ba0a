/// Stores spacings between adjacent knots
pub(crate) fn spacings(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}


/// Copies `(x, y)` sorted by increasing `x`.
pub(crate) fn sorted_points(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    pairs.into_iter().unzip()
}


/// Index `i` with `x[i] <= xq < x[i+1]`, clamped to the last interval.
///
/// `x` is sorted with at least two entries.
pub(crate) fn find_interval(x: &[f64], xq: f64) -> usize {
    let n = x.len();
    let mut lo = 0;
    let mut hi = n - 1;

    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if x[mid] <= xq {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    lo
}
