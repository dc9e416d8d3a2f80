//! Roulette-wheel (inverse-transform) selection.

/// Index of the first candidate whose cumulative rate strictly exceeds
/// `scaled_draw` (= `u · R_total`).
///
/// `cumulative` must be the running sum of `rates`.  Zero-rate candidates
/// never win, since their cumulative sum equals their predecessor's.  If
/// rounding pushes the draw to or past the last cumulative value, the last
/// candidate with a positive rate is chosen.  Returns `None` only when no
/// candidate has a positive rate.
pub fn select_index(cumulative: &[f64], rates: &[f64], scaled_draw: f64) -> Option<usize> {
    debug_assert_eq!(cumulative.len(), rates.len());
    let idx = cumulative.partition_point(|&c| c <= scaled_draw);
    if idx < cumulative.len() {
        return Some(idx);
    }
    rates.iter().rposition(|&r| r > 0.0)
}
