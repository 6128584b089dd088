//! Edge trim bars for a perimeter run, including splice overlaps.

use crate::constants::{EDGE_TRIM_LENGTH_M, EDGE_TRIM_SPLICE_M};

/// Fractional edge trim bars needed to cover `run` meters.
///
/// Every joint between bars overlaps by 0.15 m, so a run of `n` pieces
/// needs `n - 1` extra overlaps. Non-positive runs need nothing.
pub fn edge_trim_bars(run: f64) -> f64 {
    if run.is_nan() || run <= 0.0 {
        return 0.0;
    }
    let pieces = (run / EDGE_TRIM_LENGTH_M).ceil();
    let splices = (pieces - 1.0).max(0.0);
    (run + splices * EDGE_TRIM_SPLICE_M) / EDGE_TRIM_LENGTH_M
}
