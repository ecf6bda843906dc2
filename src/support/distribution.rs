//! Cumulative-weight distributions and percentile interpolation.
//!
//! A sieve stack catches progressively finer material on each mesh. With
//! apertures listed in the stack's physical order (coarsest first), the
//! cumulative retained-weight fraction at a sieve is the share of sample mass
//! at least as coarse as that sieve's aperture. Percentile grain sizes
//! (d10, d50, ...) are read off that curve by piecewise-linear interpolation.
//!
//! Interpolation here is linear in grain size against linear percent, not
//! against a logarithmic size axis. Sieve data is conventionally plotted on a
//! log size axis, so tools that interpolate in log space will differ in the
//! interior of coarse segments; the linear behavior is kept deliberately.

use thiserror::Error;
use uom::si::f64::{Length, Ratio};
use uom::si::ratio::ratio;

/// Errors that can occur while building or querying a cumulative curve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// The retained-weight sequence is empty or sums to zero, so the
    /// cumulative fractions are undefined.
    #[error("retained weights are empty or sum to zero")]
    EmptyOrZeroWeight,

    /// The curve arrays differ in length and cannot describe one curve.
    #[error("curve arrays differ in length: {x_len} vs {y_len}")]
    MismatchedLengths { x_len: usize, y_len: usize },

    /// The cumulative percentages decrease somewhere, so interpolation over
    /// them is not well-defined. This signals misordered or corrupted
    /// upstream data.
    #[error("cumulative percentages decrease at index {index}")]
    NotMonotonic { index: usize },
}

/// Builds the cumulative retained-weight curve for a sieve stack.
///
/// Element `i` of the result is the fraction of total sample mass retained on
/// sieves `0..=i`, as a [`Ratio`]. With non-negative weights (the loader
/// contract) the curve is non-decreasing and ends at exactly 100 %.
///
/// # Errors
///
/// Returns [`DistributionError::EmptyOrZeroWeight`] when `retained` is empty
/// or its sum is zero.
pub fn cumulative_percent(retained: &[f64]) -> Result<Vec<Ratio>, DistributionError> {
    let total: f64 = retained.iter().sum();
    if retained.is_empty() || total <= 0.0 {
        return Err(DistributionError::EmptyOrZeroWeight);
    }

    let mut running = 0.0;
    Ok(retained
        .iter()
        .map(|&weight| {
            running += weight;
            Ratio::new::<ratio>(running / total)
        })
        .collect())
}

/// Interpolates grain sizes at the given cumulative-percent targets.
///
/// The `(cumulative, apertures)` pairs form a piecewise-linear curve with
/// cumulative percent as the independent axis. Targets outside the observed
/// range clamp to the nearest endpoint value; they are never extrapolated.
/// The result has one grain size per target, in target order.
///
/// # Errors
///
/// - [`DistributionError::EmptyOrZeroWeight`] when the curve is empty.
/// - [`DistributionError::MismatchedLengths`] when the curve arrays differ
///   in length.
/// - [`DistributionError::NotMonotonic`] when `cumulative` decreases
///   anywhere, rather than silently producing a wrong value.
pub fn grain_sizes_at(
    targets: &[Ratio],
    cumulative: &[Ratio],
    apertures: &[Length],
) -> Result<Vec<Length>, DistributionError> {
    if cumulative.is_empty() {
        return Err(DistributionError::EmptyOrZeroWeight);
    }
    if cumulative.len() != apertures.len() {
        return Err(DistributionError::MismatchedLengths {
            x_len: cumulative.len(),
            y_len: apertures.len(),
        });
    }
    if let Some(index) = (1..cumulative.len()).find(|&i| cumulative[i] < cumulative[i - 1]) {
        return Err(DistributionError::NotMonotonic { index });
    }

    Ok(targets
        .iter()
        .map(|&target| interpolate(target, cumulative, apertures))
        .collect())
}

/// Linear interpolation over a non-decreasing x axis, clamped at both ends.
fn interpolate(target: Ratio, xs: &[Ratio], ys: &[Length]) -> Length {
    let last = xs.len() - 1;
    if target <= xs[0] {
        return ys[0];
    }
    if target >= xs[last] {
        return ys[last];
    }

    for i in 0..last {
        let (x0, x1) = (xs[i], xs[i + 1]);
        if target > x1 {
            continue;
        }
        // Zero-width segment: the target sits exactly on the repeated x.
        if x1 == x0 {
            return ys[i + 1];
        }
        let t: Ratio = (target - x0) / (x1 - x0);
        return ys[i] + t * (ys[i + 1] - ys[i]);
    }

    ys[last]
}
