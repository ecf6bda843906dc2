use uom::ConstZero;
use uom::si::f64::{Length, Ratio};
use uom::si::ratio::percent;

use crate::support::distribution;

use super::AnalysisError;

/// Cumulative-percent levels the percentile interpolation is evaluated at.
///
/// Only the 5/10/40/50/90/95 levels are kept as named fields; the rest serve
/// as interpolation support.
const PERCENTILE_LEVELS: [f64; 11] = [
    5.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 95.0,
];

/// Grain sizes at the named cumulative-percent levels.
///
/// `dN` is the grain size at which N % of the sample by weight is coarser.
/// For a coarsest-first stack the sizes are non-increasing:
/// d5 ≥ d10 ≥ d40 ≥ d50 ≥ d90 ≥ d95.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrainSizePercentiles {
    pub d5: Length,
    pub d10: Length,
    pub d40: Length,
    pub d50: Length,
    pub d90: Length,
    pub d95: Length,
}

impl GrainSizePercentiles {
    /// Interpolates the named percentiles from a cumulative curve.
    ///
    /// # Errors
    ///
    /// Returns an error when the curve is empty, mismatched, or not
    /// non-decreasing.
    pub fn from_distribution(
        cumulative_percent: &[Ratio],
        apertures: &[Length],
    ) -> Result<Self, AnalysisError> {
        let targets: Vec<Ratio> = PERCENTILE_LEVELS
            .iter()
            .map(|&level| Ratio::new::<percent>(level))
            .collect();
        let sizes = distribution::grain_sizes_at(&targets, cumulative_percent, apertures)?;

        Ok(Self {
            d5: sizes[0],
            d10: sizes[1],
            d40: sizes[4],
            d50: sizes[5],
            d90: sizes[9],
            d95: sizes[10],
        })
    }
}

/// Metrics derived from the percentile grain sizes.
///
/// The uniformity and mobile-fines coefficients are exposed as raw ratios so
/// any presentation-side breakpoint table can classify them
/// (see [`crate::models::sand_control::classification`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedMetrics {
    /// d40 / d90. Describes the spread of the distribution.
    pub uniformity_coefficient: Ratio,
    /// d10 / d95. Secondary spread/skew descriptor.
    pub sorting_factor: Ratio,
    /// d50 / uniformity coefficient.
    pub effective_size: Length,
    /// d50 / d95. Indicates how mobile the fine tail is.
    pub mobile_fines_coefficient: Ratio,
    /// d50 / 10.
    pub mobile_fines_size: Length,
    /// Average formation pore size, d50 / 6.5.
    pub average_formation_pore: Length,
    /// Smallest particle that can bridge the average pore, pore / 3.
    pub smallest_particle_to_bridge: Length,
    /// Largest particle that passes through the average pore, pore / 7.
    pub largest_particle_through_pore: Length,
    /// Gravel-pack sizing guideline, d50 * 6.
    pub recommended_gravel_d50: Length,
    /// Frac-pack sizing guideline, d50 * 8.
    pub recommended_frac_d50: Length,
}

impl DerivedMetrics {
    /// Derives every secondary metric from the percentile grain sizes.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::DegenerateDistribution`] when d90, d95, or
    /// the uniformity coefficient is zero, rather than letting a division
    /// produce `inf` or `NaN`.
    pub fn from_percentiles(p: &GrainSizePercentiles) -> Result<Self, AnalysisError> {
        if p.d90 == Length::ZERO {
            return Err(AnalysisError::DegenerateDistribution { denominator: "d90" });
        }
        if p.d95 == Length::ZERO {
            return Err(AnalysisError::DegenerateDistribution { denominator: "d95" });
        }

        let uniformity_coefficient: Ratio = p.d40 / p.d90;
        if uniformity_coefficient == Ratio::ZERO {
            return Err(AnalysisError::DegenerateDistribution {
                denominator: "uniformity coefficient",
            });
        }

        let average_formation_pore = p.d50 / 6.5;

        Ok(Self {
            uniformity_coefficient,
            sorting_factor: p.d10 / p.d95,
            effective_size: p.d50 / uniformity_coefficient,
            mobile_fines_coefficient: p.d50 / p.d95,
            mobile_fines_size: p.d50 / 10.0,
            average_formation_pore,
            smallest_particle_to_bridge: average_formation_pore / 3.0,
            largest_particle_through_pore: average_formation_pore / 7.0,
            recommended_gravel_d50: p.d50 * 6.0,
            recommended_frac_d50: p.d50 * 8.0,
        })
    }
}

/// A fully-derived sieve analysis for one sample.
///
/// Produced by [`SieveSample::analyze`](super::SieveSample::analyze); never
/// exists in a partially-computed state. A successful analysis guarantees
/// `d90 > 0`, `d95 > 0`, a positive uniformity coefficient, and (because the
/// percentile sizes are non-increasing) `d50 > 0`; downstream consumers rely
/// on these.
#[derive(Debug, Clone, PartialEq)]
pub struct SieveAnalysis {
    /// The sample's identifier.
    pub name: String,
    /// The sample's depth, in the caller's depth unit.
    pub depth: f64,
    /// The aperture stack normalized to microns, coarsest first.
    pub apertures: Vec<Length>,
    /// The retained weight per sieve.
    pub retained: Vec<f64>,
    /// Running retained-weight fraction per sieve; non-decreasing, ends at
    /// 100 %.
    pub cumulative_percent: Vec<Ratio>,
    /// Grain sizes at the named percentile levels.
    pub percentiles: GrainSizePercentiles,
    /// Metrics derived from the percentiles.
    pub metrics: DerivedMetrics,
}

impl SieveAnalysis {
    pub(super) fn derive(
        name: String,
        depth: f64,
        apertures: Vec<Length>,
        retained: Vec<f64>,
        cumulative_percent: Vec<Ratio>,
    ) -> Result<Self, AnalysisError> {
        let percentiles =
            GrainSizePercentiles::from_distribution(&cumulative_percent, &apertures)?;
        let metrics = DerivedMetrics::from_percentiles(&percentiles)?;

        Ok(Self {
            name,
            depth,
            apertures,
            retained,
            cumulative_percent,
            percentiles,
            metrics,
        })
    }
}
