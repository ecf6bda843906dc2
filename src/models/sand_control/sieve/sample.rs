use crate::support::{
    constraint::NonNegative,
    distribution,
    units::SieveUnit,
};

use super::{AnalysisError, SampleError, SieveAnalysis};

/// One depth's raw sieve measurements.
///
/// The aperture list is in the stack's physical order, coarsest (largest
/// aperture) first. Cumulative retained weight is the running sum over this
/// exact order, so callers must supply the stack already ordered; the order
/// is not rearranged here. `retained[i]` is the weight caught on the sieve
/// whose aperture is `apertures[i]`.
///
/// ```
/// use sieve_models::models::sand_control::sieve::SieveSample;
/// use sieve_models::support::units::SieveUnit;
/// use uom::si::{f64::Length, length::micrometer};
///
/// let sample = SieveSample::new(
///     "10200 ft",
///     10_200.0,
///     vec![2000.0, 1000.0, 500.0, 250.0, 125.0, 62.0],
///     vec![5.0, 15.0, 30.0, 30.0, 15.0, 5.0],
/// )
/// .unwrap();
///
/// let analysis = sample.analyze(SieveUnit::Micron).unwrap();
/// assert_eq!(analysis.percentiles.d50, Length::new::<micrometer>(500.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SieveSample {
    name: String,
    depth: f64,
    apertures: Vec<f64>,
    retained: Vec<f64>,
}

impl SieveSample {
    /// Creates a raw sample from loader data.
    ///
    /// `depth` is carried through unchanged; its unit is opaque to the
    /// models. Apertures are in whatever unit the stack was tabulated in and
    /// are normalized during [`analyze`](Self::analyze).
    ///
    /// # Errors
    ///
    /// Returns a [`SampleError`] when the lists differ in length or a
    /// retained weight is negative or `NaN`.
    pub fn new(
        name: impl Into<String>,
        depth: f64,
        apertures: Vec<f64>,
        retained: Vec<f64>,
    ) -> Result<Self, SampleError> {
        if apertures.len() != retained.len() {
            return Err(SampleError::MismatchedLengths {
                apertures: apertures.len(),
                retained: retained.len(),
            });
        }
        for (index, &weight) in retained.iter().enumerate() {
            NonNegative::new(weight)
                .map_err(|source| SampleError::InvalidRetainedWeight { index, source })?;
        }

        Ok(Self {
            name: name.into(),
            depth,
            apertures,
            retained,
        })
    }

    /// The sample's identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The sample's depth, in the caller's depth unit.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// The raw aperture stack, coarsest first, in the tabulated unit.
    #[must_use]
    pub fn apertures(&self) -> &[f64] {
        &self.apertures
    }

    /// The retained weight per sieve, aligned with [`apertures`](Self::apertures).
    #[must_use]
    pub fn retained(&self) -> &[f64] {
        &self.retained
    }

    /// Analyzes the sample: normalizes apertures to microns, builds the
    /// cumulative curve, interpolates the percentile grain sizes, and derives
    /// every secondary metric.
    ///
    /// The sample itself is never mutated; calling this again with the same
    /// unit produces an identical [`SieveAnalysis`].
    ///
    /// # Errors
    ///
    /// Returns an [`AnalysisError`] when the weights are empty or sum to
    /// zero, the cumulative curve is malformed, or a derived ratio's
    /// denominator is zero.
    pub fn analyze(&self, unit: SieveUnit) -> Result<SieveAnalysis, AnalysisError> {
        let apertures = unit.normalize(&self.apertures);
        let cumulative_percent = distribution::cumulative_percent(&self.retained)?;

        SieveAnalysis::derive(
            self.name.clone(),
            self.depth,
            apertures,
            self.retained.clone(),
            cumulative_percent,
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::support::constraint::ConstraintError;

    use super::*;

    #[test]
    fn mismatched_lists_are_rejected() {
        let err = SieveSample::new("A", 0.0, vec![2000.0, 1000.0], vec![5.0]).unwrap_err();
        assert_eq!(
            err,
            SampleError::MismatchedLengths {
                apertures: 2,
                retained: 1
            }
        );
    }

    #[test]
    fn negative_weights_are_rejected() {
        let err =
            SieveSample::new("A", 0.0, vec![2000.0, 1000.0], vec![5.0, -1.0]).unwrap_err();
        assert_eq!(
            err,
            SampleError::InvalidRetainedWeight {
                index: 1,
                source: ConstraintError::Negative
            }
        );
    }

    #[test]
    fn zero_weight_sample_fails_analysis() {
        let sample =
            SieveSample::new("A", 0.0, vec![2000.0, 1000.0], vec![0.0, 0.0]).unwrap();
        assert!(matches!(
            sample.analyze(SieveUnit::Micron),
            Err(AnalysisError::Distribution(_))
        ));
    }

    #[test]
    fn analysis_is_idempotent() {
        let sample = SieveSample::new(
            "A",
            9_850.0,
            vec![2000.0, 1000.0, 500.0, 250.0, 125.0, 62.0],
            vec![5.0, 15.0, 30.0, 30.0, 15.0, 5.0],
        )
        .unwrap();

        let first = sample.analyze(SieveUnit::Micron).unwrap();
        let second = sample.analyze(SieveUnit::Micron).unwrap();
        assert_eq!(first, second);
    }
}
