use thiserror::Error;

use crate::support::{constraint::ConstraintError, distribution::DistributionError};

/// Errors that can occur while constructing a raw sieve sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The aperture and retained-weight lists differ in length, so the
    /// index alignment between them is undefined.
    #[error("aperture and retained-weight lists differ in length: {apertures} vs {retained}")]
    MismatchedLengths { apertures: usize, retained: usize },

    /// A retained weight is negative or not a number.
    #[error("retained weight at index {index} is invalid")]
    InvalidRetainedWeight {
        index: usize,
        #[source]
        source: ConstraintError,
    },
}

/// Errors that can occur while analyzing a sieve sample.
///
/// A failed analysis aborts that sample only; other samples in a batch are
/// unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The cumulative curve could not be built or interpolated.
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// A derived ratio's denominator is zero, so the distribution is not
    /// physically meaningful. Reported instead of returning `inf` or `NaN`.
    #[error("degenerate grain-size distribution: {denominator} is zero")]
    DegenerateDistribution { denominator: &'static str },
}
