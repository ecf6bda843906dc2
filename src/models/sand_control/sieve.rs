//! Sieve samples and their derived grain-size metrics.
//!
//! A [`SieveSample`] is one depth's raw laboratory record: an ordered aperture
//! stack (coarsest first) and the weight retained on each mesh. Analysis is a
//! single pure transform, [`SieveSample::analyze`], producing an immutable
//! [`SieveAnalysis`] with the cumulative curve, the percentile grain sizes,
//! and every derived ratio. There is no partially-computed state to observe:
//! either the whole analysis succeeds or none of it exists.

mod analysis;
mod error;
mod sample;

pub use analysis::{DerivedMetrics, GrainSizePercentiles, SieveAnalysis};
pub use error::{AnalysisError, SampleError};
pub use sample::SieveSample;
