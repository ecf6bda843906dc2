//! Sample-to-proppant compatibility evaluation.
//!
//! Combines a sample's distribution metrics with a proppant's pack pore
//! geometry. Everything here reports raw ratios; classifying a ratio against
//! engineering thresholds is a presentation concern
//! (see [`super::classification`]).

use uom::si::f64::Ratio;

use crate::support::units::SieveUnit;

use super::{
    proppant::Proppant,
    sieve::{AnalysisError, SieveAnalysis, SieveSample},
};

/// The Constien compatibility criterion for a sample/proppant pair:
/// `d50 / uniformity coefficient / pack pore size`.
///
/// Infallible by construction: a [`SieveAnalysis`] guarantees a positive
/// uniformity coefficient and a [`Proppant`] guarantees a positive pack pore
/// size, so the denominators the degenerate-distribution guards watch for
/// cannot occur here.
#[must_use]
pub fn constien_criteria(analysis: &SieveAnalysis, proppant: &Proppant) -> Ratio {
    analysis.metrics.effective_size / proppant.pore().pack_pore_size
}

/// A candidate proppant's median grain size relative to a sample's.
#[derive(Debug, Clone, PartialEq)]
pub struct ProppantRatio {
    /// The candidate's name.
    pub name: String,
    /// `proppant D50 / sample d50`. Downstream gravel-sizing guidance
    /// compares this against the customary 6/8/10 design lines.
    pub d50_ratio: Ratio,
}

/// Computes `proppant D50 / sample d50` for each candidate proppant.
///
/// The sample's `d50` is positive for any successful analysis, so the ratios
/// are always finite.
#[must_use]
pub fn proppant_to_sample_ratios<'a>(
    analysis: &SieveAnalysis,
    proppants: impl IntoIterator<Item = &'a Proppant>,
) -> Vec<ProppantRatio> {
    proppants
        .into_iter()
        .map(|proppant| ProppantRatio {
            name: proppant.name().to_string(),
            d50_ratio: proppant.d50() / analysis.percentiles.d50,
        })
        .collect()
}

/// A sample's full analysis together with its compatibility criterion for
/// the selected proppant.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleEvaluation {
    pub analysis: SieveAnalysis,
    pub constien_criteria: Ratio,
}

/// Analyzes a batch of samples against one selected proppant.
///
/// Samples are independent: a failure is reported in place and the rest of
/// the batch continues. Results are in sample order, so callers can pair
/// them back up with their inputs. Failures are never retried; the inputs
/// are deterministic, so retrying cannot change the outcome.
pub fn evaluate_samples(
    samples: &[SieveSample],
    unit: SieveUnit,
    proppant: &Proppant,
) -> Vec<Result<SampleEvaluation, AnalysisError>> {
    samples
        .iter()
        .map(|sample| {
            sample
                .analyze(unit)
                .map(|analysis| {
                    let constien = constien_criteria(&analysis, proppant);
                    SampleEvaluation {
                        analysis,
                        constien_criteria: constien,
                    }
                })
                .inspect_err(|error| {
                    tracing::warn!(
                        sample = sample.name(),
                        %error,
                        "sieve analysis failed; continuing with remaining samples"
                    );
                })
        })
        .collect()
}
