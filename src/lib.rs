//! # Sieve Models
//!
//! Sieve-analysis models for sand-control completion design.
//!
//! Raw input is a per-depth set of weights retained on a stack of sieves of
//! known aperture. From it the crate derives the cumulative-retained-weight
//! curve, percentile grain sizes, the standard uniformity/sorting/pore
//! metrics, and the proppant/gravel pore-compatibility criteria used to size
//! gravel-pack and frac-pack completions.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific sand-control models, the primary public API.
//! - [`support`]: Supporting utilities used by models.
//!
//! Reading sieve, screen, and proppant tables from disk, persisting results,
//! and rendering reports or charts are left to callers; this crate only
//! defines the records those layers supply and consume.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
