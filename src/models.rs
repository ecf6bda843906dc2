//! Public sieve-analysis models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules based on an
//! opinionated taxonomy. [`sand_control`] holds everything related to sizing
//! sand-control completions from sieve data. This organization may evolve as
//! more models are added.
//!
//! # Model structure
//!
//! Every model is a pure transform: a raw record goes in, a fully-derived
//! immutable record comes out. Numerical plumbing shared across models
//! (unit normalization, distribution math, numeric constraints) lives in
//! [`crate::support`].

pub mod sand_control;
