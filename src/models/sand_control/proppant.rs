//! Proppant and gravel records with derived pack pore geometry.

use thiserror::Error;
use uom::si::f64::Length;

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Errors that can occur while constructing a proppant record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProppantError {
    /// The median grain size is zero, negative, or `NaN`. A record like this
    /// is excluded from further use until corrected.
    #[error("proppant median grain size must be strictly positive")]
    NonPositiveMedianGrainSize(#[source] ConstraintError),
}

/// Pore-throat geometry of a packed proppant or gravel.
///
/// Derived once from the material's median grain size; every field is
/// strictly positive by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoreGeometry {
    /// Characteristic opening between packed grains, D50 / 6.5.
    pub pack_pore_size: Length,
    /// Smallest particle that can bridge the pack pore, pore / 3.
    pub smallest_particle_to_bridge: Length,
    /// Largest particle that passes through the pack pore, pore / 7.
    pub largest_particle_through_pore: Length,
}

impl PoreGeometry {
    /// Derives the pore geometry from a median grain size.
    ///
    /// # Errors
    ///
    /// Returns [`ProppantError::NonPositiveMedianGrainSize`] when `d50` is
    /// not strictly positive.
    pub fn from_median_grain_size(d50: Length) -> Result<Self, ProppantError> {
        let d50 = StrictlyPositive::new(d50)
            .map_err(ProppantError::NonPositiveMedianGrainSize)?
            .into_inner();

        let pack_pore_size = d50 / 6.5;
        Ok(Self {
            pack_pore_size,
            smallest_particle_to_bridge: pack_pore_size / 3.0,
            largest_particle_through_pore: pack_pore_size / 7.0,
        })
    }
}

/// A proppant or gravel material from the loader's database.
///
/// The physical properties besides `d50` are opaque pass-through attributes:
/// they matter to the presentation and selection layers but never enter the
/// computations here.
#[derive(Debug, Clone, PartialEq)]
pub struct Proppant {
    name: String,
    permeability: f64,
    absolute_density: f64,
    absolute_volume: f64,
    bulk_density: f64,
    d50: Length,
    pore: PoreGeometry,
}

impl Proppant {
    /// Creates a proppant record, deriving its pore geometry once.
    ///
    /// # Errors
    ///
    /// Returns [`ProppantError::NonPositiveMedianGrainSize`] when `d50` is
    /// not strictly positive.
    pub fn new(
        name: impl Into<String>,
        permeability: f64,
        absolute_density: f64,
        absolute_volume: f64,
        bulk_density: f64,
        d50: Length,
    ) -> Result<Self, ProppantError> {
        let pore = PoreGeometry::from_median_grain_size(d50)?;
        Ok(Self {
            name: name.into(),
            permeability,
            absolute_density,
            absolute_volume,
            bulk_density,
            d50,
            pore,
        })
    }

    /// The material's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pack permeability, pass-through.
    #[must_use]
    pub fn permeability(&self) -> f64 {
        self.permeability
    }

    /// Absolute density, pass-through.
    #[must_use]
    pub fn absolute_density(&self) -> f64 {
        self.absolute_density
    }

    /// Absolute volume, pass-through.
    #[must_use]
    pub fn absolute_volume(&self) -> f64 {
        self.absolute_volume
    }

    /// Bulk density, pass-through.
    #[must_use]
    pub fn bulk_density(&self) -> f64 {
        self.bulk_density
    }

    /// Median grain size; strictly positive.
    #[must_use]
    pub fn d50(&self) -> Length {
        self.d50
    }

    /// The derived pack pore geometry.
    #[must_use]
    pub fn pore(&self) -> PoreGeometry {
        self.pore
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::length::micrometer;

    use super::*;

    #[test]
    fn pore_geometry_from_median_grain_size() {
        let pore =
            PoreGeometry::from_median_grain_size(Length::new::<micrometer>(1000.0)).unwrap();

        assert_relative_eq!(
            pore.pack_pore_size.get::<micrometer>(),
            153.84615384615384,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            pore.smallest_particle_to_bridge.get::<micrometer>(),
            51.28205128205128,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            pore.largest_particle_through_pore.get::<micrometer>(),
            21.978021978021978,
            max_relative = 1e-9
        );
    }

    #[test]
    fn non_positive_median_grain_size_is_rejected() {
        assert!(matches!(
            PoreGeometry::from_median_grain_size(Length::new::<micrometer>(0.0)),
            Err(ProppantError::NonPositiveMedianGrainSize(_))
        ));
        assert!(matches!(
            PoreGeometry::from_median_grain_size(Length::new::<micrometer>(-600.0)),
            Err(ProppantError::NonPositiveMedianGrainSize(_))
        ));
    }

    #[test]
    fn record_carries_pass_through_properties() {
        let proppant = Proppant::new(
            "Gravel 20/40",
            119_000.0,
            2.65,
            0.0453,
            99.0,
            Length::new::<micrometer>(650.0),
        )
        .unwrap();

        assert_eq!(proppant.name(), "Gravel 20/40");
        assert_relative_eq!(proppant.permeability(), 119_000.0);
        assert_relative_eq!(proppant.d50().get::<micrometer>(), 650.0);
        assert_relative_eq!(
            proppant.pore().pack_pore_size.get::<micrometer>(),
            100.0,
            max_relative = 1e-9
        );
    }
}
