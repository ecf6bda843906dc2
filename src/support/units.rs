//! Sieve aperture units and normalization to microns.
//!
//! Laboratory sieve stacks are tabulated in several aperture conventions.
//! Every model in this crate works on a single canonical linear scale,
//! micron-equivalent [`Length`], and this module owns the conversion from the
//! tabulated unit to that scale.
//!
//! ```
//! use sieve_models::support::units::SieveUnit;
//! use uom::si::{f64::Length, length::micrometer};
//!
//! let unit: SieveUnit = "phi".parse().unwrap();
//! let sizes = unit.normalize(&[0.0, 4.0]);
//! assert_eq!(sizes[0], Length::new::<micrometer>(1000.0));
//! assert_eq!(sizes[1], Length::new::<micrometer>(62.5));
//! ```

use std::str::FromStr;

use thiserror::Error;
use uom::si::{f64::Length, length::micrometer};

/// The unit in which a sieve stack's apertures are tabulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SieveUnit {
    /// Microns. The canonical scale; conversion is the identity.
    Micron,
    /// Millimeters, 1000 microns each.
    Millimeter,
    /// Inches, converted with a fixed factor of 25.4.
    Inch,
    /// Krumbein phi scale: `microns = 1000 * 2^(-phi)`.
    Phi,
    /// US mesh numbers.
    ///
    /// Mesh numbers are passed through unconverted. A genuine mesh-to-micron
    /// conversion is non-linear and needs a lookup table, so [`normalize`]
    /// warns whenever this unit is used.
    ///
    /// [`normalize`]: SieveUnit::normalize
    Mesh,
}

/// An error returned when a sieve unit tag is not recognized.
///
/// Loaders hand this crate unit tags as strings; an unknown tag must be
/// surfaced before any computation proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized sieve unit: {0:?}")]
pub struct UnrecognizedUnit(pub String);

impl FromStr for SieveUnit {
    type Err = UnrecognizedUnit;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().as_str() {
            "micron" | "microns" | "um" => Ok(Self::Micron),
            "mm" | "millimeter" | "millimeters" => Ok(Self::Millimeter),
            "in" | "inch" | "inches" => Ok(Self::Inch),
            "phi" => Ok(Self::Phi),
            "mesh" => Ok(Self::Mesh),
            _ => Err(UnrecognizedUnit(tag.to_string())),
        }
    }
}

impl SieveUnit {
    /// Converts a single aperture value in this unit to canonical microns.
    #[must_use]
    pub fn to_microns(self, value: f64) -> Length {
        let microns = match self {
            Self::Micron | Self::Mesh => value,
            Self::Millimeter => value * 1000.0,
            Self::Inch => value * 25.4,
            Self::Phi => 1000.0 * (-value).exp2(),
        };
        Length::new::<micrometer>(microns)
    }

    /// Converts an aperture sequence in this unit to canonical microns.
    ///
    /// Returns a new sequence with the same length and order; the input is
    /// never mutated. Converting values already in microns is the identity,
    /// so normalization is idempotent.
    #[must_use]
    pub fn normalize(self, apertures: &[f64]) -> Vec<Length> {
        if self == Self::Mesh && !apertures.is_empty() {
            tracing::warn!(
                "mesh sieve numbers are passed through unconverted; \
                 mesh-to-micron conversion requires a lookup table"
            );
        }
        apertures.iter().map(|&a| self.to_microns(a)).collect()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn parses_loader_tags() {
        assert_eq!("micron".parse::<SieveUnit>().unwrap(), SieveUnit::Micron);
        assert_eq!("mm".parse::<SieveUnit>().unwrap(), SieveUnit::Millimeter);
        assert_eq!("in".parse::<SieveUnit>().unwrap(), SieveUnit::Inch);
        assert_eq!("PHI".parse::<SieveUnit>().unwrap(), SieveUnit::Phi);
        assert_eq!("mesh".parse::<SieveUnit>().unwrap(), SieveUnit::Mesh);
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = "furlong".parse::<SieveUnit>().unwrap_err();
        assert_eq!(err, UnrecognizedUnit("furlong".to_string()));
    }

    #[test]
    fn micron_is_identity() {
        let sizes = SieveUnit::Micron.normalize(&[2000.0, 500.0, 62.0]);
        assert_relative_eq!(sizes[0].get::<micrometer>(), 2000.0);
        assert_relative_eq!(sizes[1].get::<micrometer>(), 500.0);
        assert_relative_eq!(sizes[2].get::<micrometer>(), 62.0);
    }

    #[test]
    fn millimeters_scale_by_a_thousand() {
        let sizes = SieveUnit::Millimeter.normalize(&[2.0, 0.5]);
        assert_relative_eq!(sizes[0].get::<micrometer>(), 2000.0);
        assert_relative_eq!(sizes[1].get::<micrometer>(), 500.0);
    }

    #[test]
    fn inches_scale_by_the_fixed_factor() {
        let sizes = SieveUnit::Inch.normalize(&[1.0, 10.0]);
        assert_relative_eq!(sizes[0].get::<micrometer>(), 25.4);
        assert_relative_eq!(sizes[1].get::<micrometer>(), 254.0);
    }

    #[test]
    fn phi_scale_is_logarithmic() {
        assert_relative_eq!(
            SieveUnit::Phi.to_microns(0.0).get::<micrometer>(),
            1000.0
        );
        assert_relative_eq!(SieveUnit::Phi.to_microns(4.0).get::<micrometer>(), 62.5);
        assert_relative_eq!(
            SieveUnit::Phi.to_microns(-1.0).get::<micrometer>(),
            2000.0
        );
    }

    #[test]
    fn mesh_passes_through_unconverted() {
        let sizes = SieveUnit::Mesh.normalize(&[20.0, 40.0]);
        assert_relative_eq!(sizes[0].get::<micrometer>(), 20.0);
        assert_relative_eq!(sizes[1].get::<micrometer>(), 40.0);
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = SieveUnit::Millimeter.normalize(&[2.0, 0.5]);
        let raw: Vec<f64> = once.iter().map(|s| s.get::<micrometer>()).collect();
        let twice = SieveUnit::Micron.normalize(&raw);
        for (a, b) in once.iter().zip(&twice) {
            assert_relative_eq!(a.get::<micrometer>(), b.get::<micrometer>());
        }
    }
}
