//! Presentation-side breakpoint tables.
//!
//! The models expose raw ratios and sizes; labeling them ("Uniform",
//! "MG Sand", "Fines Produced") is a lookup against fixed engineering
//! breakpoints that belongs to the presentation layer. The tables here are
//! the customary defaults; swapping a table changes no computation.

use uom::si::f64::{Length, Ratio};
use uom::si::length::micrometer;
use uom::si::ratio::ratio;

/// One entry of an ordered breakpoint table: everything up to and including
/// `upper_bound` carries `label`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint<T> {
    pub upper_bound: T,
    pub label: &'static str,
}

/// Labels a value against an ordered breakpoint table.
///
/// Returns the label of the first breakpoint whose bound is at least
/// `value`, or `None` when the value lies beyond the table.
pub fn classify<T: PartialOrd>(value: T, table: &[Breakpoint<T>]) -> Option<&'static str> {
    table
        .iter()
        .find(|breakpoint| value <= breakpoint.upper_bound)
        .map(|breakpoint| breakpoint.label)
}

/// Wentworth grain-size classes, from clay through gravel.
#[must_use]
pub fn wentworth_grain_sizes() -> Vec<Breakpoint<Length>> {
    let class = |microns, label| Breakpoint {
        upper_bound: Length::new::<micrometer>(microns),
        label,
    };
    vec![
        class(3.9, "Clay"),
        class(62.0, "Silt"),
        class(125.0, "VFG Sand"),
        class(250.0, "FG Sand"),
        class(500.0, "MG Sand"),
        class(1000.0, "CG Sand"),
        class(2000.0, "VCG Sand"),
        class(4000.0, "Gravel"),
    ]
}

/// Uniformity-coefficient classes.
#[must_use]
pub fn uniformity_coefficient_classes() -> Vec<Breakpoint<Ratio>> {
    let class = |bound, label| Breakpoint {
        upper_bound: Ratio::new::<ratio>(bound),
        label,
    };
    vec![
        class(3.0, "Highly Uniform"),
        class(5.0, "Uniform"),
        class(10.0, "Non-Uniform"),
        class(25.0, "Highly Non-Uniform"),
    ]
}

/// Mobile-fines-coefficient classes.
#[must_use]
pub fn mobile_fines_classes() -> Vec<Breakpoint<Ratio>> {
    let class = |bound, label| Breakpoint {
        upper_bound: Ratio::new::<ratio>(bound),
        label,
    };
    vec![
        class(5.0, "Fines Immobile"),
        class(10.0, "Impairment Increasing"),
        class(25.0, "Impairment Decreasing"),
        class(250.0, "Fines Produced"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grain_sizes_land_in_their_wentworth_class() {
        let table = wentworth_grain_sizes();
        let size = |microns| Length::new::<micrometer>(microns);

        assert_eq!(classify(size(2.0), &table), Some("Clay"));
        assert_eq!(classify(size(300.0), &table), Some("MG Sand"));
        assert_eq!(classify(size(500.0), &table), Some("MG Sand"));
        assert_eq!(classify(size(3500.0), &table), Some("Gravel"));
        assert_eq!(classify(size(5000.0), &table), None);
    }

    #[test]
    fn uniformity_classes_follow_the_customary_bounds() {
        let table = uniformity_coefficient_classes();
        let uc = |value| Ratio::new::<ratio>(value);

        assert_eq!(classify(uc(2.0), &table), Some("Highly Uniform"));
        assert_eq!(classify(uc(4.0), &table), Some("Uniform"));
        assert_eq!(classify(uc(8.0), &table), Some("Non-Uniform"));
        assert_eq!(classify(uc(20.0), &table), Some("Highly Non-Uniform"));
    }

    #[test]
    fn mobile_fines_classes_follow_the_customary_bounds() {
        let table = mobile_fines_classes();
        let coeff = |value| Ratio::new::<ratio>(value);

        assert_eq!(classify(coeff(4.0), &table), Some("Fines Immobile"));
        assert_eq!(classify(coeff(100.0), &table), Some("Fines Produced"));
    }
}
