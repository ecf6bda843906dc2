//! Name-keyed screen and proppant catalogs.
//!
//! Loaders build these once per session and they are read-only thereafter.
//! They are plain values passed to whoever needs them, not shared global
//! state.

use std::collections::HashMap;

use thiserror::Error;

use super::{proppant::Proppant, screen::Screen};

/// Screens keyed by name.
pub type ScreenCatalog = HashMap<String, Screen>;

/// Proppant and gravel materials keyed by name.
pub type ProppantCatalog = HashMap<String, Proppant>;

/// An error returned when a catalog lookup misses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no catalog entry named {0:?}")]
pub struct UnknownName(pub String);

/// Builds a screen catalog from loader records.
#[must_use]
pub fn screen_catalog(screens: impl IntoIterator<Item = Screen>) -> ScreenCatalog {
    screens
        .into_iter()
        .map(|screen| (screen.name.clone(), screen))
        .collect()
}

/// Builds a proppant catalog from loader records.
#[must_use]
pub fn proppant_catalog(proppants: impl IntoIterator<Item = Proppant>) -> ProppantCatalog {
    proppants
        .into_iter()
        .map(|proppant| (proppant.name().to_string(), proppant))
        .collect()
}

/// Looks up a catalog entry by name.
///
/// # Errors
///
/// Returns [`UnknownName`] when no entry has that name.
pub fn select<'a, T>(catalog: &'a HashMap<String, T>, name: &str) -> Result<&'a T, UnknownName> {
    catalog
        .get(name)
        .ok_or_else(|| UnknownName(name.to_string()))
}

#[cfg(test)]
mod tests {
    use uom::si::{f64::Length, length::micrometer};

    use super::*;

    #[test]
    fn selects_by_name_and_reports_misses() {
        let catalog = screen_catalog([Screen::new(
            "6 Gauge WWS",
            "wire-wrapped",
            Length::new::<micrometer>(150.0),
        )]);

        assert_eq!(
            select(&catalog, "6 Gauge WWS").unwrap().kind,
            "wire-wrapped"
        );
        assert_eq!(
            select(&catalog, "8 Gauge WWS").unwrap_err(),
            UnknownName("8 Gauge WWS".to_string())
        );
    }
}
