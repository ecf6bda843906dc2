//! Sand-screen lookup records.

use uom::si::f64::Length;

/// A sand-control screen from the loader's database.
///
/// Pure lookup entity: screens are selected and plotted by name, never
/// transformed.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// The screen's name, used as its catalog key.
    pub name: String,
    /// Construction style, e.g. wire-wrapped or premium mesh.
    pub kind: String,
    /// The screen's flow aperture.
    pub aperture: Length,
}

impl Screen {
    /// Creates a screen record.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>, aperture: Length) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            aperture,
        }
    }
}
