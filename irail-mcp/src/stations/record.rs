//! Station record as stored in the bundled dataset.

use serde::{Deserialize, Serialize};

/// One railway stop from the station dataset.
///
/// Field names match the on-disk artifact. Coordinates are kept as the
/// text the upstream feed used; they are only ever displayed, never
/// computed with. Missing fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationRecord {
    pub uri: String,
    pub name: String,
    pub alternative_fr: String,
    pub alternative_nl: String,
    pub alternative_de: String,
    pub alternative_en: String,
    pub longitude: String,
    pub latitude: String,
    pub country_code: String,
}

impl StationRecord {
    /// Localized alternative names in fr, nl, de, en order, skipping empty ones.
    pub fn alternative_names(&self) -> impl Iterator<Item = &str> {
        [
            self.alternative_fr.as_str(),
            self.alternative_nl.as_str(),
            self.alternative_de.as_str(),
            self.alternative_en.as_str(),
        ]
        .into_iter()
        .filter(|n| !n.is_empty())
    }

    /// All non-empty names: the canonical name followed by the alternatives.
    pub fn name_variants(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .filter(|n| !n.is_empty())
            .chain(self.alternative_names())
    }
}
