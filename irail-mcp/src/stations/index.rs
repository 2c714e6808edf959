//! Precomputed station search index.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use tracing::{info, warn};

use super::error::StationError;
use super::normalize::normalize;
use super::record::StationRecord;

/// The curated station dataset shipped with the binary.
const BUNDLED_STATIONS: &str = include_str!("../../data/stations.json");

/// Process-wide index over the bundled dataset, built on first access.
///
/// The load result is memoised as well, so a broken artifact is reported
/// the same way to every caller instead of being re-parsed.
static SHARED: LazyLock<Result<Arc<StationIndex>, StationError>> =
    LazyLock::new(|| StationIndex::from_json(BUNDLED_STATIONS).map(Arc::new));

/// A station record with its folded search text.
#[derive(Debug, Clone)]
struct IndexedStation {
    record: StationRecord,
    search_text: String,
}

impl IndexedStation {
    fn new(record: StationRecord) -> Self {
        let joined = record.name_variants().collect::<Vec<_>>().join(" ");
        Self {
            search_text: normalize(&joined),
            record,
        }
    }
}

/// Read-only search index over a station dataset.
///
/// Records keep the order of the source dataset; that order is the
/// order of search results.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: Vec<IndexedStation>,
}

impl StationIndex {
    /// Build an index from records, dropping any without a name.
    pub fn from_records(records: Vec<StationRecord>) -> Self {
        let total = records.len();
        let stations: Vec<IndexedStation> = records
            .into_iter()
            .filter(|r| !r.name.trim().is_empty())
            .map(IndexedStation::new)
            .collect();

        let dropped = total - stations.len();
        if dropped > 0 {
            warn!(dropped, "skipped station records without a name");
        }

        Self { stations }
    }

    /// Build an index from the JSON artifact format (an array of records).
    pub fn from_json(json: &str) -> Result<Self, StationError> {
        let records: Vec<StationRecord> =
            serde_json::from_str(json).map_err(|e| StationError::Parse {
                message: e.to_string(),
            })?;
        let index = Self::from_records(records);
        info!(stations = index.len(), "station index built");
        Ok(index)
    }

    /// Load and index a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StationError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }

    /// The shared index over the bundled dataset.
    ///
    /// Built at most once per process; concurrent first callers wait for
    /// the single initialisation.
    pub fn shared() -> Result<Arc<StationIndex>, StationError> {
        (*SHARED).clone()
    }

    /// Find stations whose names contain `query`, ignoring case and accents.
    ///
    /// All name variants are searched. Results are in dataset order and are
    /// not truncated. Blank queries match nothing.
    pub fn search(&self, query: &str) -> Vec<&StationRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let needle = normalize(query);
        self.stations
            .iter()
            .filter(|s| s.search_text.contains(&needle))
            .map(|s| &s.record)
            .collect()
    }

    /// Iterate over all indexed records in dataset order.
    pub fn records(&self) -> impl Iterator<Item = &StationRecord> {
        self.stations.iter().map(|s| &s.record)
    }

    /// Number of indexed stations.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the index holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn station(name: &str, fr: &str, nl: &str) -> StationRecord {
        StationRecord {
            uri: format!("http://irail.be/stations/NMBS/{name}"),
            name: name.to_string(),
            alternative_fr: fr.to_string(),
            alternative_nl: nl.to_string(),
            ..Default::default()
        }
    }

    fn fixture() -> StationIndex {
        StationIndex::from_records(vec![
            station("Aalst", "Alost", ""),
            station("Liège-Guillemins", "Liège-Guillemins", "Luik-Guillemins"),
            station("Bruxelles-Central", "Bruxelles-Central", "Brussel-Centraal"),
            station("Aalst-Kerrebroek", "", ""),
            station("Aalst", "", ""),
        ])
    }

    fn names<'a>(records: &[&'a StationRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn search_text_joins_all_variants() {
        let indexed = IndexedStation::new(station("Bruxelles-Midi", "Bruxelles-Midi", "Brussel-Zuid"));
        assert_eq!(indexed.search_text, "bruxelles-midi bruxelles-midi brussel-zuid");
    }

    #[test]
    fn search_text_is_deterministic() {
        let a = IndexedStation::new(station("Liège-Palais", "", "Luik-Paleis"));
        let b = IndexedStation::new(station("Liège-Palais", "", "Luik-Paleis"));
        assert_eq!(a.search_text, b.search_text);
        assert_eq!(a.search_text, "liege-palais luik-paleis");
    }

    #[test]
    fn blank_query_matches_nothing() {
        let index = fixture();
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
        assert!(index.search("\t\n").is_empty());
    }

    #[test]
    fn matches_keep_dataset_order_and_duplicates() {
        let index = fixture();
        let results = index.search("aalst");
        assert_eq!(names(&results), vec!["Aalst", "Aalst-Kerrebroek", "Aalst"]);
    }

    #[test]
    fn matches_alternative_names() {
        let index = fixture();
        assert_eq!(names(&index.search("Alost")), vec!["Aalst"]);
        assert_eq!(names(&index.search("luik")), vec!["Liège-Guillemins"]);
    }

    #[test]
    fn accent_insensitive_both_ways() {
        let index = fixture();
        assert_eq!(names(&index.search("Liege")), vec!["Liège-Guillemins"]);
        assert_eq!(names(&index.search("LIÈGE")), vec!["Liège-Guillemins"]);
    }

    #[test]
    fn query_is_trimmed() {
        let index = fixture();
        assert_eq!(names(&index.search("  Alost  ")), vec!["Aalst"]);
    }

    #[test]
    fn substring_inside_a_word() {
        let index = fixture();
        assert_eq!(names(&index.search("entraa")), vec!["Bruxelles-Central"]);
    }

    #[test]
    fn no_false_positives() {
        let index = fixture();
        assert!(index.search("xyznonexistent12345").is_empty());
    }

    #[test]
    fn nameless_records_are_dropped() {
        let index = StationIndex::from_records(vec![
            station("", "Quelque part", ""),
            station("Gent-Sint-Pieters", "", ""),
        ]);
        assert_eq!(index.len(), 1);
        assert!(index.search("quelque").is_empty());
    }

    #[test]
    fn empty_uri_is_kept() {
        let mut record = station("Mol", "", "");
        record.uri.clear();
        let index = StationIndex::from_records(vec![record]);
        assert_eq!(index.search("mol").len(), 1);
    }

    #[test]
    fn from_json_tolerates_missing_fields() {
        let index = StationIndex::from_json(r#"[{"name": "Brugge", "alternative_fr": "Bruges"}]"#).unwrap();
        let results = index.search("bruges");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].uri, "");
        assert_eq!(results[0].latitude, "");
    }

    #[test]
    fn from_json_rejects_invalid_data() {
        assert!(matches!(
            StationIndex::from_json("not json"),
            Err(StationError::Parse { .. })
        ));
        assert!(matches!(
            StationIndex::from_json(r#"{"name": "Aalst"}"#),
            Err(StationError::Parse { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(&path, r#"[{"uri": "u1", "name": "Leuven", "alternative_fr": "Louvain"}]"#).unwrap();

        let index = StationIndex::load(&path).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.search("louvain")[0].name, "Leuven");
    }

    #[test]
    fn load_missing_file_fails() {
        let err = StationIndex::load("/nonexistent/path/stations.json").unwrap_err();
        assert!(matches!(err, StationError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/path/stations.json"));
    }

    #[test]
    fn shared_index_is_built_once() {
        let a = StationIndex::shared().unwrap();
        let b = StationIndex::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn records_iterates_in_order() {
        let index = fixture();
        let all: Vec<_> = index.records().map(|r| r.name.as_str()).collect();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], "Aalst");
        assert_eq!(all[1], "Liège-Guillemins");
    }
}
