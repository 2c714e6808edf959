//! Offline station search.
//!
//! The station dataset is bundled with the binary and indexed once.
//! Every record gets a folded search text built from its canonical name and
//! all localized alternatives, so a query in any language, with or without
//! accents, finds the station by plain substring containment.

mod error;
mod index;
mod normalize;
mod record;

pub use error::StationError;
pub use index::StationIndex;
pub use normalize::normalize;
pub use record::StationRecord;
