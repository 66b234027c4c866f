//! Group item identifiers by their `Rare` field and show one random example per rarity.

pub mod error;
pub mod grouper;
pub mod loader;
pub mod rarity;
pub mod reporter;
pub mod summary;

pub use error::LoadError;
pub use grouper::{group_by_rarity, RarityGroups};
pub use loader::load_records;
pub use reporter::{report, sample, write_report, Sample};
pub use summary::{write_summary, Summary};
