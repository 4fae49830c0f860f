//! Common types and traits shared by all record collections

pub mod draft;
pub mod flag;
pub mod record;
pub mod record_id;
pub mod store;

// Re-exports
pub use draft::{Draft, ValidationError};
pub use flag::{Flag, Flagged};
pub use record::Record;
pub use record_id::{RecordId, SequentialId};
pub use store::EntityStore;

/// Image shown for records created from the dashboard
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/100";
