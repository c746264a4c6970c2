pub mod record_store;
pub mod summary;

pub use record_store::{RecordStore, STORAGE_KEY};
pub use summary::{SummaryService, TimeWindow};
