use tracing::warn;

use crate::domain::{ExpenseDraft, ExpenseKind, ExpenseRecord};
use crate::errors::ExpenseError;
use crate::storage::KeyValueStore;
use crate::time::{Clock, SystemClock};

use super::summary::{SummaryService, TimeWindow};

/// Key under which the whole record list is stored.
pub const STORAGE_KEY: &str = "expenses";

/// Facade that coordinates the in-memory record list and its persistence.
///
/// Every mutation persists the full list before returning. When a write
/// fails the mutation is rolled back, so the list in memory always mirrors
/// the last successfully stored state.
pub struct RecordStore {
    storage: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    records: Vec<ExpenseRecord>,
}

impl RecordStore {
    /// Opens the store against `storage`, reading whatever it currently
    /// holds. A missing or unreadable value yields an empty list; the
    /// failure is logged rather than surfaced so a corrupt file never
    /// blocks startup.
    pub fn open(storage: Box<dyn KeyValueStore>) -> Self {
        Self::with_clock(storage, Box::new(SystemClock))
    }

    /// Like [`RecordStore::open`] with an explicit clock, which pins record
    /// ids and date filters for tests.
    pub fn with_clock(storage: Box<dyn KeyValueStore>, clock: Box<dyn Clock>) -> Self {
        let records = load_or_default(storage.as_ref());
        Self {
            storage,
            clock,
            records,
        }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discards the in-memory list and re-reads the backend.
    pub fn reload(&mut self) {
        self.records = load_or_default(self.storage.as_ref());
    }

    /// Validates `draft`, stamps it with a creation id from the clock,
    /// appends it, and persists the grown list.
    pub fn add(&mut self, draft: ExpenseDraft) -> Result<ExpenseRecord, ExpenseError> {
        let id = self.clock.now().timestamp_millis();
        let record = draft.into_record(id)?;
        self.records.push(record.clone());
        if let Err(err) = self.persist() {
            self.records.pop();
            return Err(err);
        }
        Ok(record)
    }

    /// Removes the record with `id` and persists the shortened list.
    /// Unknown ids are a no-op, so a stale delete action cannot fail.
    pub fn remove(&mut self, id: i64) -> Result<Option<ExpenseRecord>, ExpenseError> {
        let index = match self.records.iter().position(|record| record.id == id) {
            Some(index) => index,
            None => return Ok(None),
        };
        let removed = self.records.remove(index);
        if let Err(err) = self.persist() {
            self.records.insert(index, removed);
            return Err(err);
        }
        Ok(Some(removed))
    }

    /// Writes the current list to the backend without mutating it.
    pub fn save(&self) -> Result<(), ExpenseError> {
        self.persist()
    }

    /// Records visible through `window` relative to the clock's today.
    pub fn filtered(&self, window: TimeWindow) -> Vec<ExpenseRecord> {
        SummaryService::filter_by_window(&self.records, window, self.clock.today())
    }

    /// Total for `kind` in the month containing the clock's today.
    pub fn monthly_total(&self, kind: ExpenseKind) -> f64 {
        SummaryService::monthly_total_by_kind(&self.records, kind, self.clock.today())
    }

    fn persist(&self) -> Result<(), ExpenseError> {
        let json = serde_json::to_string_pretty(&self.records)?;
        self.storage.set(STORAGE_KEY, &json).map_err(|err| match err {
            ExpenseError::StorageWrite(_) => err,
            other => ExpenseError::StorageWrite(other.to_string()),
        })
    }
}

fn load_or_default(storage: &dyn KeyValueStore) -> Vec<ExpenseRecord> {
    match read_records(storage) {
        Ok(records) => records,
        Err(err) => {
            warn!("could not read stored records, starting empty: {}", err);
            Vec::new()
        }
    }
}

fn read_records(storage: &dyn KeyValueStore) -> Result<Vec<ExpenseRecord>, ExpenseError> {
    let raw = storage
        .get(STORAGE_KEY)
        .map_err(|err| ExpenseError::StorageRead(err.to_string()))?;
    match raw {
        Some(data) => {
            serde_json::from_str(&data).map_err(|err| ExpenseError::StorageRead(err.to_string()))
        }
        None => Ok(Vec::new()),
    }
}
