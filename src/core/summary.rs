use std::collections::BTreeMap;
use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, ExpenseKind, ExpenseRecord};

/// Time filter applied before aggregation or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    All,
    Week,
}

impl TimeWindow {
    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::All => "all",
            TimeWindow::Week => "week",
        }
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        TimeWindow::All
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stateless aggregation over slices of expense records.
///
/// Records carry amounts and dates as the raw strings they were captured
/// with; an amount that fails to parse counts as zero and a date that fails
/// to parse matches no window, so one malformed record never poisons a
/// total.
pub struct SummaryService;

impl SummaryService {
    /// Sum of every record booked under `kind`.
    pub fn total_by_kind(records: &[ExpenseRecord], kind: ExpenseKind) -> f64 {
        round2(
            records
                .iter()
                .filter(|record| record.kind == kind)
                .map(ExpenseRecord::amount_value)
                .sum(),
        )
    }

    /// Sum of records under `kind` dated in the same month and year as
    /// `reference`.
    pub fn monthly_total_by_kind(
        records: &[ExpenseRecord],
        kind: ExpenseKind,
        reference: NaiveDate,
    ) -> f64 {
        round2(
            records
                .iter()
                .filter(|record| record.kind == kind)
                .filter_map(|record| {
                    let date = record.parsed_date()?;
                    if date.month() == reference.month() && date.year() == reference.year() {
                        Some(record.amount_value())
                    } else {
                        None
                    }
                })
                .sum(),
        )
    }

    /// Records visible through `window`, in their original order.
    ///
    /// `Week` keeps records dated on or after the Sunday of the week
    /// containing `reference`, with no upper bound.
    pub fn filter_by_window(
        records: &[ExpenseRecord],
        window: TimeWindow,
        reference: NaiveDate,
    ) -> Vec<ExpenseRecord> {
        match window {
            TimeWindow::All => records.to_vec(),
            TimeWindow::Week => {
                let start = start_of_week(reference);
                records
                    .iter()
                    .filter(|record| {
                        matches!(record.parsed_date(), Some(date) if date >= start)
                    })
                    .cloned()
                    .collect()
            }
        }
    }

    /// Per-category totals for the categories present in `records`.
    pub fn totals_by_category(records: &[ExpenseRecord]) -> BTreeMap<Category, f64> {
        let mut totals: BTreeMap<Category, f64> = BTreeMap::new();
        for record in records {
            *totals.entry(record.category).or_insert(0.0) += record.amount_value();
        }
        for total in totals.values_mut() {
            *total = round2(*total);
        }
        totals
    }

    /// Weekday totals in Monday-first display order, zero filled for days
    /// without records. Undated records are skipped.
    pub fn totals_by_weekday(records: &[ExpenseRecord]) -> [(Weekday, f64); 7] {
        let mut totals = [
            (Weekday::Mon, 0.0),
            (Weekday::Tue, 0.0),
            (Weekday::Wed, 0.0),
            (Weekday::Thu, 0.0),
            (Weekday::Fri, 0.0),
            (Weekday::Sat, 0.0),
            (Weekday::Sun, 0.0),
        ];
        for record in records {
            if let Some(weekday) = record.weekday() {
                totals[weekday.num_days_from_monday() as usize].1 += record.amount_value();
            }
        }
        for slot in totals.iter_mut() {
            slot.1 = round2(slot.1);
        }
        totals
    }

    /// Sum of every record in the slice.
    pub fn grand_total(records: &[ExpenseRecord]) -> f64 {
        round2(records.iter().map(ExpenseRecord::amount_value).sum())
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sunday on or before `reference`.
fn start_of_week(reference: NaiveDate) -> NaiveDate {
    reference - Duration::days(reference.weekday().num_days_from_sunday() as i64)
}
