//! The expense record itself, with lenient views over its stored fields.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize};

use super::category::{Category, ExpenseKind, PaymentMethod};

/// A single logged expense. Records are immutable once created; the store
/// only appends them or removes them by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    /// Creation time in milliseconds since the Unix epoch.
    pub id: i64,
    /// Calendar date as entered, `YYYY-MM-DD`, no timezone.
    pub date: String,
    /// Amount as entered. Kept verbatim; exports reproduce it unchanged and
    /// [`amount_value`](Self::amount_value) parses it for aggregation.
    #[serde(deserialize_with = "amount_from_string_or_number")]
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: ExpenseKind,
    pub category: Category,
    pub payment_method: PaymentMethod,
}

impl ExpenseRecord {
    /// Numeric view of `amount`. Unparsable or non-finite input counts as
    /// zero so one bad record never poisons an aggregate.
    pub fn amount_value(&self) -> f64 {
        match self.amount.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => 0.0,
        }
    }

    /// The record date, when it parses as `YYYY-MM-DD`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").ok()
    }

    /// Day of week of the record date, when the date parses.
    pub fn weekday(&self) -> Option<Weekday> {
        self.parsed_date().map(|date| date.weekday())
    }
}

/// Persisted blobs may carry amounts as JSON strings (form input kept
/// verbatim) or as bare numbers (hand-edited data); both load.
fn amount_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(value) => value.to_string(),
    })
}
