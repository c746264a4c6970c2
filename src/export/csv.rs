use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};

use crate::core::TimeWindow;
use crate::domain::ExpenseRecord;
use crate::errors::ExpenseError;

const CSV_HEADERS: [&str; 6] = [
    "Fecha",
    "Descripción",
    "Tipo",
    "Categoría",
    "Monto",
    "Forma de Pago",
];

/// Renders `records` as CSV text, one header line plus one line per record.
///
/// Quoting is disabled on purpose: rows join the raw field values with
/// commas, which is the exact shape downstream spreadsheets already ingest.
/// A description containing a comma therefore spills into extra columns.
/// Amounts are exported as captured, without rounding.
pub fn to_csv(records: &[ExpenseRecord]) -> Result<String, ExpenseError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADERS)?;
    for record in records {
        writer.write_record([
            record.date.as_str(),
            record.description.as_deref().unwrap_or(""),
            record.kind.as_str(),
            record.category.as_str(),
            record.amount.as_str(),
            record.payment_method.as_str(),
        ])?;
    }
    writer.flush()?;
    let buffer = writer
        .into_inner()
        .map_err(|err| ExpenseError::Io(err.into_error()))?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// File name for a CSV download: `gastos_<YYYY-MM-DD>_<all|week>.csv`.
pub fn export_file_name(window: TimeWindow, today: NaiveDate) -> String {
    format!("gastos_{}_{}.csv", today.format("%Y-%m-%d"), window.label())
}
