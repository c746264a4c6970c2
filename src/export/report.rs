//! Printable HTML report generation.
//!
//! Produces a self-contained document with embedded CSS, meant to be handed
//! to the caller's print or save-as pathway.

use crate::config::Config;
use crate::core::SummaryService;
use crate::domain::ExpenseRecord;

/// Presentation knobs for the printable report.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub title: String,
    pub currency: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Config::default().into()
    }
}

impl From<Config> for ReportOptions {
    fn from(config: Config) -> Self {
        Self {
            title: config.report_title,
            currency: config.currency,
        }
    }
}

/// Generates the report document for `records`.
///
/// Text fields are HTML-escaped; amounts are rendered with two decimals and
/// the configured currency symbol. The listing keeps the input order.
pub fn render_report(records: &[ExpenseRecord], options: &ReportOptions) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str(&format!(
            "                <tr><td>{date}</td><td>{description}</td><td>{kind}</td>\
             <td>{category}</td><td>{payment}</td>\
             <td class=\"number\">{currency}{amount:.2}</td></tr>\n",
            date = escape_html(&record.date),
            description = escape_html(record.description.as_deref().unwrap_or("")),
            kind = escape_html(record.kind.as_str()),
            category = escape_html(record.category.as_str()),
            payment = escape_html(record.payment_method.as_str()),
            currency = escape_html(&options.currency),
            amount = record.amount_value(),
        ));
    }

    let total = SummaryService::grand_total(records);

    format!(
        r##"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <p class="count">{count} registro(s)</p>
    </header>
    <main>
        <table>
            <thead>
                <tr>
                    <th>Fecha</th>
                    <th>Descripción</th>
                    <th>Tipo</th>
                    <th>Categoría</th>
                    <th>Forma de Pago</th>
                    <th class="number">Monto</th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
            <tfoot>
                <tr>
                    <td colspan="5">Total</td>
                    <td class="number">{currency}{total:.2}</td>
                </tr>
            </tfoot>
        </table>
    </main>
</body>
</html>"##,
        title = escape_html(&options.title),
        css = CSS,
        count = records.len(),
        rows = rows,
        currency = escape_html(&options.currency),
        total = total,
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const CSS: &str = r#"body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif;
    color: #111827;
    margin: 2rem;
}

header h1 {
    font-size: 1.5rem;
    margin-bottom: 0.25rem;
}

header .count {
    color: #6b7280;
    margin-top: 0;
}

table {
    width: 100%;
    border-collapse: collapse;
    font-size: 0.875rem;
}

th {
    text-align: left;
    padding: 0.5rem 0.75rem;
    border-bottom: 2px solid #374151;
}

td {
    padding: 0.5rem 0.75rem;
    border-bottom: 1px solid #e5e7eb;
}

tbody tr:nth-child(even) {
    background: #f9fafb;
}

tfoot td {
    border-top: 2px solid #374151;
    border-bottom: none;
    font-weight: 600;
}

.number {
    text-align: right;
    font-variant-numeric: tabular-nums;
}

@media print {
    body {
        margin: 0;
    }
}"#;
