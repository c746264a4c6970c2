pub mod csv;
pub mod report;

pub use self::csv::{export_file_name, to_csv};
pub use report::{render_report, ReportOptions};
