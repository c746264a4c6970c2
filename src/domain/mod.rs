pub mod category;
pub mod draft;
pub mod record;

pub use category::{Category, ExpenseKind, PaymentMethod};
pub use draft::ExpenseDraft;
pub use record::ExpenseRecord;
