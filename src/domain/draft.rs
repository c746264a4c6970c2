//! Form state for a record that has not been created yet.

use crate::errors::ExpenseError;

use super::category::{Category, ExpenseKind, PaymentMethod};
use super::record::ExpenseRecord;

/// Pre-validation state of the entry form.
///
/// The draft owns the pairing rule between kind and category: selecting a
/// new kind clears any category chosen under the previous one, exactly as
/// the form resets its category selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseDraft {
    pub date: String,
    pub amount: String,
    pub description: String,
    kind: Option<ExpenseKind>,
    category: Option<Category>,
    pub payment_method: Option<PaymentMethod>,
}

impl ExpenseDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> Option<ExpenseKind> {
        self.kind
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Selects the expense kind. Switching to a different kind invalidates
    /// the chosen category, since each kind admits its own category set.
    pub fn set_kind(&mut self, kind: Option<ExpenseKind>) {
        if self.kind != kind {
            self.category = None;
        }
        self.kind = kind;
    }

    /// Chooses a category from the set admitted by the current kind.
    pub fn set_category(&mut self, category: Category) -> Result<(), ExpenseError> {
        let kind = self.kind.ok_or(ExpenseError::MissingField("kind"))?;
        if !category.belongs_to(kind) {
            return Err(ExpenseError::CategoryMismatch { kind, category });
        }
        self.category = Some(category);
        Ok(())
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Category choices offered by the current kind; empty until a kind is
    /// picked, which is how the form keeps its selector disabled.
    pub fn category_options(&self) -> &'static [Category] {
        self.kind.map(ExpenseKind::categories).unwrap_or(&[])
    }

    /// Checks the five required fields and the kind/category pairing.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        self.required().map(|_| ())
    }

    /// Consumes the draft into a record carrying `id`, after re-running
    /// validation.
    pub fn into_record(self, id: i64) -> Result<ExpenseRecord, ExpenseError> {
        let (kind, category, payment_method) = self.required()?;
        Ok(ExpenseRecord {
            id,
            date: self.date.trim().to_string(),
            amount: self.amount.trim().to_string(),
            description: none_if_blank(&self.description),
            kind,
            category,
            payment_method,
        })
    }

    fn required(&self) -> Result<(ExpenseKind, Category, PaymentMethod), ExpenseError> {
        if self.date.trim().is_empty() {
            return Err(ExpenseError::MissingField("date"));
        }
        if self.amount.trim().is_empty() {
            return Err(ExpenseError::MissingField("amount"));
        }
        let kind = self.kind.ok_or(ExpenseError::MissingField("kind"))?;
        let category = self.category.ok_or(ExpenseError::MissingField("category"))?;
        if !category.belongs_to(kind) {
            return Err(ExpenseError::CategoryMismatch { kind, category });
        }
        let payment_method = self
            .payment_method
            .ok_or(ExpenseError::MissingField("payment_method"))?;
        Ok((kind, category, payment_method))
    }
}

fn none_if_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
