//! Closed classifications for logged expenses: the owner context, the
//! per-context category sets, and the payment method.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner/context of an expense: the personal budget or one of the
/// entrepreneurship ventures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseKind {
    Personal,
    Belyou,
    #[serde(rename = "Sherman Morgan")]
    ShermanMorgan,
    #[serde(rename = "Men Shop")]
    MenShop,
}

impl ExpenseKind {
    /// Every kind, in the order the entry form offers them.
    pub const ALL: [ExpenseKind; 4] = [
        ExpenseKind::Personal,
        ExpenseKind::Belyou,
        ExpenseKind::ShermanMorgan,
        ExpenseKind::MenShop,
    ];

    pub fn is_entrepreneurship(self) -> bool {
        !matches!(self, ExpenseKind::Personal)
    }

    /// The category set this kind admits.
    pub fn categories(self) -> &'static [Category] {
        if self.is_entrepreneurship() {
            &Category::ENTREPRENEURSHIP
        } else {
            &Category::PERSONAL
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseKind::Personal => "Personal",
            ExpenseKind::Belyou => "Belyou",
            ExpenseKind::ShermanMorgan => "Sherman Morgan",
            ExpenseKind::MenShop => "Men Shop",
        }
    }
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expense category. Which variants are admissible depends on the record's
/// [`ExpenseKind`]: the first seven belong to `Personal`, the rest to the
/// entrepreneurship kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    GastosFijos,
    Comida,
    Transporte,
    Gustos,
    Salud,
    Ahorro,
    Viajes,
    Insumos,
    Publicidad,
    Mantenimiento,
    PagosProducto,
    Envios,
    Otro,
}

impl Category {
    /// Categories admitted for `ExpenseKind::Personal`.
    pub const PERSONAL: [Category; 7] = [
        Category::GastosFijos,
        Category::Comida,
        Category::Transporte,
        Category::Gustos,
        Category::Salud,
        Category::Ahorro,
        Category::Viajes,
    ];

    /// Categories admitted for the entrepreneurship kinds.
    pub const ENTREPRENEURSHIP: [Category; 6] = [
        Category::Insumos,
        Category::Publicidad,
        Category::Mantenimiento,
        Category::PagosProducto,
        Category::Envios,
        Category::Otro,
    ];

    /// Returns `true` when this category is admissible for `kind`.
    pub fn belongs_to(self, kind: ExpenseKind) -> bool {
        kind.categories().contains(&self)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::GastosFijos => "gastos_fijos",
            Category::Comida => "comida",
            Category::Transporte => "transporte",
            Category::Gustos => "gustos",
            Category::Salud => "salud",
            Category::Ahorro => "ahorro",
            Category::Viajes => "viajes",
            Category::Insumos => "insumos",
            Category::Publicidad => "publicidad",
            Category::Mantenimiento => "mantenimiento",
            Category::PagosProducto => "pagos_producto",
            Category::Envios => "envios",
            Category::Otro => "otro",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an expense was paid.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Credit,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Credit, PaymentMethod::Cash];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Credit => "credit",
            PaymentMethod::Cash => "cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_sets_are_disjoint() {
        for category in Category::PERSONAL {
            assert!(!Category::ENTREPRENEURSHIP.contains(&category));
        }
    }

    #[test]
    fn every_kind_admits_exactly_one_set() {
        for kind in ExpenseKind::ALL {
            let expected: &[Category] = if kind == ExpenseKind::Personal {
                &Category::PERSONAL
            } else {
                &Category::ENTREPRENEURSHIP
            };
            assert_eq!(kind.categories(), expected, "set for {kind}");
        }
    }

    #[test]
    fn serde_labels_match_the_form_values() {
        let json = serde_json::to_string(&ExpenseKind::ShermanMorgan).unwrap();
        assert_eq!(json, "\"Sherman Morgan\"");
        let json = serde_json::to_string(&Category::PagosProducto).unwrap();
        assert_eq!(json, "\"pagos_producto\"");
        let json = serde_json::to_string(&PaymentMethod::Cash).unwrap();
        assert_eq!(json, "\"cash\"");
    }

    #[test]
    fn display_matches_serde_label() {
        assert_eq!(Category::GastosFijos.to_string(), "gastos_fijos");
        assert_eq!(ExpenseKind::MenShop.to_string(), "Men Shop");
        assert_eq!(PaymentMethod::Credit.to_string(), "credit");
    }
}
