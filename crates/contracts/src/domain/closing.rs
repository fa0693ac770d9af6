//! Persisted cash-register closings ("cierre de caja") and the status
//! classification the history view derives from them.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::domain::provider::Provider;

/// A closing is balanced when the register totals match the system balance
/// within this margin.
pub const BALANCED_MARGIN: f64 = 1_000.0;

/// Past this margin a difference stops being minor.
pub const MINOR_DIFF_MARGIN: f64 = 5_000.0;

/// Installment tied to a persisted closing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingPayment {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub gps_amount: f64,
}

/// Expense tied to a persisted closing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingExpense {
    pub id: String,
    pub amount: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBy {
    pub id: String,
    pub name: String,
}

/// Read-only closing as returned by `GET /api/v1/closing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Closing {
    pub id: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub cash_in_register: f64,
    pub cash_from_transfers: f64,
    pub cash_from_cards: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<CreatedBy>,
    #[serde(default)]
    pub payments: Vec<ClosingPayment>,
    // The API names this field in singular.
    #[serde(rename = "expense", default)]
    pub expenses: Vec<ClosingExpense>,
}

impl Closing {
    /// Σ payments (amount + gps) − Σ expenses.
    pub fn balance(&self) -> f64 {
        let income: f64 = self.payments.iter().map(|p| p.amount + p.gps_amount).sum();
        let spent: f64 = self.expenses.iter().map(|e| e.amount).sum();
        income - spent
    }

    /// Sum of the three declared register totals.
    pub fn total_cash_in_system(&self) -> f64 {
        self.cash_in_register + self.cash_from_transfers + self.cash_from_cards
    }

    pub fn status(&self) -> ClosingStatus {
        ClosingStatus::classify(self.balance(), self.total_cash_in_system())
    }

    /// Month-of-year of the closing date, 1..=12, when the date parses.
    pub fn month(&self) -> Option<u32> {
        let date_part = self.date.split('T').next().unwrap_or(&self.date);
        chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .ok()
            .map(|d| d.month())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClosingStatus {
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "minor-diff")]
    MinorDiff,
    #[serde(rename = "major-diff")]
    MajorDiff,
}

impl ClosingStatus {
    /// Classifies by `|balance − totalCashInSystem|`.
    pub fn classify(balance: f64, total_cash_in_system: f64) -> Self {
        let diff = (balance - total_cash_in_system).abs();
        if diff <= BALANCED_MARGIN {
            ClosingStatus::Balanced
        } else if diff <= MINOR_DIFF_MARGIN {
            ClosingStatus::MinorDiff
        } else {
            ClosingStatus::MajorDiff
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClosingStatus::Balanced => "balanced",
            ClosingStatus::MinorDiff => "minor-diff",
            ClosingStatus::MajorDiff => "major-diff",
        }
    }

    pub fn label_es(&self) -> &'static str {
        match self {
            ClosingStatus::Balanced => "Cuadrado",
            ClosingStatus::MinorDiff => "Descuadre leve",
            ClosingStatus::MajorDiff => "Descuadre mayor",
        }
    }
}

/// Body of `POST /api/v1/closing`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClosingRequest {
    pub cash_in_register: f64,
    pub cash_from_transfers: f64,
    pub cash_from_cards: f64,
    pub notes: String,
    pub installment_ids: Vec<String>,
    pub expense_ids: Vec<String>,
    pub created_by_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_thresholds() {
        assert_eq!(
            ClosingStatus::classify(10_000.0, 10_000.0),
            ClosingStatus::Balanced
        );
        // diff = 4000 ≤ 5000
        assert_eq!(
            ClosingStatus::classify(10_000.0, 14_000.0),
            ClosingStatus::MinorDiff
        );
        // diff = 10000 > 5000
        assert_eq!(
            ClosingStatus::classify(10_000.0, 20_000.0),
            ClosingStatus::MajorDiff
        );
    }

    #[test]
    fn classification_boundaries_are_inclusive() {
        assert_eq!(
            ClosingStatus::classify(0.0, 1_000.0),
            ClosingStatus::Balanced
        );
        assert_eq!(
            ClosingStatus::classify(0.0, 5_000.0),
            ClosingStatus::MinorDiff
        );
        assert_eq!(
            ClosingStatus::classify(0.0, 5_000.01),
            ClosingStatus::MajorDiff
        );
    }

    fn sample_closing() -> Closing {
        Closing {
            id: "cl-1".to_string(),
            date: "2025-08-14T18:30:00Z".to_string(),
            provider: None,
            cash_in_register: 40_000.0,
            cash_from_transfers: 10_000.0,
            cash_from_cards: 0.0,
            notes: String::new(),
            created_by: None,
            payments: vec![
                ClosingPayment {
                    id: "p1".to_string(),
                    amount: 45_000.0,
                    gps_amount: 5_000.0,
                },
                ClosingPayment {
                    id: "p2".to_string(),
                    amount: 10_000.0,
                    gps_amount: 0.0,
                },
            ],
            expenses: vec![ClosingExpense {
                id: "e1".to_string(),
                amount: 10_000.0,
                description: "Aseo".to_string(),
            }],
        }
    }

    #[test]
    fn balance_sums_payments_with_gps_minus_expenses() {
        let closing = sample_closing();
        assert_eq!(closing.balance(), 50_000.0);
        assert_eq!(closing.total_cash_in_system(), 50_000.0);
        assert_eq!(closing.status(), ClosingStatus::Balanced);
    }

    #[test]
    fn month_extraction_handles_datetime_strings() {
        let closing = sample_closing();
        assert_eq!(closing.month(), Some(8));
    }

    #[test]
    fn wire_expense_field_is_singular() {
        let json = r#"{
            "id": "cl-2",
            "date": "2025-07-01",
            "cashInRegister": 0,
            "cashFromTransfers": 0,
            "cashFromCards": 0,
            "expense": [{"id": "e1", "amount": 500}]
        }"#;
        let parsed: Closing = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.expenses.len(), 1);
        assert_eq!(parsed.month(), Some(7));
    }
}
