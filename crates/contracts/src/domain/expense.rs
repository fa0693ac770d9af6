use serde::{Deserialize, Serialize};

use crate::domain::provider::Provider;
use crate::domain::transaction::PaymentMethod;

/// Recorded expense as returned by `GET /api/v1/expense`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

/// Body for creating or updating an expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRequest {
    pub amount: f64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
}
