use serde::{Deserialize, Serialize};

use crate::domain::provider::Provider;

/// Payment method as the backend encodes it on installments and expenses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "CASH")]
    Cash,
    #[serde(rename = "CARD")]
    Card,
    #[serde(rename = "TRANSACTION")]
    Transfer,
}

impl PaymentMethod {
    pub fn label_es(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Efectivo",
            PaymentMethod::Card => "Tarjeta",
            PaymentMethod::Transfer => "Transferencia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Uniform shape for the closing workflow. Income rows come from loan
/// installments, expense rows from recorded expenses; both are immutable
/// once fetched and leave the available pool when a closing is submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// For incomes this already includes the GPS fee.
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gps_amount: Option<f64>,
    pub payment_method: PaymentMethod,
    /// ISO date string as received from the backend.
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_late: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_payment_date: Option<String>,
}

impl Transaction {
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    pub fn from_installment(installment: &AvailableInstallment) -> Self {
        Self {
            id: installment.id.clone(),
            kind: TransactionKind::Income,
            amount: installment.amount + installment.gps_amount,
            base_amount: Some(installment.amount),
            gps_amount: Some(installment.gps_amount),
            payment_method: installment.payment_method,
            date: installment.payment_date.clone(),
            provider: installment.loan.provider.clone(),
            reference: format!(
                "{} · {}",
                installment.loan.contract_number, installment.loan.client_name
            ),
            is_late: installment.is_late,
            late_payment_date: installment.late_payment_date.clone(),
        }
    }

    pub fn from_expense(expense: &AvailableExpense) -> Self {
        Self {
            id: expense.id.clone(),
            kind: TransactionKind::Expense,
            amount: expense.amount,
            base_amount: None,
            gps_amount: None,
            payment_method: expense.payment_method,
            date: expense.date.clone(),
            provider: expense.provider.clone(),
            reference: expense.description.clone(),
            is_late: None,
            late_payment_date: None,
        }
    }
}

/// Response of `GET /api/v1/closing/available-payments`: the pool of
/// records not yet tied to a closing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailablePayments {
    pub installments: Vec<AvailableInstallment>,
    pub expenses: Vec<AvailableExpense>,
}

impl AvailablePayments {
    /// Normalizes both halves of the pool into the uniform transaction
    /// shape, incomes first.
    pub fn into_transactions(&self) -> Vec<Transaction> {
        self.installments
            .iter()
            .map(Transaction::from_installment)
            .chain(self.expenses.iter().map(Transaction::from_expense))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableInstallment {
    pub id: String,
    /// Base installment amount without the GPS fee.
    pub amount: f64,
    #[serde(default)]
    pub gps_amount: f64,
    pub payment_date: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_late: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_payment_date: Option<String>,
    pub loan: LoanRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanRef {
    pub contract_number: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableExpense {
    pub id: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    pub description: String,
    #[serde(default)]
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        Provider {
            id: "prov-1".to_string(),
            name: "Inversiones Norte".to_string(),
        }
    }

    fn installment() -> AvailableInstallment {
        AvailableInstallment {
            id: "inst-1".to_string(),
            amount: 45_000.0,
            gps_amount: 5_000.0,
            payment_date: "2025-08-12".to_string(),
            payment_method: PaymentMethod::Cash,
            is_late: Some(false),
            late_payment_date: None,
            loan: LoanRef {
                contract_number: "CT-0042".to_string(),
                client_name: "Carlos Mejía".to_string(),
                provider: Some(provider()),
            },
        }
    }

    #[test]
    fn installment_normalizes_to_income_with_gps_included() {
        let tx = Transaction::from_installment(&installment());
        assert_eq!(tx.kind, TransactionKind::Income);
        assert_eq!(tx.amount, 50_000.0);
        assert_eq!(tx.base_amount, Some(45_000.0));
        assert_eq!(tx.gps_amount, Some(5_000.0));
        assert_eq!(tx.provider, Some(provider()));
        assert_eq!(tx.reference, "CT-0042 · Carlos Mejía");
    }

    #[test]
    fn expense_normalizes_to_expense_kind() {
        let raw = AvailableExpense {
            id: "exp-1".to_string(),
            amount: 12_000.0,
            payment_method: PaymentMethod::Transfer,
            date: "2025-08-12".to_string(),
            provider: None,
            description: "Gasolina mensajería".to_string(),
            category: "Transporte".to_string(),
        };
        let tx = Transaction::from_expense(&raw);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, 12_000.0);
        assert_eq!(tx.base_amount, None);
        assert_eq!(tx.reference, "Gasolina mensajería");
    }

    #[test]
    fn pool_normalizes_incomes_before_expenses() {
        let pool = AvailablePayments {
            installments: vec![installment()],
            expenses: vec![AvailableExpense {
                id: "exp-1".to_string(),
                amount: 8_000.0,
                payment_method: PaymentMethod::Cash,
                date: "2025-08-12".to_string(),
                provider: Some(provider()),
                description: "Papelería".to_string(),
                category: "Oficina".to_string(),
            }],
        };
        let txs = pool.into_transactions();
        assert_eq!(txs.len(), 2);
        assert!(txs[0].is_income());
        assert!(txs[1].is_expense());
    }

    #[test]
    fn wire_format_uses_camel_case_and_method_codes() {
        let json = r#"{
            "id": "inst-9",
            "amount": 30000,
            "gpsAmount": 2500,
            "paymentDate": "2025-08-01",
            "paymentMethod": "TRANSACTION",
            "isLate": true,
            "latePaymentDate": "2025-08-03",
            "loan": {
                "contractNumber": "CT-0099",
                "clientName": "Luisa Prada",
                "provider": {"id": "prov-2", "name": "Moto Andina"}
            }
        }"#;
        let parsed: AvailableInstallment = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.gps_amount, 2_500.0);
        assert_eq!(parsed.payment_method, PaymentMethod::Transfer);
        assert_eq!(parsed.is_late, Some(true));

        let tx = Transaction::from_installment(&parsed);
        let out = serde_json::to_value(&tx).unwrap();
        assert_eq!(out["type"], "income");
        assert_eq!(out["paymentMethod"], "TRANSACTION");
        assert_eq!(out["baseAmount"], 30_000.0);
    }
}
