//! Selection state for the new-closing workflow.
//!
//! A closing settles against at most one provider, so the selection enforces
//! a single-provider rule: once a selected transaction carries a provider,
//! any further transaction with a *different* provider is rejected and the
//! selection stays untouched. Transactions without provider mix freely.

use std::collections::HashSet;

use contracts::domain::provider::Provider;
use contracts::domain::transaction::{PaymentMethod, Transaction, TransactionKind};

/// Rejected attempt to mix providers in one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderMismatch {
    pub current: Provider,
    pub attempted: Provider,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    items: Vec<Transaction>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.items.iter().any(|t| t.id == id)
    }

    pub fn ids(&self) -> HashSet<String> {
        self.items.iter().map(|t| t.id.clone()).collect()
    }

    pub fn items(&self) -> &[Transaction] {
        &self.items
    }

    /// Provider the selection is committed to: the first income carrying
    /// one, falling back to any selected transaction with one.
    pub fn provider(&self) -> Option<&Provider> {
        self.incomes()
            .find_map(|t| t.provider.as_ref())
            .or_else(|| self.items.iter().find_map(|t| t.provider.as_ref()))
    }

    pub fn income_count(&self) -> usize {
        self.incomes().count()
    }

    /// Adds one transaction, enforcing the single-provider rule. On a
    /// mismatch the selection is left unchanged and the conflicting pair is
    /// returned. Re-selecting an already selected id is a no-op.
    pub fn select(&mut self, transaction: Transaction) -> Result<(), ProviderMismatch> {
        if self.is_selected(&transaction.id) {
            return Ok(());
        }
        if let (Some(current), Some(attempted)) = (self.provider(), transaction.provider.as_ref())
        {
            if current.id != attempted.id {
                return Err(ProviderMismatch {
                    current: current.clone(),
                    attempted: attempted.clone(),
                });
            }
        }
        self.items.push(transaction);
        Ok(())
    }

    /// Bulk selection for select-all. Skips already selected ids and does
    /// not apply the provider rule; the caller selects a homogeneous page.
    pub fn select_many(&mut self, transactions: Vec<Transaction>) {
        for transaction in transactions {
            if !self.is_selected(&transaction.id) {
                self.items.push(transaction);
            }
        }
    }

    pub fn deselect(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }

    pub fn deselect_many(&mut self, ids: &HashSet<String>) {
        self.items.retain(|t| !ids.contains(&t.id));
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn incomes(&self) -> impl Iterator<Item = &Transaction> {
        self.items.iter().filter(|t| t.is_income())
    }

    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.items.iter().filter(|t| t.is_expense())
    }

    pub fn income_ids(&self) -> Vec<String> {
        self.incomes().map(|t| t.id.clone()).collect()
    }

    pub fn expense_ids(&self) -> Vec<String> {
        self.expenses().map(|t| t.id.clone()).collect()
    }

    /// Σ amounts of one kind restricted to one payment method.
    pub fn total_by_method(&self, kind: TransactionKind, method: PaymentMethod) -> f64 {
        self.items
            .iter()
            .filter(|t| t.kind == kind && t.payment_method == method)
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_income(&self) -> f64 {
        self.incomes().map(|t| t.amount).sum()
    }

    pub fn total_expense(&self) -> f64 {
        self.expenses().map(|t| t.amount).sum()
    }

    /// Net of the selection: incomes minus expenses, all methods.
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Physical cash the register should hold for this selection: the sum
    /// of cash incomes. Expenses are settled separately and card/transfer
    /// amounts never touch the drawer.
    pub fn expected_cash(&self) -> f64 {
        self.total_by_method(TransactionKind::Income, PaymentMethod::Cash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(id: &str) -> Provider {
        Provider {
            id: id.to_string(),
            name: format!("Proveedor {}", id),
        }
    }

    fn tx(
        id: &str,
        kind: TransactionKind,
        amount: f64,
        method: PaymentMethod,
        provider: Option<Provider>,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            amount,
            base_amount: None,
            gps_amount: None,
            payment_method: method,
            date: "2025-08-14".to_string(),
            provider,
            reference: id.to_string(),
            is_late: None,
            late_payment_date: None,
        }
    }

    #[test]
    fn select_and_deselect_roundtrip() {
        let mut sel = SelectionState::new();
        sel.select(tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            None,
        ))
        .unwrap();
        assert!(sel.is_selected("a"));
        assert_eq!(sel.len(), 1);

        sel.deselect("a");
        assert!(sel.is_empty());
    }

    #[test]
    fn reselecting_same_id_does_not_duplicate() {
        let mut sel = SelectionState::new();
        let t = tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            None,
        );
        sel.select(t.clone()).unwrap();
        sel.select(t).unwrap();
        assert_eq!(sel.len(), 1);
    }

    #[test]
    fn provider_mismatch_leaves_selection_unchanged() {
        let mut sel = SelectionState::new();
        sel.select(tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            Some(provider("p1")),
        ))
        .unwrap();

        let err = sel
            .select(tx(
                "b",
                TransactionKind::Income,
                20_000.0,
                PaymentMethod::Cash,
                Some(provider("p2")),
            ))
            .unwrap_err();

        assert_eq!(err.current.id, "p1");
        assert_eq!(err.attempted.id, "p2");
        assert_eq!(sel.len(), 1);
        assert!(!sel.is_selected("b"));
        assert_eq!(sel.provider().map(|p| p.id.as_str()), Some("p1"));
    }

    #[test]
    fn providerless_transactions_mix_with_anything() {
        let mut sel = SelectionState::new();
        sel.select(tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            None,
        ))
        .unwrap();
        sel.select(tx(
            "b",
            TransactionKind::Income,
            20_000.0,
            PaymentMethod::Card,
            Some(provider("p1")),
        ))
        .unwrap();
        sel.select(tx(
            "c",
            TransactionKind::Expense,
            5_000.0,
            PaymentMethod::Cash,
            None,
        ))
        .unwrap();
        assert_eq!(sel.len(), 3);
        assert_eq!(sel.provider().map(|p| p.id.as_str()), Some("p1"));
    }

    #[test]
    fn same_provider_is_allowed() {
        let mut sel = SelectionState::new();
        sel.select(tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            Some(provider("p1")),
        ))
        .unwrap();
        sel.select(tx(
            "b",
            TransactionKind::Income,
            20_000.0,
            PaymentMethod::Cash,
            Some(provider("p1")),
        ))
        .unwrap();
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn totals_split_by_kind_and_method() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![
            tx(
                "a",
                TransactionKind::Income,
                50_000.0,
                PaymentMethod::Cash,
                None,
            ),
            tx(
                "b",
                TransactionKind::Income,
                30_000.0,
                PaymentMethod::Transfer,
                None,
            ),
            tx(
                "c",
                TransactionKind::Income,
                20_000.0,
                PaymentMethod::Card,
                None,
            ),
            tx(
                "d",
                TransactionKind::Expense,
                10_000.0,
                PaymentMethod::Cash,
                None,
            ),
        ]);

        assert_eq!(sel.total_income(), 100_000.0);
        assert_eq!(sel.total_expense(), 10_000.0);
        assert_eq!(sel.balance(), 90_000.0);
        assert_eq!(
            sel.total_by_method(TransactionKind::Income, PaymentMethod::Transfer),
            30_000.0
        );
        // Only cash incomes move the drawer; the expense stays out.
        assert_eq!(sel.expected_cash(), 50_000.0);
    }

    #[test]
    fn clear_empties_everything() {
        let mut sel = SelectionState::new();
        sel.select(tx(
            "a",
            TransactionKind::Income,
            10_000.0,
            PaymentMethod::Cash,
            Some(provider("p1")),
        ))
        .unwrap();
        sel.clear();
        assert!(sel.is_empty());
        assert!(sel.provider().is_none());
    }
}
