//! Pure form logic for the closing form: expected totals per payment
//! method, the read-only lock and the submit gate.

use contracts::domain::reconciliation::CashCount;
use contracts::domain::transaction::{PaymentMethod, TransactionKind};

use crate::domain::transactions::selection::SelectionState;

/// Amount fields the form derives from the current selection: selected
/// incomes summed per payment method. Expenses never reduce these; they are
/// reported as their own aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FormTotals {
    pub expected_cash: f64,
    pub expected_transfers: f64,
    pub expected_cards: f64,
}

impl FormTotals {
    pub fn from_selection(selection: &SelectionState) -> Self {
        let by = |method| selection.total_by_method(TransactionKind::Income, method);
        Self {
            expected_cash: by(PaymentMethod::Cash),
            expected_transfers: by(PaymentMethod::Transfer),
            expected_cards: by(PaymentMethod::Card),
        }
    }

    pub fn total_in_system(&self) -> f64 {
        self.expected_cash + self.expected_transfers + self.expected_cards
    }
}

/// Once any income is selected the three amount fields are driven by the
/// selection and become read-only; the denomination tally is then the only
/// adjustable numeric input.
pub fn is_locked(income_count: usize) -> bool {
    income_count > 0
}

/// Submit gate: not already submitting, at least one income selected, some
/// amount registered, and the physical count matching the expected cash.
pub fn is_form_valid(
    submitting: bool,
    income_count: usize,
    totals: &FormTotals,
    cash: &CashCount,
) -> bool {
    let has_any_amount = cash.total_counted > 0.0
        || totals.expected_transfers > 0.0
        || totals.expected_cards > 0.0;
    !submitting && income_count > 0 && has_any_amount && cash.is_valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::provider::Provider;
    use contracts::domain::reconciliation::{reconcile, DenominationCount};
    use contracts::domain::transaction::Transaction;

    fn tx(id: &str, kind: TransactionKind, amount: f64, method: PaymentMethod) -> Transaction {
        Transaction {
            id: id.to_string(),
            kind,
            amount,
            base_amount: None,
            gps_amount: None,
            payment_method: method,
            date: "2025-08-14".to_string(),
            provider: Option::<Provider>::None,
            reference: id.to_string(),
            is_late: None,
            late_payment_date: None,
        }
    }

    #[test]
    fn totals_sum_incomes_per_method_ignoring_expenses() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![
            tx("a", TransactionKind::Income, 80_000.0, PaymentMethod::Cash),
            tx("b", TransactionKind::Income, 30_000.0, PaymentMethod::Transfer),
            tx("c", TransactionKind::Income, 15_000.0, PaymentMethod::Card),
            tx("d", TransactionKind::Expense, 10_000.0, PaymentMethod::Cash),
            tx("e", TransactionKind::Expense, 5_000.0, PaymentMethod::Transfer),
        ]);
        let totals = FormTotals::from_selection(&sel);
        assert_eq!(totals.expected_cash, 80_000.0);
        assert_eq!(totals.expected_transfers, 30_000.0);
        assert_eq!(totals.expected_cards, 15_000.0);
        assert_eq!(totals.total_in_system(), 125_000.0);
        assert_eq!(sel.total_expense(), 15_000.0);
    }

    // A cash expense must not shrink the reconciliation target: with a
    // 50000 cash income and a 10000 cash expense selected, the register is
    // still expected to hold the full 50000.
    #[test]
    fn expected_cash_is_the_sum_of_cash_incomes_only() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![
            tx("a", TransactionKind::Income, 50_000.0, PaymentMethod::Cash),
            tx("d", TransactionKind::Expense, 10_000.0, PaymentMethod::Cash),
        ]);
        assert_eq!(sel.expected_cash(), 50_000.0);
        let totals = FormTotals::from_selection(&sel);
        assert_eq!(totals.expected_cash, 50_000.0);

        let mut tally = DenominationCount::new();
        tally.set_count(50_000, 1);
        let matching = reconcile(totals.expected_cash, &tally);
        assert!(is_form_valid(false, sel.income_count(), &totals, &matching));

        let mut netted = DenominationCount::new();
        netted.set_count(20_000, 2);
        let short = reconcile(totals.expected_cash, &netted);
        assert!(!is_form_valid(false, sel.income_count(), &totals, &short));
    }

    #[test]
    fn lock_follows_income_selection() {
        assert!(!is_locked(0));
        assert!(is_locked(1));
    }

    #[test]
    fn validity_requires_incomes_regardless_of_amounts() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![tx(
            "d",
            TransactionKind::Expense,
            10_000.0,
            PaymentMethod::Cash,
        )]);
        let totals = FormTotals::from_selection(&sel);
        let cash = reconcile(totals.expected_cash, &DenominationCount::new());
        assert!(!is_form_valid(false, sel.income_count(), &totals, &cash));
    }

    // One CASH income of 50000 plus one transfer income of 30000: the form
    // fills 50000/30000/0 and the submit stays blocked until the tally
    // reaches exactly 50000.
    #[test]
    fn submit_unblocks_when_tally_matches_expected_cash() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![
            tx("a", TransactionKind::Income, 50_000.0, PaymentMethod::Cash),
            tx("b", TransactionKind::Income, 30_000.0, PaymentMethod::Transfer),
        ]);
        let totals = FormTotals::from_selection(&sel);
        assert_eq!(totals.expected_cash, 50_000.0);
        assert_eq!(totals.expected_transfers, 30_000.0);
        assert_eq!(totals.expected_cards, 0.0);
        assert_eq!(totals.total_in_system(), 80_000.0);

        let empty = reconcile(totals.expected_cash, &DenominationCount::new());
        assert!(!is_form_valid(false, sel.income_count(), &totals, &empty));

        let mut tally = DenominationCount::new();
        tally.set_count(50_000, 1);
        let matching = reconcile(totals.expected_cash, &tally);
        assert!(is_form_valid(false, sel.income_count(), &totals, &matching));

        // An in-flight submit blocks regardless.
        assert!(!is_form_valid(true, sel.income_count(), &totals, &matching));
    }

    #[test]
    fn off_count_blocks_even_with_other_totals_filled() {
        let mut sel = SelectionState::new();
        sel.select_many(vec![
            tx("a", TransactionKind::Income, 50_000.0, PaymentMethod::Cash),
            tx("b", TransactionKind::Income, 30_000.0, PaymentMethod::Transfer),
        ]);
        let totals = FormTotals::from_selection(&sel);

        let mut tally = DenominationCount::new();
        tally.set_count(50_000, 1);
        tally.set_count(1_000, 1);
        let off = reconcile(totals.expected_cash, &tally);
        assert!(!is_form_valid(false, sel.income_count(), &totals, &off));
    }
}
