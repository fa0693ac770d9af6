//! Filtering, aggregation and CSV shape for the closing history.

use contracts::domain::closing::{Closing, ClosingStatus};

use crate::shared::components::table::number_format::plain_amount;
use crate::shared::date_utils::format_date;
use crate::shared::export::CsvExportable;

/// History filters; all active criteria must match (AND).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClosingFilters {
    pub search: String,
    pub month: Option<u32>,
    pub provider_id: Option<String>,
    pub status: Option<ClosingStatus>,
}

impl ClosingFilters {
    pub fn matches(&self, closing: &Closing) -> bool {
        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let provider = closing
                .provider
                .as_ref()
                .map(|p| p.name.to_lowercase())
                .unwrap_or_default();
            let created_by = closing
                .created_by
                .as_ref()
                .map(|c| c.name.to_lowercase())
                .unwrap_or_default();
            let hit = closing.id.to_lowercase().contains(&search)
                || provider.contains(&search)
                || created_by.contains(&search)
                || closing.notes.to_lowercase().contains(&search);
            if !hit {
                return false;
            }
        }
        if let Some(month) = self.month {
            if closing.month() != Some(month) {
                return false;
            }
        }
        if let Some(provider_id) = &self.provider_id {
            if closing.provider.as_ref().map(|p| p.id.as_str()) != Some(provider_id.as_str()) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if closing.status() != status {
                return false;
            }
        }
        true
    }
}

pub fn apply_filters(closings: &[Closing], filters: &ClosingFilters) -> Vec<Closing> {
    closings
        .iter()
        .filter(|c| filters.matches(c))
        .cloned()
        .collect()
}

/// Aggregates shown above the history table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClosingTotals {
    pub cash: f64,
    pub transfers: f64,
    pub cards: f64,
}

impl ClosingTotals {
    pub fn total(&self) -> f64 {
        self.cash + self.transfers + self.cards
    }
}

pub fn totals(closings: &[Closing]) -> ClosingTotals {
    closings.iter().fold(ClosingTotals::default(), |mut acc, c| {
        acc.cash += c.cash_in_register;
        acc.transfers += c.cash_from_transfers;
        acc.cards += c.cash_from_cards;
        acc
    })
}

impl CsvExportable for Closing {
    fn headers() -> Vec<&'static str> {
        vec![
            "Fecha",
            "Proveedor",
            "Efectivo en caja",
            "Transferencias",
            "Tarjetas",
            "Total sistema",
            "Balance",
            "Estado",
            "Registrado por",
            "Notas",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            format_date(&self.date),
            self.provider
                .as_ref()
                .map(|p| p.name.clone())
                .unwrap_or_default(),
            plain_amount(self.cash_in_register),
            plain_amount(self.cash_from_transfers),
            plain_amount(self.cash_from_cards),
            plain_amount(self.total_cash_in_system()),
            plain_amount(self.balance()),
            self.status().label_es().to_string(),
            self.created_by
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            self.notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::closing::{ClosingPayment, CreatedBy};
    use contracts::domain::provider::Provider;

    fn closing(id: &str, date: &str, provider: Option<(&str, &str)>, cash: f64) -> Closing {
        Closing {
            id: id.to_string(),
            date: date.to_string(),
            provider: provider.map(|(pid, name)| Provider {
                id: pid.to_string(),
                name: name.to_string(),
            }),
            cash_in_register: cash,
            cash_from_transfers: 0.0,
            cash_from_cards: 0.0,
            notes: String::new(),
            created_by: Some(CreatedBy {
                id: "u1".to_string(),
                name: "Ana Torres".to_string(),
            }),
            payments: vec![ClosingPayment {
                id: "p1".to_string(),
                amount: cash,
                gps_amount: 0.0,
            }],
            expenses: Vec::new(),
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let closings = vec![
            closing("a", "2025-07-01", None, 10_000.0),
            closing("b", "2025-08-01", None, 20_000.0),
        ];
        assert_eq!(apply_filters(&closings, &ClosingFilters::default()).len(), 2);
    }

    #[test]
    fn filters_are_anded() {
        let closings = vec![
            closing("a", "2025-07-01", Some(("p1", "Moto Andina")), 10_000.0),
            closing("b", "2025-07-15", Some(("p2", "Norte")), 10_000.0),
            closing("c", "2025-08-01", Some(("p1", "Moto Andina")), 10_000.0),
        ];
        let filters = ClosingFilters {
            month: Some(7),
            provider_id: Some("p1".to_string()),
            ..Default::default()
        };
        let hits = apply_filters(&closings, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn search_matches_provider_creator_and_notes() {
        let mut with_notes = closing("a", "2025-07-01", None, 10_000.0);
        with_notes.notes = "Cierre con faltante reportado".to_string();
        let closings = vec![
            with_notes,
            closing("b", "2025-07-01", Some(("p1", "Moto Andina")), 10_000.0),
        ];

        let by_notes = ClosingFilters {
            search: "faltante".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&closings, &by_notes)[0].id, "a");

        let by_provider = ClosingFilters {
            search: "andina".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&closings, &by_provider)[0].id, "b");

        let by_creator = ClosingFilters {
            search: "torres".to_string(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&closings, &by_creator).len(), 2);

        let by_id = ClosingFilters {
            search: "b".to_string(),
            ..Default::default()
        };
        assert!(apply_filters(&closings, &by_id).iter().any(|c| c.id == "b"));
    }

    #[test]
    fn status_filter_uses_derived_classification() {
        // balance = 10000, system total = 30000: major difference.
        let unbalanced = closing("a", "2025-07-01", None, 10_000.0);
        let mut unbalanced = unbalanced;
        unbalanced.cash_in_register = 30_000.0;

        let balanced = closing("b", "2025-07-01", None, 10_000.0);
        let closings = vec![unbalanced, balanced];

        let filters = ClosingFilters {
            status: Some(ClosingStatus::MajorDiff),
            ..Default::default()
        };
        let hits = apply_filters(&closings, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn totals_sum_the_three_register_columns() {
        let mut a = closing("a", "2025-07-01", None, 10_000.0);
        a.cash_from_transfers = 5_000.0;
        let mut b = closing("b", "2025-07-01", None, 20_000.0);
        b.cash_from_cards = 2_000.0;

        let t = totals(&[a, b]);
        assert_eq!(t.cash, 30_000.0);
        assert_eq!(t.transfers, 5_000.0);
        assert_eq!(t.cards, 2_000.0);
        assert_eq!(t.total(), 37_000.0);
    }

    #[test]
    fn csv_row_matches_header_arity() {
        let c = closing("a", "2025-07-01", Some(("p1", "Moto Andina")), 10_000.0);
        assert_eq!(Closing::headers().len(), c.to_csv_row().len());
        assert_eq!(c.to_csv_row()[0], "01/07/2025");
        assert_eq!(c.to_csv_row()[2], "10000");
    }
}
