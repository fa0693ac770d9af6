//! Available transactions table for the new-closing page.
//!
//! Lists pending installments (incomes) and expenses in one table with
//! client-side search, filters and pagination. Row checkboxes feed the
//! shared [`SelectionContext`]; a provider mix is rejected with a warning
//! dialog and the selection survives filter and page changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

use contracts::domain::transaction::{PaymentMethod, Transaction};

use crate::domain::transactions::context::use_selection;
use crate::domain::transactions::source::fetch_available_transactions;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::table_cell_checkbox::TableCellCheckbox;
use crate::shared::components::table::table_cell_money::TableCellMoney;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::table::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, page_slice, total_pages, Searchable};

impl Searchable for Transaction {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.reference.to_lowercase().contains(&filter)
            || self
                .provider
                .as_ref()
                .map(|p| p.name.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }
}

fn kind_matches(transaction: &Transaction, kind_filter: &str) -> bool {
    match kind_filter {
        "income" => transaction.is_income(),
        "expense" => transaction.is_expense(),
        _ => true,
    }
}

fn method_matches(transaction: &Transaction, method_filter: &str) -> bool {
    match method_filter {
        "CASH" => transaction.payment_method == PaymentMethod::Cash,
        "CARD" => transaction.payment_method == PaymentMethod::Card,
        "TRANSACTION" => transaction.payment_method == PaymentMethod::Transfer,
        _ => true,
    }
}

#[component]
pub fn AvailableTransactionsList() -> impl IntoView {
    let selection = use_selection();

    let items = RwSignal::new(Vec::<Transaction>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let search = RwSignal::new(String::new());
    let kind_filter = RwSignal::new("all".to_string());
    let method_filter = RwSignal::new("all".to_string());

    let current_page = RwSignal::new(0usize);
    let page_size = RwSignal::new(10usize);

    // Drop the response if the tab closed while the request was in flight.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let result = fetch_available_transactions().await;
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(transactions) => items.set(transactions),
                Err(e) => {
                    log::error!("Failed to load available transactions: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };

    // Initial load, repeated whenever a submitted closing shrinks the pool.
    Effect::new(move |_| {
        selection.pool_version.track();
        load();
    });

    let filtered = Memo::new(move |_| {
        let kind = kind_filter.get();
        let method = method_filter.get();
        let base: Vec<Transaction> = items
            .get()
            .into_iter()
            .filter(|t| kind_matches(t, &kind) && method_matches(t, &method))
            .collect();
        filter_list(base, &search.get())
    });

    // Filter changes can leave the current page past the end. Keyed to the
    // filter inputs, not the filtered list, so a pool reload keeps the page.
    Effect::new(move |_| {
        search.track();
        kind_filter.track();
        method_filter.track();
        current_page.set(0);
    });

    let pages = Signal::derive(move || total_pages(filtered.get().len(), page_size.get()));
    let visible =
        Signal::derive(move || page_slice(&filtered.get(), current_page.get(), page_size.get()));

    let selected_ids = Signal::derive(move || selection.state.get().ids());

    let toggle_row = Callback::new(move |(id, checked): (String, bool)| {
        if checked {
            if let Some(tx) = items.get().into_iter().find(|t| t.id == id) {
                selection.select(tx);
            }
        } else {
            selection.deselect(&id);
        }
    });

    // Header checkbox covers the visible page only.
    let toggle_page = Callback::new(move |checked: bool| {
        if checked {
            selection.state.update(|s| s.select_many(visible.get()));
        } else {
            let ids: HashSet<String> = visible.get().iter().map(|t| t.id.clone()).collect();
            selection.state.update(|s| s.deselect_many(&ids));
        }
    });

    // Bulk selection over everything passing the filters, across pages.
    let select_all_filtered = move |_| {
        selection.state.update(|s| s.select_many(filtered.get()));
    };

    let selected_count = Signal::derive(move || selection.state.get().len());

    view! {
        <div class="available-transactions">
            <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-panel">
                <div class="filter-field filter-field--grow">
                    <Label>"Buscar"</Label>
                    <Input value=search placeholder="Contrato, cliente o descripción" />
                </div>
                <div class="filter-field">
                    <Label>"Tipo"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| kind_filter.set(event_target_value(&ev))
                        prop:value=move || kind_filter.get()
                    >
                        <option value="all">"Todos"</option>
                        <option value="income">"Ingresos"</option>
                        <option value="expense">"Gastos"</option>
                    </select>
                </div>
                <div class="filter-field">
                    <Label>"Método de pago"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| method_filter.set(event_target_value(&ev))
                        prop:value=move || method_filter.get()
                    >
                        <option value="all">"Todos"</option>
                        <option value="CASH">"Efectivo"</option>
                        <option value="CARD">"Tarjeta"</option>
                        <option value="TRANSACTION">"Transferencia"</option>
                    </select>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                >
                    "Actualizar"
                </Button>
            </Flex>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">
                    {icon("alert")}
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-indicator">"Cargando transacciones…"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                items=visible
                                selected=selected_ids
                                get_id=Callback::new(|t: Transaction| t.id)
                                on_change=toggle_page
                            />
                            <TableHeaderCell resizable=false>"Fecha"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Referencia"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Proveedor"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Tipo"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Método"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Valor"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|t| t.id.clone()
                            children=move |transaction: Transaction| {
                                let amount = transaction.amount;
                                let is_income = transaction.is_income();
                                let is_late = transaction.is_late.unwrap_or(false);
                                let provider_name = transaction
                                    .provider
                                    .as_ref()
                                    .map(|p| p.name.clone())
                                    .unwrap_or_else(|| "—".to_string());
                                view! {
                                    <TableRow>
                                        <TableCellCheckbox
                                            item_id=transaction.id.clone()
                                            selected=selected_ids
                                            on_change=toggle_row
                                        />
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_date(&transaction.date)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {transaction.reference.clone()}
                                                <Show when=move || is_late>
                                                    <Badge variant="warning" class="badge--inline">
                                                        "Atrasada"
                                                    </Badge>
                                                </Show>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{provider_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {if is_income {
                                                    view! { <Badge variant="success">"Ingreso"</Badge> }
                                                } else {
                                                    view! { <Badge variant="error">"Gasto"</Badge> }
                                                }}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {transaction.payment_method.label_es()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney
                                            value=Signal::derive(move || {
                                                Some(if is_income { amount } else { -amount })
                                            })
                                            show_currency=true
                                            color_by_sign=true
                                        />
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || filtered.get().is_empty()>
                    <div class="empty-state">"No hay transacciones pendientes"</div>
                </Show>

                <PaginationControls
                    current_page=current_page
                    total_pages=pages
                    total_count=Signal::derive(move || filtered.get().len())
                    page_size=page_size
                    on_page_change=Callback::new(move |page| current_page.set(page))
                    on_page_size_change=Callback::new(move |size| {
                        page_size.set(size);
                        current_page.set(0);
                    })
                />

                <div class="selection-summary">
                    <span>
                        {move || format!("{} seleccionadas", selected_count.get())}
                    </span>
                    <button class="link-button" on:click=select_all_filtered>
                        {move || {
                            format!("Seleccionar todas las filtradas ({})", filtered.get().len())
                        }}
                    </button>
                    <Show when=move || { selected_count.get() > 0 }>
                        <button class="link-button" on:click=move |_| selection.clear()>
                            "Limpiar selección"
                        </button>
                    </Show>
                    <span class="selection-summary__cash">
                        {move || {
                            format!(
                                "Efectivo esperado: $ {}",
                                format_money(selection.state.get().expected_cash()),
                            )
                        }}
                    </span>
                </div>
            </Show>

            <Show when=move || selection.mismatch.get().is_some()>
                <div class="modal-overlay">
                    <div class="modal-content modal-content--warning">
                        {icon("alert")}
                        <h3>"Proveedores distintos"</h3>
                        <p>
                            {move || {
                                selection
                                    .mismatch
                                    .get()
                                    .map(|m| {
                                        format!(
                                            "La selección actual pertenece a {} y la transacción elegida a {}. Un cierre solo puede liquidar un proveedor.",
                                            m.current.name, m.attempted.name,
                                        )
                                    })
                                    .unwrap_or_default()
                            }}
                        </p>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| selection.dismiss_mismatch()
                        >
                            "Entendido"
                        </Button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
