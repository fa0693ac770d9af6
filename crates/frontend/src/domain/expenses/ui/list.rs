//! Expense registry: searchable, sortable list with a modal editor.
//!
//! Expenses recorded here surface later in the new-closing workflow as
//! available expense transactions.

use std::cmp::Ordering;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::expense::{Expense, ExpenseRequest};
use contracts::domain::provider::Provider;
use contracts::domain::transaction::PaymentMethod;

use crate::domain::expenses::api::{
    create_expense, delete_expense, fetch_expenses, update_expense,
};
use crate::domain::providers::api::fetch_providers;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::table_cell_money::TableCellMoney;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    filter_list, get_sort_class, get_sort_indicator, page_slice, sort_list, total_pages,
    Searchable, Sortable,
};
use crate::shared::modal::{Modal, ModalService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Expense {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.description.to_lowercase().contains(&filter)
            || self.category.to_lowercase().contains(&filter)
            || self
                .provider
                .as_ref()
                .map(|p| p.name.to_lowercase().contains(&filter))
                .unwrap_or(false)
    }
}

impl Sortable for Expense {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "amount" => self
                .amount
                .partial_cmp(&other.amount)
                .unwrap_or(Ordering::Equal),
            "description" => self.description.cmp(&other.description),
            _ => self.date.cmp(&other.date),
        }
    }
}

fn method_from_str(value: &str) -> PaymentMethod {
    match value {
        "CARD" => PaymentMethod::Card,
        "TRANSACTION" => PaymentMethod::Transfer,
        _ => PaymentMethod::Cash,
    }
}

fn method_code(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Cash => "CASH",
        PaymentMethod::Card => "CARD",
        PaymentMethod::Transfer => "TRANSACTION",
    }
}

#[component]
pub fn ExpensesList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let items = RwSignal::new(Vec::<Expense>::new());
    let providers = RwSignal::new(Vec::<Provider>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let search = RwSignal::new(String::new());
    let sort_field = RwSignal::new("date".to_string());
    let sort_ascending = RwSignal::new(false);

    let current_page = RwSignal::new(0usize);
    let page_size = RwSignal::new(10usize);

    // Editor state; `editing_id` empty means a new expense.
    let editing_id = RwSignal::new(Option::<String>::None);
    let form_amount = RwSignal::new(String::new());
    let form_date = RwSignal::new(String::new());
    let form_description = RwSignal::new(String::new());
    let form_category = RwSignal::new(String::new());
    let form_method = RwSignal::new("CASH".to_string());
    let form_provider = RwSignal::new("none".to_string());
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let expenses = fetch_expenses().await;
            if !alive.get_value() {
                return;
            }
            match expenses {
                Ok(list) => items.set(list),
                Err(e) => {
                    log::error!("Failed to load expenses: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
        spawn_local(async move {
            match fetch_providers().await {
                Ok(list) if alive.get_value() => providers.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("Failed to load providers: {}", e),
            }
        });
    };
    load();

    let filtered = Memo::new(move |_| {
        let mut list = filter_list(items.get(), &search.get());
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    });

    Effect::new(move |_| {
        filtered.track();
        current_page.set(0);
    });

    let pages = Signal::derive(move || total_pages(filtered.get().len(), page_size.get()));
    let visible =
        Signal::derive(move || page_slice(&filtered.get(), current_page.get(), page_size.get()));

    let toggle_sort = move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|a| *a = !*a);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    };

    let open_create = move |_| {
        editing_id.set(None);
        form_amount.set(String::new());
        form_date.set(String::new());
        form_description.set(String::new());
        form_category.set(String::new());
        form_method.set("CASH".to_string());
        form_provider.set("none".to_string());
        form_error.set(None);
        modal.show();
    };

    let open_edit = move |expense: Expense| {
        editing_id.set(Some(expense.id.clone()));
        form_amount.set(expense.amount.to_string());
        form_date.set(expense.date.split('T').next().unwrap_or("").to_string());
        form_description.set(expense.description.clone());
        form_category.set(expense.category.clone());
        form_method.set(method_code(expense.payment_method).to_string());
        form_provider.set(
            expense
                .provider
                .as_ref()
                .map(|p| p.id.clone())
                .unwrap_or_else(|| "none".to_string()),
        );
        form_error.set(None);
        modal.show();
    };

    let save = move |_| {
        let Ok(amount) = form_amount.get_untracked().trim().parse::<f64>() else {
            form_error.set(Some("El valor debe ser numérico".to_string()));
            return;
        };
        if form_description.get_untracked().trim().is_empty() {
            form_error.set(Some("La descripción es obligatoria".to_string()));
            return;
        }
        if form_date.get_untracked().trim().is_empty() {
            form_error.set(Some("La fecha es obligatoria".to_string()));
            return;
        }

        let request = ExpenseRequest {
            amount,
            date: form_date.get_untracked(),
            description: form_description.get_untracked(),
            category: form_category.get_untracked(),
            payment_method: method_from_str(&form_method.get_untracked()),
            provider_id: Some(form_provider.get_untracked()).filter(|v| v != "none"),
        };
        let id = editing_id.get_untracked();

        saving.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = match &id {
                Some(id) => update_expense(id, &request).await,
                None => create_expense(&request).await,
            };
            if !alive.get_value() {
                return;
            }
            match result {
                Ok(_) => {
                    modal.hide();
                    load();
                }
                Err(e) => form_error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let remove = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("¿Eliminar este gasto?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match delete_expense(&id).await {
                Ok(()) if alive.get_value() => load(),
                Ok(()) => {}
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let sortable_header = move |field: &'static str, label: &'static str| {
        view! {
            <TableHeaderCell resizable=false>
                <span class="table__sortable" on:click=move |_| toggle_sort(field)>
                    {label}
                    <span class=move || get_sort_class(&sort_field.get(), field)>
                        {move || get_sort_indicator(&sort_field.get(), field, sort_ascending.get())}
                    </span>
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="expenses--list" category=PAGE_CAT_LIST>
            <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-panel">
                <div class="filter-field filter-field--grow">
                    <Label>"Buscar"</Label>
                    <Input value=search placeholder="Descripción, categoría o proveedor" />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    "Nuevo gasto"
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
                fallback=|| view! { <div class="loading-indicator">"Cargando gastos…"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            {sortable_header("date", "Fecha")}
                            {sortable_header("description", "Descripción")}
                            <TableHeaderCell resizable=false>"Categoría"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Método"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Proveedor"</TableHeaderCell>
                            {sortable_header("amount", "Valor")}
                            <TableHeaderCell resizable=false>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|e| e.id.clone()
                            children=move |expense: Expense| {
                                let amount = expense.amount;
                                let provider_name = expense
                                    .provider
                                    .as_ref()
                                    .map(|p| p.name.clone())
                                    .unwrap_or_else(|| "—".to_string());
                                let for_edit = expense.clone();
                                let id_for_delete = expense.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_date(&expense.date)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {expense.description.clone()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{expense.category.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {expense.payment_method.label_es()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{provider_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(amount))
                                            show_currency=true
                                        />
                                        <TableCell>
                                            <button
                                                class="row-action"
                                                title="Editar"
                                                on:click=move |_| open_edit(for_edit.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="row-action row-action--danger"
                                                title="Eliminar"
                                                on:click=move |_| remove(id_for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || filtered.get().is_empty()>
                    <div class="empty-state">"No hay gastos registrados"</div>
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
            </Show>

            <Modal>
                <h3>
                    {move || {
                        if editing_id.get().is_some() { "Editar gasto" } else { "Nuevo gasto" }
                    }}
                </h3>
                <div class="form-field">
                    <Label>"Valor"</Label>
                    <Input value=form_amount placeholder="0" />
                </div>
                <div class="form-field">
                    <Label>"Fecha"</Label>
                    <input
                        type="date"
                        class="form-field__input"
                        prop:value=move || form_date.get()
                        on:input=move |ev| form_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-field">
                    <Label>"Descripción"</Label>
                    <Input value=form_description />
                </div>
                <div class="form-field">
                    <Label>"Categoría"</Label>
                    <Input value=form_category />
                </div>
                <div class="form-field">
                    <Label>"Método de pago"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| form_method.set(event_target_value(&ev))
                        prop:value=move || form_method.get()
                    >
                        <option value="CASH">"Efectivo"</option>
                        <option value="CARD">"Tarjeta"</option>
                        <option value="TRANSACTION">"Transferencia"</option>
                    </select>
                </div>
                <div class="form-field">
                    <Label>"Proveedor"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| form_provider.set(event_target_value(&ev))
                        prop:value=move || form_provider.get()
                    >
                        <option value="none">"Sin proveedor"</option>
                        <For
                            each=move || providers.get()
                            key=|p| p.id.clone()
                            children=|p: Provider| {
                                view! { <option value=p.id.clone()>{p.name.clone()}</option> }
                            }
                        />
                    </select>
                </div>
                <Show when=move || form_error.get().is_some()>
                    <div class="alert alert--error">
                        {move || form_error.get().unwrap_or_default()}
                    </div>
                </Show>
                <Flex gap=FlexGap::Medium>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| modal.hide()
                    >
                        "Cancelar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get())
                        on_click=save
                    >
                        {move || if saving.get() { "Guardando…" } else { "Guardar" }}
                    </Button>
                </Flex>
            </Modal>
        </PageFrame>
    }
}
