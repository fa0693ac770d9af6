//! Closing history: filterable, paginated table of past closings with CSV
//! export and per-row PDF printing.

pub mod state;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::closing::{Closing, ClosingStatus};
use contracts::domain::provider::Provider;

use crate::domain::closings::api::fetch_closings;
use crate::domain::providers::api::fetch_providers;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::number_format::format_money;
use crate::shared::components::table::table_cell_money::TableCellMoney;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_datetime, month_name_es};
use crate::shared::export::export_to_csv;
use crate::shared::icons::icon;
use crate::shared::list_utils::{page_slice, total_pages};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::print::print_closing;

use state::{apply_filters, totals, ClosingFilters};

fn status_from_str(value: &str) -> Option<ClosingStatus> {
    match value {
        "balanced" => Some(ClosingStatus::Balanced),
        "minor-diff" => Some(ClosingStatus::MinorDiff),
        "major-diff" => Some(ClosingStatus::MajorDiff),
        _ => None,
    }
}

fn status_badge(status: ClosingStatus) -> impl IntoView {
    let variant = match status {
        ClosingStatus::Balanced => "success",
        ClosingStatus::MinorDiff => "warning",
        ClosingStatus::MajorDiff => "error",
    };
    view! { <Badge variant=variant>{status.label_es()}</Badge> }
}

#[component]
pub fn ClosingHistoryList() -> impl IntoView {
    let items = RwSignal::new(Vec::<Closing>::new());
    let providers = RwSignal::new(Vec::<Provider>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let search = RwSignal::new(String::new());
    let month_filter = RwSignal::new("all".to_string());
    let provider_filter = RwSignal::new("all".to_string());
    let status_filter = RwSignal::new("all".to_string());

    let current_page = RwSignal::new(0usize);
    let page_size = RwSignal::new(10usize);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let closings = fetch_closings().await;
            if !alive.get_value() {
                return;
            }
            match closings {
                Ok(list) => items.set(list),
                Err(e) => {
                    log::error!("Failed to load closings: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
        spawn_local(async move {
            // The provider filter is secondary; a failure only logs.
            match fetch_providers().await {
                Ok(list) if alive.get_value() => providers.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("Failed to load providers: {}", e),
            }
        });
    };
    load();

    let filters = Memo::new(move |_| ClosingFilters {
        search: search.get(),
        month: month_filter.get().parse::<u32>().ok(),
        provider_id: Some(provider_filter.get()).filter(|v| v != "all"),
        status: status_from_str(&status_filter.get()),
    });

    let filtered = Memo::new(move |_| apply_filters(&items.get(), &filters.get()));

    Effect::new(move |_| {
        filtered.track();
        current_page.set(0);
    });

    let pages = Signal::derive(move || total_pages(filtered.get().len(), page_size.get()));
    let visible =
        Signal::derive(move || page_slice(&filtered.get(), current_page.get(), page_size.get()));

    let register_totals = Memo::new(move |_| totals(&filtered.get()));

    let export = move |_| {
        if let Err(e) = export_to_csv(&filtered.get_untracked(), "cierres_de_caja.csv") {
            error.set(Some(e));
        }
    };

    view! {
        <PageFrame page_id="closings--list" category=PAGE_CAT_LIST>
            <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-panel">
                <div class="filter-field filter-field--grow">
                    <Label>"Buscar"</Label>
                    <Input value=search placeholder="Proveedor, responsable o notas" />
                </div>
                <div class="filter-field">
                    <Label>"Mes"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| month_filter.set(event_target_value(&ev))
                        prop:value=move || month_filter.get()
                    >
                        <option value="all">"Todos"</option>
                        {(1u32..=12)
                            .map(|m| {
                                view! {
                                    <option value=m.to_string()>{month_name_es(m)}</option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="filter-field">
                    <Label>"Proveedor"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| provider_filter.set(event_target_value(&ev))
                        prop:value=move || provider_filter.get()
                    >
                        <option value="all">"Todos"</option>
                        <For
                            each=move || providers.get()
                            key=|p| p.id.clone()
                            children=|p: Provider| {
                                view! { <option value=p.id.clone()>{p.name.clone()}</option> }
                            }
                        />
                    </select>
                </div>
                <div class="filter-field">
                    <Label>"Estado"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| status_filter.set(event_target_value(&ev))
                        prop:value=move || status_filter.get()
                    >
                        <option value="all">"Todos"</option>
                        <option value="balanced">"Cuadrado"</option>
                        <option value="minor-diff">"Descuadre leve"</option>
                        <option value="major-diff">"Descuadre mayor"</option>
                    </select>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=export>
                    {icon("download")}
                    "Exportar CSV"
                </Button>
            </Flex>

            <div class="register-display">
                <div class="register-display__item">
                    <span class="register-display__label">"Efectivo"</span>
                    <span>{move || format!("$ {}", format_money(register_totals.get().cash))}</span>
                </div>
                <div class="register-display__item">
                    <span class="register-display__label">"Transferencias"</span>
                    <span>
                        {move || format!("$ {}", format_money(register_totals.get().transfers))}
                    </span>
                </div>
                <div class="register-display__item">
                    <span class="register-display__label">"Tarjetas"</span>
                    <span>{move || format!("$ {}", format_money(register_totals.get().cards))}</span>
                </div>
                <div class="register-display__item register-display__item--total">
                    <span class="register-display__label">"Total"</span>
                    <span>
                        {move || format!("$ {}", format_money(register_totals.get().total()))}
                    </span>
                </div>
            </div>

            <Show when=move || error.get().is_some()>
                <div class="alert alert--error">
                    {icon("alert")}
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="loading-indicator">"Cargando cierres…"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Fecha"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Proveedor"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Efectivo"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Transferencias"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Tarjetas"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Total sistema"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Balance"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Registrado por"</TableHeaderCell>
                            <TableHeaderCell resizable=false>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|c| c.id.clone()
                            children=move |closing: Closing| {
                                let id = closing.id.clone();
                                let cash = closing.cash_in_register;
                                let transfers = closing.cash_from_transfers;
                                let cards = closing.cash_from_cards;
                                let system_total = closing.total_cash_in_system();
                                let balance = closing.balance();
                                let status = closing.status();
                                let provider_name = closing
                                    .provider
                                    .as_ref()
                                    .map(|p| p.name.clone())
                                    .unwrap_or_else(|| "—".to_string());
                                let created_by = closing
                                    .created_by
                                    .as_ref()
                                    .map(|c| c.name.clone())
                                    .unwrap_or_else(|| "—".to_string());
                                let print = move |_| {
                                    let id = id.clone();
                                    spawn_local(async move {
                                        if let Err(e) = print_closing(&id).await {
                                            error.set(Some(e));
                                        }
                                    });
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>
                                                {format_datetime(&closing.date)}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{provider_name}</TableCellLayout>
                                        </TableCell>
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(cash))
                                            show_currency=true
                                        />
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(transfers))
                                            show_currency=true
                                        />
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(cards))
                                            show_currency=true
                                        />
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(system_total))
                                            show_currency=true
                                        />
                                        <TableCellMoney
                                            value=Signal::derive(move || Some(balance))
                                            show_currency=true
                                            color_by_sign=true
                                        />
                                        <TableCell>
                                            <TableCellLayout>{status_badge(status)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{created_by}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <button
                                                class="row-action"
                                                title="Imprimir"
                                                on:click=print
                                            >
                                                {icon("printer")}
                                            </button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <Show when=move || filtered.get().is_empty()>
                    <div class="empty-state">"No hay cierres para los filtros elegidos"</div>
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
        </PageFrame>
    }
}
