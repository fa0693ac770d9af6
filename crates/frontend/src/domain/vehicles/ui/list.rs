//! Motorcycle inventory list with a modal editor.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::vehicle::{Vehicle, VehicleRequest};

use crate::domain::vehicles::api::{
    create_vehicle, delete_vehicle, fetch_vehicles, update_vehicle,
};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, page_slice, total_pages, Searchable};
use crate::shared::modal::{Modal, ModalService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

impl Searchable for Vehicle {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.plate.to_lowercase().contains(&filter)
            || self.brand.to_lowercase().contains(&filter)
            || self.model.to_lowercase().contains(&filter)
    }
}

fn status_variant(status: &str) -> &'static str {
    match status {
        "available" => "success",
        "leased" => "primary",
        "maintenance" => "warning",
        _ => "neutral",
    }
}

fn status_label(status: &str) -> &'static str {
    match status {
        "available" => "Disponible",
        "leased" => "En leasing",
        "maintenance" => "En taller",
        _ => "Sin estado",
    }
}

#[component]
pub fn VehiclesList() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let items = RwSignal::new(Vec::<Vehicle>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(Option::<String>::None);

    let search = RwSignal::new(String::new());
    let current_page = RwSignal::new(0usize);
    let page_size = RwSignal::new(10usize);

    let editing_id = RwSignal::new(Option::<String>::None);
    let form_plate = RwSignal::new(String::new());
    let form_brand = RwSignal::new(String::new());
    let form_model = RwSignal::new(String::new());
    let form_year = RwSignal::new(String::new());
    let form_status = RwSignal::new("available".to_string());
    let saving = RwSignal::new(false);
    let form_error = RwSignal::new(Option::<String>::None);

    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            let vehicles = fetch_vehicles().await;
            if !alive.get_value() {
                return;
            }
            match vehicles {
                Ok(list) => items.set(list),
                Err(e) => {
                    log::error!("Failed to load vehicles: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    };
    load();

    let filtered = Memo::new(move |_| filter_list(items.get(), &search.get()));

    Effect::new(move |_| {
        filtered.track();
        current_page.set(0);
    });

    let pages = Signal::derive(move || total_pages(filtered.get().len(), page_size.get()));
    let visible =
        Signal::derive(move || page_slice(&filtered.get(), current_page.get(), page_size.get()));

    let open_create = move |_| {
        editing_id.set(None);
        form_plate.set(String::new());
        form_brand.set(String::new());
        form_model.set(String::new());
        form_year.set(String::new());
        form_status.set("available".to_string());
        form_error.set(None);
        modal.show();
    };

    let open_edit = move |vehicle: Vehicle| {
        editing_id.set(Some(vehicle.id.clone()));
        form_plate.set(vehicle.plate.clone());
        form_brand.set(vehicle.brand.clone());
        form_model.set(vehicle.model.clone());
        form_year.set(vehicle.year.to_string());
        form_status.set(if vehicle.status.is_empty() {
            "available".to_string()
        } else {
            vehicle.status.clone()
        });
        form_error.set(None);
        modal.show();
    };

    let save = move |_| {
        if form_plate.get_untracked().trim().is_empty() {
            form_error.set(Some("La placa es obligatoria".to_string()));
            return;
        }
        let Ok(year) = form_year.get_untracked().trim().parse::<i32>() else {
            form_error.set(Some("El año debe ser numérico".to_string()));
            return;
        };

        let request = VehicleRequest {
            plate: form_plate.get_untracked().trim().to_uppercase(),
            brand: form_brand.get_untracked(),
            model: form_model.get_untracked(),
            year,
            status: form_status.get_untracked(),
        };
        let id = editing_id.get_untracked();

        saving.set(true);
        form_error.set(None);
        spawn_local(async move {
            let result = match &id {
                Some(id) => update_vehicle(id, &request).await,
                None => create_vehicle(&request).await,
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
                w.confirm_with_message("¿Eliminar este vehículo?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match delete_vehicle(&id).await {
                Ok(()) if alive.get_value() => load(),
                Ok(()) => {}
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <PageFrame page_id="vehicles--list" category=PAGE_CAT_LIST>
            <Flex gap=FlexGap::Medium align=FlexAlign::End class="filter-panel">
                <div class="filter-field filter-field--grow">
                    <Label>"Buscar"</Label>
                    <Input value=search placeholder="Placa, marca o modelo" />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| load()>
                    "Actualizar"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=open_create>
                    {icon("plus")}
                    "Nuevo vehículo"
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
                fallback=|| view! { <div class="loading-indicator">"Cargando vehículos…"</div> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false>"Placa"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Marca"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Modelo"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Año"</TableHeaderCell>
                            <TableHeaderCell resizable=false>"Estado"</TableHeaderCell>
                            <TableHeaderCell resizable=false>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || visible.get()
                            key=|v| v.id.clone()
                            children=move |vehicle: Vehicle| {
                                let status = vehicle.status.clone();
                                let for_edit = vehicle.clone();
                                let id_for_delete = vehicle.id.clone();
                                view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{vehicle.plate.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{vehicle.brand.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{vehicle.model.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {vehicle.year.to_string()}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                <Badge variant=status_variant(
                                                    &status,
                                                )>{status_label(&status)}</Badge>
                                            </TableCellLayout>
                                        </TableCell>
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
                    <div class="empty-state">"No hay vehículos registrados"</div>
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
                        if editing_id.get().is_some() {
                            "Editar vehículo"
                        } else {
                            "Nuevo vehículo"
                        }
                    }}
                </h3>
                <div class="form-field">
                    <Label>"Placa"</Label>
                    <Input value=form_plate placeholder="ABC12D" />
                </div>
                <div class="form-field">
                    <Label>"Marca"</Label>
                    <Input value=form_brand />
                </div>
                <div class="form-field">
                    <Label>"Modelo"</Label>
                    <Input value=form_model />
                </div>
                <div class="form-field">
                    <Label>"Año"</Label>
                    <Input value=form_year placeholder="2024" />
                </div>
                <div class="form-field">
                    <Label>"Estado"</Label>
                    <select
                        class="filter-select"
                        on:change=move |ev| form_status.set(event_target_value(&ev))
                        prop:value=move || form_status.get()
                    >
                        <option value="available">"Disponible"</option>
                        <option value="leased">"En leasing"</option>
                        <option value="maintenance">"En taller"</option>
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
