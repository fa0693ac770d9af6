//! Tabbed center area: one tab per open page, content kept alive while the
//! tab stays open.

use crate::domain::closings::ui::list::ClosingHistoryList;
use crate::domain::closings::ui::new_closing::NewClosingPage;
use crate::domain::expenses::ui::list::ExpensesList;
use crate::domain::vehicles::ui::list::VehiclesList;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use leptos::ev;
use leptos::prelude::*;

pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "closings_new" => "Nuevo cierre de caja",
        "closings_history" => "Historial de cierres",
        "expenses" => "Gastos",
        "vehicles" => "Vehículos",
        _ => "Página",
    }
}

#[component]
fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let tab_key_for_active_check = tab_key.clone();

    let is_active = move || tabs_store.active.get().as_ref() == Some(&tab_key_for_active_check);

    let content = match tab_key.as_str() {
        "closings_new" => view! { <NewClosingPage /> }.into_any(),
        "closings_history" => view! { <ClosingHistoryList /> }.into_any(),
        "expenses" => view! { <ExpensesList /> }.into_any(),
        "vehicles" => view! { <VehiclesList /> }.into_any(),
        other => {
            leptos::logging::log!("Unknown tab key: {}", other);
            view! { <div class="placeholder">"Página no disponible"</div> }.into_any()
        }
    };

    view! {
        <div class="tab-page" class:hidden=move || !is_active() data-tab-key=tab_key>
            {content}
        </div>
    }
}

#[component]
fn TabHandle(tab: TabData) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tab_for_active = tab.clone();
    let is_active =
        Memo::new(move |_| tabs_store.active.get().as_deref() == Some(&tab_for_active.key));

    let tab_for_click = tab.clone();
    let on_click = move |_| tabs_store.activate_tab(&tab_for_click.key);

    let tab_for_close = tab.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&tab_for_close.key);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabHandle tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store /> }
                    }
                />
            </div>
        </div>
    }
}
