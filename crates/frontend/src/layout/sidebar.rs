//! Sidebar with the main navigation groups.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (key, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "caja",
            label: "Caja",
            items: vec![
                ("closings_new", tab_label_for_key("closings_new"), "cash"),
                (
                    "closings_history",
                    tab_label_for_key("closings_history"),
                    "archive",
                ),
            ],
        },
        MenuGroup {
            id: "operacion",
            label: "Operación",
            items: vec![
                ("expenses", tab_label_for_key("expenses"), "receipt"),
                ("vehicles", tab_label_for_key("vehicles"), "bike"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let groups = get_menu_groups();

    view! {
        <Show when=move || ctx.left_open.get()>
            <nav class="sidebar">
                {groups
                    .clone()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="sidebar__group">
                                <div class="sidebar__group-label">{group.label}</div>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|(key, label, icon_name)| {
                                        let is_active = Memo::new(move |_| {
                                            ctx.active.get().as_deref() == Some(key)
                                        });
                                        view! {
                                            <button
                                                class="sidebar__item"
                                                class:active=is_active
                                                on:click=move |_| ctx.open_tab(key, label)
                                            >
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
