//! Select-all checkbox for the table header.

use leptos::prelude::event_target_checked;
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Header checkbox with the three usual states: unchecked, checked and
/// indeterminate (some but not all visible rows selected).
#[component]
pub fn TableHeaderCheckbox<T>(
    /// Rows currently visible in the table
    #[prop(into)]
    items: Signal<Vec<T>>,

    /// Selected ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Extracts the id from a row
    get_id: Callback<T, String>,

    /// Callback on change (true = select all, false = clear all)
    on_change: Callback<bool>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let checkbox_state = Signal::derive(move || {
        let current_items = items.get();
        let sel = selected.get();

        if current_items.is_empty() {
            return CheckboxState::Unchecked;
        }

        let selected_count = current_items
            .iter()
            .filter(|&item| sel.contains(&get_id.run(item.clone())))
            .count();

        if selected_count == 0 {
            CheckboxState::Unchecked
        } else if selected_count == current_items.len() {
            CheckboxState::Checked
        } else {
            CheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
