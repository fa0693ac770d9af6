//! Row-selection checkbox cell.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Checkbox cell bound to a shared selected-id set.
///
/// Stops click propagation so checking a row does not trigger the row click.
#[component]
pub fn TableCellCheckbox(
    /// Id of the current row
    #[prop(into)]
    item_id: String,

    /// Selected ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback on change: (item_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let item_id_for_checked = item_id.clone();
    let item_id_for_change = item_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&item_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((item_id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
