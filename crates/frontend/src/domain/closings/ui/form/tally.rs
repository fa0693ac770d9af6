//! Bill/coin counting grid for the cash reconciliation.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::reconciliation::{
    reconcile, CashDelta, DenominationCount, BILLS, COINS,
};

use crate::shared::components::table::number_format::format_money;

/// One input row per denomination with its weighted subtotal, plus the
/// running total and the difference against the expected cash.
///
/// `on_change` receives the counted total, debounced by 50 ms so rapid
/// typing settles before the form reacts.
#[component]
pub fn DenominationTally(
    counts: RwSignal<DenominationCount>,
    #[prop(into)] expected: Signal<f64>,
    on_change: Callback<f64>,
) -> impl IntoView {
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let total = counts.get().total();
        let gen = generation.get_value() + 1;
        generation.set_value(gen);
        spawn_local(async move {
            TimeoutFuture::new(50).await;
            if generation.get_value() == gen {
                on_change.run(total);
            }
        });
    });

    let result = Signal::derive(move || reconcile(expected.get(), &counts.get()));

    let row = move |denomination: i64| {
        view! {
            <tr>
                <td class="tally__face">
                    {format!("$ {}", format_money(denomination as f64))}
                </td>
                <td>
                    <input
                        type="number"
                        min="0"
                        class="tally__count"
                        prop:value=move || counts.get().count(denomination).to_string()
                        on:input=move |ev| {
                            let value = event_target_value(&ev).parse::<i64>().unwrap_or(0);
                            counts.update(|c| c.set_count(denomination, value));
                        }
                    />
                </td>
                <td class="tally__subtotal">
                    {move || format_money(counts.get().subtotal(denomination))}
                </td>
            </tr>
        }
    };

    view! {
        <div class="tally">
            <table class="tally__table">
                <thead>
                    <tr>
                        <th>"Denominación"</th>
                        <th>"Cantidad"</th>
                        <th>"Subtotal"</th>
                    </tr>
                </thead>
                <tbody>
                    {BILLS.iter().map(|&d| row(d)).collect_view()}
                    <tr class="tally__divider">
                        <td colspan="3">"Monedas"</td>
                    </tr>
                    {COINS.iter().map(|&d| row(d)).collect_view()}
                </tbody>
                <tfoot>
                    <tr class="tally__total">
                        <td>"Total contado"</td>
                        <td></td>
                        <td>{move || format!("$ {}", format_money(result.get().total_counted))}</td>
                    </tr>
                    <tr class=move || {
                        if result.get().is_valid {
                            "tally__difference tally__difference--ok"
                        } else {
                            "tally__difference tally__difference--off"
                        }
                    }>
                        <td>
                            {move || match result.get().delta() {
                                CashDelta::Exact => "Diferencia",
                                CashDelta::Surplus => "Sobra",
                                CashDelta::Shortfall => "Falta",
                            }}
                        </td>
                        <td></td>
                        <td>
                            {move || {
                                format!("$ {}", format_money(result.get().difference.abs()))
                            }}
                        </td>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
}
