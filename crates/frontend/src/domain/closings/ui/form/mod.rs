//! Closing form: summary of the selection, cash reconciliation and the
//! derived register totals, submitted as one `POST /api/v1/closing`.
//!
//! Once incomes are selected the three amount fields are auto-filled from
//! the selection grouped by payment method and become read-only; the only
//! adjustable numeric input left is the denomination tally, whose counted
//! total must match the expected cash before the submit unlocks.

pub mod state;
pub mod tally;

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use contracts::domain::closing::{Closing, CreateClosingRequest};
use contracts::domain::reconciliation::{reconcile, DenominationCount};

use crate::domain::closings::api::create_closing;
use crate::domain::transactions::context::use_selection;
use crate::shared::components::table::number_format::{format_money, plain_amount};
use crate::shared::icons::icon;
use crate::shared::print::print_closing;
use crate::system::auth::context::use_auth;

use state::{is_form_valid, is_locked, FormTotals};
use tally::DenominationTally;

#[component]
pub fn ClosingForm() -> impl IntoView {
    let selection = use_selection();
    let auth = use_auth();

    let counts = RwSignal::new(DenominationCount::new());
    let counted_total = RwSignal::new(0.0f64);
    let notes = RwSignal::new(String::new());

    let submitting = RwSignal::new(false);
    let submit_error = RwSignal::new(Option::<String>::None);
    let success = RwSignal::new(Option::<Closing>::None);

    let totals = Memo::new(move |_| FormTotals::from_selection(&selection.state.get()));
    let expected_cash = Signal::derive(move || totals.get().expected_cash);

    let cash_result = Signal::derive(move || reconcile(expected_cash.get(), &counts.get()));

    let locked = Signal::derive(move || is_locked(selection.state.get().income_count()));

    let valid = Signal::derive(move || {
        is_form_valid(
            submitting.get(),
            selection.state.get().income_count(),
            &totals.get(),
            &cash_result.get(),
        )
    });

    let reset_form = move || {
        counts.update(|c| c.clear());
        counted_total.set(0.0);
        notes.set(String::new());
        submit_error.set(None);
    };

    let submit = move |_| {
        let state = selection.state.get_untracked();
        let form_totals = FormTotals::from_selection(&state);
        let cash = reconcile(form_totals.expected_cash, &counts.get_untracked());

        if !is_form_valid(
            submitting.get_untracked(),
            state.income_count(),
            &form_totals,
            &cash,
        ) {
            return;
        }
        let user = auth.state.get_untracked().user_info;
        let Some(user) = user else {
            submit_error.set(Some("La sesión aún no está resuelta".to_string()));
            return;
        };

        let request = CreateClosingRequest {
            cash_in_register: cash.total_counted,
            cash_from_transfers: form_totals.expected_transfers,
            cash_from_cards: form_totals.expected_cards,
            notes: notes.get_untracked(),
            installment_ids: state.income_ids(),
            expense_ids: state.expense_ids(),
            created_by_id: user.id,
            provider_id: state.provider().map(|p| p.id.clone()),
        };

        submitting.set(true);
        submit_error.set(None);
        spawn_local(async move {
            match create_closing(&request).await {
                Ok(closing) => {
                    success.set(Some(closing));
                    reset_form();
                    // Settled transactions no longer exist in the pool.
                    selection.clear();
                    selection.invalidate_pool();
                }
                Err(e) => {
                    log::error!("Closing submit failed: {}", e);
                    submit_error.set(Some(e));
                }
            }
            submitting.set(false);
        });
    };

    let print_created = move |_| {
        if let Some(closing) = success.get_untracked() {
            spawn_local(async move {
                if let Err(e) = print_closing(&closing.id).await {
                    submit_error.set(Some(e));
                }
            });
        }
    };

    let amount_field = move |label: &'static str, value: Signal<f64>| {
        view! {
            <div class="form-field">
                <Label>{label}</Label>
                <input
                    type="text"
                    class="form-field__input form-field__input--readonly"
                    readonly
                    prop:value=move || plain_amount(value.get())
                />
            </div>
        }
    };

    view! {
        <div class="closing-form" class:closing-form--locked=move || locked.get()>
            <Show when=move || selection.state.get().is_empty()>
                <div class="closing-form__hint">
                    "Seleccione transacciones de la lista para iniciar el cierre"
                </div>
            </Show>

            <div class="closing-form__summary">
                <div class="summary-line">
                    <span>"Ingresos"</span>
                    <span>
                        {move || format!("$ {}", format_money(selection.state.get().total_income()))}
                    </span>
                </div>
                <div class="summary-line">
                    <span>"Gastos"</span>
                    <span>
                        {move || format!("$ {}", format_money(selection.state.get().total_expense()))}
                    </span>
                </div>
                <div class="summary-line summary-line--strong">
                    <span>"Balance"</span>
                    <span>
                        {move || format!("$ {}", format_money(selection.state.get().balance()))}
                    </span>
                </div>
                <div class="summary-line">
                    <span>"Efectivo esperado"</span>
                    <span>{move || format!("$ {}", format_money(expected_cash.get()))}</span>
                </div>
            </div>

            <h3>"Conteo de efectivo"</h3>
            <DenominationTally
                counts=counts
                expected=expected_cash
                on_change=Callback::new(move |total| counted_total.set(total))
            />

            <div class="closing-form__fields">
                {amount_field(
                    "Efectivo en caja",
                    Signal::derive(move || counted_total.get()),
                )}
                {amount_field(
                    "Transferencias",
                    Signal::derive(move || totals.get().expected_transfers),
                )}
                {amount_field("Tarjetas", Signal::derive(move || totals.get().expected_cards))}
                <div class="form-field">
                    <Label>"Notas"</Label>
                    <textarea
                        class="form-field__textarea"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <Show when=move || submit_error.get().is_some()>
                <div class="alert alert--error">
                    {icon("alert")}
                    {move || submit_error.get().unwrap_or_default()}
                </div>
            </Show>

            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || !valid.get())
                on_click=submit
            >
                {move || if submitting.get() { "Guardando…" } else { "Registrar cierre" }}
            </Button>

            <Show when=move || success.get().is_some()>
                <div class="modal-overlay">
                    <div class="modal-content modal-content--success">
                        {icon("check")}
                        <h3>"Cierre registrado"</h3>
                        <p>"El cierre de caja se guardó correctamente."</p>
                        <Flex gap=FlexGap::Medium>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=print_created
                            >
                                {icon("printer")}
                                "Imprimir"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| success.set(None)
                            >
                                "Aceptar"
                            </Button>
                        </Flex>
                    </div>
                </div>
            </Show>
        </div>
    }
}
