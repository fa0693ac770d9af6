//! New closing page: the available transactions on the left feed the
//! closing form on the right through a shared selection context.

use leptos::prelude::*;

use crate::domain::closings::ui::form::ClosingForm;
use crate::domain::transactions::context::provide_selection;
use crate::domain::transactions::ui::available_list::AvailableTransactionsList;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;

#[component]
pub fn NewClosingPage() -> impl IntoView {
    provide_selection();

    view! {
        <PageFrame page_id="closings--new" category=PAGE_CAT_CUSTOM>
            <div class="new-closing-layout">
                <section class="new-closing-layout__transactions">
                    <h2>"Transacciones disponibles"</h2>
                    <AvailableTransactionsList />
                </section>
                <section class="new-closing-layout__form">
                    <h2>"Cierre de caja"</h2>
                    <ClosingForm />
                </section>
            </div>
        </PageFrame>
    }
}
