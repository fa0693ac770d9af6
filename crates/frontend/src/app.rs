use crate::layout::global_context::AppGlobalContext;
use crate::routes::AppRoutes;
use crate::shared::modal::ModalService;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Tab/navigation store shared by the sidebar and the center area.
    provide_context(AppGlobalContext::new());

    // Centralized modal overlay management.
    provide_context(ModalService::new());

    view! {
        <AuthProvider>
            <AppRoutes />
        </AuthProvider>
    }
}
