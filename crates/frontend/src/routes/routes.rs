use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::layout::sidebar::Sidebar;
use crate::layout::tabs::Tabs;
use crate::system::auth::context::use_auth;
use crate::system::pages::session::SessionRequiredPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore the active tab from the query string once on startup.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.state.get().token.is_some()
            fallback=|| view! { <SessionRequiredPage /> }
        >
            <MainLayout />
        </Show>
    }
}
