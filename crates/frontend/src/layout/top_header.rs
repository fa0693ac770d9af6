//! Top navigation bar: sidebar toggle, brand and session info.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let toggle_sidebar = move |_| ctx.toggle_left();

    let user_name = move || {
        auth.state
            .get()
            .user_info
            .map(|u| u.name)
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=toggle_sidebar title="Menú">
                    {icon("menu")}
                </button>
                <span class="top-header__title">"MotoCrédito · Administración"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__user">
                    {icon("user")}
                    {user_name}
                </span>
            </div>
        </div>
    }
}
