use leptos::prelude::*;

use crate::shared::icons::icon;

/// Shown when no `authToken` cookie is present. The dashboard never handles
/// credentials itself; the user signs in on the main site first.
#[component]
pub fn SessionRequiredPage() -> impl IntoView {
    view! {
        <div class="session-required">
            <div class="session-required-card">
                <span class="session-required-icon">{icon("user")}</span>
                <h2>"Sesión requerida"</h2>
                <p>
                    "No se encontró una sesión activa. Inicie sesión en el sitio "
                    "principal y vuelva a abrir el panel de administración."
                </p>
            </div>
        </div>
    }
}
