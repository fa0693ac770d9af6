pub mod global_context;
pub mod sidebar;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +----------------------------------+
/// |            TopHeader             |
/// +----------------------------------+
/// |  Sidebar  |       Content        |
/// |  (Left)   |      (Center)        |
/// +----------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    // Sidebar visibility is driven by AppGlobalContext internally.
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                {left()}

                <div class="app-main">
                    {center()}
                </div>
            </div>
        </div>
    }
}
