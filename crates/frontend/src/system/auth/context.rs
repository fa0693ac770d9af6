use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

/// Auth context provider. Reads the `authToken` cookie on mount and, when
/// present, resolves the session user through the API.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());

    Effect::new(move |_| {
        if let Some(token) = storage::auth_token() {
            state.set(AuthState {
                token: Some(token),
                user_info: None,
            });
            spawn_local(async move {
                match api::get_current_user().await {
                    Ok(user_info) => {
                        state.update(|s| s.user_info = Some(user_info));
                    }
                    Err(e) => {
                        // Invalid/expired token: back to the session screen.
                        log::warn!("Session validation failed: {}", e);
                        state.set(AuthState::default());
                    }
                }
            });
        }
    });

    provide_context(AuthContext { state });

    children()
}

/// Hook to access auth state
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
