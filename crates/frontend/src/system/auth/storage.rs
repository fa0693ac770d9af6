//! Session token access. The token is issued by the main site and arrives
//! as the `authToken` cookie; this app only reads it.

use wasm_bindgen::JsCast;
use web_sys::window;

const AUTH_COOKIE: &str = "authToken";

/// Current session token, if the cookie is present and non-empty.
pub fn auth_token() -> Option<String> {
    let document = window()?.document()?;
    let html_document = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
    let cookies = html_document.cookie().ok()?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| {
            cookie
                .strip_prefix(AUTH_COOKIE)
                .and_then(|rest| rest.strip_prefix('='))
                .map(|value| value.to_string())
        })
        .filter(|value| !value.is_empty())
}
