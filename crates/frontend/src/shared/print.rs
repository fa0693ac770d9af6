//! Browser printing of backend-rendered closing PDFs.
//!
//! The PDF comes from `GET /api/v1/closing/print/:id`; the bytes are wrapped
//! in a Blob, opened in a new window through an object URL and handed to the
//! browser print dialog.

use web_sys::{Blob, BlobPropertyBag, Url};

use crate::shared::api_utils;

pub async fn print_closing(id: &str) -> Result<(), String> {
    let response = api_utils::get(&format!("/api/v1/closing/print/{}", id))
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    let bytes = response
        .binary()
        .await
        .map_err(|e| format!("Error leyendo el PDF: {}", e))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&array);

    let properties = BlobPropertyBag::new();
    properties.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;

    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let window = web_sys::window().ok_or("No window object")?;
    let popup = window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("El navegador bloqueó la ventana de impresión")?;

    popup
        .print()
        .map_err(|e| format!("Failed to print: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
