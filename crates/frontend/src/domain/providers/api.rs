use contracts::domain::provider::Provider;

use crate::shared::api_utils;

pub async fn fetch_providers() -> Result<Vec<Provider>, String> {
    let response = api_utils::get("/api/v1/provider")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vec<Provider>>()
        .await
        .map_err(|e| format!("Error leyendo proveedores: {}", e))
}
