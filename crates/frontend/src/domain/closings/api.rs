use contracts::domain::closing::{Closing, CreateClosingRequest};

use crate::shared::api_utils;

pub async fn fetch_closings() -> Result<Vec<Closing>, String> {
    let response = api_utils::get("/api/v1/closing")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vec<Closing>>()
        .await
        .map_err(|e| format!("Error leyendo cierres: {}", e))
}

/// Persists a closing. The settled installments and expenses leave the
/// available pool on the server.
pub async fn create_closing(request: &CreateClosingRequest) -> Result<Closing, String> {
    let response = api_utils::post("/api/v1/closing")
        .json(request)
        .map_err(|e| format!("Error armando la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Closing>()
        .await
        .map_err(|e| format!("Error leyendo el cierre creado: {}", e))
}
