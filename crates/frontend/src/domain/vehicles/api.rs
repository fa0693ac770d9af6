use contracts::domain::vehicle::{Vehicle, VehicleRequest};

use crate::shared::api_utils;

pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    let response = api_utils::get("/api/v1/vehicles")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vec<Vehicle>>()
        .await
        .map_err(|e| format!("Error leyendo vehículos: {}", e))
}

pub async fn create_vehicle(request: &VehicleRequest) -> Result<Vehicle, String> {
    let response = api_utils::post("/api/v1/vehicles")
        .json(request)
        .map_err(|e| format!("Error armando la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vehicle>()
        .await
        .map_err(|e| format!("Error leyendo el vehículo creado: {}", e))
}

pub async fn update_vehicle(id: &str, request: &VehicleRequest) -> Result<Vehicle, String> {
    let response = api_utils::put(&format!("/api/v1/vehicles/{}", id))
        .json(request)
        .map_err(|e| format!("Error armando la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vehicle>()
        .await
        .map_err(|e| format!("Error leyendo el vehículo actualizado: {}", e))
}

pub async fn delete_vehicle(id: &str) -> Result<(), String> {
    let response = api_utils::delete(&format!("/api/v1/vehicles/{}", id))
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }
    Ok(())
}
