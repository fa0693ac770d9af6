use contracts::domain::expense::{Expense, ExpenseRequest};

use crate::shared::api_utils;

pub async fn fetch_expenses() -> Result<Vec<Expense>, String> {
    let response = api_utils::get("/api/v1/expense")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Vec<Expense>>()
        .await
        .map_err(|e| format!("Error leyendo gastos: {}", e))
}

pub async fn create_expense(request: &ExpenseRequest) -> Result<Expense, String> {
    let response = api_utils::post("/api/v1/expense")
        .json(request)
        .map_err(|e| format!("Error armando la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Expense>()
        .await
        .map_err(|e| format!("Error leyendo el gasto creado: {}", e))
}

pub async fn update_expense(id: &str, request: &ExpenseRequest) -> Result<Expense, String> {
    let response = api_utils::put(&format!("/api/v1/expense/{}", id))
        .json(request)
        .map_err(|e| format!("Error armando la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    response
        .json::<Expense>()
        .await
        .map_err(|e| format!("Error leyendo el gasto actualizado: {}", e))
}

pub async fn delete_expense(id: &str) -> Result<(), String> {
    let response = api_utils::delete(&format!("/api/v1/expense/{}", id))
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }
    Ok(())
}
