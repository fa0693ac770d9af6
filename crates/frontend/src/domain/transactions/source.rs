use contracts::domain::transaction::{AvailablePayments, Transaction};

use crate::shared::api_utils;

/// Installments and expenses not yet tied to a closing, normalized to the
/// uniform transaction shape (incomes first).
pub async fn fetch_available_transactions() -> Result<Vec<Transaction>, String> {
    let response = api_utils::get("/api/v1/closing/available-payments")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(api_utils::error_message(&response).await);
    }

    let pool = response
        .json::<AvailablePayments>()
        .await
        .map_err(|e| format!("Error leyendo transacciones: {}", e))?;

    Ok(pool.into_transactions())
}
