use serde::{Deserialize, Serialize};

/// Motorcycle in the leasing inventory, `GET /api/v1/vehicles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub status: String,
}

/// Body for creating or updating a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    pub plate: String,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub status: String,
}
