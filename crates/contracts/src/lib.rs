//! Shared contracts between the admin frontend and the financing backend.
//!
//! Wire DTOs (camelCase JSON, matching the REST API) plus the pure business
//! rules that both the closing form and the closing history derive from:
//! cash reconciliation, closing status classification and transaction
//! normalization.

pub mod domain;
pub mod system;
