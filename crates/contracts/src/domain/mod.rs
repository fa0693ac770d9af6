pub mod closing;
pub mod expense;
pub mod provider;
pub mod reconciliation;
pub mod transaction;
pub mod vehicle;
