use serde::{Deserialize, Serialize};

/// Funding/business-line partition. Every closing and every transaction is
/// scoped to exactly one provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub id: String,
    pub name: String,
}
