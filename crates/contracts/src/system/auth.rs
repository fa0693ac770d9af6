use serde::{Deserialize, Serialize};

/// Current session user, `GET /api/v1/user/me`. Supplies `createdById`
/// for closing submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
}
