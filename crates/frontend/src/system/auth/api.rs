use contracts::system::auth::UserInfo;

use crate::shared::api_utils;

/// Fetch the current session user. Supplies `createdById` for closings.
pub async fn get_current_user() -> Result<UserInfo, String> {
    let response = api_utils::get("/api/v1/user/me")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Session check failed: {}", response.status()));
    }

    response
        .json::<UserInfo>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
