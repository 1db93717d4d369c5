//! Profile and member directory endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{MemberInfo, ProfileUpdateRequest, User};

#[derive(Clone)]
pub struct UserApi {
    client: ApiClient,
}

impl UserApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Update display fields; returns the full updated profile.
    pub async fn update_profile(&self, request: &ProfileUpdateRequest) -> Result<User> {
        self.client.post("/api/users/profile", request).await
    }

    pub async fn get_all_members(&self) -> Result<Vec<MemberInfo>> {
        self.client.get("/api/members").await
    }
}
