//! In-game character verification endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{TokenResponse, VerificationResult, VerifyRequest};

#[derive(Clone)]
pub struct VerificationApi {
    client: ApiClient,
}

impl VerificationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Issue a token to place on the in-game profile.
    pub async fn generate_token(&self) -> Result<TokenResponse> {
        self.client
            .post("/api/verification/generate-token", &serde_json::json!({}))
            .await
    }

    /// Ask the server to look for the token on profile `member_no`.
    pub async fn verify_profile(&self, member_no: &str) -> Result<VerificationResult> {
        let body = VerifyRequest {
            member_no: member_no.to_string(),
        };
        self.client.post("/api/verification/verify", &body).await
    }
}
