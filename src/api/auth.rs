// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account endpoints: signup, login and "who am I".

use super::ApiClient;
use crate::error::Result;
use crate::models::{AuthResponse, LoginRequest, SignupRequest, User};

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create an account. Returns the new credential and profile.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.client.post("/api/auth/signup", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.client.post("/api/auth/login", request).await
    }

    /// Profile for the credential currently attached.
    pub async fn get_me(&self) -> Result<User> {
        self.client.get("/api/auth/me").await
    }

    /// Drop the stored credential and go to the login page. No request is sent.
    pub fn logout(&self) {
        self.client.invalidate_session();
    }
}
