// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Availability endpoints.
//!
//! The backend wraps the slot list in a `{ "slots": [...] }` envelope in both
//! directions; this client hides that.

use super::ApiClient;
use crate::error::Result;
use crate::models::{AvailabilitySlot, AvailabilityUpdateRequest, GroupAvailability, SlotsResponse};
use serde::de::IgnoredAny;

#[derive(Clone)]
pub struct AvailabilityApi {
    client: ApiClient,
}

impl AvailabilityApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Current user's sparse slot list.
    pub async fn get_my_availability(&self) -> Result<Vec<AvailabilitySlot>> {
        let response: SlotsResponse = self.client.get("/api/availability/me").await?;
        Ok(response.slots)
    }

    /// Replace the current user's stored slots with `slots`.
    ///
    /// Whatever the server echoes back (nothing, or the saved list) is ignored.
    pub async fn update_my_availability(&self, slots: &[AvailabilitySlot]) -> Result<()> {
        let _: IgnoredAny = self
            .client
            .post("/api/availability/me", &AvailabilityUpdateRequest { slots })
            .await?;
        Ok(())
    }

    pub async fn get_group_availability(&self) -> Result<GroupAvailability> {
        self.client.get("/api/availability/group").await
    }
}
