// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Guild Scheduler: client data layer for the weekly availability planner.
//!
//! This crate provides typed wrappers for the scheduling API plus the two
//! client state containers: the authentication session and the weekly
//! availability grid.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod state;
pub mod storage;

use api::{ApiClient, AuthApi, AvailabilityApi, UserApi, VerificationApi};
use config::Config;
use navigation::{LoggingNavigator, Navigator};
use state::{ScheduleState, SessionHandle, SessionState};
use std::sync::Arc;
use storage::{CredentialStore, Credentials, FileCredentialStore};

/// Explicitly constructed client context handed to the UI layer.
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient,
    pub session: SessionState,
    pub schedule: ScheduleState,
    pub users: UserApi,
    pub verification: VerificationApi,
}

impl AppContext {
    /// Wire all components around one credential store and navigator.
    pub fn new(
        config: Config,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let shared = SessionHandle::new(Credentials::new(store));
        let client = ApiClient::new(&config, shared.clone(), navigator);

        let users = UserApi::new(client.clone());
        let session = SessionState::new(shared, AuthApi::new(client.clone()), users.clone());
        let schedule = ScheduleState::new(AvailabilityApi::new(client.clone()));

        Self {
            config,
            verification: VerificationApi::new(client.clone()),
            client,
            session,
            schedule,
            users,
        }
    }

    /// Context with the credential kept at `config.credential_path`.
    pub fn from_config(config: Config) -> Self {
        let store = Arc::new(FileCredentialStore::new(&config.credential_path));
        Self::new(config, store, Arc::new(LoggingNavigator))
    }

    /// Restore any persisted session. Call once at startup.
    pub async fn start(&mut self) {
        self.session.restore().await;
    }

    /// Tear the context down. Subscribers see their channels close.
    pub fn dispose(self) {
        tracing::debug!(
            authenticated = self.session.is_authenticated(),
            unsaved = self.schedule.is_dirty(),
            "Disposing client context"
        );
    }
}
