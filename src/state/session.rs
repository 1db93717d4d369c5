// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication session: current credential and user profile.
//!
//! Lifecycle: `Unknown → Loading → {Authenticated, Anonymous}`.
//! A persisted credential is only trusted once `GET /api/auth/me` succeeds;
//! a failed restore signs the user out and is never reported to the caller.

use crate::api::{AuthApi, UserApi};
use crate::error::Result;
use crate::models::{LoginRequest, ProfileUpdateRequest, SignupRequest, User, UserUpdate};
use crate::storage::Credentials;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing checked yet
    Unknown,
    /// Verifying a persisted credential
    Loading,
    Authenticated,
    Anonymous,
}

/// Shared session cell: credential, profile and phase.
///
/// Cloned into the transport so a 401 from any endpoint can tear the
/// session down in place, and observers of [`SessionState::subscribe`] see
/// the transition.
#[derive(Clone)]
pub struct SessionHandle {
    credentials: Credentials,
    user: Arc<watch::Sender<Option<User>>>,
    phase: Arc<watch::Sender<SessionPhase>>,
}

impl SessionHandle {
    pub fn new(credentials: Credentials) -> Self {
        let (user, _rx) = watch::channel(None);
        let (phase, _rx) = watch::channel(SessionPhase::Unknown);
        Self {
            credentials,
            user: Arc::new(user),
            phase: Arc::new(phase),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Drop credential and profile, and move to `Anonymous`.
    pub fn invalidate(&self) {
        self.credentials.clear();
        self.user.send_replace(None);
        self.set_phase(SessionPhase::Anonymous);
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.phase.send_if_modified(|current| {
            let changed = *current != phase;
            *current = phase;
            changed
        });
    }
}

/// Session state container.
pub struct SessionState {
    shared: SessionHandle,
    auth: AuthApi,
    users: UserApi,
}

impl SessionState {
    pub fn new(shared: SessionHandle, auth: AuthApi, users: UserApi) -> Self {
        Self {
            shared,
            auth,
            users,
        }
    }

    // ─── Startup ─────────────────────────────────────────────────

    /// Restore the session from the persisted credential, if any.
    ///
    /// Without a stored credential this goes straight to `Anonymous` and
    /// makes no network call.
    pub async fn restore(&mut self) {
        match self.shared.credentials.load_persisted() {
            Some(_) => self.fetch_user().await,
            None => {
                tracing::debug!("No persisted credential, starting anonymous");
                self.set_phase(SessionPhase::Anonymous);
            }
        }
    }

    /// Fetch the profile for the current credential.
    ///
    /// On failure the session is logged out; the error is logged, not returned.
    pub async fn fetch_user(&mut self) {
        self.set_phase(SessionPhase::Loading);

        match self.auth.get_me().await {
            Ok(user) => {
                tracing::info!(user_id = %user.id, "Session restored");
                self.shared.user.send_replace(Some(user));
                self.set_phase(SessionPhase::Authenticated);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore session");
                self.logout();
            }
        }
    }

    // ─── Transitions ─────────────────────────────────────────────

    /// Adopt a credential and profile from a successful login or signup.
    pub fn login(&mut self, token: &str, user: User) {
        self.shared.credentials.set(token);
        tracing::info!(user_id = %user.id, "Signed in");
        self.shared.user.send_replace(Some(user));
        self.set_phase(SessionPhase::Authenticated);
    }

    pub fn logout(&mut self) {
        self.shared.invalidate();
    }

    /// Merge `updates` into the current profile. No-op when signed out.
    pub fn update_user(&mut self, updates: UserUpdate) {
        self.shared.user.send_if_modified(|user| match user {
            Some(user) => {
                updates.apply_to(user);
                true
            }
            None => false,
        });
    }

    /// Log in with email and password, then adopt the returned session.
    pub async fn sign_in(&mut self, request: &LoginRequest) -> Result<User> {
        let response = self.auth.login(request).await?;
        self.login(&response.token, response.user.clone());
        Ok(response.user)
    }

    /// Create an account, then adopt the returned session.
    pub async fn sign_up(&mut self, request: &SignupRequest) -> Result<User> {
        let response = self.auth.signup(request).await?;
        self.login(&response.token, response.user.clone());
        Ok(response.user)
    }

    /// Push display-field changes and replace the profile with the server's copy.
    pub async fn update_profile(&mut self, request: &ProfileUpdateRequest) -> Result<User> {
        let user = self.users.update_profile(request).await?;
        self.shared.user.send_replace(Some(user.clone()));
        Ok(user)
    }

    // ─── Accessors ───────────────────────────────────────────────

    /// Both a credential and a fetched profile are required.
    pub fn is_authenticated(&self) -> bool {
        self.shared.credentials.is_present() && self.shared.user.borrow().is_some()
    }

    pub fn is_loading(&self) -> bool {
        *self.shared.phase.borrow() == SessionPhase::Loading
    }

    pub fn phase(&self) -> SessionPhase {
        *self.shared.phase.borrow()
    }

    /// Copy of the current profile.
    pub fn user(&self) -> Option<User> {
        self.shared.user.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.shared.credentials.token()
    }

    /// Observe phase transitions.
    pub fn subscribe(&self) -> watch::Receiver<SessionPhase> {
        self.shared.phase.subscribe()
    }

    /// Observe profile changes (login, merges, teardown).
    pub fn subscribe_user(&self) -> watch::Receiver<Option<User>> {
        self.shared.user.subscribe()
    }

    fn set_phase(&self, phase: SessionPhase) {
        self.shared.set_phase(phase);
    }
}
