// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP transport and per-resource API clients.

pub mod auth;
pub mod availability;
pub mod client;
pub mod user;
pub mod verification;

pub use auth::AuthApi;
pub use availability::AvailabilityApi;
pub use client::ApiClient;
pub use user::UserApi;
pub use verification::VerificationApi;
