// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Wire models shared with the backend (camelCase JSON).

pub mod availability;
pub mod user;
pub mod verification;

pub use availability::{
    AvailabilityGrid, AvailabilitySlot, AvailabilityUpdateRequest, DayAvailability,
    GroupAvailability, HourData, SlotsResponse,
};
pub use user::{
    AuthResponse, LoginRequest, MemberInfo, ProfileUpdateRequest, SignupRequest, User, UserUpdate,
};
pub use verification::{TokenResponse, VerificationResult, VerifyRequest};
