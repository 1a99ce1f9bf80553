// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models mirroring the server's JSON wire format.

pub mod meal;
pub mod user;
pub mod workout;

pub use meal::{MealEntry, MealPayload, MealType};
pub use user::{
    ActivityLevel, LoginRequest, LoginResponse, ProfilePayload, RegistrationRequest, Sex,
    UserProfile,
};
pub use workout::{WorkoutEntry, WorkoutPayload};
