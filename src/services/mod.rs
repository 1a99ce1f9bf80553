// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed per-resource wrappers over the API client.

pub mod dashboard;
pub mod meals;
pub mod users;
pub mod workouts;

pub use dashboard::{DailySummary, DailyTotals, DashboardService};
pub use meals::MealService;
pub use users::UserService;
pub use workouts::WorkoutService;
