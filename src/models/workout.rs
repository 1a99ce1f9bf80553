// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Workout record as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutEntry {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub name: String,
    /// Duration in minutes
    pub duration: i32,
    pub calories_burned: i32,
    pub workout_time: Option<NaiveDateTime>,
    pub notes: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Workout create/update body. Validated client-side before sending.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    pub user_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Duration in minutes
    #[validate(range(min = 1))]
    pub duration: i32,
    #[validate(range(min = 1))]
    pub calories_burned: i32,
    pub workout_time: NaiveDateTime,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
