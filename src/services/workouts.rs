// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD, filtered reads, and server-side aggregates.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{WorkoutEntry, WorkoutPayload};
use chrono::NaiveDate;
use validator::Validate;

/// Typed wrapper for the `/workouts` routes.
#[derive(Clone)]
pub struct WorkoutService {
    client: ApiClient,
}

impl WorkoutService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Record a new workout.
    pub async fn create(&self, payload: &WorkoutPayload) -> Result<WorkoutEntry, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.post("/workouts", payload).await
    }

    /// Replace an existing workout record.
    pub async fn update(&self, id: i64, payload: &WorkoutPayload) -> Result<WorkoutEntry, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.put(&format!("/workouts/{}", id), payload).await
    }

    /// Delete a workout record.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/workouts/{}", id)).await
    }

    /// Fetch a single workout record.
    pub async fn get(&self, id: i64) -> Result<WorkoutEntry, ApiError> {
        self.client.get(&format!("/workouts/{}", id)).await
    }

    /// All workout records visible to the caller.
    pub async fn list(&self) -> Result<Vec<WorkoutEntry>, ApiError> {
        self.client.get("/workouts").await
    }

    /// All workouts recorded by one user.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<WorkoutEntry>, ApiError> {
        self.client.get(&format!("/workouts/user/{}", user_id)).await
    }

    /// All workouts on a given date, across users.
    pub async fn for_date(&self, date: NaiveDate) -> Result<Vec<WorkoutEntry>, ApiError> {
        self.client.get(&format!("/workouts/date/{}", date)).await
    }

    /// One user's workouts on a given date.
    pub async fn for_user_on(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutEntry>, ApiError> {
        self.client
            .get(&format!("/workouts/user/{}/date/{}", user_id, date))
            .await
    }

    /// One user's workouts of a given exercise type. The type is a
    /// free-form tag and must be path-encoded.
    pub async fn for_user_of_type(
        &self,
        user_id: i64,
        workout_type: &str,
    ) -> Result<Vec<WorkoutEntry>, ApiError> {
        self.client
            .get(&format!(
                "/workouts/user/{}/type/{}",
                user_id,
                urlencoding::encode(workout_type)
            ))
            .await
    }

    /// Server-computed total calories burned for one user and date.
    pub async fn total_calories_burned(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<f64, ApiError> {
        self.client
            .get(&format!(
                "/workouts/user/{}/date/{}/calories",
                user_id, date
            ))
            .await
    }

    /// Server-computed average daily burn over an inclusive date range.
    pub async fn average_calories_burned(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, ApiError> {
        self.client
            .get_with(
                &format!("/workouts/user/{}/average-calories", user_id),
                &[
                    ("startDate", start.to_string()),
                    ("endDate", end.to_string()),
                ],
            )
            .await
    }

    /// Server-computed total workout minutes for one user and date.
    pub async fn total_duration(&self, user_id: i64, date: NaiveDate) -> Result<i64, ApiError> {
        self.client
            .get(&format!(
                "/workouts/user/{}/date/{}/duration",
                user_id, date
            ))
            .await
    }
}
