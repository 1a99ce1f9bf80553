// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal CRUD, filtered reads, and server-side calorie aggregates.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MealEntry, MealPayload};
use chrono::NaiveDate;
use validator::Validate;

/// Typed wrapper for the `/meals` routes.
#[derive(Clone)]
pub struct MealService {
    client: ApiClient,
}

impl MealService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Record a new meal.
    pub async fn create(&self, payload: &MealPayload) -> Result<MealEntry, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.post("/meals", payload).await
    }

    /// Replace an existing meal record.
    pub async fn update(&self, id: i64, payload: &MealPayload) -> Result<MealEntry, ApiError> {
        payload
            .validate()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        self.client.put(&format!("/meals/{}", id), payload).await
    }

    /// Delete a meal record.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/meals/{}", id)).await
    }

    /// Fetch a single meal record.
    pub async fn get(&self, id: i64) -> Result<MealEntry, ApiError> {
        self.client.get(&format!("/meals/{}", id)).await
    }

    /// All meal records visible to the caller.
    pub async fn list(&self) -> Result<Vec<MealEntry>, ApiError> {
        self.client.get("/meals").await
    }

    /// All meals recorded by one user.
    pub async fn for_user(&self, user_id: i64) -> Result<Vec<MealEntry>, ApiError> {
        self.client.get(&format!("/meals/user/{}", user_id)).await
    }

    /// All meals on a given date, across users.
    pub async fn for_date(&self, date: NaiveDate) -> Result<Vec<MealEntry>, ApiError> {
        self.client.get(&format!("/meals/date/{}", date)).await
    }

    /// One user's meals on a given date.
    pub async fn for_user_on(
        &self,
        user_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<MealEntry>, ApiError> {
        self.client
            .get(&format!("/meals/user/{}/date/{}", user_id, date))
            .await
    }

    /// Server-computed total calorie intake for one user and date.
    pub async fn total_calories(&self, user_id: i64, date: NaiveDate) -> Result<f64, ApiError> {
        self.client
            .get(&format!("/meals/user/{}/date/{}/calories", user_id, date))
            .await
    }

    /// Server-computed average daily intake over an inclusive date range.
    pub async fn average_calories(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<f64, ApiError> {
        self.client
            .get_with(
                &format!("/meals/user/{}/average-calories", user_id),
                &[
                    ("startDate", start.to_string()),
                    ("endDate", end.to_string()),
                ],
            )
            .await
    }
}
