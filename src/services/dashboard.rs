// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily and weekly dashboard aggregation.
//!
//! Composes the per-resource services into the figures the dashboard
//! displays. All per-day numbers come from server-side aggregate routes;
//! the fetches are independent and land in disjoint fields, so completion
//! order does not matter.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{MealEntry, WorkoutEntry};
use crate::services::{MealService, WorkoutService};
use crate::session::SessionStore;
use chrono::{Duration, NaiveDate};
use futures_util::future;
use serde::Serialize;

/// Everything the dashboard shows for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub meals: Vec<MealEntry>,
    pub workouts: Vec<WorkoutEntry>,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub workout_minutes: i64,
}

impl DailySummary {
    /// Intake minus burn for the day.
    pub fn net_calories(&self) -> f64 {
        self.calories_consumed - self.calories_burned
    }
}

/// Per-day totals for the weekly chart.
#[derive(Debug, Clone, Serialize)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub calories_consumed: f64,
    pub calories_burned: f64,
    pub workout_minutes: i64,
}

/// Dashboard composition over the meal and workout services.
///
/// The current user comes from the session store; there is no other way
/// to select whose dashboard is built.
#[derive(Clone)]
pub struct DashboardService {
    meals: MealService,
    workouts: WorkoutService,
    session: SessionStore,
}

impl DashboardService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            session: client.session().clone(),
            meals: MealService::new(client.clone()),
            workouts: WorkoutService::new(client),
        }
    }

    fn current_user(&self) -> Result<i64, ApiError> {
        self.session.user_id().ok_or(ApiError::Unauthenticated)
    }

    /// Full summary for one day: record lists plus aggregate figures,
    /// fetched concurrently.
    pub async fn daily_summary(&self, date: NaiveDate) -> Result<DailySummary, ApiError> {
        let user_id = self.current_user()?;

        let (meals, workouts, calories_consumed, calories_burned, workout_minutes) = tokio::try_join!(
            self.meals.for_user_on(user_id, date),
            self.workouts.for_user_on(user_id, date),
            self.meals.total_calories(user_id, date),
            self.workouts.total_calories_burned(user_id, date),
            self.workouts.total_duration(user_id, date),
        )?;

        Ok(DailySummary {
            date,
            meals,
            workouts,
            calories_consumed,
            calories_burned,
            workout_minutes,
        })
    }

    /// Totals for the seven days ending at `week_ending`, in
    /// chronological order.
    pub async fn weekly_overview(
        &self,
        week_ending: NaiveDate,
    ) -> Result<Vec<DailyTotals>, ApiError> {
        let user_id = self.current_user()?;

        let days = (0..7).rev().map(|offset| week_ending - Duration::days(offset));
        future::try_join_all(days.map(|date| self.day_totals(user_id, date))).await
    }

    async fn day_totals(&self, user_id: i64, date: NaiveDate) -> Result<DailyTotals, ApiError> {
        let (calories_consumed, calories_burned, workout_minutes) = tokio::try_join!(
            self.meals.total_calories(user_id, date),
            self.workouts.total_calories_burned(user_id, date),
            self.workouts.total_duration(user_id, date),
        )?;

        Ok(DailyTotals {
            date,
            calories_consumed,
            calories_burned,
            workout_minutes,
        })
    }
}
