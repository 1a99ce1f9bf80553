// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal record types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which meal of the day a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// Meal record as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    pub id: i64,
    pub user_id: i64,
    pub user_name: Option<String>,
    pub food_name: String,
    pub calories: i32,
    /// Macro breakdown in grams (sodium in milligrams); all optional
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
    pub quantity: i32,
    pub unit: Option<String>,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    pub meal_time: Option<NaiveDateTime>,
    pub memo: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Meal create/update body. Validated client-side before sending.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MealPayload {
    pub user_id: i64,
    #[validate(length(min = 1, max = 100))]
    pub food_name: String,
    #[validate(range(min = 1))]
    pub calories: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sugar: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
    #[validate(range(min = 1))]
    pub quantity: i32,
    #[validate(length(max = 20))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub meal_type: MealType,
    pub meal_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_time: Option<NaiveDateTime>,
    #[validate(length(max = 500))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}
