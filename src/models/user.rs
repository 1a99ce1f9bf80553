//! User account and profile types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Biological sex used by the Harris-Benedict BMR formulas.
///
/// Mandatory wherever BMR is computed; there is no implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Parse a free-form gender string from a profile. `None` for anything
    /// that is not recognizably male or female.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Sex::Male),
            "female" => Some(Sex::Female),
            _ => None,
        }
    }
}

/// Self-reported activity tier scaling BMR to daily energy expenditure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
    /// Any level string the server sends that we do not recognize.
    #[serde(other)]
    Unknown,
}

impl ActivityLevel {
    /// Activity coefficient applied to BMR. Unrecognized levels fall back
    /// to the sedentary multiplier.
    pub fn coefficient(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtremelyActive => 1.9,
            ActivityLevel::Unknown => 1.2,
        }
    }

    /// Parse a level name as it appears on the wire.
    pub fn parse(value: &str) -> Self {
        match value {
            "SEDENTARY" => ActivityLevel::Sedentary,
            "LIGHTLY_ACTIVE" => ActivityLevel::LightlyActive,
            "MODERATELY_ACTIVE" => ActivityLevel::ModeratelyActive,
            "VERY_ACTIVE" => ActivityLevel::VeryActive,
            "EXTREMELY_ACTIVE" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Unknown,
        }
    }
}

/// User profile as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub age: Option<u32>,
    /// Free-form on the wire; see [`UserProfile::sex`]
    pub gender: Option<String>,
    /// Height in centimeters
    pub height: Option<f64>,
    /// Weight in kilograms
    pub weight: Option<f64>,
    pub target_weight: Option<f64>,
    pub activity_level: Option<ActivityLevel>,
    pub daily_calorie_goal: Option<i32>,
    pub dietary_restrictions: Option<String>,
    pub profile_image: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl UserProfile {
    /// Parsed sex, when the stored gender string is usable.
    pub fn sex(&self) -> Option<Sex> {
        self.gender.as_deref().and_then(Sex::parse)
    }
}

/// Registration request body. Validated client-side before sending.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 8, max = 100))]
    pub password: String,
    #[validate(must_match(other = "password"))]
    pub password_confirm: String,
    #[validate(length(max = 30))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_goal: Option<i32>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username_or_email: String,
    pub password: String,
}

/// Login response: identity plus the bearer credential.
///
/// The server has returned the credential under `token` historically and
/// under `accessToken` in newer versions; both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub id: i64,
    pub username: Option<String>,
    pub email: Option<String>,
    pub nickname: Option<String>,
    pub token: Option<String>,
    pub access_token: Option<String>,
}

impl LoginResponse {
    /// The usable credential, preferring `accessToken` over legacy `token`.
    pub fn credential(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .or(self.token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Profile create/update body. Validated client-side before sending.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePayload {
    #[validate(length(max = 30))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[validate(range(min = 1, max = 150))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[validate(range(min = 1.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[validate(range(min = 1.0))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_goal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_restrictions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}
