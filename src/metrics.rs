// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived health metrics: BMI, basal metabolic rate, recommended intake.
//!
//! Pure functions over profile attributes. Missing or non-positive numeric
//! inputs yield `None`; nothing here touches the network or the session.

use crate::error::ApiError;
use crate::models::{ActivityLevel, Sex, UserProfile};
use serde::Serialize;

/// Body Mass Index, rounded to one decimal.
///
/// `None` when either input is absent or non-positive.
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height = height_cm.filter(|h| *h > 0.0)?;
    let weight = weight_kg.filter(|w| *w > 0.0)?;
    let meters = height / 100.0;
    Some((weight / (meters * meters) * 10.0).round() / 10.0)
}

/// Coarse BMI band with display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Color token used by display layers.
    pub fn color_token(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "#17a2b8",
            BmiCategory::Normal => "#28a745",
            BmiCategory::Overweight => "#ffc107",
            BmiCategory::Obese => "#dc3545",
        }
    }
}

/// Classify a BMI value. Band lower bounds are inclusive: exactly 18.5 is
/// normal, exactly 25 is overweight, exactly 30 is obese.
pub fn bmi_category(bmi: Option<f64>) -> Option<BmiCategory> {
    let value = bmi.filter(|b| *b > 0.0)?;
    Some(if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::Normal
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    })
}

/// Basal metabolic rate per the revised Harris-Benedict formulas, rounded
/// to the nearest kcal.
///
/// Sex is a mandatory input; `None` only when age, height, or weight is
/// absent or non-positive.
pub fn bmr(
    age: Option<u32>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    sex: Sex,
) -> Option<i32> {
    let age = age.filter(|a| *a > 0)? as f64;
    let height = height_cm.filter(|h| *h > 0.0)?;
    let weight = weight_kg.filter(|w| *w > 0.0)?;

    let value = match sex {
        Sex::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Sex::Female => 447.593 + 9.247 * weight + 3.098 * height - 4.330 * age,
    };
    Some(value.round() as i32)
}

/// Activity-adjusted recommended daily calorie intake.
///
/// `None` when either input is absent; unrecognized activity levels use
/// the fallback coefficient (see [`ActivityLevel::coefficient`]).
pub fn recommended_calories(
    bmr: Option<i32>,
    activity_level: Option<ActivityLevel>,
) -> Option<i32> {
    let bmr = bmr?;
    let level = activity_level?;
    Some((bmr as f64 * level.coefficient()).round() as i32)
}

/// Everything the dashboard and profile views display, computed in one go.
#[derive(Debug, Clone, Serialize)]
pub struct HealthSummary {
    pub bmi: Option<f64>,
    pub bmi_category: Option<BmiCategory>,
    pub bmr: Option<i32>,
    pub recommended_calories: Option<i32>,
}

impl HealthSummary {
    /// Compute the summary for a profile.
    ///
    /// Fails closed with `InvalidRequest` when the profile carries no
    /// parseable gender: BMR has no implicit default sex.
    pub fn for_profile(profile: &UserProfile) -> Result<Self, ApiError> {
        let sex = profile.sex().ok_or_else(|| {
            ApiError::InvalidRequest(
                "profile has no usable gender; BMR requires a known sex".to_string(),
            )
        })?;

        let bmi = bmi(profile.height, profile.weight);
        let bmr = bmr(profile.age, profile.height, profile.weight, sex);
        Ok(Self {
            bmi,
            bmi_category: bmi_category(bmi),
            bmr,
            recommended_calories: recommended_calories(bmr, profile.activity_level),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gender: Option<&str>) -> UserProfile {
        UserProfile {
            id: 7,
            username: Some("meallover".to_string()),
            email: None,
            nickname: None,
            age: Some(30),
            gender: gender.map(String::from),
            height: Some(180.0),
            weight: Some(80.0),
            target_weight: None,
            activity_level: Some(ActivityLevel::ModeratelyActive),
            daily_calorie_goal: None,
            dietary_restrictions: None,
            profile_image: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_bmi_rounds_to_one_decimal() {
        // 80 / 1.8^2 = 24.6913... -> 24.7
        assert_eq!(bmi(Some(180.0), Some(80.0)), Some(24.7));
    }

    #[test]
    fn test_bmi_missing_or_non_positive_inputs() {
        assert_eq!(bmi(None, Some(80.0)), None);
        assert_eq!(bmi(Some(180.0), None), None);
        assert_eq!(bmi(Some(0.0), Some(80.0)), None);
        assert_eq!(bmi(Some(180.0), Some(-1.0)), None);
    }

    #[test]
    fn test_bmi_monotonic_in_weight_and_height() {
        let base = bmi(Some(170.0), Some(70.0)).unwrap();
        assert!(bmi(Some(170.0), Some(75.0)).unwrap() > base);
        assert!(bmi(Some(180.0), Some(70.0)).unwrap() < base);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(Some(17.9)), Some(BmiCategory::Underweight));
        assert_eq!(bmi_category(Some(18.5)), Some(BmiCategory::Normal));
        assert_eq!(bmi_category(Some(24.9)), Some(BmiCategory::Normal));
        assert_eq!(bmi_category(Some(25.0)), Some(BmiCategory::Overweight));
        assert_eq!(bmi_category(Some(29.9)), Some(BmiCategory::Overweight));
        assert_eq!(bmi_category(Some(30.0)), Some(BmiCategory::Obese));
        assert_eq!(bmi_category(None), None);
    }

    #[test]
    fn test_bmr_harris_benedict() {
        // 88.362 + 13.397*80 + 4.799*180 - 5.677*30 = 1853.632
        assert_eq!(bmr(Some(30), Some(180.0), Some(80.0), Sex::Male), Some(1854));
        // 447.593 + 9.247*60 + 3.098*165 - 4.330*25 = 1405.333
        assert_eq!(
            bmr(Some(25), Some(165.0), Some(60.0), Sex::Female),
            Some(1405)
        );
        assert_eq!(bmr(None, Some(180.0), Some(80.0), Sex::Male), None);
        assert_eq!(bmr(Some(30), None, Some(80.0), Sex::Male), None);
        assert_eq!(bmr(Some(30), Some(180.0), None, Sex::Male), None);
    }

    #[test]
    fn test_recommended_calories() {
        assert_eq!(
            recommended_calories(Some(1854), Some(ActivityLevel::ModeratelyActive)),
            Some(2874)
        );
        assert_eq!(
            recommended_calories(Some(1854), Some(ActivityLevel::Sedentary)),
            Some(2225)
        );
        assert_eq!(recommended_calories(None, Some(ActivityLevel::Sedentary)), None);
        assert_eq!(recommended_calories(Some(1854), None), None);
    }

    #[test]
    fn test_recommended_calories_unknown_level_falls_back() {
        let level = ActivityLevel::parse("UNKNOWN_LEVEL");
        assert_eq!(
            recommended_calories(Some(2000), Some(level)),
            Some(2400) // 2000 * 1.2
        );
    }

    #[test]
    fn test_health_summary_for_profile() {
        let summary = HealthSummary::for_profile(&profile(Some("male"))).unwrap();
        assert_eq!(summary.bmi, Some(24.7));
        assert_eq!(summary.bmi_category, Some(BmiCategory::Normal));
        assert_eq!(summary.bmr, Some(1854));
        assert_eq!(summary.recommended_calories, Some(2874));
    }

    #[test]
    fn test_health_summary_requires_sex() {
        let err = HealthSummary::for_profile(&profile(None)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));

        let err = HealthSummary::for_profile(&profile(Some("unspecified"))).unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
    }
}
