//! Nutri-Score 2023 computation.

use crate::fields::ScoreInputs;
use crate::points::{
    energy_points, fiber_points, fruits_veg_points, protein_points, salt_points,
    saturated_fat_points, sugar_points, SWEETENER_POINTS,
};
use nutrilens_core::{NutrientProfile, ProductRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Nutri-Score letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Best grade
    A,
    /// Second grade
    B,
    /// Middle grade
    C,
    /// Fourth grade
    D,
    /// Worst grade
    E,
}

impl Grade {
    /// The single-letter form.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The eight sub-scores behind a grade, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Energy points (0-10)
    pub energy_points: u32,
    /// Sugar points (0-10)
    pub sugar_points: u32,
    /// Saturated fat points (0-10)
    pub saturated_fat_points: u32,
    /// Salt points (0-9, or 20 above 2.0 g)
    pub salt_points: u32,
    /// Non-nutritive sweetener points (0 or 4, beverages only)
    pub non_nutritive_sweeteners_points: u32,
    /// Protein points (0-7)
    pub protein_points: u32,
    /// Fiber points (0-5)
    pub fiber_points: u32,
    /// Fruit/vegetable/legume points (0-2, or 6 above 80 %)
    pub fruits_veg_points: u32,
}

/// Result of grading one nutrient profile.
///
/// Fully determined by the inputs: `score` is always
/// `negative_points - positive_points` and the grade follows the fixed
/// per-class thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Final Nutri-Score value (negative minus positive points)
    pub score: i32,
    /// Letter grade derived from the score
    pub grade: Grade,
    /// Sum of energy, sugar, saturated fat, salt and sweetener points
    pub negative_points: u32,
    /// Sum of protein, fiber and fruit/vegetable points
    pub positive_points: u32,
    /// Whether the beverage rule set was applied
    pub is_beverage: bool,
    /// Per-component points
    pub breakdown: ScoreBreakdown,
}

/// Compute the Nutri-Score for fully resolved inputs.
///
/// Total over any input: an all-zero profile grades A (food) with zero
/// points everywhere.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn score(inputs: &ScoreInputs) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        energy_points: energy_points(inputs.energy_kj, inputs.is_beverage),
        sugar_points: sugar_points(inputs.sugars_g, inputs.is_beverage),
        saturated_fat_points: saturated_fat_points(inputs.saturated_fat_g),
        salt_points: salt_points(inputs.salt_g),
        non_nutritive_sweeteners_points: if inputs.is_beverage && inputs.has_sweeteners {
            SWEETENER_POINTS
        } else {
            0
        },
        protein_points: protein_points(inputs.protein_g),
        fiber_points: fiber_points(inputs.fiber_g),
        fruits_veg_points: fruits_veg_points(inputs.fruits_veg_percent),
    };

    let negative_points = breakdown.energy_points
        + breakdown.sugar_points
        + breakdown.saturated_fat_points
        + breakdown.salt_points
        + breakdown.non_nutritive_sweeteners_points;
    let positive_points =
        breakdown.protein_points + breakdown.fiber_points + breakdown.fruits_veg_points;
    let score = negative_points as i32 - positive_points as i32;

    ScoreResult {
        score,
        grade: grade_for(score, inputs.is_beverage),
        negative_points,
        positive_points,
        is_beverage: inputs.is_beverage,
        breakdown,
    }
}

/// Map a numeric score onto a letter grade; beverages use stricter bands.
fn grade_for(score: i32, is_beverage: bool) -> Grade {
    if is_beverage {
        match score {
            i32::MIN..=1 => Grade::A,
            2..=5 => Grade::B,
            6..=9 => Grade::C,
            10..=13 => Grade::D,
            _ => Grade::E,
        }
    } else {
        match score {
            i32::MIN..=-1 => Grade::A,
            0..=2 => Grade::B,
            3..=10 => Grade::C,
            11..=18 => Grade::D,
            _ => Grade::E,
        }
    }
}

/// Grade a raw provider payload (or a flat profile object using the same
/// key conventions).
#[must_use]
pub fn grade_payload(payload: &Value) -> ScoreResult {
    score(&ScoreInputs::from_payload(payload))
}

/// Grade a canonical nutrient profile.
#[must_use]
pub fn grade_profile(profile: &NutrientProfile) -> ScoreResult {
    score(&ScoreInputs::from_profile(profile))
}

/// Grade a resolved product record.
///
/// Prefers the raw provider payload when the record carries one, since it
/// may hold fields the canonical mapping dropped; falls back to the
/// profile otherwise.
#[must_use]
pub fn grade_record(record: &ProductRecord) -> ScoreResult {
    match &record.raw {
        Some(raw) => grade_payload(raw),
        None => grade_profile(&record.profile),
    }
}
