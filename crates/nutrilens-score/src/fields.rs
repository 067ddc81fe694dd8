//! Layered nutrient field resolution.
//!
//! Provider payloads spell the same nutrient several ways (a flat key, a
//! spelling variant, a nested `nutriments` map). Each nutrient has an
//! explicit ordered rule list; the first rule yielding a non-zero value
//! wins and everything else defaults to zero. Keeping the rules as data
//! makes the "try alternate field name" policy visible and testable.

use nutrilens_core::NutrientProfile;
use serde_json::Value;

/// One way to locate a nutrient value in a payload.
#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    /// Top-level key on the payload object
    Direct(&'static str),
    /// Key inside the nested `nutriments` map
    Nutriment(&'static str),
}

const ENERGY_RULES: &[FieldRule] = &[
    FieldRule::Direct("energy-kj"),
    FieldRule::Direct("energy"),
    FieldRule::Nutriment("energy-kj_100g"),
    FieldRule::Nutriment("energy"),
];

const SUGARS_RULES: &[FieldRule] = &[
    FieldRule::Direct("sugars"),
    FieldRule::Direct("sugar"),
    FieldRule::Nutriment("sugars_100g"),
    FieldRule::Nutriment("sugars"),
];

const SATURATED_FAT_RULES: &[FieldRule] = &[
    FieldRule::Direct("saturated-fat"),
    FieldRule::Direct("saturated_fat"),
    FieldRule::Nutriment("saturated-fat_100g"),
];

const SALT_RULES: &[FieldRule] = &[FieldRule::Direct("salt"), FieldRule::Nutriment("salt_100g")];

const SODIUM_RULES: &[FieldRule] = &[
    FieldRule::Direct("sodium"),
    FieldRule::Nutriment("sodium_100g"),
];

const PROTEIN_RULES: &[FieldRule] = &[
    FieldRule::Direct("proteins"),
    FieldRule::Direct("protein"),
    FieldRule::Nutriment("proteins_100g"),
];

const FIBER_RULES: &[FieldRule] = &[
    FieldRule::Direct("fiber"),
    FieldRule::Nutriment("fiber_100g"),
];

const FRUITS_VEG_RULES: &[FieldRule] = &[
    FieldRule::Direct("fruits-vegetables-nuts-estimate-from-ingredients_100g"),
    FieldRule::Nutriment("fruits-vegetables-nuts-estimate-from-ingredients_100g"),
];

/// Category markers that classify a product as a beverage.
const BEVERAGE_MARKERS: [&str; 5] = ["beverage", "drink", "water", "soda", "juice"];

/// Non-nutritive sweetener identifiers: additive tags and name fragments.
const SWEETENER_MARKERS: [&str; 16] = [
    "en:e950",
    "en:e951",
    "en:e952",
    "en:e954",
    "en:e955",
    "en:e957",
    "en:e959",
    "en:e960",
    "en:e961",
    "en:e962",
    "en:e969",
    "aspartam",
    "acesulfam",
    "stevia",
    "sucralose",
    "steviol",
];

/// Grams of salt equivalent to one milligram of sodium.
const SALT_G_PER_SODIUM_MG: f64 = 2.5 / 1000.0;

/// Coerce a JSON value into a float, accepting numeric strings.
fn json_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Evaluate one rule against a payload.
fn rule_value(payload: &Value, rule: FieldRule) -> Option<f64> {
    match rule {
        FieldRule::Direct(key) => payload.get(key).and_then(json_f64),
        FieldRule::Nutriment(key) => payload
            .get("nutriments")
            .and_then(|nutriments| nutriments.get(key))
            .and_then(json_f64),
    }
}

/// Resolve a nutrient through its rule list: first non-zero value wins,
/// default zero.
#[must_use]
pub fn resolve_field(payload: &Value, rules: &[FieldRule]) -> f64 {
    rules
        .iter()
        .filter_map(|rule| rule_value(payload, *rule))
        .find(|v| *v != 0.0)
        .unwrap_or(0.0)
}

/// Whether a category string marks the product as a beverage.
#[must_use]
pub fn is_beverage(categories: &str) -> bool {
    let categories = categories.to_lowercase();
    BEVERAGE_MARKERS
        .iter()
        .any(|marker| categories.contains(marker))
}

/// Whether any non-nutritive sweetener appears in the additive tags or the
/// ingredient text. One hit is enough; matches are not cumulative.
#[must_use]
pub fn has_sweeteners(additive_tags: &[String], ingredients_text: &str) -> bool {
    let text = ingredients_text.to_lowercase();
    SWEETENER_MARKERS.iter().any(|marker| {
        text.contains(marker)
            || additive_tags
                .iter()
                .any(|tag| tag.to_lowercase() == *marker)
    })
}

/// Fully resolved inputs for the scoring pass.
///
/// Salt/sodium cross-derivation has already been applied: `salt_g` is the
/// value the salt table sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreInputs {
    /// Energy in kJ
    pub energy_kj: f64,
    /// Sugars in grams
    pub sugars_g: f64,
    /// Saturated fat in grams
    pub saturated_fat_g: f64,
    /// Salt in grams (derived from sodium when unreported)
    pub salt_g: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Fiber in grams
    pub fiber_g: f64,
    /// Fruit/vegetable/legume estimate in percent
    pub fruits_veg_percent: f64,
    /// Beverage classification from the category text
    pub is_beverage: bool,
    /// Non-nutritive sweetener presence
    pub has_sweeteners: bool,
}

impl ScoreInputs {
    /// Extract inputs from a raw provider payload (or any flat profile
    /// object using the same key conventions).
    #[must_use]
    pub fn from_payload(payload: &Value) -> Self {
        let salt = resolve_field(payload, SALT_RULES);
        let sodium_mg = resolve_field(payload, SODIUM_RULES);

        let additive_tags: Vec<String> = payload
            .get("additives_tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let ingredients_text = payload
            .get("ingredients_text")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let categories = payload
            .get("categories")
            .and_then(Value::as_str)
            .unwrap_or_default();

        Self {
            energy_kj: resolve_field(payload, ENERGY_RULES),
            sugars_g: resolve_field(payload, SUGARS_RULES),
            saturated_fat_g: resolve_field(payload, SATURATED_FAT_RULES),
            salt_g: derive_salt(salt, sodium_mg),
            protein_g: resolve_field(payload, PROTEIN_RULES),
            fiber_g: resolve_field(payload, FIBER_RULES),
            fruits_veg_percent: resolve_field(payload, FRUITS_VEG_RULES),
            is_beverage: is_beverage(categories),
            has_sweeteners: has_sweeteners(&additive_tags, ingredients_text),
        }
    }

    /// Extract inputs from a canonical profile.
    #[must_use]
    pub fn from_profile(profile: &NutrientProfile) -> Self {
        Self {
            energy_kj: profile.energy_kj,
            sugars_g: profile.sugars_g,
            saturated_fat_g: profile.saturated_fat_g,
            salt_g: profile.salt_equivalent_g(),
            protein_g: profile.protein_g,
            fiber_g: profile.fiber_g,
            fruits_veg_percent: profile.fruits_veg_percent,
            is_beverage: is_beverage(&profile.categories),
            has_sweeteners: has_sweeteners(&profile.additive_tags, &profile.ingredients_text),
        }
    }
}

/// Salt in grams, derived from sodium (mg) when salt is unreported.
fn derive_salt(salt_g: f64, sodium_mg: f64) -> f64 {
    if salt_g == 0.0 && sodium_mg > 0.0 {
        sodium_mg * SALT_G_PER_SODIUM_MG
    } else {
        salt_g
    }
}
