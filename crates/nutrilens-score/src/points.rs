//! Nutri-Score 2023 point tables.
//!
//! Each sub-score walks a fixed breakpoint table: the point value is the
//! index of the first breakpoint the value does not exceed, capped at the
//! table length. Salt and fruit/vegetable content deviate from that shape
//! on purpose (regulatory thresholds, not smooth continuations).

/// Energy breakpoints for solid food, in kJ.
const ENERGY_FOOD_KJ: [f64; 10] = [
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];

/// Energy breakpoints for beverages, in kJ.
const ENERGY_BEVERAGE_KJ: [f64; 10] = [
    0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0,
];

/// Sugar breakpoints for solid food, in grams.
const SUGARS_FOOD_G: [f64; 10] = [4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0];

/// Sugar breakpoints for beverages, in grams.
const SUGARS_BEVERAGE_G: [f64; 10] = [0.0, 1.5, 3.0, 4.5, 6.0, 7.5, 9.0, 10.5, 12.0, 13.5];

/// Saturated fat breakpoints, in grams (shared by food and beverages).
const SATURATED_FAT_G: [f64; 10] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Salt breakpoints, in grams (shared by food and beverages).
const SALT_G: [f64; 10] = [0.2, 0.4, 0.6, 0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0];

/// Protein breakpoints, in grams.
const PROTEIN_G: [f64; 7] = [1.6, 3.2, 4.8, 6.4, 8.0, 9.6, 11.2];

/// Fiber breakpoints, in grams.
const FIBER_G: [f64; 5] = [0.9, 1.9, 2.8, 3.7, 4.7];

/// Fruit/vegetable/legume breakpoints, in percent.
const FRUITS_VEG_PERCENT: [f64; 3] = [40.0, 60.0, 80.0];

/// Maximum salt penalty above the last breakpoint (not 10).
const SALT_CLIFF_POINTS: u32 = 20;

/// Fruit/vegetable bonus above 80 % (not 3).
const FRUITS_VEG_BONUS_POINTS: u32 = 6;

/// Flat penalty for any non-nutritive sweetener in a beverage.
pub(crate) const SWEETENER_POINTS: u32 = 4;

/// Index of the first breakpoint `value` does not exceed, capped at the
/// table length.
#[allow(clippy::cast_possible_truncation)]
fn step_points(value: f64, breakpoints: &[f64]) -> u32 {
    breakpoints
        .iter()
        .position(|b| value <= *b)
        .unwrap_or(breakpoints.len()) as u32
}

/// Energy points (0-10); beverages and food use different tables.
#[must_use]
pub fn energy_points(energy_kj: f64, is_beverage: bool) -> u32 {
    if is_beverage {
        step_points(energy_kj, &ENERGY_BEVERAGE_KJ)
    } else {
        step_points(energy_kj, &ENERGY_FOOD_KJ)
    }
}

/// Sugar points (0-10); beverages and food use different tables.
#[must_use]
pub fn sugar_points(sugars_g: f64, is_beverage: bool) -> u32 {
    if is_beverage {
        step_points(sugars_g, &SUGARS_BEVERAGE_G)
    } else {
        step_points(sugars_g, &SUGARS_FOOD_G)
    }
}

/// Saturated fat points (0-10).
#[must_use]
pub fn saturated_fat_points(saturated_fat_g: f64) -> u32 {
    step_points(saturated_fat_g, &SATURATED_FAT_G)
}

/// Salt points: 0-9 over the table, 20 above 2.0 g.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn salt_points(salt_g: f64) -> u32 {
    match SALT_G.iter().position(|b| salt_g <= *b) {
        Some(i) => i as u32,
        None => SALT_CLIFF_POINTS,
    }
}

/// Protein points (0-7).
#[must_use]
pub fn protein_points(protein_g: f64) -> u32 {
    step_points(protein_g, &PROTEIN_G)
}

/// Fiber points (0-5).
#[must_use]
pub fn fiber_points(fiber_g: f64) -> u32 {
    step_points(fiber_g, &FIBER_G)
}

/// Fruit/vegetable/legume points: 0,1,2 over the table, 6 above 80 %.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn fruits_veg_points(fruits_veg_percent: f64) -> u32 {
    match FRUITS_VEG_PERCENT.iter().position(|b| fruits_veg_percent <= *b) {
        Some(i) => i as u32,
        None => FRUITS_VEG_BONUS_POINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_tables_diverge() {
        // 200 kJ is nothing for food but most of the beverage range
        assert_eq!(energy_points(200.0, false), 0);
        assert_eq!(energy_points(200.0, true), 7);
    }

    #[test]
    fn test_energy_food_steps() {
        assert_eq!(energy_points(0.0, false), 0);
        assert_eq!(energy_points(335.0, false), 0);
        assert_eq!(energy_points(335.1, false), 1);
        assert_eq!(energy_points(3350.0, false), 9);
        assert_eq!(energy_points(3351.0, false), 10);
    }

    #[test]
    fn test_energy_beverage_steps() {
        assert_eq!(energy_points(0.0, true), 0);
        assert_eq!(energy_points(0.1, true), 1);
        assert_eq!(energy_points(30.0, true), 1);
        assert_eq!(energy_points(270.0, true), 9);
        assert_eq!(energy_points(271.0, true), 10);
    }

    #[test]
    fn test_sugar_tables() {
        assert_eq!(sugar_points(4.5, false), 0);
        assert_eq!(sugar_points(4.5, true), 3);
        assert_eq!(sugar_points(46.0, false), 10);
        assert_eq!(sugar_points(13.6, true), 10);
        assert_eq!(sugar_points(0.0, true), 0);
    }

    #[test]
    fn test_saturated_fat_steps() {
        assert_eq!(saturated_fat_points(1.0), 0);
        assert_eq!(saturated_fat_points(1.5), 1);
        assert_eq!(saturated_fat_points(10.0), 9);
        assert_eq!(saturated_fat_points(10.5), 10);
    }

    #[test]
    fn test_salt_cliff() {
        assert_eq!(salt_points(0.2), 0);
        assert_eq!(salt_points(2.0), 9);
        // The maximum penalty jumps to 20, not 10
        assert_eq!(salt_points(2.01), 20);
    }

    #[test]
    fn test_protein_steps() {
        assert_eq!(protein_points(1.6), 0);
        assert_eq!(protein_points(11.2), 6);
        assert_eq!(protein_points(11.3), 7);
    }

    #[test]
    fn test_fiber_steps() {
        assert_eq!(fiber_points(0.9), 0);
        assert_eq!(fiber_points(4.7), 4);
        assert_eq!(fiber_points(4.8), 5);
    }

    #[test]
    fn test_fruits_veg_bonus_cliff() {
        assert_eq!(fruits_veg_points(40.0), 0);
        assert_eq!(fruits_veg_points(60.0), 1);
        assert_eq!(fruits_veg_points(80.0), 2);
        // The bonus jumps to 6, not 3
        assert_eq!(fruits_veg_points(80.01), 6);
    }
}
