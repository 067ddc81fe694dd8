//! Legacy 0-100 health score and display helpers.
//!
//! The single-number score is a lossy, display-oriented simplification of
//! the letter grade. It carries no information beyond the grade itself and
//! must not be treated as an independent measurement.

use crate::nutriscore::Grade;

/// Map a letter grade onto the legacy 0-100 scale.
///
/// Fixed mapping, independent of the numeric Nutri-Score value behind the
/// grade: two grade-C products always score 60, whatever their point
/// totals were.
#[must_use]
pub fn health_score(grade: Grade) -> u8 {
    match grade {
        Grade::A => 90,
        Grade::B => 75,
        Grade::C => 60,
        Grade::D => 40,
        Grade::E => 20,
    }
}

/// Display color for a 0-100 health score.
#[must_use]
pub fn rating_color(score: u8) -> &'static str {
    if score >= 80 {
        "#2E7D32" // Green
    } else if score >= 60 {
        "#FFA000" // Orange
    } else {
        "#C62828" // Red
    }
}

/// Descriptive label for a 0-100 health score.
#[must_use]
pub fn rating_text(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent"
    } else if score >= 60 {
        "Good"
    } else {
        "Poor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_mapping_is_fixed() {
        assert_eq!(health_score(Grade::A), 90);
        assert_eq!(health_score(Grade::B), 75);
        assert_eq!(health_score(Grade::C), 60);
        assert_eq!(health_score(Grade::D), 40);
        assert_eq!(health_score(Grade::E), 20);
    }

    #[test]
    fn test_rating_buckets() {
        assert_eq!(rating_color(90), "#2E7D32");
        assert_eq!(rating_text(90), "Excellent");
        assert_eq!(rating_color(60), "#FFA000");
        assert_eq!(rating_text(60), "Good");
        assert_eq!(rating_color(40), "#C62828");
        assert_eq!(rating_text(40), "Poor");
    }
}
