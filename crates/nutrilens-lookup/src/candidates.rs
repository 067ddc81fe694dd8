//! Barcode candidate generation.
//!
//! Providers disagree on how they store the same code: some keep UPC-A as
//! 12 digits, some pad it to EAN-13 with a leading zero, and GTIN-14 data
//! shows up zero-padded as well. Generating the common variants up front
//! improves the hit rate without any provider-specific knowledge.

/// Generate the ordered list of barcode variants worth querying.
///
/// The list is never empty, starts with the digit-stripped original, and
/// contains no duplicates (first-seen order is preserved). An input with
/// no digits yields a single empty candidate, which no provider will match.
#[must_use]
pub fn generate_candidates(raw: &str) -> Vec<String> {
    let s: String = raw.chars().filter(char::is_ascii_digit).collect();
    let mut candidates = vec![s.clone()];

    // UPC-A is often stored as EAN-13 with a leading zero
    if s.len() == 12 {
        push_unique(&mut candidates, &format!("0{s}"));
    }

    // EAN-13 starting with zero may be stored as plain UPC-12
    if s.len() == 13 && s.starts_with('0') {
        push_unique(&mut candidates, &s[1..]);
    }

    // GTIN-14 padding: trim one and two leading zeros
    if s.len() == 14 && s.starts_with('0') {
        push_unique(&mut candidates, &s[1..]);
        if s.starts_with("00") {
            push_unique(&mut candidates, &s[2..]);
        }
    }

    // Fully stripped form for any leading-zero variant
    if s.starts_with('0') {
        push_unique(&mut candidates, s.trim_start_matches('0'));
    }

    candidates
}

/// Append a candidate unless it is empty or already present.
fn push_unique(candidates: &mut Vec<String>, candidate: &str) {
    if !candidate.is_empty() && !candidates.iter().any(|c| c == candidate) {
        candidates.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_always_first() {
        let candidates = generate_candidates("8901030372165");
        assert_eq!(candidates[0], "8901030372165");
        assert!(!candidates.is_empty());
    }

    #[test]
    fn test_strips_non_digits() {
        let candidates = generate_candidates(" 890-1030 372165\n");
        assert_eq!(candidates[0], "8901030372165");
    }

    #[test]
    fn test_upc_a_gains_ean13_form() {
        let candidates = generate_candidates("123456789012");
        assert_eq!(candidates, vec!["123456789012", "0123456789012"]);
    }

    #[test]
    fn test_ean13_with_leading_zero_gains_upc_form() {
        let candidates = generate_candidates("0123456789012");
        assert_eq!(candidates[0], "0123456789012");
        assert!(candidates.contains(&"123456789012".to_string()));
    }

    #[test]
    fn test_gtin14_trims_one_and_two_zeros() {
        let candidates = generate_candidates("00123456789012");
        assert_eq!(
            candidates,
            vec!["00123456789012", "0123456789012", "123456789012"]
        );
    }

    #[test]
    fn test_leading_zeros_fully_stripped() {
        let candidates = generate_candidates("00012345");
        assert_eq!(candidates[0], "00012345");
        assert_eq!(candidates.last().map(String::as_str), Some("12345"));
    }

    #[test]
    fn test_no_duplicates() {
        for raw in ["0123456789012", "00123456789012", "123456789012", "007"] {
            let candidates = generate_candidates(raw);
            for (i, a) in candidates.iter().enumerate() {
                for b in &candidates[i + 1..] {
                    assert_ne!(a, b, "duplicate candidate for input {raw}");
                }
            }
        }
    }

    #[test]
    fn test_all_zero_input_keeps_only_original() {
        let candidates = generate_candidates("0000");
        assert_eq!(candidates, vec!["0000"]);
    }

    #[test]
    fn test_empty_input_yields_single_empty_candidate() {
        let candidates = generate_candidates("no digits here");
        assert_eq!(candidates, vec![String::new()]);
    }
}
