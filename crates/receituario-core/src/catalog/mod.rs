//! Static reference data: medication index, specialties, calculators.
//!
//! Pure immutable lookup tables compiled into the binary, plus the
//! substring search used by the autocomplete fields.

mod calculators;
mod medications;
mod specialties;

pub use calculators::*;
pub use medications::*;
pub use specialties::*;

/// Maximum number of search results returned.
const SEARCH_LIMIT: usize = 10;

/// Queries shorter than this return nothing.
const MIN_QUERY_LEN: usize = 3;

/// Case-insensitive substring search over the medication index.
///
/// Matches against both the commercial product name and the active
/// ingredient. Results keep catalog order; no ranking is applied.
pub fn search_medications(query: &str) -> Vec<&'static MedicationEntry> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    MEDICATIONS
        .iter()
        .filter(|med| {
            med.product_name.to_lowercase().contains(&needle)
                || med.active_ingredient.to_lowercase().contains(&needle)
        })
        .take(SEARCH_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_query_returns_empty() {
        assert!(search_medications("").is_empty());
        assert!(search_medications("lo").is_empty());
    }

    #[test]
    fn test_search_matches_product_name() {
        let results = search_medications("Losartec");
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .all(|m| m.product_name.to_lowercase().contains("losartec")));
    }

    #[test]
    fn test_search_matches_active_ingredient() {
        let results = search_medications("amoxicilina");
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .any(|m| m.active_ingredient.to_lowercase().contains("amoxicilina")));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let lower = search_medications("dipirona");
        let upper = search_medications("DIPIRONA");
        assert_eq!(lower.len(), upper.len());
        assert!(!lower.is_empty());
    }

    #[test]
    fn test_search_caps_at_ten_results() {
        // Single-letter-heavy fragment present in many entries.
        let results = search_medications("ina");
        assert!(results.len() <= 10);
    }

    #[test]
    fn test_search_preserves_catalog_order() {
        let results = search_medications("ina");
        let positions: Vec<usize> = results
            .iter()
            .map(|r| {
                MEDICATIONS
                    .iter()
                    .position(|m| m.product_name == r.product_name)
                    .unwrap()
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(search_medications("zzzzzz").is_empty());
    }
}
