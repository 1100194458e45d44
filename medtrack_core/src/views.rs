//! Derived read-only views over the registry: low-stock detection and
//! name search. Both are pure single-pass filters recomputed on request.

use crate::{AppState, Medication};

impl AppState {
    /// Medications at or below the stock threshold, in registry order
    pub fn low_stock(&self, threshold: u32) -> Vec<&Medication> {
        self.medications
            .iter()
            .filter(|med| med.stock <= threshold)
            .collect()
    }

    /// Case-insensitive substring search on medication name
    ///
    /// An empty (or whitespace-only) term short-circuits to the full
    /// registry rather than matching everything through the filter.
    pub fn search(&self, term: &str) -> Vec<&Medication> {
        let term = term.trim();
        if term.is_empty() {
            return self.medications.iter().collect();
        }

        let needle = term.to_lowercase();
        self.medications
            .iter()
            .filter(|med| med.name.to_lowercase().contains(&needle))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, IntakePeriod, NewMedication};

    fn med(name: &str, stock: u32) -> NewMedication {
        NewMedication {
            name: name.into(),
            dosage: "1 tablet".into(),
            stock,
            intake_times: vec![IntakePeriod::Morning],
            notes: String::new(),
            category: Category::Prescription,
            image: None,
        }
    }

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin", 3)).unwrap();
        state.add_medication(med("Ibuprofen", 20)).unwrap();
        state.add_medication(med("Vitamin D", 5)).unwrap();
        state
    }

    #[test]
    fn test_low_stock_filters_by_threshold() {
        let state = sample_state();

        let low = state.low_stock(5);
        let names: Vec<_> = low.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Aspirin", "Vitamin D"]);
    }

    #[test]
    fn test_low_stock_preserves_registry_order() {
        let state = sample_state();

        let low = state.low_stock(100);
        let names: Vec<_> = low.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Aspirin", "Ibuprofen", "Vitamin D"]);
    }

    #[test]
    fn test_low_stock_threshold_is_inclusive() {
        let state = sample_state();

        let low = state.low_stock(3);
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Aspirin");
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let state = sample_state();

        let hits = state.search("VITA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Vitamin D");

        let hits = state.search("i");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_search_empty_term_returns_full_registry() {
        let state = sample_state();

        assert_eq!(state.search("").len(), 3);
        assert_eq!(state.search("   ").len(), 3);
    }

    #[test]
    fn test_search_no_match() {
        let state = sample_state();
        assert!(state.search("zzz").is_empty());
    }
}
