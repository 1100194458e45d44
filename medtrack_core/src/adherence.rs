//! Adherence-rate computation.
//!
//! The rate is `100 * |intake_history| / (|medications| * |reminders|)`.
//! It does not map individual intake events to individual reminders, so
//! it is a coarse ratio rather than a true per-reminder completion
//! percentage; that is the documented behavior and is kept as-is.

use crate::AppState;

impl AppState {
    /// Rough adherence percentage, or `None` when there is no data
    ///
    /// Returns `None` when either the registry or the reminder list is
    /// empty (the expected-dose denominator would be zero).
    pub fn adherence_rate(&self) -> Option<f64> {
        let expected = self.medications.len() * self.reminders.len();
        if expected == 0 {
            return None;
        }

        Some(self.intake_history.len() as f64 / expected as f64 * 100.0)
    }
}
