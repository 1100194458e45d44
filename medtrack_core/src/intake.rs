//! Intake logging and the history view.
//!
//! Intake events are append-only. The history view splits each event's
//! timestamp into separate date and time-of-day columns for display.

use crate::{AppState, IntakeEvent};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// One row of the intake history view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntakeRecord {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl AppState {
    /// Record that a dose of `name` was taken at `taken_at`
    ///
    /// Pure append; the name is not checked against the registry. The
    /// first medication with a matching name (if any) gets its
    /// `last_taken` stamp updated.
    pub fn log_intake(&mut self, name: &str, taken_at: DateTime<Utc>) {
        self.intake_history.push(IntakeEvent {
            name: name.to_string(),
            taken_at,
        });

        if let Some(med) = self.medications.iter_mut().find(|m| m.name == name) {
            med.last_taken = Some(taken_at);
        }

        tracing::debug!("Logged intake of '{}' at {}", name, taken_at);
    }

    /// The intake history with timestamps decomposed into date and
    /// time-of-day, in append order
    pub fn intake_records(&self) -> Vec<IntakeRecord> {
        self.intake_history
            .iter()
            .map(|event| {
                let naive = event.taken_at.naive_utc();
                IntakeRecord {
                    name: event.name.clone(),
                    date: naive.date(),
                    time: naive.time(),
                }
            })
            .collect()
    }
}
