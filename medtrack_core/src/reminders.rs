//! Reminder engine: bulk creation, due evaluation, acknowledgement.
//!
//! Reminders carry a same-day wall-clock time. A reminder whose time has
//! passed stays due until acknowledged; there is no "already fired today"
//! memory and no rescheduling for the next day.

use crate::{AppState, Error, Reminder, Result};
use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

impl AppState {
    /// Create one reminder per registered medication at the given time
    ///
    /// All created reminders start unacknowledged. No dedup: calling this
    /// twice doubles up the reminders for every medication. Returns the
    /// number of reminders created.
    pub fn set_reminders(&mut self, time: NaiveTime) -> usize {
        let created = self.medications.len();
        for med in &self.medications {
            self.reminders.push(Reminder {
                id: Uuid::new_v4(),
                name: med.name.clone(),
                time,
                completed: false,
            });
        }

        tracing::info!("Set {} reminders at {}", created, time);
        created
    }

    /// Reminders whose time has passed and that are not yet acknowledged
    pub fn due_reminders(&self, now: NaiveTime) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|r| !r.completed && r.time <= now)
            .collect()
    }

    /// Acknowledge a reminder, marking its medication as taken
    ///
    /// Marks the reminder completed and logs an intake event for its
    /// medication. Idempotent: acknowledging an already-completed
    /// reminder is a no-op that returns `false` and logs no duplicate
    /// intake. An unknown id is [`Error::UnknownReminder`].
    pub fn acknowledge(&mut self, id: Uuid, now: DateTime<Utc>) -> Result<bool> {
        let reminder = self
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(Error::UnknownReminder(id))?;

        if reminder.completed {
            return Ok(false);
        }

        reminder.completed = true;
        let name = reminder.name.clone();
        self.log_intake(&name, now);

        tracing::info!("Acknowledged reminder for '{}'", name);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, IntakePeriod, NewMedication};

    fn med(name: &str) -> NewMedication {
        NewMedication {
            name: name.into(),
            dosage: "1 tablet".into(),
            stock: 10,
            intake_times: vec![IntakePeriod::Morning],
            notes: String::new(),
            category: Category::Prescription,
            image: None,
        }
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_set_reminders_one_per_medication() {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin")).unwrap();
        state.add_medication(med("Ibuprofen")).unwrap();

        let created = state.set_reminders(t(8, 0));
        assert_eq!(created, 2);
        assert_eq!(state.reminders.len(), 2);
        assert!(state.reminders.iter().all(|r| !r.completed));
        assert!(state.reminders.iter().all(|r| r.time == t(8, 0)));
    }

    #[test]
    fn test_set_reminders_twice_duplicates() {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin")).unwrap();

        state.set_reminders(t(8, 0));
        state.set_reminders(t(8, 0));
        assert_eq!(state.reminders.len(), 2);
    }

    #[test]
    fn test_set_reminders_with_empty_registry() {
        let mut state = AppState::default();
        assert_eq!(state.set_reminders(t(8, 0)), 0);
        assert!(state.reminders.is_empty());
    }

    #[test]
    fn test_due_reminders_time_passed() {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin")).unwrap();
        state.set_reminders(t(8, 0));

        assert!(state.due_reminders(t(7, 59)).is_empty());
        assert_eq!(state.due_reminders(t(8, 0)).len(), 1);
        // Stays due indefinitely once its time passes
        assert_eq!(state.due_reminders(t(23, 59)).len(), 1);
    }

    #[test]
    fn test_acknowledge_completes_and_logs_intake() {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin")).unwrap();
        state.set_reminders(t(8, 0));

        let id = state.reminders[0].id;
        let taken = state.acknowledge(id, Utc::now()).unwrap();

        assert!(taken);
        assert!(state.reminders[0].completed);
        assert_eq!(state.intake_history.len(), 1);
        assert_eq!(state.intake_history[0].name, "Aspirin");
        assert!(state.medications[0].last_taken.is_some());
        assert!(state.due_reminders(t(12, 0)).is_empty());
    }

    #[test]
    fn test_acknowledge_is_idempotent() {
        let mut state = AppState::default();
        state.add_medication(med("Aspirin")).unwrap();
        state.set_reminders(t(8, 0));

        let id = state.reminders[0].id;
        assert!(state.acknowledge(id, Utc::now()).unwrap());
        assert!(!state.acknowledge(id, Utc::now()).unwrap());

        // No duplicate intake event from the second acknowledge
        assert_eq!(state.intake_history.len(), 1);
        assert!(state.reminders[0].completed);
    }

    #[test]
    fn test_acknowledge_unknown_reminder() {
        let mut state = AppState::default();
        let err = state.acknowledge(Uuid::new_v4(), Utc::now()).unwrap_err();
        assert!(matches!(err, Error::UnknownReminder(_)));
    }
}
