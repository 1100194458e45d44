//! Core domain types for the medication tracker.
//!
//! This module defines the fundamental types used throughout the system:
//! - Medications and their schedule metadata
//! - Intake events (dose-taken records)
//! - Reminders and their acknowledgement state
//! - The application state that owns all three collections

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

// ============================================================================
// Medication Types
// ============================================================================

/// Named period of the day at which a dose is scheduled
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IntakePeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl IntakePeriod {
    /// Parse a period from user text (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Some(IntakePeriod::Morning),
            "afternoon" => Some(IntakePeriod::Afternoon),
            "evening" => Some(IntakePeriod::Evening),
            "night" => Some(IntakePeriod::Night),
            _ => None,
        }
    }
}

impl fmt::Display for IntakePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntakePeriod::Morning => "Morning",
            IntakePeriod::Afternoon => "Afternoon",
            IntakePeriod::Evening => "Evening",
            IntakePeriod::Night => "Night",
        };
        f.write_str(s)
    }
}

/// Medication category
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Prescription,
    OverTheCounter,
    Vitamins,
    Others,
}

impl Category {
    /// Parse a category from user text ("otc" accepted as shorthand)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "prescription" => Some(Category::Prescription),
            "otc" | "over-the-counter" | "over the counter" => Some(Category::OverTheCounter),
            "vitamins" => Some(Category::Vitamins),
            "others" | "other" => Some(Category::Others),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Prescription => "Prescription",
            Category::OverTheCounter => "Over-the-Counter",
            Category::Vitamins => "Vitamins",
            Category::Others => "Others",
        };
        f.write_str(s)
    }
}

/// A tracked medication entry
///
/// Names are unique by convention only; the registry does not enforce
/// uniqueness and duplicate names are ambiguous for search.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub stock: u32,
    pub intake_times: Vec<IntakePeriod>,
    pub last_taken: Option<DateTime<Utc>>,
    pub notes: String,
    pub category: Category,
    pub image: Option<PathBuf>,
}

/// Input for creating a medication (last_taken always starts as None)
#[derive(Clone, Debug)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub stock: u32,
    pub intake_times: Vec<IntakePeriod>,
    pub notes: String,
    pub category: Category,
    pub image: Option<PathBuf>,
}

/// Partial update for an existing medication; None fields are left as-is
#[derive(Clone, Debug, Default)]
pub struct MedicationEdit {
    pub dosage: Option<String>,
    pub notes: Option<String>,
    pub stock: Option<u32>,
}

// ============================================================================
// Intake and Reminder Types
// ============================================================================

/// A record that a dose was taken at a specific time
///
/// The name is a loose string reference to the registry; referential
/// integrity is not enforced.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntakeEvent {
    pub name: String,
    pub taken_at: DateTime<Utc>,
}

/// A scheduled prompt to take a medication
///
/// The time is same-day wall clock; there is no midnight rollover and no
/// recurrence. Acknowledgement is terminal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub name: String,
    pub time: NaiveTime,
    pub completed: bool,
}

// ============================================================================
// Application State
// ============================================================================

/// The full in-memory state for one tracking session
///
/// All three collections start empty and live for the process lifetime;
/// there is no persistence layer behind them.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub medications: Vec<Medication>,
    pub intake_history: Vec<IntakeEvent>,
    pub reminders: Vec<Reminder>,
}
