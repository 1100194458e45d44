//! Medication registry operations: add and in-place edit.
//!
//! The registry is a plain append-ordered list. There is no delete
//! operation and duplicate names are permitted.

use crate::{AppState, Error, Medication, MedicationEdit, NewMedication, Result};

impl AppState {
    /// Add a medication to the registry
    ///
    /// Validation mirrors the entry form: name and dosage must be
    /// non-empty, stock must be positive, and at least one intake time
    /// must be chosen. Violations surface as [`Error::InvalidMedication`]
    /// rather than being silently dropped.
    pub fn add_medication(&mut self, new: NewMedication) -> Result<()> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidMedication("name must not be empty".into()));
        }
        if new.dosage.trim().is_empty() {
            return Err(Error::InvalidMedication("dosage must not be empty".into()));
        }
        if new.stock == 0 {
            return Err(Error::InvalidMedication("stock must be positive".into()));
        }
        if new.intake_times.is_empty() {
            return Err(Error::InvalidMedication(
                "at least one intake time is required".into(),
            ));
        }

        tracing::debug!("Adding medication '{}'", new.name);

        self.medications.push(Medication {
            name: new.name,
            dosage: new.dosage,
            stock: new.stock,
            intake_times: new.intake_times,
            last_taken: None,
            notes: new.notes,
            category: new.category,
            image: new.image,
        });

        Ok(())
    }

    /// Overwrite fields of the medication at `index` in place
    ///
    /// Only the fields present in the edit are touched. An out-of-range
    /// index is a bounds-checked failure, not undefined behavior.
    pub fn edit_medication(&mut self, index: usize, edit: MedicationEdit) -> Result<()> {
        let len = self.medications.len();
        let med = self
            .medications
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;

        if let Some(dosage) = edit.dosage {
            med.dosage = dosage;
        }
        if let Some(notes) = edit.notes {
            med.notes = notes;
        }
        if let Some(stock) = edit.stock {
            med.stock = stock;
        }

        tracing::debug!("Edited medication '{}' at index {}", med.name, index);
        Ok(())
    }
}
