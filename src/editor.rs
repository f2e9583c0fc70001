//! Meal Editor State
//!
//! Ordered, never-empty list of editable meal rows.

use chrono::NaiveDate;

use crate::dates::format_iso_date;
use crate::error::ValidationError;
use crate::models::{MealEntry, MealField};
use crate::api::CreateReportRequest;

/// Default rows shown on first load and after a successful submit
pub const DEFAULT_MEAL_TIMES: [&str; 4] = ["08:00 AM", "12:30 PM", "04:00 PM", "07:30 PM"];

/// A row plus a stable key for keyed rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealRow {
    pub key: u32,
    pub entry: MealEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealEditor {
    rows: Vec<MealRow>,
    next_key: u32,
}

impl Default for MealEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl MealEditor {
    pub fn new() -> Self {
        let mut editor = Self { rows: Vec::new(), next_key: 0 };
        editor.reset();
        editor
    }

    fn push(&mut self, entry: MealEntry) {
        let key = self.next_key;
        self.next_key = self.next_key.wrapping_add(1);
        self.rows.push(MealRow { key, entry });
    }

    /// Replace all rows with the four default slots (empty food)
    pub fn reset(&mut self) {
        self.rows.clear();
        for time in DEFAULT_MEAL_TIMES {
            self.push(MealEntry::new(time, ""));
        }
    }

    pub fn entries(&self) -> Vec<MealEntry> {
        self.rows.iter().map(|row| row.entry.clone()).collect()
    }

    pub fn keys(&self) -> Vec<u32> {
        self.rows.iter().map(|row| row.key).collect()
    }

    /// Current index of the row with `key`
    pub fn position(&self, key: u32) -> Option<usize> {
        self.rows.iter().position(|row| row.key == key)
    }

    pub fn entry_by_key(&self, key: u32) -> Option<&MealEntry> {
        self.rows.iter().find(|row| row.key == key).map(|row| &row.entry)
    }

    /// Out-of-range indices are ignored
    pub fn change_entry(&mut self, index: usize, field: MealField, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            match field {
                MealField::Time => row.entry.time = value.into(),
                MealField::Food => row.entry.food = value.into(),
            }
        }
    }

    pub fn add_entry(&mut self) {
        self.push(MealEntry::default());
    }

    /// Remove a row, keeping at least one
    pub fn remove_entry(&mut self, index: usize) -> Result<(), ValidationError> {
        if self.rows.len() <= 1 {
            return Err(ValidationError::LastMeal);
        }
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rows.iter().all(|row| row.entry.is_complete()) {
            Ok(())
        } else {
            Err(ValidationError::IncompleteMeal)
        }
    }

    /// Validate and build the create request for `date`
    pub fn build_request(&self, user_id: &str, date: NaiveDate) -> Result<CreateReportRequest, ValidationError> {
        self.validate()?;
        Ok(CreateReportRequest {
            user_id: user_id.to_string(),
            date: format_iso_date(date),
            meals: self.entries(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl MealEditor {
        fn from_entries(entries: Vec<MealEntry>) -> Self {
            let mut editor = Self::new();
            editor.rows.clear();
            for entry in entries {
                editor.push(entry);
            }
            editor
        }
    }

    fn template() -> Vec<MealEntry> {
        DEFAULT_MEAL_TIMES.iter().map(|t| MealEntry::new(*t, "")).collect()
    }

    #[test]
    fn test_starts_with_template() {
        let editor = MealEditor::new();
        assert_eq!(editor.entries(), template());
    }

    #[test]
    fn test_change_entry() {
        let mut editor = MealEditor::new();
        editor.change_entry(1, MealField::Food, "Salad");
        editor.change_entry(1, MealField::Time, "01:00 PM");
        assert_eq!(editor.entries()[1], MealEntry::new("01:00 PM", "Salad"));

        let before = editor.clone();
        editor.change_entry(9, MealField::Food, "ignored");
        assert_eq!(editor, before);
    }

    #[test]
    fn test_add_entry_appends_blank_row() {
        let mut editor = MealEditor::new();
        editor.add_entry();
        assert_eq!(editor.entries().len(), 5);
        assert_eq!(editor.entries()[4], MealEntry::default());
    }

    #[test]
    fn test_remove_last_entry_is_rejected() {
        let mut editor = MealEditor::from_entries(vec![MealEntry::new("08:00 AM", "")]);
        assert_eq!(editor.remove_entry(0), Err(ValidationError::LastMeal));
        assert_eq!(editor.entries().len(), 1);
        assert_eq!(editor.entries(), vec![MealEntry::new("08:00 AM", "")]);
        assert_eq!(
            editor.remove_entry(0).unwrap_err().to_string(),
            "At least one meal is required"
        );
    }

    #[test]
    fn test_remove_entry_keeps_order_and_keys() {
        let mut editor = MealEditor::new();
        let keys = editor.keys();
        editor.remove_entry(1).unwrap();
        assert_eq!(editor.entries().len(), 3);
        assert_eq!(editor.entries()[1].time, "04:00 PM");
        assert_eq!(editor.keys(), vec![keys[0], keys[2], keys[3]]);
        assert_eq!(editor.position(keys[3]), Some(2));
        assert_eq!(editor.position(keys[1]), None);
    }

    #[test]
    fn test_added_rows_get_fresh_keys() {
        let mut editor = MealEditor::new();
        editor.remove_entry(3).unwrap();
        editor.add_entry();
        let keys = editor.keys();
        let unique: std::collections::HashSet<u32> = keys.iter().copied().collect();
        assert_eq!(unique.len(), keys.len());
    }

    #[test]
    fn test_build_request_rejects_empty_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let editor = MealEditor::new();
        assert_eq!(editor.build_request("u1", date), Err(ValidationError::IncompleteMeal));

        let editor = MealEditor::from_entries(vec![MealEntry::new("", "Toast")]);
        assert_eq!(editor.build_request("u1", date), Err(ValidationError::IncompleteMeal));
    }

    #[test]
    fn test_build_request() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let editor = MealEditor::from_entries(vec![
            MealEntry::new("08:00 AM", "Oatmeal"),
            MealEntry::new("01:00 PM", "Rice and beans"),
        ]);
        let request = editor.build_request("u1", date).unwrap();
        assert_eq!(request.user_id, "u1");
        assert_eq!(request.date, "2025-01-05");
        assert_eq!(request.meals.len(), 2);
        assert_eq!(request.meals[1].food, "Rice and beans");
    }

    #[test]
    fn test_reset_restores_template_from_any_length() {
        let mut editor = MealEditor::from_entries(vec![MealEntry::new("08:00 AM", "Oatmeal")]);
        editor.reset();
        assert_eq!(editor.entries(), template());

        let mut editor = MealEditor::new();
        for _ in 0..6 {
            editor.add_entry();
        }
        editor.change_entry(0, MealField::Food, "Eggs");
        editor.reset();
        assert_eq!(editor.entries(), template());
    }
}
