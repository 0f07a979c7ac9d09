use serde::Deserialize;
use std::collections::BTreeSet;

use super::input::{
    format_salary, salary_cursor_to_display, salary_cursor_to_raw, Key, Mask, TextInput,
};
use crate::models::employee::{full_name, Employee, Gender, NewEmployee, ProfileColor, Salutation};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TextField {
    FirstName,
    LastName,
    GrossSalary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    first_name: TextInput,
    last_name: TextInput,
    gross_salary: TextInput,
    salutation: Salutation,
    gender: Option<Gender>,
    profile_colors: BTreeSet<ProfileColor>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: TextInput::new(Mask::Letters),
            last_name: TextInput::new(Mask::Letters),
            gross_salary: TextInput::new(Mask::Digits),
            salutation: Salutation::default(),
            gender: None,
            profile_colors: BTreeSet::new(),
        }
    }
}

impl FormState {
    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    fn input_mut(&mut self, field: TextField) -> &mut TextInput {
        match field {
            TextField::FirstName => &mut self.first_name,
            TextField::LastName => &mut self.last_name,
            TextField::GrossSalary => &mut self.gross_salary,
        }
    }

    /// Returns `false` if the field's mask rejected the key.
    pub fn press(&mut self, field: TextField, key: &Key) -> bool {
        self.input_mut(field).press(key)
    }

    /// Like [`FormState::press`], with the caret first moved to where the
    /// browser reports it. `display_cursor` counts characters of the
    /// displayed text, so for the salary it includes the group spaces.
    pub fn press_at(&mut self, field: TextField, key: &Key, display_cursor: Option<usize>) -> bool {
        if let Some(display_cursor) = display_cursor {
            let raw = match field {
                TextField::GrossSalary => {
                    salary_cursor_to_raw(&self.gross_salary_display(), display_cursor)
                }
                _ => display_cursor,
            };
            self.input_mut(field).set_cursor(raw);
        }
        self.press(field, key)
    }

    pub fn display_cursor(&self, field: TextField) -> usize {
        match field {
            TextField::FirstName => self.first_name.cursor(),
            TextField::LastName => self.last_name.cursor(),
            TextField::GrossSalary => {
                salary_cursor_to_display(self.gross_salary(), self.gross_salary.cursor())
            }
        }
    }

    pub fn set_text(&mut self, field: TextField, raw: &str) {
        self.input_mut(field).set(raw);
    }

    pub fn first_name(&self) -> &str {
        self.first_name.value()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.value()
    }

    pub fn full_name(&self) -> String {
        full_name(self.first_name(), self.last_name())
    }

    pub fn gross_salary(&self) -> &str {
        self.gross_salary.value()
    }

    pub fn gross_salary_display(&self) -> String {
        format_salary(self.gross_salary())
    }

    pub fn salutation(&self) -> Salutation {
        self.salutation
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn profile_colors(&self) -> &BTreeSet<ProfileColor> {
        &self.profile_colors
    }

    pub fn is_checked(&self, color: ProfileColor) -> bool {
        self.profile_colors.contains(&color)
    }

    pub fn set_color(&mut self, color: ProfileColor, checked: bool) {
        if checked {
            self.profile_colors.insert(color);
        } else {
            self.profile_colors.remove(&color);
        }
    }

    /// Pre-fills every field from a stored record. The stored full name is
    /// ignored; it is re-derived from the names.
    pub fn fill_from(&mut self, employee: &Employee) {
        self.first_name.set(&employee.first_name);
        self.last_name.set(&employee.last_name);
        self.gross_salary.set(&employee.gross_salary);
        self.salutation = employee.salutation;
        self.gender = Some(employee.gender);
        self.profile_colors = employee.profile_colors();
    }

    /// Overwrites the fields with a posted form. Checkboxes arrive as one
    /// `profileColor` pair per checked box, so the colour set is rebuilt
    /// from scratch. Unknown keys and values are ignored.
    pub fn apply_submission<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.profile_colors.clear();
        self.gender = None;
        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "firstName" => self.first_name.set(value),
                "lastName" => self.last_name.set(value),
                "grossSalary" => self.gross_salary.set(value),
                "salutation" => {
                    if let Some(salutation) = Salutation::parse(value) {
                        self.salutation = salutation;
                    }
                }
                "gender" => self.gender = Gender::parse(value),
                "profileColor" => {
                    if let Some(color) = ProfileColor::parse(value) {
                        self.profile_colors.insert(color);
                    }
                }
                _ => {}
            }
        }
    }

    pub fn candidate(&self) -> NewEmployee {
        NewEmployee {
            first_name: self.first_name().to_string(),
            last_name: self.last_name().to_string(),
            salutation: self.salutation,
            gender: self.gender,
            gross_salary: self.gross_salary().to_string(),
            profile_colors: self.profile_colors.clone(),
        }
    }
}
