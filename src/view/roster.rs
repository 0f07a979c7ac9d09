use log::{debug, info, warn};

use super::form::{FormState, TextField};
use super::input::Key;
use crate::models::employee::{Employee, NewEmployee, ProfileColor};
use crate::store::{EmployeeStore, StoreError};

/// Everything the page shows. Rows are addressed by their index in the
/// roster, which only ever grows at the end.
#[derive(Debug, Default)]
pub struct RosterView {
    roster: Vec<Employee>,
    selected: Option<usize>,
    hovered: Option<usize>,
    form_visible: bool,
    form: FormState,
    theme: Option<ProfileColor>,
}

impl RosterView {
    pub fn new() -> Self {
        Self::default()
    }

    // A failed list leaves the roster empty.
    pub async fn load(&mut self, store: &dyn EmployeeStore) {
        self.roster = match store.list_employees().await {
            Ok(employees) => {
                info!("Loaded {} employees", employees.len());
                employees
            }
            Err(err) => {
                warn!("Error fetching employees: {}", err);
                Vec::new()
            }
        };
        self.selected = None;
        self.hovered = None;
    }

    pub fn roster(&self) -> &[Employee] {
        &self.roster
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn is_form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        self.hovered == Some(index) || self.is_selected(index)
    }

    /// Selects a row and opens the form pre-filled with it. Returns `false`
    /// for an index outside the roster.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(employee) = self.roster.get(index) else {
            return false;
        };
        self.form.fill_from(employee);
        self.selected = Some(index);
        self.form_visible = true;
        debug!("Selected row {}", index);
        true
    }

    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.roster.len() {
            return false;
        }
        self.hovered = Some(index);
        true
    }

    pub fn unhover(&mut self) {
        self.hovered = None;
    }

    pub fn open_form(&mut self) {
        self.form_visible = true;
    }

    pub fn cancel(&mut self) {
        self.form.reset();
        self.form_visible = false;
    }

    pub fn press_key(&mut self, field: TextField, key: &Key, cursor: Option<usize>) -> bool {
        self.form.press_at(field, key, cursor)
    }

    pub fn replace_text(&mut self, field: TextField, raw: &str) {
        self.form.set_text(field, raw);
    }

    /// Checking a colour makes it the theme. Unchecking leaves the theme
    /// where it was, even when it names the colour just unchecked.
    pub fn toggle_color(&mut self, color: ProfileColor, checked: bool) {
        self.form.set_color(color, checked);
        if checked {
            self.theme = Some(color);
        }
    }

    pub fn submit_button_class(&self) -> String {
        match self.theme {
            Some(color) => format!("btn btn-{}", color.as_str().to_lowercase()),
            None => "btn btn-primary".to_string(),
        }
    }

    pub fn take_submission<I, K, V>(&mut self, pairs: I) -> NewEmployee
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.form.apply_submission(pairs);
        self.form.candidate()
    }

    pub fn discard_submission(&mut self, reason: &str) {
        warn!("Discarding employee submission: {}", reason);
        self.form.reset();
        self.form_visible = false;
    }

    /// Completes a submit once the store has answered. The form is reset
    /// and hidden either way; only a stored record joins the roster.
    pub fn finish_submit(&mut self, result: Result<Employee, StoreError>) {
        match result {
            Ok(stored) => {
                info!("Saved employee {:?}", stored.id);
                self.roster.push(stored);
            }
            Err(err) => warn!("Error saving employee: {}", err),
        }
        self.form.reset();
        self.form_visible = false;
    }
}
