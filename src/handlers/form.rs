use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::errors::AppError;
use crate::models::employee::{join_profile_colors, ProfileColor};
use crate::view::form::{FormState, TextField};
use crate::view::input::Key;

/// `cursor` is the caret position in the displayed field value.
#[derive(Deserialize)]
pub struct KeyPress {
    field: TextField,
    key: String,
    cursor: Option<usize>,
}

#[derive(Deserialize)]
pub struct TextEdit {
    field: TextField,
    value: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TextFieldsResponse {
    accepted: bool,
    first_name: String,
    last_name: String,
    full_name: String,
    gross_salary: String,
    cursor: usize,
}

impl TextFieldsResponse {
    fn new(form: &FormState, field: TextField, accepted: bool) -> Self {
        Self {
            accepted,
            first_name: form.first_name().to_string(),
            last_name: form.last_name().to_string(),
            full_name: form.full_name(),
            gross_salary: form.gross_salary_display(),
            cursor: form.display_cursor(field),
        }
    }
}

#[derive(Deserialize)]
pub struct ColorToggle {
    color: String,
    checked: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ColorResponse {
    profile_color: Option<String>,
    button_class: String,
}

pub async fn press_key(
    state: web::Data<AppState>,
    press: web::Json<KeyPress>,
) -> Result<HttpResponse, AppError> {
    let mut view = state.view()?;
    let accepted = view.press_key(press.field, &Key::from_name(&press.key), press.cursor);

    Ok(HttpResponse::Ok().json(TextFieldsResponse::new(view.form(), press.field, accepted)))
}

pub async fn replace_text(
    state: web::Data<AppState>,
    edit: web::Json<TextEdit>,
) -> Result<HttpResponse, AppError> {
    let mut view = state.view()?;
    view.replace_text(edit.field, &edit.value);

    Ok(HttpResponse::Ok().json(TextFieldsResponse::new(view.form(), edit.field, true)))
}

pub async fn toggle_color(
    state: web::Data<AppState>,
    toggle: web::Json<ColorToggle>,
) -> Result<HttpResponse, AppError> {
    let color = ProfileColor::parse(&toggle.color)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown profile colour {:?}", toggle.color)))?;

    let mut view = state.view()?;
    view.toggle_color(color, toggle.checked);

    Ok(HttpResponse::Ok().json(ColorResponse {
        profile_color: join_profile_colors(view.form().profile_colors()),
        button_class: view.submit_button_class(),
    }))
}
