use actix_web::{web, HttpResponse};
use log::debug;
use url::form_urlencoded;

use super::{redirect_home, AppState};
use crate::errors::AppError;
use crate::utils::validation::validate_payload;

/// Form submit. The body is urlencoded with one `profileColor` pair per
/// checked box. The form closes whatever happens; an invalid candidate is
/// logged and never reaches the store.
pub async fn create_employee(
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let candidate = state.view()?.take_submission(form_urlencoded::parse(&body));

    let checked = validate_payload(&candidate).and_then(|()| {
        candidate
            .into_employee()
            .ok_or_else(|| AppError::BadRequest("gender must be chosen".to_string()))
    });
    let employee = match checked {
        Ok(employee) => employee,
        Err(err) => {
            state.view()?.discard_submission(&err.to_string());
            return Ok(redirect_home());
        }
    };

    debug!("Creating employee {}", employee.full_name);
    let result = state.store.create_employee(&employee).await;
    state.view()?.finish_submit(result);

    Ok(redirect_home())
}

pub async fn select_employee(
    state: web::Data<AppState>,
    index: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = index.into_inner();
    if !state.view()?.select(index) {
        return Err(AppError::NotFound(format!("No employee at row {}", index)));
    }
    Ok(redirect_home())
}
