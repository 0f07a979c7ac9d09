pub mod employee;
pub mod form;
pub mod roster;

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::errors::AppError;
use crate::store::EmployeeStore;
use crate::view::roster::RosterView;

/// Shared by every worker. The view lock is never held across a store call.
pub struct AppState {
    view: Mutex<RosterView>,
    pub store: Arc<dyn EmployeeStore>,
}

impl AppState {
    pub fn new(view: RosterView, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            view: Mutex::new(view),
            store,
        }
    }

    pub fn view(&self) -> Result<MutexGuard<'_, RosterView>, AppError> {
        self.view
            .lock()
            .map_err(|_| AppError::InternalServerError("Roster state is unavailable".to_string()))
    }
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(roster::show_roster)),
    )
    .service(
        web::resource("/static/roster.js")
            .route(web::get().to(roster::roster_script)),
    )
    .service(
        web::resource("/form/open")
            .route(web::post().to(roster::open_form)),
    )
    .service(
        web::resource("/form/cancel")
            .route(web::post().to(roster::cancel_form)),
    )
    .service(
        web::resource("/form/key")
            .route(web::post().to(form::press_key)),
    )
    .service(
        web::resource("/form/text")
            .route(web::post().to(form::replace_text)),
    )
    .service(
        web::resource("/form/color")
            .route(web::post().to(form::toggle_color)),
    )
    .service(
        web::resource("/employees")
            .route(web::post().to(employee::create_employee)),
    )
    .service(
        web::resource("/employees/{index}/select")
            .route(web::post().to(employee::select_employee)),
    )
    .service(
        web::resource("/employees/{index}/hover")
            .route(web::post().to(roster::hover_row)),
    )
    .service(
        web::resource("/hover")
            .route(web::delete().to(roster::clear_hover)),
    );
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::view::roster::tests::FakeStore;

    /// Application state after the initial load from `store`.
    pub(crate) async fn loaded_state(store: Arc<FakeStore>) -> web::Data<AppState> {
        let mut view = RosterView::new();
        view.load(store.as_ref()).await;
        web::Data::new(AppState::new(view, store))
    }
}
