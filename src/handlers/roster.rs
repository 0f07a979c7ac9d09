use actix_web::{web, HttpResponse};
use log::debug;

use super::{redirect_home, AppState};
use crate::errors::AppError;
use crate::view::render::render_page;

const ROSTER_SCRIPT: &str = include_str!("../../static/roster.js");

pub async fn show_roster(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let html = render_page(&*state.view()?);
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

pub async fn roster_script() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/javascript; charset=utf-8")
        .body(ROSTER_SCRIPT)
}

pub async fn open_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.view()?.open_form();
    Ok(redirect_home())
}

pub async fn cancel_form(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.view()?.cancel();
    debug!("Form cancelled");
    Ok(redirect_home())
}

pub async fn hover_row(
    state: web::Data<AppState>,
    index: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let index = index.into_inner();
    if !state.view()?.hover(index) {
        return Err(AppError::NotFound(format!("No employee at row {}", index)));
    }
    Ok(HttpResponse::NoContent().finish())
}

pub async fn clear_hover(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    state.view()?.unhover();
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use crate::handlers::routes;
    use crate::handlers::tests::loaded_state;
    use crate::view::roster::tests::{stored, FakeStore};
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use std::sync::Arc;

    #[actix_web::test]
    async fn roster_page_lists_loaded_employees() {
        let store = Arc::new(FakeStore::with_roster(vec![stored(1, "Bo", "Kim", Some("Red"))]));
        let state = loaded_state(store).await;
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("<td>Kim</td>"));
        assert!(html.contains("<td>Red</td>"));
        assert!(!html.contains("id=\"employeeForm\""));
    }

    #[actix_web::test]
    async fn page_script_is_served() {
        let state = loaded_state(Arc::new(FakeStore::with_roster(Vec::new()))).await;
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/static/roster.js").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/javascript; charset=utf-8"
        );
        let body = test::read_body(resp).await;
        let script = std::str::from_utf8(&body).unwrap();
        assert!(script.contains("/form/key"));
        assert!(script.contains("selectionStart"));
    }

    #[actix_web::test]
    async fn open_then_cancel_toggles_the_form() {
        let state = loaded_state(Arc::new(FakeStore::with_roster(Vec::new()))).await;
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::post().uri("/form/open").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(state.view().unwrap().is_form_visible());

        let resp = test::call_service(&app, test::TestRequest::post().uri("/form/cancel").to_request()).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert!(!state.view().unwrap().is_form_visible());
    }

    #[actix_web::test]
    async fn hover_marks_row_and_rejects_unknown_index() {
        let store = Arc::new(FakeStore::with_roster(vec![stored(1, "Bo", "Kim", None)]));
        let state = loaded_state(store).await;
        let app = test::init_service(App::new().app_data(state.clone()).configure(routes)).await;

        let resp = test::call_service(&app, test::TestRequest::post().uri("/employees/0/hover").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(state.view().unwrap().is_highlighted(0));

        let resp = test::call_service(&app, test::TestRequest::post().uri("/employees/3/hover").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = test::call_service(&app, test::TestRequest::delete().uri("/hover").to_request()).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(!state.view().unwrap().is_highlighted(0));
    }
}
