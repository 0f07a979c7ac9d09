mod errors;
mod handlers;
mod models;
mod store;
mod utils;
mod view;

use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use handlers::AppState;
use store::http::HttpEmployeeStore;
use utils::config::Config;
use view::roster::RosterView;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let store = Arc::new(HttpEmployeeStore::new(config.store_base_url.as_str()));

    // The roster is fetched once, before the first page is served.
    let mut view = RosterView::new();
    view.load(store.as_ref()).await;

    let state = web::Data::new(AppState::new(view, store));

    info!(
        "Starting server at {} (store: {})",
        config.bind_address, config.store_base_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(handlers::routes)
    })
    .bind(config.bind_address.as_str())?
    .run()
    .await
}
