use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{EmployeeStore, StoreError};
use crate::models::employee::Employee;

pub const DEFAULT_BASE_URL: &str = "http://localhost:1000";

/// HTTP store. Every call is a single attempt with no retry and no timeout.
pub struct HttpEmployeeStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn employees_url(&self) -> String {
        format!("{}/employees", self.base_url)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.json::<T>().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> StoreError {
    if err.is_decode() {
        StoreError::Decode(err.to_string())
    } else {
        StoreError::Transport(err.to_string())
    }
}

#[async_trait]
impl EmployeeStore for HttpEmployeeStore {
    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        let response = self
            .client
            .get(self.employees_url())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::parse_response(response).await
    }

    async fn create_employee(&self, candidate: &Employee) -> Result<Employee, StoreError> {
        let response = self
            .client
            .post(self.employees_url())
            .json(candidate)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        Self::parse_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::{Gender, Salutation};
    use actix_web::{web, App, HttpResponse, HttpServer};
    use assert_matches::assert_matches;
    use serde_json::{json, Value};
    use std::net::TcpListener;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorded {
        created: Mutex<Vec<Value>>,
    }

    async fn list(_recorded: web::Data<Recorded>) -> HttpResponse {
        HttpResponse::Ok().json(json!([
            {
                "id": 1,
                "firstName": "Ann",
                "lastName": "Lee",
                "salutation": "Ms.",
                "profileColor": "Blue,Red",
                "gender": "Female",
                "fullName": "Ann Lee",
                "grossSalary": "50000"
            }
        ]))
    }

    async fn create(recorded: web::Data<Recorded>, body: web::Json<Value>) -> HttpResponse {
        let mut stored = body.into_inner();
        recorded.created.lock().unwrap().push(stored.clone());
        stored["id"] = json!(7);
        HttpResponse::Created().json(stored)
    }

    async fn broken() -> HttpResponse {
        HttpResponse::InternalServerError().body("database is down")
    }

    /// Starts a fake remote store on an ephemeral port and returns its base URL.
    fn spawn_fake_store(recorded: web::Data<Recorded>, healthy: bool) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = HttpServer::new(move || {
            let app = App::new().app_data(recorded.clone());
            if healthy {
                app.service(
                    web::resource("/employees")
                        .route(web::get().to(list))
                        .route(web::post().to(create)),
                )
            } else {
                app.default_service(web::to(broken))
            }
        })
        .workers(1)
        .listen(listener)
        .unwrap()
        .run();
        actix_web::rt::spawn(server);
        format!("http://127.0.0.1:{}", port)
    }

    fn unused_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    fn candidate() -> Employee {
        Employee {
            id: None,
            first_name: "Bo".into(),
            last_name: "Kim".into(),
            salutation: Salutation::Mx,
            profile_color: None,
            gender: Gender::Unspecified,
            full_name: "Bo Kim".into(),
            gross_salary: "1200".into(),
        }
    }

    #[actix_web::test]
    async fn lists_employees_from_remote() {
        let base_url = spawn_fake_store(web::Data::new(Recorded::default()), true);
        let store = HttpEmployeeStore::new(&format!("{}/", base_url));

        let employees = store.list_employees().await.unwrap();

        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, Some(1));
        assert_eq!(employees[0].profile_color.as_deref(), Some("Blue,Red"));
    }

    #[actix_web::test]
    async fn create_posts_candidate_and_returns_assigned_id() {
        let recorded = web::Data::new(Recorded::default());
        let base_url = spawn_fake_store(recorded.clone(), true);
        let store = HttpEmployeeStore::new(&base_url);

        let stored = store.create_employee(&candidate()).await.unwrap();

        assert_eq!(stored.id, Some(7));
        assert_eq!(stored.first_name, "Bo");
        let created = recorded.created.lock().unwrap();
        assert_eq!(created.len(), 1);
        assert!(created[0].get("id").is_none());
        assert!(created[0].get("profileColor").is_none());
        assert_eq!(created[0]["salutation"], "Mx.");
    }

    #[actix_web::test]
    async fn server_failure_is_reported_as_status() {
        let base_url = spawn_fake_store(web::Data::new(Recorded::default()), false);
        let store = HttpEmployeeStore::new(&base_url);

        assert_matches!(
            store.list_employees().await,
            Err(StoreError::Status { status: 500, ref body }) if body == "database is down"
        );
        assert_matches!(
            store.create_employee(&candidate()).await,
            Err(StoreError::Status { status: 500, .. })
        );
    }

    #[actix_web::test]
    async fn unreachable_store_is_a_transport_error() {
        let store = HttpEmployeeStore::new(&unused_base_url());

        assert_matches!(store.list_employees().await, Err(StoreError::Transport(_)));
    }
}
