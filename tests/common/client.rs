use actix_web::{web, App};
use std::sync::Arc;
use org_roster::db::database_service::DatabaseService;
use org_roster::utils::webutils::{ServiceKey, ACTOR_HEADER};

pub const TEST_SERVICE_KEY: &str = "test-service-key";

pub struct TestClient {
    pub db: Arc<DatabaseService>,
}

impl TestClient {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        TestClient { db }
    }

    pub fn create_app(&self) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(ServiceKey::new(TEST_SERVICE_KEY)))
            .configure(org_roster::routes::configure_routes)
    }
}

pub fn service_auth() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", TEST_SERVICE_KEY))
}

/// Actor header for an employee; the directory resolves it by email.
pub fn acting_as(email: &str) -> (&'static str, String) {
    (ACTOR_HEADER, email.to_string())
}
