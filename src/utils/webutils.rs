use actix_web::{dev::ServiceRequest, error::ErrorUnauthorized, web, HttpRequest};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use tracing::warn;

/// Header carrying the verified subject of the employee acting on a request.
pub const ACTOR_HEADER: &str = "X-Actor-Subject";

/// Shared secret callers present as the bearer token.
#[derive(Clone)]
pub struct ServiceKey(String);

impl ServiceKey {
    pub fn new(key: impl Into<String>) -> Self {
        ServiceKey(key.into())
    }

    fn matches(&self, token: &str) -> bool {
        !self.0.is_empty() && self.0 == token
    }
}

pub async fn validate_service_key(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let valid = req
        .app_data::<web::Data<ServiceKey>>()
        .is_some_and(|key| key.matches(credentials.token()));
    if valid {
        Ok(req)
    } else {
        warn!("Rejected request to {} with invalid service key", req.path());
        Err((ErrorUnauthorized("Invalid token"), req))
    }
}

/// Actor credential of the request; empty when the header is absent.
pub fn actor_credential(req: &HttpRequest) -> String {
    req.headers()
        .get(ACTOR_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
