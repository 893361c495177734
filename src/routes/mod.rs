use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::utils::webutils::validate_service_key;

pub mod art;
pub mod health;
pub mod organization;
pub mod team;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let service_auth = HttpAuthentication::bearer(validate_service_key);

    cfg.service(
        web::scope("/health")
            .service(health::health)
            .wrap(service_auth.clone()),
    );
    cfg.service(
        web::scope("/organization")
            .service(organization::put_owners)
            .service(organization::get_owners)
            .wrap(service_auth.clone()),
    );
    cfg.service(
        web::scope("/art")
            .service(art::put_owners)
            .service(art::get_owners)
            .wrap(service_auth.clone()),
    );
    cfg.service(
        web::scope("/team")
            .service(team::owners::put_owners)
            .service(team::owners::get_owners)
            .service(team::members::assign)
            .service(team::members::remove)
            .service(team::members::roles)
            .wrap(service_auth),
    );
}
