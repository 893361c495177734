use actix_web::{get, put, web, HttpRequest};
use std::sync::Arc;

use crate::actions::ownership;
use crate::db::database_service::DatabaseService;
use crate::types::ownership::{OwnerSummary, ROwnerSet, SetOwnersInput};
use crate::types::response::{ActionResponse, ApiResponse, ApiResult};
use crate::utils::webutils::actor_credential;

#[put("/{art_key}/owners")]
async fn put_owners(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    data: web::Json<ROwnerSet>,
    req: HttpRequest,
) -> ActionResponse {
    let db: &DatabaseService = db.get_ref();
    ownership::set_art_owners(
        db,
        db,
        SetOwnersInput {
            entity_key: path.into_inner(),
            owner_employee_keys: data.into_inner().owner_employee_keys,
            access_token: actor_credential(&req),
        },
    )
    .await
}

#[get("/{art_key}/owners")]
async fn get_owners(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
) -> ApiResult<Vec<OwnerSummary>> {
    Ok(ApiResponse::Ok(db.list_art_owners(path.into_inner()).await?))
}
