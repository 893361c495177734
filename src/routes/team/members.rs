use actix_web::{delete, get, post, web, HttpRequest};
use entity::employee_team;
use std::sync::Arc;

use crate::actions::team_roles;
use crate::db::database_service::DatabaseService;
use crate::types::response::{ActionResponse, ApiResponse, ApiResult};
use crate::types::team::{AssignEmployeeToTeamInput, RTeamAssign, RTeamRemove, RemoveEmployeeFromTeamInput};
use crate::utils::webutils::actor_credential;

#[post("/{team_key}/members")]
async fn assign(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    data: web::Json<RTeamAssign>,
    req: HttpRequest,
) -> ActionResponse {
    let db: &DatabaseService = db.get_ref();
    let data = data.into_inner();
    team_roles::assign_employee_to_team(
        db,
        db,
        AssignEmployeeToTeamInput {
            employee_key: data.employee_key,
            team_key: path.into_inner(),
            job_title: data.job_title,
            is_team_owner: data.is_team_owner,
            access_token: actor_credential(&req),
        },
    )
    .await
}

#[delete("/{team_key}/members")]
async fn remove(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<i32>,
    data: web::Json<RTeamRemove>,
    req: HttpRequest,
) -> ActionResponse {
    let db: &DatabaseService = db.get_ref();
    let data = data.into_inner();
    team_roles::remove_employee_from_team(
        db,
        db,
        RemoveEmployeeFromTeamInput {
            employee_key: data.employee_key,
            team_key: path.into_inner(),
            job_title: data.job_title,
            access_token: actor_credential(&req),
        },
    )
    .await
}

#[get("/{team_key}/members/{employee_key}/roles")]
async fn roles(
    db: web::Data<Arc<DatabaseService>>,
    path: web::Path<(i32, i32)>,
) -> ApiResult<Vec<employee_team::Model>> {
    let (team_key, employee_key) = path.into_inner();
    Ok(ApiResponse::Ok(db.list_team_roles(team_key, employee_key).await?))
}
