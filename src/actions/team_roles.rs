use crate::actions::ownership::log_failure;
use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::response::ActionResponse;
use crate::types::team::{AssignEmployeeToTeamInput, RemoveEmployeeFromTeamInput};
use crate::utils::actor::{require_actor, ActorResolver};

pub async fn assign_employee_to_team<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: AssignEmployeeToTeamInput,
) -> ActionResponse {
    let res = try_assign(db, actors, input).await;
    log_failure("assigning employee to team", &res);
    res.into()
}

pub async fn remove_employee_from_team<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: RemoveEmployeeFromTeamInput,
) -> ActionResponse {
    let res = try_remove(db, actors, input).await;
    log_failure("removing employee from team", &res);
    res.into()
}

async fn try_assign<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: AssignEmployeeToTeamInput,
) -> Result<ActionResponse, AppError> {
    let actor = require_actor(actors, &input.access_token).await?;
    db.assign_employee_to_team(input.employee_key, input.team_key, &input.job_title, input.is_team_owner, actor)
        .await?;
    Ok(ActionResponse::ok("Employee successfully assigned to team."))
}

async fn try_remove<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: RemoveEmployeeFromTeamInput,
) -> Result<ActionResponse, AppError> {
    require_actor(actors, &input.access_token).await?;
    db.remove_employee_from_team(input.employee_key, input.team_key, &input.job_title)
        .await?;
    Ok(ActionResponse::ok("Employee successfully removed from team role."))
}
