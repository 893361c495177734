use std::collections::BTreeSet;

use tracing::{debug, error};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::ownership::{EmployeeKey, SetOwnersInput};
use crate::types::response::ActionResponse;
use crate::utils::actor::{require_actor, ActorResolver};

pub async fn set_organization_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> ActionResponse {
    let res = try_set_organization_owners(db, actors, input).await;
    log_failure("setting organization owners", &res);
    res.into()
}

pub async fn set_art_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> ActionResponse {
    let res = try_set_art_owners(db, actors, input).await;
    log_failure("setting ART owners", &res);
    res.into()
}

/// Requested owners with no role on the team are skipped and reported back;
/// the call still succeeds for everyone else.
pub async fn set_team_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> ActionResponse {
    let res = try_set_team_owners(db, actors, input).await;
    log_failure("setting team owners", &res);
    res.into()
}

async fn try_set_organization_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> Result<ActionResponse, AppError> {
    let actor = require_actor(actors, &input.access_token).await?;
    db.set_organization_owners(input.entity_key, &desired_set(&input.owner_employee_keys), actor)
        .await?;
    Ok(ActionResponse::ok("Organization owners updated successfully."))
}

async fn try_set_art_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> Result<ActionResponse, AppError> {
    let actor = require_actor(actors, &input.access_token).await?;
    db.set_art_owners(input.entity_key, &desired_set(&input.owner_employee_keys), actor)
        .await?;
    Ok(ActionResponse::ok("ART owners updated successfully."))
}

async fn try_set_team_owners<R: ActorResolver + ?Sized>(
    db: &DatabaseService,
    actors: &R,
    input: SetOwnersInput,
) -> Result<ActionResponse, AppError> {
    let actor = require_actor(actors, &input.access_token).await?;
    let change = db
        .set_team_owners(input.entity_key, &desired_set(&input.owner_employee_keys), actor)
        .await?;
    if change.non_member_ids.is_empty() {
        return Ok(ActionResponse::ok("Team owners updated successfully.").with_non_members(Vec::new()));
    }
    let skipped = change
        .non_member_ids
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(ActionResponse::ok(format!(
        "Team owners updated. Skipped non-members: {skipped}. Add them to the team with a job title first."
    ))
    .with_non_members(change.non_member_ids))
}

fn desired_set(keys: &[EmployeeKey]) -> BTreeSet<EmployeeKey> {
    keys.iter().copied().collect()
}

pub(crate) fn log_failure(what: &str, res: &Result<ActionResponse, AppError>) {
    match res {
        Err(AppError::Db(err)) => error!("Error {}: {}", what, err),
        Err(err) => debug!("{} refused: {}", what, err),
        Ok(_) => {}
    }
}
