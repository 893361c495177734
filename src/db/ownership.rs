use std::collections::BTreeSet;

use entity::employee::{self, Entity as Employee, Model as EmployeeModel};
use entity::{employee_art, employee_org, employee_team};
use sea_orm::{
    ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    TransactionTrait,
};
use sea_orm::sea_query::JoinType;
use tracing::{error, info, warn};

use crate::db::database_service::DatabaseService;
use crate::db::owner_scope::{ArtOwners, OrganizationOwners, OwnerScope, TeamOwners};
use crate::types::error::AppError;
use crate::types::ownership::{
    ArtKey, EmployeeKey, OrganizationKey, OwnerSummary, OwnershipChange, TeamKey,
};
use crate::utils::owner_plan::plan_owner_changes;

impl DatabaseService {
    /// Replaces the owner set of one entity with `desired` inside a single
    /// transaction. Any failure rolls back every change made by the call.
    pub async fn reconcile_owners<S: OwnerScope + ?Sized>(
        &self,
        scope: &S,
        entity_key: i32,
        desired: &BTreeSet<EmployeeKey>,
        actor: EmployeeKey,
    ) -> Result<OwnershipChange, AppError> {
        let label = scope.kind().label();
        info!("Reconciling {} {} owners to {} employee(s)", label, entity_key, desired.len());

        let txn = self.database_connection.begin().await?;
        match apply_owner_set(scope, &txn, entity_key, desired, actor).await {
            Ok(change) => {
                txn.commit().await?;
                info!(
                    "{} {} owners reconciled: demoted {} row(s), promoted {} row(s), enrolled {}, skipped {}",
                    label,
                    entity_key,
                    change.demoted_rows,
                    change.promoted_rows,
                    change.enrolled,
                    change.non_member_ids.len()
                );
                Ok(change)
            }
            Err(err) => {
                warn!("{} {} owner reconciliation rolled back: {}", label, entity_key, err);
                if let Err(rollback_err) = txn.rollback().await {
                    error!("Rollback of {} {} owner reconciliation failed: {}", label, entity_key, rollback_err);
                }
                Err(err)
            }
        }
    }

    pub async fn set_organization_owners(
        &self,
        organization_key: OrganizationKey,
        desired: &BTreeSet<EmployeeKey>,
        actor: EmployeeKey,
    ) -> Result<OwnershipChange, AppError> {
        self.reconcile_owners(&OrganizationOwners, organization_key, desired, actor).await
    }

    pub async fn set_art_owners(
        &self,
        art_key: ArtKey,
        desired: &BTreeSet<EmployeeKey>,
        actor: EmployeeKey,
    ) -> Result<OwnershipChange, AppError> {
        self.reconcile_owners(&ArtOwners, art_key, desired, actor).await
    }

    /// Employees without a role on the team come back in `non_member_ids`;
    /// the rest of the set is still applied.
    pub async fn set_team_owners(
        &self,
        team_key: TeamKey,
        desired: &BTreeSet<EmployeeKey>,
        actor: EmployeeKey,
    ) -> Result<OwnershipChange, AppError> {
        self.reconcile_owners(&TeamOwners, team_key, desired, actor).await
    }

    pub async fn list_organization_owners(&self, organization_key: OrganizationKey) -> Result<Vec<OwnerSummary>, AppError> {
        let owners = Employee::find()
            .join(JoinType::InnerJoin, employee::Relation::EmployeeOrg.def())
            .filter(employee_org::Column::OrganizationKey.eq(organization_key))
            .filter(employee_org::Column::OrgOwner.eq(true))
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&self.database_connection)
            .await?;
        Ok(owners.into_iter().map(summarize).collect())
    }

    pub async fn list_art_owners(&self, art_key: ArtKey) -> Result<Vec<OwnerSummary>, AppError> {
        let owners = Employee::find()
            .join(JoinType::InnerJoin, employee::Relation::EmployeeArt.def())
            .filter(employee_art::Column::ArtKey.eq(art_key))
            .filter(employee_art::Column::ArtOwner.eq(true))
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&self.database_connection)
            .await?;
        Ok(owners.into_iter().map(summarize).collect())
    }

    pub async fn list_team_owners(&self, team_key: TeamKey) -> Result<Vec<OwnerSummary>, AppError> {
        // an owner with several roles matches several rows
        let owners = Employee::find()
            .join(JoinType::InnerJoin, employee::Relation::EmployeeTeam.def())
            .filter(employee_team::Column::TeamKey.eq(team_key))
            .filter(employee_team::Column::TeamOwner.eq(true))
            .distinct()
            .order_by_asc(employee::Column::LastName)
            .order_by_asc(employee::Column::FirstName)
            .all(&self.database_connection)
            .await?;
        Ok(owners.into_iter().map(summarize).collect())
    }
}

async fn apply_owner_set<S: OwnerScope + ?Sized>(
    scope: &S,
    txn: &DatabaseTransaction,
    entity_key: i32,
    desired: &BTreeSet<EmployeeKey>,
    actor: EmployeeKey,
) -> Result<OwnershipChange, AppError> {
    if !scope.entity_exists(txn, entity_key).await? {
        return Err(AppError::NotFound(format!("{} not found.", scope.kind().label())));
    }

    let links = scope.owner_flags(txn, entity_key).await?;
    let plan = plan_owner_changes(&links, desired);
    let mut change = OwnershipChange::default();
    if plan.is_noop() {
        return Ok(change);
    }

    if !plan.demote.is_empty() {
        change.demoted_rows = scope.set_owner_flag(txn, entity_key, &plan.demote, false, actor).await?;
    }
    if !plan.promote.is_empty() {
        change.promoted_rows = scope.set_owner_flag(txn, entity_key, &plan.promote, true, actor).await?;
    }
    if !plan.enroll.is_empty() {
        let rejected = scope.enroll_owners(txn, entity_key, &plan.enroll, actor).await?;
        change.enrolled = (plan.enroll.len() - rejected.len()) as u64;
        change.non_member_ids = rejected;
    }
    Ok(change)
}

fn summarize(e: EmployeeModel) -> OwnerSummary {
    OwnerSummary {
        owner_employee_key: e.employee_key,
        owner_name: format!("{} {}", e.first_name, e.last_name),
        owner_email: e.email,
        owner_avatar: e.profile_photo,
    }
}
