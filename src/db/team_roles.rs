use chrono::Utc;
use entity::employee::Entity as Employee;
use entity::employee_team::{self, ActiveModel as EmployeeTeamActive, Entity as EmployeeTeam};
use entity::team::Entity as Team;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::info;

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::ownership::{EmployeeKey, TeamKey};

impl DatabaseService {
    /// Gives an employee a role on a team, or updates the owner flag of a role
    /// they already hold.
    pub async fn assign_employee_to_team(
        &self,
        employee_key: EmployeeKey,
        team_key: TeamKey,
        job_title: &str,
        is_team_owner: bool,
        actor: EmployeeKey,
    ) -> Result<(), AppError> {
        let job_title = job_title.trim();
        if job_title.is_empty() {
            return Err(AppError::Validation("Job title is required.".into()));
        }

        let txn = self.database_connection.begin().await?;
        if Employee::find_by_id(employee_key).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound("Employee not found.".into()));
        }
        if Team::find_by_id(team_key).count(&txn).await? == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound("Team not found.".into()));
        }

        let now = Utc::now();
        EmployeeTeam::insert(EmployeeTeamActive {
            employee_key: Set(employee_key),
            team_key: Set(team_key),
            job_title: Set(job_title.to_owned()),
            team_owner: Set(is_team_owner),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(Some(actor)),
            updated_by_id: Set(Some(actor)),
        })
        .on_conflict(
            OnConflict::columns([
                employee_team::Column::EmployeeKey,
                employee_team::Column::TeamKey,
                employee_team::Column::JobTitle,
            ])
            .update_columns([
                employee_team::Column::TeamOwner,
                employee_team::Column::UpdatedById,
                employee_team::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(&txn)
        .await?;

        txn.commit().await?;
        info!("Employee {} assigned to team {} as {}", employee_key, team_key, job_title);
        Ok(())
    }

    /// Drops one role-row. Other roles the employee holds on the team stay.
    pub async fn remove_employee_from_team(
        &self,
        employee_key: EmployeeKey,
        team_key: TeamKey,
        job_title: &str,
    ) -> Result<(), AppError> {
        let res = EmployeeTeam::delete_many()
            .filter(employee_team::Column::EmployeeKey.eq(employee_key))
            .filter(employee_team::Column::TeamKey.eq(team_key))
            .filter(employee_team::Column::JobTitle.eq(job_title.trim()))
            .exec(&self.database_connection)
            .await?;
        if res.rows_affected == 0 {
            return Err(AppError::NotFound(
                "Employee not found in team with that job title, or already removed.".into(),
            ));
        }
        info!("Employee {} removed from team {} role {}", employee_key, team_key, job_title.trim());
        Ok(())
    }

    pub async fn list_team_roles(
        &self,
        team_key: TeamKey,
        employee_key: EmployeeKey,
    ) -> Result<Vec<employee_team::Model>, AppError> {
        Ok(EmployeeTeam::find()
            .filter(employee_team::Column::TeamKey.eq(team_key))
            .filter(employee_team::Column::EmployeeKey.eq(employee_key))
            .order_by_asc(employee_team::Column::JobTitle)
            .all(&self.database_connection)
            .await?)
    }
}
