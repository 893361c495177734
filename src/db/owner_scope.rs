use async_trait::async_trait;
use chrono::Utc;
use entity::art::Entity as Art;
use entity::employee_art::{self, ActiveModel as EmployeeArtActive, Entity as EmployeeArt};
use entity::employee_org::{self, ActiveModel as EmployeeOrgActive, Entity as EmployeeOrg};
use entity::employee_team::{self, Entity as EmployeeTeam};
use entity::organization::Entity as Organization;
use entity::team::Entity as Team;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect,
    Set,
};
use tracing::debug;

use crate::types::ownership::{EmployeeKey, OwnedEntity};
use crate::utils::owner_plan::OwnerFlag;

/// Read/write adapter over one owner link table. Every query is keyed by the
/// entity so a reconciliation never reaches another entity's rows.
#[async_trait]
pub trait OwnerScope: Send + Sync {
    fn kind(&self) -> OwnedEntity;

    async fn entity_exists(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<bool, DbErr>;

    /// Every link row of the entity, owner or not.
    async fn owner_flags(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<Vec<OwnerFlag>, DbErr>;

    /// Sets the owner flag on the given employees' rows. Rows already holding
    /// `owner` are left alone; returns how many rows changed.
    async fn set_owner_flag(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        owner: bool,
        actor: EmployeeKey,
    ) -> Result<u64, DbErr>;

    /// Grants ownership to employees that have no link row yet. Returns the
    /// employees that could not be enrolled.
    async fn enroll_owners(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        actor: EmployeeKey,
    ) -> Result<Vec<EmployeeKey>, DbErr>;
}

pub struct OrganizationOwners;

#[async_trait]
impl OwnerScope for OrganizationOwners {
    fn kind(&self) -> OwnedEntity {
        OwnedEntity::Organization
    }

    async fn entity_exists(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<bool, DbErr> {
        Ok(Organization::find_by_id(entity_key).count(txn).await? > 0)
    }

    async fn owner_flags(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<Vec<OwnerFlag>, DbErr> {
        let rows: Vec<(i32, bool)> = EmployeeOrg::find()
            .select_only()
            .column(employee_org::Column::EmployeeKey)
            .column(employee_org::Column::OrgOwner)
            .filter(employee_org::Column::OrganizationKey.eq(entity_key))
            .into_tuple()
            .all(txn)
            .await?;
        Ok(rows.into_iter().map(|(employee_key, is_owner)| OwnerFlag { employee_key, is_owner }).collect())
    }

    async fn set_owner_flag(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        owner: bool,
        actor: EmployeeKey,
    ) -> Result<u64, DbErr> {
        let res = EmployeeOrg::update_many()
            .col_expr(employee_org::Column::OrgOwner, Expr::value(owner))
            .col_expr(employee_org::Column::UpdatedById, Expr::value(actor))
            .col_expr(employee_org::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(employee_org::Column::OrganizationKey.eq(entity_key))
            .filter(employee_org::Column::EmployeeKey.is_in(employees.iter().copied()))
            .filter(employee_org::Column::OrgOwner.ne(owner))
            .exec(txn)
            .await?;
        Ok(res.rows_affected)
    }

    async fn enroll_owners(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        actor: EmployeeKey,
    ) -> Result<Vec<EmployeeKey>, DbErr> {
        let now = Utc::now();
        let rows = employees.iter().map(|&employee_key| EmployeeOrgActive {
            employee_key: Set(employee_key),
            organization_key: Set(entity_key),
            org_owner: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(Some(actor)),
            updated_by_id: Set(Some(actor)),
        });
        EmployeeOrg::insert_many(rows)
            .on_conflict(
                OnConflict::columns([employee_org::Column::EmployeeKey, employee_org::Column::OrganizationKey])
                    .update_columns([
                        employee_org::Column::OrgOwner,
                        employee_org::Column::UpdatedById,
                        employee_org::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;
        Ok(Vec::new())
    }
}

pub struct ArtOwners;

#[async_trait]
impl OwnerScope for ArtOwners {
    fn kind(&self) -> OwnedEntity {
        OwnedEntity::Art
    }

    async fn entity_exists(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<bool, DbErr> {
        Ok(Art::find_by_id(entity_key).count(txn).await? > 0)
    }

    async fn owner_flags(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<Vec<OwnerFlag>, DbErr> {
        let rows: Vec<(i32, bool)> = EmployeeArt::find()
            .select_only()
            .column(employee_art::Column::EmployeeKey)
            .column(employee_art::Column::ArtOwner)
            .filter(employee_art::Column::ArtKey.eq(entity_key))
            .into_tuple()
            .all(txn)
            .await?;
        Ok(rows.into_iter().map(|(employee_key, is_owner)| OwnerFlag { employee_key, is_owner }).collect())
    }

    async fn set_owner_flag(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        owner: bool,
        actor: EmployeeKey,
    ) -> Result<u64, DbErr> {
        let res = EmployeeArt::update_many()
            .col_expr(employee_art::Column::ArtOwner, Expr::value(owner))
            .col_expr(employee_art::Column::UpdatedById, Expr::value(actor))
            .col_expr(employee_art::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(employee_art::Column::ArtKey.eq(entity_key))
            .filter(employee_art::Column::EmployeeKey.is_in(employees.iter().copied()))
            .filter(employee_art::Column::ArtOwner.ne(owner))
            .exec(txn)
            .await?;
        Ok(res.rows_affected)
    }

    async fn enroll_owners(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        actor: EmployeeKey,
    ) -> Result<Vec<EmployeeKey>, DbErr> {
        let now = Utc::now();
        let rows = employees.iter().map(|&employee_key| EmployeeArtActive {
            employee_key: Set(employee_key),
            art_key: Set(entity_key),
            art_owner: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            created_by_id: Set(Some(actor)),
            updated_by_id: Set(Some(actor)),
        });
        EmployeeArt::insert_many(rows)
            .on_conflict(
                OnConflict::columns([employee_art::Column::EmployeeKey, employee_art::Column::ArtKey])
                    .update_columns([
                        employee_art::Column::ArtOwner,
                        employee_art::Column::UpdatedById,
                        employee_art::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(txn)
            .await?;
        Ok(Vec::new())
    }
}

/// Team ownership lives on role-rows. Flag changes hit every role an
/// employee holds on the team, and nobody is enrolled through ownership.
pub struct TeamOwners;

#[async_trait]
impl OwnerScope for TeamOwners {
    fn kind(&self) -> OwnedEntity {
        OwnedEntity::Team
    }

    async fn entity_exists(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<bool, DbErr> {
        Ok(Team::find_by_id(entity_key).count(txn).await? > 0)
    }

    async fn owner_flags(&self, txn: &DatabaseTransaction, entity_key: i32) -> Result<Vec<OwnerFlag>, DbErr> {
        let rows: Vec<(i32, bool)> = EmployeeTeam::find()
            .select_only()
            .column(employee_team::Column::EmployeeKey)
            .column(employee_team::Column::TeamOwner)
            .filter(employee_team::Column::TeamKey.eq(entity_key))
            .into_tuple()
            .all(txn)
            .await?;
        Ok(rows.into_iter().map(|(employee_key, is_owner)| OwnerFlag { employee_key, is_owner }).collect())
    }

    async fn set_owner_flag(
        &self,
        txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        owner: bool,
        actor: EmployeeKey,
    ) -> Result<u64, DbErr> {
        let res = EmployeeTeam::update_many()
            .col_expr(employee_team::Column::TeamOwner, Expr::value(owner))
            .col_expr(employee_team::Column::UpdatedById, Expr::value(actor))
            .col_expr(employee_team::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(employee_team::Column::TeamKey.eq(entity_key))
            .filter(employee_team::Column::EmployeeKey.is_in(employees.iter().copied()))
            .filter(employee_team::Column::TeamOwner.ne(owner))
            .exec(txn)
            .await?;
        Ok(res.rows_affected)
    }

    async fn enroll_owners(
        &self,
        _txn: &DatabaseTransaction,
        entity_key: i32,
        employees: &[EmployeeKey],
        _actor: EmployeeKey,
    ) -> Result<Vec<EmployeeKey>, DbErr> {
        debug!("team {}: {} requested owner(s) hold no role, skipping", entity_key, employees.len());
        Ok(employees.to_vec())
    }
}
