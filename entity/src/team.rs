use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub team_key: i32,
    pub team_name: String,
    pub art_key: i32,
    pub organization_key: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::art::Entity",
        from = "Column::ArtKey",
        to   = "super::art::Column::ArtKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Art,
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationKey",
        to   = "super::organization::Column::OrganizationKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organization,
    #[sea_orm(has_many = "super::employee_team::Entity")]
    EmployeeTeam,
}

impl Related<super::art::Entity> for Entity {
    fn to() -> RelationDef { Relation::Art.def() }
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef { Relation::Organization.def() }
}

impl Related<super::employee_team::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeTeam.def() }
}

impl ActiveModelBehavior for ActiveModel {}
