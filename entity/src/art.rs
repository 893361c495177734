use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Agile Release Train. Name is unique within its organization.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "art")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub art_key: i32,
    pub art_name: String,
    pub organization_key: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationKey",
        to   = "super::organization::Column::OrganizationKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Organization,
    #[sea_orm(has_many = "super::team::Entity")]
    Team,
    #[sea_orm(has_many = "super::employee_art::Entity")]
    EmployeeArt,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef { Relation::Organization.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl Related<super::employee_art::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeArt.def() }
}

impl ActiveModelBehavior for ActiveModel {}
