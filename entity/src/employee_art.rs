use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_art")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub art_key: i32,
    pub art_owner: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeKey",
        to   = "super::employee::Column::EmployeeKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Employee,

    #[sea_orm(
        belongs_to = "super::art::Entity",
        from = "Column::ArtKey",
        to   = "super::art::Column::ArtKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Art,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<super::art::Entity> for Entity {
    fn to() -> RelationDef { Relation::Art.def() }
}

impl ActiveModelBehavior for ActiveModel {}
