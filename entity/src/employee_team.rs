use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per role an employee holds on a team.
#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee_team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub employee_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub team_key: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_title: String,
    pub team_owner: bool,
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
        belongs_to = "super::team::Entity",
        from = "Column::TeamKey",
        to   = "super::team::Column::TeamKey",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef { Relation::Employee.def() }
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef { Relation::Team.def() }
}

impl ActiveModelBehavior for ActiveModel {}
