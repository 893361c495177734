use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_key: i32,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    #[sea_orm(unique)]
    pub lan_id: String,
    pub manager_lan_id: Option<String>,
    pub is_contractor: bool,
    pub is_user_active: bool,
    pub profile_photo: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee_org::Entity")]
    EmployeeOrg,
    #[sea_orm(has_many = "super::employee_art::Entity")]
    EmployeeArt,
    #[sea_orm(has_many = "super::employee_team::Entity")]
    EmployeeTeam,
}

impl Related<super::employee_org::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeOrg.def() }
}

impl Related<super::employee_art::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeArt.def() }
}

impl Related<super::employee_team::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeTeam.def() }
}

impl ActiveModelBehavior for ActiveModel {}
