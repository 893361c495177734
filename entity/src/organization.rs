use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organization")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub organization_key: i32,
    #[sea_orm(unique)]
    pub organization_name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub created_by_id: Option<i32>,
    pub updated_by_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::art::Entity")]
    Art,
    #[sea_orm(has_many = "super::employee_org::Entity")]
    EmployeeOrg,
}

impl Related<super::art::Entity> for Entity {
    fn to() -> RelationDef { Relation::Art.def() }
}

impl Related<super::employee_org::Entity> for Entity {
    fn to() -> RelationDef { Relation::EmployeeOrg.def() }
}

impl ActiveModelBehavior for ActiveModel {}
