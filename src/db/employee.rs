use entity::employee::{self, Entity as Employee};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::db::database_service::DatabaseService;
use crate::types::error::AppError;
use crate::types::ownership::EmployeeKey;

impl DatabaseService {
    pub async fn find_employee_key_by_email(&self, email: &str) -> Result<Option<EmployeeKey>, AppError> {
        Ok(Employee::find()
            .select_only()
            .column(employee::Column::EmployeeKey)
            .filter(employee::Column::Email.eq(email))
            .into_tuple::<i32>()
            .one(&self.database_connection)
            .await?)
    }
}
