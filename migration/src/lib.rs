pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_org_structure;
mod m20250601_000002_create_owner_links;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_org_structure::Migration),
            Box::new(m20250601_000002_create_owner_links::Migration),
        ]
    }
}
