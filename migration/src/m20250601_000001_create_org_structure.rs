use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Employee {
    Table,
    EmployeeKey,
    FirstName,
    LastName,
    Email,
    LanId,
    ManagerLanId,
    IsContractor,
    IsUserActive,
    ProfilePhoto,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    OrganizationKey,
    OrganizationName,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[derive(DeriveIden)]
enum Art {
    Table,
    ArtKey,
    ArtName,
    OrganizationKey,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    TeamKey,
    TeamName,
    ArtKey,
    OrganizationKey,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // employees
        m.create_table(
            Table::create()
                .table(Employee::Table)
                .if_not_exists()
                .col(ColumnDef::new(Employee::EmployeeKey).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Employee::FirstName).string_len(255).not_null())
                .col(ColumnDef::new(Employee::LastName).string_len(255).not_null())
                .col(ColumnDef::new(Employee::Email).string_len(255).not_null().unique_key())
                .col(ColumnDef::new(Employee::LanId).string_len(255).not_null().unique_key())
                .col(ColumnDef::new(Employee::ManagerLanId).string_len(255).null())
                .col(ColumnDef::new(Employee::IsContractor).boolean().not_null().default(true))
                .col(ColumnDef::new(Employee::IsUserActive).boolean().not_null().default(true))
                .col(ColumnDef::new(Employee::ProfilePhoto).text().null())
                .col(ColumnDef::new(Employee::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Employee::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_manager_lan_id")
                .table(Employee::Table)
                .col(Employee::ManagerLanId)
                .to_owned(),
        ).await?;

        // organizations
        m.create_table(
            Table::create()
                .table(Organization::Table)
                .if_not_exists()
                .col(ColumnDef::new(Organization::OrganizationKey).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Organization::OrganizationName).string_len(255).not_null().unique_key())
                .col(ColumnDef::new(Organization::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Organization::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Organization::CreatedById).integer().null())
                .col(ColumnDef::new(Organization::UpdatedById).integer().null())
                .to_owned(),
        ).await?;

        // arts, unique per organization
        m.create_table(
            Table::create()
                .table(Art::Table)
                .if_not_exists()
                .col(ColumnDef::new(Art::ArtKey).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Art::ArtName).string_len(255).not_null())
                .col(ColumnDef::new(Art::OrganizationKey).integer().not_null())
                .col(ColumnDef::new(Art::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Art::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Art::CreatedById).integer().null())
                .col(ColumnDef::new(Art::UpdatedById).integer().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_art_organization")
                        .from(Art::Table, Art::OrganizationKey)
                        .to(Organization::Table, Organization::OrganizationKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_art_name_organization")
                .table(Art::Table)
                .col(Art::ArtName)
                .col(Art::OrganizationKey)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_art_organization_key")
                .table(Art::Table)
                .col(Art::OrganizationKey)
                .to_owned(),
        ).await?;

        // teams, unique per art
        m.create_table(
            Table::create()
                .table(Team::Table)
                .if_not_exists()
                .col(ColumnDef::new(Team::TeamKey).integer().not_null().auto_increment().primary_key())
                .col(ColumnDef::new(Team::TeamName).string_len(255).not_null())
                .col(ColumnDef::new(Team::ArtKey).integer().not_null())
                .col(ColumnDef::new(Team::OrganizationKey).integer().not_null())
                .col(ColumnDef::new(Team::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Team::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(Team::CreatedById).integer().null())
                .col(ColumnDef::new(Team::UpdatedById).integer().null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_art")
                        .from(Team::Table, Team::ArtKey)
                        .to(Art::Table, Art::ArtKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_team_organization")
                        .from(Team::Table, Team::OrganizationKey)
                        .to(Organization::Table, Organization::OrganizationKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("uk_team_name_art")
                .table(Team::Table)
                .col(Team::TeamName)
                .col(Team::ArtKey)
                .unique()
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_team_organization_key")
                .table(Team::Table)
                .col(Team::OrganizationKey)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Team::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Art::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Organization::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(Employee::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
