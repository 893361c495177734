use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Employee {
    Table,
    EmployeeKey,
}

#[derive(DeriveIden)]
enum Organization {
    Table,
    OrganizationKey,
}

#[derive(DeriveIden)]
enum Art {
    Table,
    ArtKey,
}

#[derive(DeriveIden)]
enum Team {
    Table,
    TeamKey,
}

#[derive(DeriveIden)]
enum EmployeeOrg {
    Table,
    EmployeeKey,
    OrganizationKey,
    OrgOwner,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[derive(DeriveIden)]
enum EmployeeArt {
    Table,
    EmployeeKey,
    ArtKey,
    ArtOwner,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[derive(DeriveIden)]
enum EmployeeTeam {
    Table,
    EmployeeKey,
    TeamKey,
    JobTitle,
    TeamOwner,
    CreatedAt,
    UpdatedAt,
    CreatedById,
    UpdatedById,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // employee <-> organization
        m.create_table(
            Table::create()
                .table(EmployeeOrg::Table)
                .if_not_exists()
                .col(ColumnDef::new(EmployeeOrg::EmployeeKey).integer().not_null())
                .col(ColumnDef::new(EmployeeOrg::OrganizationKey).integer().not_null())
                .col(ColumnDef::new(EmployeeOrg::OrgOwner).boolean().not_null().default(true))
                .col(ColumnDef::new(EmployeeOrg::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeOrg::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeOrg::CreatedById).integer().null())
                .col(ColumnDef::new(EmployeeOrg::UpdatedById).integer().null())
                .primary_key(
                    Index::create()
                        .name("pk_employee_org")
                        .col(EmployeeOrg::EmployeeKey)
                        .col(EmployeeOrg::OrganizationKey)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_org_employee")
                        .from(EmployeeOrg::Table, EmployeeOrg::EmployeeKey)
                        .to(Employee::Table, Employee::EmployeeKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_org_organization")
                        .from(EmployeeOrg::Table, EmployeeOrg::OrganizationKey)
                        .to(Organization::Table, Organization::OrganizationKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_org_organization")
                .table(EmployeeOrg::Table)
                .col(EmployeeOrg::OrganizationKey)
                .to_owned(),
        ).await?;

        // employee <-> art
        m.create_table(
            Table::create()
                .table(EmployeeArt::Table)
                .if_not_exists()
                .col(ColumnDef::new(EmployeeArt::EmployeeKey).integer().not_null())
                .col(ColumnDef::new(EmployeeArt::ArtKey).integer().not_null())
                .col(ColumnDef::new(EmployeeArt::ArtOwner).boolean().not_null().default(true))
                .col(ColumnDef::new(EmployeeArt::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeArt::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeArt::CreatedById).integer().null())
                .col(ColumnDef::new(EmployeeArt::UpdatedById).integer().null())
                .primary_key(
                    Index::create()
                        .name("pk_employee_art")
                        .col(EmployeeArt::EmployeeKey)
                        .col(EmployeeArt::ArtKey)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_art_employee")
                        .from(EmployeeArt::Table, EmployeeArt::EmployeeKey)
                        .to(Employee::Table, Employee::EmployeeKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_art_art")
                        .from(EmployeeArt::Table, EmployeeArt::ArtKey)
                        .to(Art::Table, Art::ArtKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_art_art")
                .table(EmployeeArt::Table)
                .col(EmployeeArt::ArtKey)
                .to_owned(),
        ).await?;

        // employee <-> team, one row per job title
        m.create_table(
            Table::create()
                .table(EmployeeTeam::Table)
                .if_not_exists()
                .col(ColumnDef::new(EmployeeTeam::EmployeeKey).integer().not_null())
                .col(ColumnDef::new(EmployeeTeam::TeamKey).integer().not_null())
                .col(ColumnDef::new(EmployeeTeam::JobTitle).string_len(255).not_null())
                .col(ColumnDef::new(EmployeeTeam::TeamOwner).boolean().not_null().default(false))
                .col(ColumnDef::new(EmployeeTeam::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeTeam::UpdatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(EmployeeTeam::CreatedById).integer().null())
                .col(ColumnDef::new(EmployeeTeam::UpdatedById).integer().null())
                .primary_key(
                    Index::create()
                        .name("pk_employee_team")
                        .col(EmployeeTeam::EmployeeKey)
                        .col(EmployeeTeam::TeamKey)
                        .col(EmployeeTeam::JobTitle)
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_team_employee")
                        .from(EmployeeTeam::Table, EmployeeTeam::EmployeeKey)
                        .to(Employee::Table, Employee::EmployeeKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_employee_team_team")
                        .from(EmployeeTeam::Table, EmployeeTeam::TeamKey)
                        .to(Team::Table, Team::TeamKey)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_employee_team_team")
                .table(EmployeeTeam::Table)
                .col(EmployeeTeam::TeamKey)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(EmployeeTeam::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(EmployeeArt::Table).if_exists().to_owned()).await?;
        m.drop_table(Table::drop().table(EmployeeOrg::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
