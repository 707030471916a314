use sea_orm_migration::prelude::*;

use crate::m20240704_000001_create_user_table::User;
use crate::m20240704_000002_create_organisation_table::Organisation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum UserOrganisation {
    Table,
    UserId,
    OrgId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // FKs are declared inline so the same migration runs on SQLite
        m.create_table(
            Table::create()
                .table(UserOrganisation::Table)
                .if_not_exists()
                .col(ColumnDef::new(UserOrganisation::UserId).string_len(100).not_null())
                .col(ColumnDef::new(UserOrganisation::OrgId).string_len(100).not_null())
                .col(
                    ColumnDef::new(UserOrganisation::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::current_timestamp()),
                )
                .primary_key(
                    Index::create()
                        .name("pk_user_organisation")
                        .col(UserOrganisation::UserId)
                        .col(UserOrganisation::OrgId),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_organisation_user")
                        .from(UserOrganisation::Table, UserOrganisation::UserId)
                        .to(User::Table, User::UserId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_user_organisation_organisation")
                        .from(UserOrganisation::Table, UserOrganisation::OrgId)
                        .to(Organisation::Table, Organisation::OrgId)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_organisation_user")
                .table(UserOrganisation::Table)
                .col(UserOrganisation::UserId)
                .to_owned(),
        ).await?;

        m.create_index(
            Index::create()
                .name("idx_user_organisation_org")
                .table(UserOrganisation::Table)
                .col(UserOrganisation::OrgId)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // indexes go with the table
        m.drop_table(Table::drop().table(UserOrganisation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}
