use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Organisation::Table)
                .if_not_exists()
                .col(ColumnDef::new(Organisation::OrgId).string_len(100).not_null().primary_key())
                .col(ColumnDef::new(Organisation::Name).string_len(100).not_null())
                .col(ColumnDef::new(Organisation::Description).text().null())
                .col(ColumnDef::new(Organisation::CreatedAt).timestamp_with_time_zone().not_null())
                .col(ColumnDef::new(Organisation::UpdatedAt).timestamp_with_time_zone().not_null())
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Organisation::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Organisation {
    Table,
    OrgId,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
