use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servers::Table)
                    .if_not_exists()
                    .col(string(Servers::Id).primary_key())
                    .col(string(Servers::Name))
                    .col(text_null(Servers::Description))
                    .col(string_null(Servers::InviteUrl))
                    .col(boolean(Servers::Verified).default(false))
                    .col(
                        timestamp_with_time_zone(Servers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Servers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The listing feed sorts by bump recency
        manager
            .create_index(
                Index::create()
                    .name("idx_servers_updated_at")
                    .table(Servers::Table)
                    .col(Servers::UpdatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Servers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Servers {
    Table,
    Id,
    Name,
    Description,
    InviteUrl,
    Verified,
    CreatedAt,
    UpdatedAt,
}
