use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Categories {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    Description,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(Categories::Table)
                .if_not_exists()
                .col(pk_auto(Categories::Id))
                .col(string(Categories::Name))
                .col(text_null(Categories::Description))
                .col(
                    ColumnDef::new(Categories::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::cust("CURRENT_TIMESTAMP")),
                )
                .col(
                    ColumnDef::new(Categories::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::cust("CURRENT_TIMESTAMP")),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("unique_categories_name")
                .table(Categories::Table)
                .col(Categories::Name)
                .unique()
                .to_owned(),
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}
