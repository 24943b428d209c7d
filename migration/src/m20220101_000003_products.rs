use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
pub enum Products {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    Name,
    Description,
    Price,
    Stock,
    ImageUrl,
    CategoryId,
}

#[derive(Iden)]
enum Categories {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        // The foreign key is declared inline so this also runs on sqlite,
        // which cannot add constraints through ALTER TABLE.
        m.create_table(
            Table::create()
                .table(Products::Table)
                .if_not_exists()
                .col(pk_auto(Products::Id))
                .col(string(Products::Name))
                .col(text_null(Products::Description))
                .col(float(Products::Price))
                .col(ColumnDef::new(Products::Stock).integer().not_null().default(0))
                .col(string_null(Products::ImageUrl))
                .col(integer_null(Products::CategoryId))
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_products_category_id")
                        .from(Products::Table, Products::CategoryId)
                        .to(Categories::Table, Categories::Id)
                        .on_update(ForeignKeyAction::Cascade)
                        .on_delete(ForeignKeyAction::SetNull),
                )
                .col(
                    ColumnDef::new(Products::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::cust("CURRENT_TIMESTAMP")),
                )
                .col(
                    ColumnDef::new(Products::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null()
                        .default(Expr::cust("CURRENT_TIMESTAMP")),
                )
                .to_owned(),
        )
        .await?;

        m.create_index(
            Index::create()
                .name("idx_products_category_id")
                .table(Products::Table)
                .col(Products::CategoryId)
                .to_owned(),
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}
