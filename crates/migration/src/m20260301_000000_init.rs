//! Initial schema migration.
//!
//! - `authors`: who recorded a budget entry, plus the lower-cased search key
//! - `budget_entries`: yearly budget line-items, optionally attributed to an author

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// ─────────────────────────────────────────────────────────────────────────────
// Table identifiers
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Iden)]
enum Authors {
    Table,
    Id,
    Name,
    NameNorm,
}

#[derive(Iden)]
enum BudgetEntries {
    Table,
    Id,
    Year,
    Month,
    Amount,
    Type,
    AuthorId,
}

// ─────────────────────────────────────────────────────────────────────────────
// Migration implementation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ───────────────────────────────────────────────────────────────────
        // 1. Authors
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::Name).string().not_null())
                    .col(ColumnDef::new(Authors::NameNorm).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-authors-name_norm")
                    .table(Authors::Table)
                    .col(Authors::NameNorm)
                    .to_owned(),
            )
            .await?;

        // ───────────────────────────────────────────────────────────────────
        // 2. Budget entries
        // ───────────────────────────────────────────────────────────────────
        manager
            .create_table(
                Table::create()
                    .table(BudgetEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BudgetEntries::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BudgetEntries::Year).integer().not_null())
                    .col(ColumnDef::new(BudgetEntries::Month).integer().not_null())
                    .col(
                        ColumnDef::new(BudgetEntries::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BudgetEntries::Type).string().not_null())
                    .col(ColumnDef::new(BudgetEntries::AuthorId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-budget_entries-author_id")
                            .from(BudgetEntries::Table, BudgetEntries::AuthorId)
                            .to(Authors::Table, Authors::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-budget_entries-year-month")
                    .table(BudgetEntries::Table)
                    .col(BudgetEntries::Year)
                    .col(BudgetEntries::Month)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Entries reference authors, drop them first.
        manager
            .drop_table(Table::drop().table(BudgetEntries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await?;
        Ok(())
    }
}
