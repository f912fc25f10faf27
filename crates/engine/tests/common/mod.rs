#![allow(dead_code)]

use sea_orm::{Database, DatabaseConnection};

use engine::{BudgetType, Engine, NewBudgetEntry};
use migration::MigratorTrait;

pub async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

/// Inserts `(year, month, amount, type, author_id)` rows in order.
pub async fn add_entries(engine: &Engine, rows: &[(i32, i32, i64, BudgetType, Option<i32>)]) {
    for &(year, month, amount, kind, author_id) in rows {
        let mut cmd = NewBudgetEntry::new(year, month, amount, kind);
        if let Some(author_id) = author_id {
            cmd = cmd.author_id(author_id);
        }
        engine.create_budget_entry(cmd).await.unwrap();
    }
}

/// Two authors (ids returned in order) and the six entries used by most
/// stats tests: five 2020 incomes and one 2030 expense.
pub async fn seed_two_authors(engine: &Engine) -> (i32, i32) {
    let ivanov = engine.create_author("Иванов").await.unwrap().id;
    let petrov = engine.create_author("Петров").await.unwrap().id;

    add_entries(
        engine,
        &[
            (2020, 5, 10, BudgetType::Income, Some(ivanov)),
            (2020, 5, 5, BudgetType::Income, Some(petrov)),
            (2020, 5, 20, BudgetType::Income, Some(petrov)),
            (2020, 5, 30, BudgetType::Income, Some(ivanov)),
            (2020, 5, 40, BudgetType::Income, Some(ivanov)),
            (2030, 1, 1, BudgetType::Expense, Some(petrov)),
        ],
    )
    .await;

    (ivanov, petrov)
}
