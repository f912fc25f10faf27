//! Yearly statistics: one sorted page of entries plus totals over every
//! entry matching the filter.
//!
//! Two statements run in the same transaction. The first fetches `(type,
//! amount)` of the whole filtered set and feeds [`aggregate`]; the second
//! fetches the requested page. The totals are never derived from the page.

use std::collections::BTreeMap;

use sea_orm::{QueryResult, Statement, TransactionTrait, Value, prelude::*};
use serde::Serialize;

use crate::{
    BudgetType, ResultEngine, StatsFilter, aggregate,
    util::{LIKE_ESCAPE, contains_pattern, normalize_optional_text, search_key},
};

use super::{Engine, with_tx};

const FROM_JOINED: &str =
    "FROM budget_entries AS b LEFT JOIN authors AS a ON a.id = b.author_id";

/// Month ascending, amount descending, then insertion order.
const PAGE_ORDER: &str = "ORDER BY b.month ASC, b.amount DESC, b.id ASC";

/// A budget entry joined with the name of its author, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatsItem {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i64,
    pub kind: BudgetType,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
}

/// Result of [`Engine::year_stats`].
///
/// `total` and `total_by_type` cover the whole filtered set, `items` only the
/// requested page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct YearStats {
    pub total: u64,
    pub total_by_type: BTreeMap<BudgetType, i64>,
    pub items: Vec<StatsItem>,
}

/// WHERE clause of the filtered set together with its bound values.
struct Predicate {
    sql: String,
    values: Vec<Value>,
}

fn stats_predicate(filter: &StatsFilter) -> Predicate {
    match normalize_optional_text(filter.author_name.as_deref()) {
        // Entries without an author are kept by the LEFT JOIN.
        None => Predicate {
            sql: "b.year = ?".to_string(),
            values: vec![filter.year.into()],
        },
        // `a.name_norm` is NULL for entries without an author and NULL never
        // matches LIKE, so those entries drop out here.
        Some(needle) => Predicate {
            sql: format!("b.year = ? AND a.name_norm LIKE ? ESCAPE '{LIKE_ESCAPE}'"),
            values: vec![
                filter.year.into(),
                contains_pattern(&search_key(&needle)).into(),
            ],
        },
    }
}

fn stats_item(row: &QueryResult) -> ResultEngine<StatsItem> {
    let kind: String = row.try_get("", "kind")?;
    Ok(StatsItem {
        id: row.try_get("", "id")?,
        year: row.try_get("", "year")?,
        month: row.try_get("", "month")?,
        amount: row.try_get("", "amount")?,
        kind: BudgetType::try_from(kind.as_str())?,
        author_id: row.try_get("", "author_id")?,
        author_name: row.try_get("", "author_name")?,
    })
}

impl Engine {
    /// Returns the statistics of `filter.year`.
    ///
    /// Entries are filtered by year and, when `filter.author_name` is set
    /// (and not blank), by a case-insensitive substring of the author name.
    /// `items` holds `filter.limit` entries starting at `filter.offset` of the
    /// filtered set sorted by month ascending and amount descending; equal
    /// rows keep insertion order. An empty result is not an error.
    pub async fn year_stats(&self, filter: &StatsFilter) -> ResultEngine<YearStats> {
        tracing::debug!(
            year = filter.year,
            author_name = ?filter.author_name,
            limit = filter.limit,
            offset = filter.offset,
            "computing year stats"
        );

        let predicate = stats_predicate(filter);
        let backend = self.database.get_database_backend();

        with_tx!(self, |db_tx| {
            let totals = {
                let stmt = Statement::from_sql_and_values(
                    backend,
                    format!(
                        "SELECT b.\"type\" AS kind, b.amount AS amount {FROM_JOINED} WHERE {}",
                        predicate.sql
                    ),
                    predicate.values.clone(),
                );
                let rows = db_tx.query_all(stmt).await?;
                let mut filtered = Vec::with_capacity(rows.len());
                for row in &rows {
                    let kind: String = row.try_get("", "kind")?;
                    let amount: i64 = row.try_get("", "amount")?;
                    filtered.push((BudgetType::try_from(kind.as_str())?, amount));
                }
                aggregate(filtered)?
            };

            let items = if filter.limit == 0 || filter.offset >= totals.total {
                Vec::new()
            } else {
                let mut values = predicate.values.clone();
                values.push(i64::try_from(filter.limit).unwrap_or(i64::MAX).into());
                values.push(i64::try_from(filter.offset).unwrap_or(i64::MAX).into());

                let stmt = Statement::from_sql_and_values(
                    backend,
                    format!(
                        "SELECT b.id AS id, b.year AS year, b.month AS month, \
                         b.amount AS amount, b.\"type\" AS kind, b.author_id AS author_id, \
                         a.name AS author_name \
                         {FROM_JOINED} WHERE {} {PAGE_ORDER} LIMIT ? OFFSET ?",
                        predicate.sql
                    ),
                    values,
                );
                db_tx
                    .query_all(stmt)
                    .await?
                    .iter()
                    .map(stats_item)
                    .collect::<ResultEngine<Vec<_>>>()?
            };

            Ok(YearStats {
                total: totals.total,
                total_by_type: totals.by_type,
                items,
            })
        })
    }
}
