//! Command structs for engine operations.
//!
//! These types group the parameters of write operations and of the stats
//! query, keeping call sites readable.

use crate::BudgetType;

/// Create a budget entry.
#[derive(Clone, Debug)]
pub struct NewBudgetEntry {
    pub year: i32,
    pub month: i32,
    pub amount: i64,
    pub kind: BudgetType,
    pub author_id: Option<i32>,
}

impl NewBudgetEntry {
    #[must_use]
    pub fn new(year: i32, month: i32, amount: i64, kind: BudgetType) -> Self {
        Self {
            year,
            month,
            amount,
            kind,
            author_id: None,
        }
    }

    #[must_use]
    pub fn author_id(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }
}

/// Filters and paging for the yearly statistics.
///
/// `author_name` is matched case-insensitively anywhere in the author's name.
/// When it is set, entries without an author never match.
#[derive(Clone, Debug)]
pub struct StatsFilter {
    pub year: i32,
    pub author_name: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

impl StatsFilter {
    #[must_use]
    pub fn new(year: i32, limit: u64, offset: u64) -> Self {
        Self {
            year,
            author_name: None,
            limit,
            offset,
        }
    }

    #[must_use]
    pub fn author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }
}
