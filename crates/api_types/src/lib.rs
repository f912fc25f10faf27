use serde::{Deserialize, Serialize};

/// Category of a budget entry, `"income"` or `"expense"` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    Income,
    Expense,
}

pub mod author {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct AuthorNew {
        pub name: String,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Author {
        pub id: i32,
        pub name: String,
    }
}

pub mod budget {
    use std::collections::BTreeMap;

    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BudgetEntryNew {
        pub year: i32,
        /// 1 (January) to 12 (December).
        pub month: i32,
        /// Minor currency units, >= 0.
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        pub author_id: Option<i32>,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct BudgetEntry {
        pub id: i32,
        pub year: i32,
        pub month: i32,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        pub author_id: Option<i32>,
    }

    /// Query string of `GET /budget/year/{year}/stats`.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct YearStatsQuery {
        pub limit: u64,
        pub offset: u64,
        /// Case-insensitive substring of the author name.
        pub author_name: Option<String>,
    }

    #[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct YearStatsItem {
        pub year: i32,
        pub month: i32,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        pub author_name: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct YearStatsResponse {
        /// Number of entries matching the filter, across all pages.
        pub total: u64,
        /// Sum of `amount` per type over all matching entries.
        pub total_by_type: BTreeMap<BudgetType, i64>,
        /// The requested page, month ascending then amount descending.
        pub items: Vec<YearStatsItem>,
    }
}
