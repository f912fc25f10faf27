//! Budget records and yearly statistics on top of a sea-orm database.
//!
//! [`Engine`] owns the injected [`DatabaseConnection`](sea_orm::DatabaseConnection)
//! and exposes the author and budget stores plus the stats query.

pub use aggregate::{Totals, aggregate};
pub use authors::Author;
pub use budget_entries::{BudgetEntry, BudgetType};
pub use commands::{NewBudgetEntry, StatsFilter};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder, StatsItem, YearStats};

mod aggregate;
mod authors;
mod budget_entries;
mod commands;
mod error;
mod ops;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
