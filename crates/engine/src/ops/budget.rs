use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    BudgetEntry, EngineError, NewBudgetEntry, ResultEngine, authors, budget_entries,
    util::{validate_amount, validate_month},
};

use super::{Engine, with_tx};

impl Engine {
    /// Records a budget entry and returns it as persisted.
    ///
    /// Month and amount are validated before the database is touched. A set
    /// `author_id` must name an existing author.
    pub async fn create_budget_entry(&self, cmd: NewBudgetEntry) -> ResultEngine<BudgetEntry> {
        validate_month(cmd.month)?;
        validate_amount(cmd.amount)?;

        with_tx!(self, |db_tx| {
            if let Some(author_id) = cmd.author_id {
                let exists = authors::Entity::find_by_id(author_id)
                    .one(&db_tx)
                    .await?
                    .is_some();
                if !exists {
                    return Err(EngineError::KeyNotFound(format!("author {author_id}")));
                }
            }

            let model = budget_entries::ActiveModel {
                id: ActiveValue::NotSet,
                year: ActiveValue::Set(cmd.year),
                month: ActiveValue::Set(cmd.month),
                amount: ActiveValue::Set(cmd.amount),
                kind: ActiveValue::Set(cmd.kind.as_str().to_string()),
                author_id: ActiveValue::Set(cmd.author_id),
            }
            .insert(&db_tx)
            .await?;

            BudgetEntry::try_from(model)
        })
    }
}
