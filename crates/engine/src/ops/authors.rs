use sea_orm::{ActiveValue, TransactionTrait, prelude::*};

use crate::{
    Author, EngineError, ResultEngine, authors,
    util::{normalize_required_name, search_key},
};

use super::{Engine, with_tx};

impl Engine {
    /// Creates an author and returns it with its assigned id.
    ///
    /// The name is trimmed and must not be empty.
    pub async fn create_author(&self, name: &str) -> ResultEngine<Author> {
        let name = normalize_required_name(name, "author")?;

        with_tx!(self, |db_tx| {
            let model = authors::ActiveModel {
                id: ActiveValue::NotSet,
                name_norm: ActiveValue::Set(search_key(&name)),
                name: ActiveValue::Set(name),
            }
            .insert(&db_tx)
            .await?;

            Ok(Author::from(model))
        })
    }

    /// Fetches an author by id.
    pub async fn author(&self, id: i32) -> ResultEngine<Author> {
        authors::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Author::from)
            .ok_or_else(|| EngineError::KeyNotFound(format!("author {id}")))
    }
}
