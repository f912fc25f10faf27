//! Authors: who recorded a budget entry.
//!
//! Besides the display name, each row keeps `name_norm`, the search key the
//! stats author filter is matched against (see [`crate::util::search_key`]).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_norm: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget_entries::Entity")]
    BudgetEntries,
}

impl Related<super::budget_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetEntries.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
