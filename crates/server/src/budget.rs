//! Budget API endpoints

use api_types::{
    BudgetType as ApiType,
    budget::{BudgetEntry, BudgetEntryNew, YearStatsItem, YearStatsQuery, YearStatsResponse},
};
use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};

use crate::{ServerError, server::ServerState};

fn map_type(kind: engine::BudgetType) -> ApiType {
    match kind {
        engine::BudgetType::Income => ApiType::Income,
        engine::BudgetType::Expense => ApiType::Expense,
    }
}

fn engine_type(kind: ApiType) -> engine::BudgetType {
    match kind {
        ApiType::Income => engine::BudgetType::Income,
        ApiType::Expense => engine::BudgetType::Expense,
    }
}

pub async fn budget_new(
    State(state): State<ServerState>,
    payload: Result<Json<BudgetEntryNew>, JsonRejection>,
) -> Result<(StatusCode, Json<BudgetEntry>), ServerError> {
    let Json(payload) = payload?;

    let mut cmd = engine::NewBudgetEntry::new(
        payload.year,
        payload.month,
        payload.amount,
        engine_type(payload.kind),
    );
    if let Some(author_id) = payload.author_id {
        cmd = cmd.author_id(author_id);
    }

    let entry = state.engine.create_budget_entry(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(BudgetEntry {
            id: entry.id,
            year: entry.year,
            month: entry.month,
            amount: entry.amount,
            kind: map_type(entry.kind),
            author_id: entry.author_id,
        }),
    ))
}

pub async fn year_stats(
    State(state): State<ServerState>,
    year: Result<Path<i32>, PathRejection>,
    query: Result<Query<YearStatsQuery>, QueryRejection>,
) -> Result<Json<YearStatsResponse>, ServerError> {
    let Path(year) = year?;
    let Query(query) = query?;

    let mut filter = engine::StatsFilter::new(year, query.limit, query.offset);
    if let Some(author_name) = query.author_name {
        filter = filter.author_name(author_name);
    }

    let stats = state.engine.year_stats(&filter).await?;

    let items = stats
        .items
        .into_iter()
        .map(|item| YearStatsItem {
            year: item.year,
            month: item.month,
            amount: item.amount,
            kind: map_type(item.kind),
            author_name: item.author_name,
        })
        .collect();

    Ok(Json(YearStatsResponse {
        total: stats.total,
        total_by_type: stats
            .total_by_type
            .into_iter()
            .map(|(kind, sum)| (map_type(kind), sum))
            .collect(),
        items,
    }))
}
