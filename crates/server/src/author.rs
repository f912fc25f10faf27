//! Author API endpoints

use api_types::author::{Author, AuthorNew};
use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};

use crate::{ServerError, server::ServerState};

pub async fn author_new(
    State(state): State<ServerState>,
    payload: Result<Json<AuthorNew>, JsonRejection>,
) -> Result<(StatusCode, Json<Author>), ServerError> {
    let Json(payload) = payload?;

    let author = state.engine.create_author(&payload.name).await?;
    tracing::info!(author_id = author.id, "author created");

    Ok((
        StatusCode::CREATED,
        Json(Author {
            id: author.id,
            name: author.name,
        }),
    ))
}
