use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    favorites::{
        dto::{AddFavoriteRequest, FavoriteItem, FavoritesResponse, RemoveFavoriteRequest},
        repo,
    },
    state::AppState,
};

pub fn favorites_routes() -> Router<AppState> {
    Router::new().route(
        "/favorites",
        get(list_favorites).post(add_favorite).delete(remove_favorite),
    )
}

#[instrument(skip(state, user))]
pub async fn list_favorites(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<FavoritesResponse>, ApiError> {
    let favorites = repo::list_by_user(&state.db, user.sub)
        .await?
        .into_iter()
        .map(FavoriteItem::from)
        .collect();
    Ok(Json(FavoritesResponse { favorites }))
}

#[instrument(skip(state, user, payload))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<FavoriteItem>), ApiError> {
    if payload.movie_id.trim().is_empty() {
        return Err(ApiError::BadRequest("movie_id is required".into()));
    }
    if payload.title.trim().is_empty() {
        return Err(ApiError::BadRequest("title is required".into()));
    }

    let favorite = repo::upsert(
        &state.db,
        user.sub,
        payload.movie_id.trim(),
        payload.title.trim(),
    )
    .await?;

    info!(user_id = %user.sub, movie_id = %favorite.movie_id, "favorite added");
    Ok((StatusCode::CREATED, Json(FavoriteItem::from(favorite))))
}

#[instrument(skip(state, user, payload))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(payload): Json<RemoveFavoriteRequest>,
) -> Result<StatusCode, ApiError> {
    let removed = repo::delete(&state.db, user.sub, payload.movie_id.trim()).await?;
    if removed == 0 {
        warn!(user_id = %user.sub, movie_id = %payload.movie_id, "favorite not found");
        return Err(ApiError::NotFound("favorite not found".into()));
    }

    info!(user_id = %user.sub, movie_id = %payload.movie_id, "favorite removed");
    Ok(StatusCode::NO_CONTENT)
}
