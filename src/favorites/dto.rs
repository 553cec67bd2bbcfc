use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::favorites::repo_types::Favorite;

#[derive(Debug, Deserialize)]
pub struct AddFavoriteRequest {
    pub movie_id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFavoriteRequest {
    pub movie_id: String,
}

#[derive(Debug, Serialize)]
pub struct FavoriteItem {
    pub id: Uuid,
    pub movie_id: String,
    pub title: String,
    pub created_at: OffsetDateTime,
}

impl From<Favorite> for FavoriteItem {
    fn from(f: Favorite) -> Self {
        Self {
            id: f.id,
            movie_id: f.movie_id,
            title: f.title,
            created_at: f.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteItem>,
}
