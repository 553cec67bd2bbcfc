use sqlx::PgPool;
use uuid::Uuid;

use crate::favorites::repo_types::Favorite;

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Favorite>> {
    sqlx::query_as::<_, Favorite>(
        r#"
        SELECT id, user_id, movie_id, title, created_at
        FROM favorites
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

/// Idempotent add: re-saving the same movie refreshes the title.
pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    movie_id: &str,
    title: &str,
) -> sqlx::Result<Favorite> {
    sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (user_id, movie_id, title)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, movie_id) DO UPDATE SET title = EXCLUDED.title
        RETURNING id, user_id, movie_id, title, created_at
        "#,
    )
    .bind(user_id)
    .bind(movie_id)
    .bind(title)
    .fetch_one(db)
    .await
}

/// Returns how many rows were removed (0 or 1).
pub async fn delete(db: &PgPool, user_id: Uuid, movie_id: &str) -> sqlx::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM favorites
        WHERE user_id = $1 AND movie_id = $2
        "#,
    )
    .bind(user_id)
    .bind(movie_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}
