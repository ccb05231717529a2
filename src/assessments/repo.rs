use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Stored assessment: ordered answers plus an opaque results document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Assessment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub answers: Vec<String>,
    pub results: serde_json::Value,
    pub created_at: OffsetDateTime,
}

impl Assessment {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        answers: &[String],
        results: &serde_json::Value,
    ) -> anyhow::Result<Assessment> {
        let assessment = sqlx::query_as::<_, Assessment>(
            r#"
            INSERT INTO assessments (user_id, answers, results)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, answers, results, created_at
            "#,
        )
        .bind(user_id)
        .bind(answers)
        .bind(results)
        .fetch_one(db)
        .await?;
        Ok(assessment)
    }

    /// All assessments for one user, in insertion order.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<Assessment>> {
        let rows = sqlx::query_as::<_, Assessment>(
            r#"
            SELECT id, user_id, answers, results, created_at
            FROM assessments
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
