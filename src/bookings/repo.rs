use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::dto::BookSessionRequest;

/// Coaching-session booking, append-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Booking {
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        req: &BookSessionRequest,
    ) -> anyhow::Result<Booking> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (user_id, user_name, user_email, phone, date, "time", topic, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, user_id, user_name, user_email, phone, date, "time", topic, notes, created_at
            "#,
        )
        .bind(user_id)
        .bind(&req.user_name)
        .bind(&req.user_email)
        .bind(&req.phone)
        .bind(&req.date)
        .bind(&req.time)
        .bind(&req.topic)
        .bind(&req.notes)
        .fetch_one(db)
        .await?;
        Ok(booking)
    }
}
