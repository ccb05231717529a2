use serde::{Deserialize, Serialize};

/// Request body for booking a coaching session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSessionRequest {
    pub user_name: String,
    pub user_email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub topic: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
