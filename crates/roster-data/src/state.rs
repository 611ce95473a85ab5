use chrono::NaiveDateTime;
use sqlx::FromRow;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Default, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub semester_reset_at: Option<NaiveDateTime>,
}
