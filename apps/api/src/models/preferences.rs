use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A user's stored preference profile. At most one row per user; absence
/// means "not yet configured", which is distinct from a saved profile with
/// empty lists.
///
/// `likes`, `hobbies` and `skills` feed the matching engine. `dislikes`
/// and `work_styles` are stored for the profile surface but never scored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PreferenceProfileRow {
    pub user_id: Uuid,
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub hobbies: Vec<String>,
    pub skills: Vec<String>,
    pub work_styles: Vec<String>,
    pub updated_at: DateTime<Utc>,
}
