use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One catalog entry. `field_id` is stable and immutable; `keywords` is
/// the only attribute consulted by the matching engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerFieldRow {
    pub field_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub typical_roles: Option<String>,
}
