//! Store seams for the two data collaborators.
//!
//! "No rows" is `Ok(None)` or an empty Vec; a failed query is `Err`. The
//! two outcomes are never collapsed: an empty catalog is a valid
//! zero-candidate case, a failed fetch is an internal error.
//!
//! Production implementations live in [`postgres`]; handler tests
//! substitute in-memory fakes behind the same traits.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::field::CareerFieldRow;
use crate::models::preferences::PreferenceProfileRow;

pub mod postgres;

/// Fields written by the preferences upsert. The user id comes from the
/// verified credential, never from the payload.
#[derive(Debug, Clone, Default)]
pub struct PreferencesUpdate {
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub hobbies: Vec<String>,
    pub skills: Vec<String>,
    pub work_styles: Vec<String>,
}

#[async_trait]
pub trait PreferencesStore: Send + Sync {
    /// Returns the profile for `user_id`, or `None` if the user has not
    /// saved preferences yet.
    async fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PreferenceProfileRow>, AppError>;

    /// Insert-or-replace keyed on `user_id`. The stored lists are replaced
    /// wholesale, never appended.
    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        update: &PreferencesUpdate,
    ) -> Result<PreferenceProfileRow, AppError>;
}

#[async_trait]
pub trait FieldsStore: Send + Sync {
    /// The full catalog, ordered by name. An empty catalog is `Ok(vec![])`,
    /// not an error.
    async fn list_fields(&self) -> Result<Vec<CareerFieldRow>, AppError>;

    async fn get_field(&self, field_id: Uuid) -> Result<Option<CareerFieldRow>, AppError>;
}
