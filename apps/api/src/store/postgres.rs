//! Postgres implementations of the store seams.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::field::CareerFieldRow;
use crate::models::preferences::PreferenceProfileRow;
use crate::store::{FieldsStore, PreferencesStore, PreferencesUpdate};

#[derive(Clone)]
pub struct PgPreferencesStore {
    pool: PgPool,
}

impl PgPreferencesStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferencesStore for PgPreferencesStore {
    async fn get_preferences(
        &self,
        user_id: Uuid,
    ) -> Result<Option<PreferenceProfileRow>, AppError> {
        Ok(sqlx::query_as::<_, PreferenceProfileRow>(
            "SELECT user_id, likes, dislikes, hobbies, skills, work_styles, updated_at \
             FROM user_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn upsert_preferences(
        &self,
        user_id: Uuid,
        update: &PreferencesUpdate,
    ) -> Result<PreferenceProfileRow, AppError> {
        Ok(sqlx::query_as::<_, PreferenceProfileRow>(
            r#"
            INSERT INTO user_preferences
                (user_id, likes, dislikes, hobbies, skills, work_styles, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
            ON CONFLICT (user_id) DO UPDATE
            SET likes = EXCLUDED.likes,
                dislikes = EXCLUDED.dislikes,
                hobbies = EXCLUDED.hobbies,
                skills = EXCLUDED.skills,
                work_styles = EXCLUDED.work_styles,
                updated_at = NOW()
            RETURNING user_id, likes, dislikes, hobbies, skills, work_styles, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&update.likes)
        .bind(&update.dislikes)
        .bind(&update.hobbies)
        .bind(&update.skills)
        .bind(&update.work_styles)
        .fetch_one(&self.pool)
        .await?)
    }
}

#[derive(Clone)]
pub struct PgFieldsStore {
    pool: PgPool,
}

impl PgFieldsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FieldsStore for PgFieldsStore {
    async fn list_fields(&self) -> Result<Vec<CareerFieldRow>, AppError> {
        Ok(sqlx::query_as::<_, CareerFieldRow>(
            "SELECT field_id, name, description, keywords, typical_roles \
             FROM career_fields ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn get_field(&self, field_id: Uuid) -> Result<Option<CareerFieldRow>, AppError> {
        Ok(sqlx::query_as::<_, CareerFieldRow>(
            "SELECT field_id, name, description, keywords, typical_roles \
             FROM career_fields WHERE field_id = $1",
        )
        .bind(field_id)
        .fetch_optional(&self.pool)
        .await?)
    }
}
