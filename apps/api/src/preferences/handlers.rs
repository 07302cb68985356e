use axum::{extract::State, Extension, Json};
use serde::Deserialize;

use crate::auth::claims::UserContext;
use crate::errors::AppError;
use crate::models::preferences::PreferenceProfileRow;
use crate::state::AppState;
use crate::store::PreferencesUpdate;

/// Upper bounds on stored preference lists, so one profile cannot balloon
/// the match scan.
const MAX_TAGS_PER_LIST: usize = 50;
const MAX_TAG_LEN: usize = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreferencesPayload {
    pub likes: Vec<String>,
    pub dislikes: Vec<String>,
    pub hobbies: Vec<String>,
    pub skills: Vec<String>,
    pub work_styles: Vec<String>,
}

/// GET /api/v1/preferences
///
/// Returns the caller's stored profile. 404 until the first save: absence
/// is a valid state distinct from a saved profile with empty lists.
pub async fn handle_get_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<PreferenceProfileRow>, AppError> {
    let profile = state.preferences.get_preferences(user.user_id).await?;
    profile
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No preferences saved yet".to_string()))
}

/// PUT /api/v1/preferences
///
/// Insert-or-replace keyed on the authenticated user id. The stored lists
/// are replaced wholesale, never appended; the user id always comes from
/// the verified credential, never from the payload.
pub async fn handle_put_preferences(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
    Json(payload): Json<PreferencesPayload>,
) -> Result<Json<PreferenceProfileRow>, AppError> {
    validate_lists(&payload)?;

    let update = PreferencesUpdate {
        likes: payload.likes,
        dislikes: payload.dislikes,
        hobbies: payload.hobbies,
        skills: payload.skills,
        work_styles: payload.work_styles,
    };
    let stored = state
        .preferences
        .upsert_preferences(user.user_id, &update)
        .await?;
    Ok(Json(stored))
}

fn validate_lists(payload: &PreferencesPayload) -> Result<(), AppError> {
    let lists = [
        ("likes", &payload.likes),
        ("dislikes", &payload.dislikes),
        ("hobbies", &payload.hobbies),
        ("skills", &payload.skills),
        ("work_styles", &payload.work_styles),
    ];
    for (name, list) in lists {
        if list.len() > MAX_TAGS_PER_LIST {
            return Err(AppError::Validation(format!(
                "Too many {name} entries (limit {MAX_TAGS_PER_LIST})"
            )));
        }
        if list.iter().any(|tag| tag.chars().count() > MAX_TAG_LEN) {
            return Err(AppError::Validation(format!(
                "{name} entries are limited to {MAX_TAG_LEN} characters"
            )));
        }
    }
    Ok(())
}
