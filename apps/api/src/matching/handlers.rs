use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::auth::claims::UserContext;
use crate::errors::AppError;
use crate::matching::engine::{rank_fields, MatchResult};
use crate::matching::normalize::normalized_tag_set;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResult>,
}

/// GET /api/v1/matches
///
/// Fetches the caller's preference profile and the field catalog
/// concurrently, then scores and ranks. A caller with no saved profile
/// gets an empty match list, not an error; a failed fetch of either
/// collaborator surfaces as an internal error. Matches are recomputed on
/// every request and never persisted.
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Extension(user): Extension<UserContext>,
) -> Result<Json<MatchesResponse>, AppError> {
    let (profile, catalog) = tokio::try_join!(
        state.preferences.get_preferences(user.user_id),
        state.fields.list_fields(),
    )?;

    let Some(profile) = profile else {
        // Valid identity, nothing configured yet.
        return Ok(Json(MatchesResponse {
            matches: Vec::new(),
        }));
    };

    let user_tags = normalized_tag_set(&profile.likes, &profile.hobbies, &profile.skills);
    let matches = rank_fields(&user_tags, &catalog);

    Ok(Json(MatchesResponse { matches }))
}
