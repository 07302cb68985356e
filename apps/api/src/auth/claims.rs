use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by the bearer token. `sub` is the stable user identifier
/// assigned by the identity provider.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserClaims {
    pub sub: String,
    pub exp: usize, // Expiration time (UNIX timestamp)
}

/// Verified caller identity, injected as a request extension by the auth
/// middleware.
#[derive(Clone, Debug)]
pub struct UserContext {
    pub user_id: Uuid,
}
