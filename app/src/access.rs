use models::domains::matches;
use models::schemas::user::{AuthSchema, CurrentUser};

use crate::error::AccessError;

/// Authorization decisions over an already resolved caller.
pub trait AccessPolicy {
    /// The caller has a profile row.
    fn require_user<'a>(&self, auth: &'a AuthSchema) -> Result<&'a CurrentUser, AccessError>;

    /// The caller has a profile row that has not been disabled.
    fn require_active<'a>(&self, auth: &'a AuthSchema) -> Result<&'a CurrentUser, AccessError> {
        let user = self.require_user(auth)?;
        if !user.is_enabled {
            return Err(AccessError::Disabled);
        }
        Ok(user)
    }

    fn require_admin<'a>(&self, auth: &'a AuthSchema) -> Result<&'a CurrentUser, AccessError>;

    fn can_delete_match(&self, user: &CurrentUser, record: &matches::Model) -> bool;
}

/// Decisions based on the stored role and enabled flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RolePolicy;

impl AccessPolicy for RolePolicy {
    fn require_user<'a>(&self, auth: &'a AuthSchema) -> Result<&'a CurrentUser, AccessError> {
        auth.user.as_ref().ok_or(AccessError::Unauthenticated)
    }

    fn require_admin<'a>(&self, auth: &'a AuthSchema) -> Result<&'a CurrentUser, AccessError> {
        let user = self.require_active(auth)?;
        if !user.is_admin() {
            return Err(AccessError::Forbidden);
        }
        Ok(user)
    }

    fn can_delete_match(&self, user: &CurrentUser, record: &matches::Model) -> bool {
        user.is_admin() || record.created_by == user.id || record.player1_id == user.id
    }
}
