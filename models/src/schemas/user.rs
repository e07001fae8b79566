use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::sea_orm_active_enums::{Gender, UserRole};
use crate::domains::users;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    pub id: String,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub role: UserRole,
    pub is_enabled: bool,
    pub total_points: i64,
    pub total_matches: i64,
    pub won_matches: i64,
    pub created_at: DateTime<Utc>,
}

impl From<users::Model> for UserSchema {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            gender: user.gender,
            role: user.role,
            is_enabled: user.is_enabled,
            total_points: user.total_points,
            total_matches: user.total_matches,
            won_matches: user.won_matches,
            created_at: user.created_at.to_utc(),
        }
    }
}

/// Public roster entry used when picking opponents.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserSummarySchema {
    pub id: String,
    pub name: String,
}

impl From<users::Model> for UserSummarySchema {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct UserListSchema {
    pub users: Vec<UserSchema>,
}

impl From<Vec<users::Model>> for UserListSchema {
    fn from(users: Vec<users::Model>) -> Self {
        Self {
            users: users.into_iter().map(UserSchema::from).collect(),
        }
    }
}

/// Identity of the caller, resolved once per request from the bearer token
/// and the caller's profile row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub is_enabled: bool,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

impl From<users::Model> for CurrentUser {
    fn from(user: users::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            role: user.role,
            is_enabled: user.is_enabled,
        }
    }
}

/// Request extension carrying the caller. `subject` is set whenever the token
/// verified, even if no profile row exists yet.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct AuthSchema {
    pub subject: Option<String>,
    pub user: Option<CurrentUser>,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUserSchema {
    pub id: String,
    pub removed_matches: u64,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountersRefreshSchema {
    pub updated_users: usize,
}
