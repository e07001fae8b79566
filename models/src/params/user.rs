use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domains::sea_orm_active_enums::{Gender, UserRole};

/// Names are stored trimmed, so a blank name would end up empty on leaderboards.
fn display_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("name must not be blank".into()));
    }
    Ok(())
}

/// Profile row written right after the identity provider accepts a sign-up.
#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfileParams {
    #[validate(length(max = 64), custom(function = "display_name"))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub gender: Gender,
}

#[derive(Deserialize, Validate, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileParams {
    #[validate(length(max = 64), custom(function = "display_name"))]
    pub name: Option<String>,
    pub gender: Option<Gender>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateRoleParams {
    pub role: UserRole,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateEnabledParams {
    pub enabled: bool,
}
