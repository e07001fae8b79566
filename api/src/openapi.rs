use utoipa::OpenApi;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courtside API",
        version = "0.1.0",
        description = "Tennis club match log with monthly statistics and leaderboards",
        license(name = "MIT"),
    ),
    paths(
        crate::routers::root::health_get,
        crate::routers::user::users_get,
        crate::routers::user::users_id_get,
        crate::routers::user::me_get,
        crate::routers::user::me_post,
        crate::routers::user::me_patch,
        crate::routers::matches::matches_get,
        crate::routers::matches::matches_post,
        crate::routers::matches::schedule_post,
        crate::routers::matches::matches_id_get,
        crate::routers::matches::matches_id_delete,
        crate::routers::leaderboard::leaderboard_get,
        crate::routers::statistics::statistics_me_get,
        crate::routers::statistics::statistics_user_get,
        crate::routers::admin::admin_users_get,
        crate::routers::admin::admin_user_role_patch,
        crate::routers::admin::admin_user_enabled_patch,
        crate::routers::admin::admin_user_delete,
        crate::routers::admin::admin_users_recompute_post,
        crate::routers::admin::admin_matches_get,
        crate::routers::admin::admin_match_patch,
        crate::routers::admin::admin_match_delete,
        crate::routers::admin::admin_leaderboard_get,
    ),
    components(
        schemas(
            crate::models::response::ApiErrorResponse,
            models::schemas::user::UserSchema,
            models::schemas::user::UserSummarySchema,
            models::schemas::user::UserListSchema,
            models::schemas::user::DeletedUserSchema,
            models::schemas::user::CountersRefreshSchema,
            models::schemas::matches::MatchSchema,
            models::schemas::leaderboard::LeaderboardSchema,
            models::schemas::leaderboard::LeaderboardEntry,
            models::schemas::leaderboard::PlayerStatistics,
            models::schemas::leaderboard::MatchLine,
            models::schemas::leaderboard::MatchResult,
            models::schemas::leaderboard::WindowSchema,
            models::schemas::leaderboard::RankingStrategy,
            models::schemas::leaderboard::RosterView,
            models::params::user::CreateProfileParams,
            models::params::user::UpdateProfileParams,
            models::params::user::UpdateRoleParams,
            models::params::user::UpdateEnabledParams,
            models::params::matches::CreateMatchParams,
            models::params::matches::ScheduleMatchParams,
            models::params::matches::UpdateMatchParams,
            models::domains::matches::SetScore,
            models::domains::matches::Tiebreak,
            models::domains::sea_orm_active_enums::Gender,
            models::domains::sea_orm_active_enums::UserRole,
            models::domains::sea_orm_active_enums::MatchType,
            models::domains::sea_orm_active_enums::MatchStatus,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Service status"),
        (name = "users", description = "Member profiles"),
        (name = "matches", description = "Match log"),
        (name = "statistics", description = "Leaderboards and personal statistics"),
        (name = "admin", description = "Administration, admin role required"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Identity provider access token"))
                        .build(),
                ),
            );
        }
    }
}
