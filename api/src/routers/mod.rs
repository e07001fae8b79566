use axum::{Router, middleware};

pub mod admin;
pub mod leaderboard;
pub mod matches;
pub mod root;
pub mod statistics;
pub mod user;

use app::state::AppState;
use admin::create_admin_router;
use leaderboard::create_leaderboard_router;
use matches::create_match_router;
use root::create_root_router;
use statistics::create_statistics_router;
use user::create_user_router;

use crate::middleware::identity::identity;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_root_router())
        .nest("/users", create_user_router())
        .nest("/matches", create_match_router())
        .nest("/leaderboard", create_leaderboard_router())
        .nest("/statistics", create_statistics_router())
        .nest("/admin", create_admin_router())
        .layer(middleware::from_fn_with_state(state.clone(), identity))
        .with_state(state)
}
