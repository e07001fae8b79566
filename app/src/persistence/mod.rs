use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

use models::domains::matches::{Column as MatchColumn, Entity as MatchEntity};

use crate::core::DateWindow;

pub mod matches;
pub mod statistics;
pub mod users;

/// Matches where `user_id` occupies any of the four player slots.
pub(crate) fn involving(user_id: &str) -> Condition {
    Condition::any()
        .add(MatchColumn::Player1Id.eq(user_id))
        .add(MatchColumn::TeammateId.eq(user_id))
        .add(MatchColumn::Player2Id.eq(user_id))
        .add(MatchColumn::Opponent2Id.eq(user_id))
}

pub(crate) fn within(mut select: Select<MatchEntity>, window: &DateWindow) -> Select<MatchEntity> {
    if let Some(start) = window.start {
        select = select.filter(MatchColumn::MatchDate.gte(start));
    }
    if let Some(end) = window.end {
        select = select.filter(MatchColumn::MatchDate.lte(end));
    }
    select
}
