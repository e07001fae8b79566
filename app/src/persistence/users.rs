use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, IntoActiveModel,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};

use models::domains::sea_orm_active_enums::{MatchStatus, UserRole};
use models::domains::{matches, users};
use models::params::user::{CreateProfileParams, UpdateProfileParams};
use models::queries::user::UserQuery;

use crate::config::Config;
use crate::core::{MatchFilter, MatchRecord, UserRecord};
use crate::error::UserError;

/// Writes the profile row for an account the identity provider just accepted.
pub async fn create_profile(
    db: &DbConn,
    id: &str,
    params: CreateProfileParams,
) -> anyhow::Result<users::Model> {
    let existing = users::Entity::find()
        .filter(
            Condition::any()
                .add(users::Column::Id.eq(id))
                .add(users::Column::Email.eq(params.email.as_str())),
        )
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(UserError::AlreadyExists.into());
    }

    let user = users::ActiveModel {
        id: Set(id.to_string()),
        email: Set(params.email),
        name: Set(params.name.trim().to_string()),
        gender: Set(params.gender),
        role: Set(UserRole::User),
        is_enabled: Set(true),
        total_points: Set(0),
        total_matches: Set(0),
        won_matches: Set(0),
        created_at: Set(Utc::now().fixed_offset()),
    }
    .insert(db)
    .await?;

    tracing::info!(user_id = %user.id, "profile created");
    Ok(user)
}

pub async fn get_user(db: &DbConn, id: &str) -> Result<Option<users::Model>, DbErr> {
    users::Entity::find_by_id(id).one(db).await
}

/// Newest members first. `query.name` matches any part of the display name.
pub async fn list_users(db: &DbConn, query: UserQuery) -> Result<Vec<users::Model>, DbErr> {
    let mut select = users::Entity::find();
    if let Some(name) = query.name.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        select = select.filter(users::Column::Name.contains(name));
    }
    select
        .order_by_desc(users::Column::CreatedAt)
        .order_by_asc(users::Column::Id)
        .all(db)
        .await
}

async fn find_user(db: &DbConn, id: &str) -> anyhow::Result<users::Model> {
    get_user(db, id)
        .await?
        .ok_or_else(|| UserError::NotFound.into())
}

pub async fn update_profile(
    db: &DbConn,
    id: &str,
    params: UpdateProfileParams,
) -> anyhow::Result<users::Model> {
    let mut user = find_user(db, id).await?.into_active_model();
    if let Some(name) = params.name {
        user.name = Set(name.trim().to_string());
    }
    if let Some(gender) = params.gender {
        user.gender = Set(gender);
    }
    Ok(user.update(db).await?)
}

pub async fn set_role(db: &DbConn, id: &str, role: UserRole) -> anyhow::Result<users::Model> {
    let mut user = find_user(db, id).await?.into_active_model();
    user.role = Set(role);
    let user = user.update(db).await?;
    tracing::info!(user_id = %user.id, role = ?user.role, "role changed");
    Ok(user)
}

pub async fn set_enabled(db: &DbConn, id: &str, enabled: bool) -> anyhow::Result<users::Model> {
    let mut user = find_user(db, id).await?.into_active_model();
    user.is_enabled = Set(enabled);
    let user = user.update(db).await?;
    tracing::info!(user_id = %user.id, enabled, "account state changed");
    Ok(user)
}

/// Removes the member together with every match they hold a slot in.
/// Returns the number of matches removed.
pub async fn delete_user(db: &DbConn, id: &str) -> anyhow::Result<u64> {
    let txn = db.begin().await?;

    if users::Entity::find_by_id(id).one(&txn).await?.is_none() {
        return Err(UserError::NotFound.into());
    }

    let removed = matches::Entity::delete_many()
        .filter(super::involving(id))
        .exec(&txn)
        .await?
        .rows_affected;
    users::Entity::delete_by_id(id).exec(&txn).await?;

    txn.commit().await?;
    tracing::info!(user_id = %id, matches = removed, "user deleted");
    Ok(removed)
}

/// Rewrites the cached lifetime counters of every member from the full
/// completed match history. Returns the number of profiles written.
pub async fn refresh_lifetime_counters(db: &DbConn, config: &Config) -> anyhow::Result<usize> {
    let txn = db.begin().await?;

    let roster: Vec<UserRecord> = users::Entity::find()
        .all(&txn)
        .await?
        .into_iter()
        .map(UserRecord::from)
        .collect();
    let history: Vec<MatchRecord> = matches::Entity::find()
        .filter(matches::Column::Status.eq(MatchStatus::Completed))
        .all(&txn)
        .await?
        .into_iter()
        .map(MatchRecord::from)
        .collect();

    let aggregation =
        config
            .stats_aggregator()
            .aggregate(&history, &roster, &MatchFilter::default());
    if aggregation.skipped() > 0 {
        tracing::warn!(
            skipped = aggregation.skipped(),
            "matches with unknown or repeated players left out of lifetime counters"
        );
    }

    let entries = aggregation.into_roster();
    for entry in &entries {
        users::ActiveModel {
            id: Set(entry.user_id.clone()),
            total_points: Set(entry.total_points),
            total_matches: Set(i64::from(entry.total_matches)),
            won_matches: Set(i64::from(entry.wins)),
            ..Default::default()
        }
        .update(&txn)
        .await?;
    }

    txn.commit().await?;
    tracing::info!(users = entries.len(), "lifetime counters refreshed");
    Ok(entries.len())
}
