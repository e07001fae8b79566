use std::borrow::Cow;

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::domains::matches::SetScore;
use crate::domains::sea_orm_active_enums::{MatchStatus, MatchType};

/// A completed scorecard submitted by side A's first player.
#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_lineup"))]
pub struct CreateMatchParams {
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    #[validate(length(min = 1))]
    pub player2_id: String,
    #[serde(default)]
    pub teammate_id: Option<String>,
    #[serde(default)]
    pub opponent2_id: Option<String>,
    #[validate(length(min = 1, max = 5), nested)]
    pub sets: Vec<SetScore>,
}

/// A match arranged ahead of time; it has no scores until an admin edits it.
#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_schedule_lineup"))]
pub struct ScheduleMatchParams {
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    #[validate(length(min = 1))]
    pub player2_id: String,
    #[serde(default)]
    pub teammate_id: Option<String>,
    #[serde(default)]
    pub opponent2_id: Option<String>,
}

/// Full replacement of a match by an administrator.
#[derive(Deserialize, Validate, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_lineup"))]
pub struct UpdateMatchParams {
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    #[validate(length(min = 1))]
    pub player1_id: String,
    #[serde(default)]
    pub teammate_id: Option<String>,
    #[validate(length(min = 1))]
    pub player2_id: String,
    #[serde(default)]
    pub opponent2_id: Option<String>,
    #[validate(length(max = 5), nested)]
    pub sets: Vec<SetScore>,
    pub status: Option<MatchStatus>,
}

fn lineup_error(message: &'static str) -> ValidationError {
    ValidationError::new("lineup").with_message(Cow::Borrowed(message))
}

/// Doubles need both partner slots, singles need neither, and nobody plays twice.
/// `player1` is `None` when side A's first player is the caller and not yet known.
pub fn check_lineup(
    match_type: MatchType,
    player1: Option<&str>,
    teammate: Option<&str>,
    player2: &str,
    opponent2: Option<&str>,
) -> Result<(), ValidationError> {
    match (match_type.is_doubles(), teammate, opponent2) {
        (true, Some(_), Some(_)) | (false, None, None) => {}
        (true, _, _) => return Err(lineup_error("doubles require a teammate and a second opponent")),
        (false, _, _) => return Err(lineup_error("singles cannot list a teammate or a second opponent")),
    }

    let ids: Vec<&str> = [player1, teammate, Some(player2), opponent2]
        .into_iter()
        .flatten()
        .collect();

    if ids.iter().any(|id| id.trim().is_empty()) {
        return Err(lineup_error("player ids cannot be blank"));
    }

    for (i, id) in ids.iter().enumerate() {
        if ids[i + 1..].contains(id) {
            return Err(lineup_error("a player cannot appear twice in one match"));
        }
    }

    Ok(())
}

fn validate_create_lineup(params: &CreateMatchParams) -> Result<(), ValidationError> {
    check_lineup(
        params.match_type,
        None,
        params.teammate_id.as_deref(),
        &params.player2_id,
        params.opponent2_id.as_deref(),
    )
}

fn validate_schedule_lineup(params: &ScheduleMatchParams) -> Result<(), ValidationError> {
    check_lineup(
        params.match_type,
        None,
        params.teammate_id.as_deref(),
        &params.player2_id,
        params.opponent2_id.as_deref(),
    )
}

fn validate_update_lineup(params: &UpdateMatchParams) -> Result<(), ValidationError> {
    check_lineup(
        params.match_type,
        Some(&params.player1_id),
        params.teammate_id.as_deref(),
        &params.player2_id,
        params.opponent2_id.as_deref(),
    )
}
