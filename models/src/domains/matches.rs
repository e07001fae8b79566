use std::borrow::Cow;

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::sea_orm_active_enums::{MatchStatus, MatchType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tiebreak {
    #[validate(range(min = 0))]
    pub player1_score: i32,
    #[validate(range(min = 0))]
    pub player2_score: i32,
}

/// One set of a match. Side A is `player1`, side B is `player2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_tiebreak"))]
pub struct SetScore {
    #[validate(range(min = 0))]
    pub player1_score: i32,
    #[validate(range(min = 0))]
    pub player2_score: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub tiebreak: Option<Tiebreak>,
}

impl SetScore {
    pub const fn new(player1_score: i32, player2_score: i32) -> Self {
        Self {
            player1_score,
            player2_score,
            tiebreak: None,
        }
    }

    pub const fn with_tiebreak(mut self, player1_score: i32, player2_score: i32) -> Self {
        self.tiebreak = Some(Tiebreak {
            player1_score,
            player2_score,
        });
        self
    }

    /// A tiebreak is only recorded for sets that finished 7-6 either way.
    pub const fn allows_tiebreak(&self) -> bool {
        matches!(
            (self.player1_score, self.player2_score),
            (6, 7) | (7, 6)
        )
    }
}

fn validate_tiebreak(set: &SetScore) -> Result<(), ValidationError> {
    if set.tiebreak.is_some() && !set.allows_tiebreak() {
        return Err(ValidationError::new("tiebreak")
            .with_message(Cow::Borrowed("a tiebreak is only allowed on a 7-6 or 6-7 set")));
    }
    Ok(())
}

/// Ordered set scores, stored as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult, ToSchema)]
#[serde(transparent)]
pub struct MatchSets(pub Vec<SetScore>);

impl MatchSets {
    /// Sum of set scores for side A and side B.
    pub fn totals(&self) -> (i64, i64) {
        self.0.iter().fold((0, 0), |(a, b), set| {
            (a + i64::from(set.player1_score), b + i64::from(set.player2_score))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<SetScore>> for MatchSets {
    fn from(sets: Vec<SetScore>) -> Self {
        Self(sets)
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub match_date: Date,
    pub match_type: MatchType,
    pub player1_id: String,
    pub teammate_id: Option<String>,
    pub player2_id: String,
    pub opponent2_id: Option<String>,
    pub player1_score: i64,
    pub player2_score: i64,
    pub status: MatchStatus,
    #[sea_orm(column_type = "JsonBinary")]
    pub sets: MatchSets,
    pub created_by: String,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Every occupied player slot, side A first.
    pub fn participants(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.player1_id.as_str()),
            self.teammate_id.as_deref(),
            Some(self.player2_id.as_str()),
            self.opponent2_id.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.participants().any(|id| id == user_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Player1Id",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player1,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::TeammateId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Teammate,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Player2Id",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player2,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::Opponent2Id",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Opponent2,
}

impl ActiveModelBehavior for ActiveModel {}
