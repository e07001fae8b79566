use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::matches::SetScore;
use crate::domains::sea_orm_active_enums::MatchType;

/// Ordering applied to leaderboard entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum RankingStrategy {
    /// Total points descending.
    #[default]
    #[serde(rename = "points")]
    PointTotal,
    /// Win rate descending, then matches played, then wins.
    #[serde(rename = "win_rate")]
    WinRateThenVolume,
}

impl FromStr for RankingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "points" | "point_total" => Ok(Self::PointTotal),
            "win_rate" | "winrate" => Ok(Self::WinRateThenVolume),
            other => Err(format!("unknown ranking strategy `{other}`")),
        }
    }
}

impl fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointTotal => f.write_str("points"),
            Self::WinRateThenVolume => f.write_str("win_rate"),
        }
    }
}

/// Whether a completed match with equal side totals counts as played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum DrawPolicy {
    #[default]
    #[serde(rename = "count")]
    CountAsPlayed,
    #[serde(rename = "exclude")]
    Exclude,
}

impl FromStr for DrawPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "count" => Ok(Self::CountAsPlayed),
            "exclude" => Ok(Self::Exclude),
            other => Err(format!("unknown draw policy `{other}`")),
        }
    }
}

/// `Ranked` drops members without matches in the window, `Full` keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RosterView {
    #[default]
    Ranked,
    Full,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub display_name: String,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub total_matches: u32,
    pub total_points: i64,
    /// Full precision; round with [`LeaderboardEntry::win_rate_display`] for display.
    pub win_rate_percent: f64,
}

impl LeaderboardEntry {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            wins: 0,
            losses: 0,
            draws: 0,
            total_matches: 0,
            total_points: 0,
            win_rate_percent: 0.0,
        }
    }

    /// Win rate rounded to one decimal place.
    pub fn win_rate_display(&self) -> f64 {
        round_one_decimal(self.win_rate_percent)
    }
}

pub fn win_rate(wins: u32, losses: u32) -> f64 {
    let decided = wins + losses;
    if decided == 0 {
        0.0
    } else {
        f64::from(wins) / f64::from(decided) * 100.0
    }
}

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WindowSchema {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Serialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardSchema {
    pub window: WindowSchema,
    pub ranking: RankingStrategy,
    pub entries: Vec<LeaderboardEntry>,
    pub skipped_matches: usize,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchResult {
    Won,
    Lost,
    Undecided,
}

/// One match seen from a single player's side. In `sets`, `player1Score` is always
/// that player's side.
#[derive(Serialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchLine {
    pub match_id: String,
    pub match_date: NaiveDate,
    pub match_type: MatchType,
    pub sets: Vec<SetScore>,
    pub points: i64,
    pub opponent_points: i64,
    pub result: MatchResult,
}

#[derive(Serialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatistics {
    pub user_id: String,
    pub window: WindowSchema,
    pub total_matches: u32,
    pub won_matches: u32,
    pub lost_matches: u32,
    pub total_points: i64,
    pub win_rate_percent: f64,
    pub matches: Vec<MatchLine>,
    pub skipped_matches: usize,
}
