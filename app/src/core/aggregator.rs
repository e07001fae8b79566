use std::collections::{HashMap, HashSet};

use models::domains::sea_orm_active_enums::MatchStatus;
use models::schemas::leaderboard::{
    DrawPolicy, LeaderboardEntry, MatchLine, MatchResult, PlayerStatistics, RankingStrategy,
    win_rate,
};

use super::ranking::Ranking;
use super::records::{MatchRecord, Outcome, SideKey, UserRecord};
use super::window::DateWindow;

/// Which matches take part in an aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub window: DateWindow,
    pub participant: Option<String>,
}

impl MatchFilter {
    pub fn window(window: DateWindow) -> Self {
        Self {
            window,
            participant: None,
        }
    }

    pub fn with_participant(mut self, user_id: impl Into<String>) -> Self {
        self.participant = Some(user_id.into());
        self
    }

    /// Only completed matches are counted.
    pub fn admits(&self, record: &MatchRecord) -> bool {
        record.status == MatchStatus::Completed
            && self.window.contains(record.match_date)
            && self
                .participant
                .as_deref()
                .is_none_or(|id| record.side_of(id).is_some())
    }
}

/// Result of one aggregation run: every roster member in ranked order plus
/// the number of matches that could not be attributed.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    entries: Vec<LeaderboardEntry>,
    skipped: usize,
}

impl Aggregation {
    /// Full roster, including members without matches in the window.
    pub fn roster(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Members with at least one counted match, in ranked order.
    pub fn leaderboard(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|e| e.total_matches > 0)
    }

    pub fn into_roster(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    pub fn into_leaderboard(self) -> Vec<LeaderboardEntry> {
        self.entries
            .into_iter()
            .filter(|e| e.total_matches > 0)
            .collect()
    }

    pub fn entry(&self, user_id: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.user_id == user_id)
    }

    /// Matches dropped because a slot names someone outside the roster or
    /// the same player appears twice.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Computes per-member statistics and leaderboards from fetched records.
/// Holds no state between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsAggregator {
    ranking: RankingStrategy,
    draws: DrawPolicy,
}

impl StatsAggregator {
    pub const fn new(ranking: RankingStrategy, draws: DrawPolicy) -> Self {
        Self { ranking, draws }
    }

    pub const fn ranking(&self) -> RankingStrategy {
        self.ranking
    }

    pub const fn draws(&self) -> DrawPolicy {
        self.draws
    }

    pub const fn with_ranking(mut self, ranking: RankingStrategy) -> Self {
        self.ranking = ranking;
        self
    }

    pub fn aggregate(
        &self,
        matches: &[MatchRecord],
        users: &[UserRecord],
        filter: &MatchFilter,
    ) -> Aggregation {
        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(users.len());
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(users.len());

        for user in users {
            if !index.contains_key(user.id.as_str()) {
                index.insert(&user.id, entries.len());
                entries.push(LeaderboardEntry::new(&user.id, &user.display_name));
            }
        }

        let mut skipped = 0;
        for record in matches.iter().filter(|m| filter.admits(m)) {
            if !resolvable(record, |id| index.contains_key(id)) {
                skipped += 1;
                continue;
            }

            let outcome = record.outcome();
            for key in [SideKey::A, SideKey::B] {
                let points = record.points(key);
                for member in record.side(key).members() {
                    let entry = &mut entries[index[member]];
                    entry.total_points += points;
                    self.tally(entry, outcome, key);
                }
            }
        }

        for entry in &mut entries {
            entry.win_rate_percent = win_rate(entry.wins, entry.losses);
        }
        self.ranking.rank(&mut entries);

        Aggregation { entries, skipped }
    }

    fn tally(&self, entry: &mut LeaderboardEntry, outcome: Outcome, key: SideKey) {
        match outcome {
            Outcome::Winner(side) if side == key => {
                entry.wins += 1;
                entry.total_matches += 1;
            }
            Outcome::Winner(_) => {
                entry.losses += 1;
                entry.total_matches += 1;
            }
            Outcome::Undecided => {
                entry.draws += 1;
                if self.draws == DrawPolicy::CountAsPlayed {
                    entry.total_matches += 1;
                }
            }
        }
    }

    /// Statistics for a single member, with one line per counted match,
    /// newest first. Any participant filter on `filter` is replaced by `user_id`.
    /// Matches are skipped under the same rule as [`StatsAggregator::aggregate`].
    pub fn player_statistics(
        &self,
        matches: &[MatchRecord],
        users: &[UserRecord],
        user_id: &str,
        filter: &MatchFilter,
    ) -> PlayerStatistics {
        let filter = MatchFilter::window(filter.window).with_participant(user_id);
        let known: HashSet<&str> = users.iter().map(|u| u.id.as_str()).collect();

        let mut lines = Vec::new();
        let mut skipped = 0;
        let (mut played, mut won, mut lost, mut points) = (0u32, 0u32, 0u32, 0i64);

        for record in matches.iter().filter(|m| filter.admits(m)) {
            if !resolvable(record, |id| known.contains(id)) {
                skipped += 1;
                continue;
            }
            let Some(key) = record.side_of(user_id) else {
                continue;
            };

            let own = record.points(key);
            let result = match record.outcome() {
                Outcome::Winner(side) if side == key => MatchResult::Won,
                Outcome::Winner(_) => MatchResult::Lost,
                Outcome::Undecided => MatchResult::Undecided,
            };

            match result {
                MatchResult::Won => won += 1,
                MatchResult::Lost => lost += 1,
                MatchResult::Undecided => {}
            }
            if result != MatchResult::Undecided || self.draws == DrawPolicy::CountAsPlayed {
                played += 1;
            }
            points += own;

            lines.push(MatchLine {
                match_id: record.id.clone(),
                match_date: record.match_date,
                match_type: record.match_type,
                sets: record.sets_from(key),
                points: own,
                opponent_points: record.points(key.opponent()),
                result,
            });
        }

        lines.sort_by(|a, b| {
            b.match_date
                .cmp(&a.match_date)
                .then_with(|| a.match_id.cmp(&b.match_id))
        });

        PlayerStatistics {
            user_id: user_id.to_string(),
            window: filter.window.into(),
            total_matches: played,
            won_matches: won,
            lost_matches: lost,
            total_points: points,
            win_rate_percent: win_rate(won, lost),
            matches: lines,
            skipped_matches: skipped,
        }
    }
}

/// Every occupied slot names a distinct roster member.
fn resolvable(record: &MatchRecord, is_known: impl Fn(&str) -> bool) -> bool {
    !record.has_duplicate_participant() && record.participants().all(is_known)
}
