use std::cmp::Ordering;

use models::schemas::leaderboard::{LeaderboardEntry, RankingStrategy};

/// Total order over leaderboard entries. Ties that survive the strategy's
/// keys fall back to user id so repeated runs give the same order.
pub trait Ranking {
    fn compare(&self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering;

    fn rank(&self, entries: &mut [LeaderboardEntry]) {
        entries.sort_by(|a, b| self.compare(a, b));
    }
}

impl Ranking for RankingStrategy {
    fn compare(&self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        let by_keys = match self {
            RankingStrategy::PointTotal => b.total_points.cmp(&a.total_points),
            RankingStrategy::WinRateThenVolume => b
                .win_rate_percent
                .total_cmp(&a.win_rate_percent)
                .then_with(|| b.total_matches.cmp(&a.total_matches))
                .then_with(|| b.wins.cmp(&a.wins)),
        };
        by_keys.then_with(|| a.user_id.cmp(&b.user_id))
    }
}
