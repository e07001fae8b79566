pub mod leaderboard;
pub mod matches;
pub mod pagination;
pub mod user;
