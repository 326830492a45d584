pub mod leaderboard;
pub mod live;
pub mod roles;
pub mod summary;
