pub mod leaderboard;

pub const DEMO_PAGE_TITLE: &str = "Leaderboard";
