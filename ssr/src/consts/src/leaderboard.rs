use web_time::Duration;

pub const ODD_ROW_COLOR: &str = "white";
pub const EVEN_ROW_COLOR: &str = "#f2f5f7";
pub const HIGHLIGHT_ROW_COLOR: &str = "#EAC017";

/// Field every entry uses to identify its player.
pub const PLAYER_ID_FIELD: &str = "player_id";

pub const SCROLL_RETRY_INTERVAL: Duration = Duration::from_millis(750);
pub const MAX_SCROLL_ATTEMPTS: u32 = 5;
// Pixels kept above the target row
pub const SCROLL_VIEW_OFFSET: f64 = 5.0;
// 0.0 pins the row to the top of the viewport, 1.0 to the bottom
pub const SCROLL_VIEW_POSITION: f64 = 0.5;

/// Rows rendered past the current player's rank on first paint
pub const INITIAL_RENDER_MARGIN: usize = 20;
pub const RENDER_PAGE_SIZE: usize = 20;
/// Root margin of the end-of-list sentinel; the next page renders this far ahead
pub const RENDER_AHEAD_MARGIN: &str = "0px 0px 200px 0px";

pub const AVATAR_BASE: &str = "https://api.dicebear.com/7.x/big-smile/svg";
