use std::cell::Cell;

use component::leaderboard::{
    list_host::initial_num_to_render, scroller::FailureFlag, sort_entries, Collection, ListHost,
    RowConfig, RowModel, RowStyles, ScrollError, ScrollState, ScrollToIndexOptions, ThisPlayer,
    VisibilityScroller,
};
use consts::leaderboard::{EVEN_ROW_COLOR, HIGHLIGHT_ROW_COLOR, MAX_SCROLL_ATTEMPTS, ODD_ROW_COLOR};
use serde_json::json;

/// Only rows below `rendered` have a layout.
struct WindowedHost {
    rendered: usize,
    failure: FailureFlag,
    attempts: Cell<u32>,
}

impl ListHost for WindowedHost {
    fn scroll_to_index(
        &self,
        index: usize,
        _options: ScrollToIndexOptions,
    ) -> Result<(), ScrollError> {
        self.attempts.set(self.attempts.get() + 1);
        if index < self.rendered {
            Ok(())
        } else {
            self.failure.raise();
            Err(ScrollError::NotLaidOut {
                index,
                rendered: self.rendered,
            })
        }
    }
}

fn row_config(this_player: ThisPlayer) -> RowConfig {
    RowConfig {
        sort_by: "score".to_string(),
        label_by: "name".to_string(),
        icon: Some("avatar".to_string()),
        this_player,
        styles: RowStyles::default(),
    }
}

#[test]
fn sorted_rows_rank_and_highlight_current_player() {
    let data = Collection::from_json(json!([
        { "player_id": 1, "name": "ana", "score": 10 },
        { "player_id": 2, "name": "bo", "score": 30, "avatar": "https://img.example/bo.png" },
        { "player_id": 3, "name": "cy", "score": 20 },
    ]))
    .unwrap();
    let config = row_config(ThisPlayer::new(2, 1));

    let rows: Vec<RowModel> = sort_entries(data, "score", None)
        .iter()
        .enumerate()
        .map(|(index, entry)| RowModel::new(entry, index, &config))
        .collect();

    let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["bo", "cy", "ana"]);
    let ranks: Vec<_> = rows.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, [1, 2, 3]);

    assert_eq!(rows[0].background, HIGHLIGHT_ROW_COLOR);
    assert_eq!(rows[0].avatar.as_deref(), Some("https://img.example/bo.png"));
    assert_eq!(rows[1].background, ODD_ROW_COLOR);
    assert_eq!(rows[2].background, EVEN_ROW_COLOR);
    assert_eq!(rows[2].avatar, None);
}

#[test]
fn auto_scroll_gives_up_quietly_on_short_list() {
    let this_player = ThisPlayer::new(7, 50);
    let mut scroller = VisibilityScroller::new(&this_player);
    let host = WindowedHost {
        rendered: 10,
        failure: scroller.failure_flag(),
        attempts: Cell::new(0),
    };

    scroller.mount();
    let mut ticks = 0;
    while !scroller.state().is_terminal() {
        scroller.tick(&host);
        ticks += 1;
        assert!(ticks <= MAX_SCROLL_ATTEMPTS, "scroller never stopped");
    }

    assert_eq!(
        scroller.state(),
        ScrollState::Exhausted {
            attempts: MAX_SCROLL_ATTEMPTS
        }
    );
    assert_eq!(host.attempts.get(), MAX_SCROLL_ATTEMPTS);
}

#[test]
fn initial_window_reaches_current_player() {
    let this_player = ThisPlayer::new(7, 50);
    let mut scroller = VisibilityScroller::new(&this_player);
    let host = WindowedHost {
        rendered: initial_num_to_render(&this_player),
        failure: scroller.failure_flag(),
        attempts: Cell::new(0),
    };

    scroller.mount();
    assert_eq!(scroller.tick(&host), ScrollState::Succeeded { attempts: 1 });
}

#[test]
fn unmount_mid_retry_stops_attempts() {
    let this_player = ThisPlayer::new(7, 50);
    let mut scroller = VisibilityScroller::new(&this_player);
    let host = WindowedHost {
        rendered: 10,
        failure: scroller.failure_flag(),
        attempts: Cell::new(0),
    };

    scroller.mount();
    scroller.tick(&host);
    scroller.tick(&host);
    scroller.unmount();
    for _ in 0..10 {
        scroller.tick(&host);
    }
    assert_eq!(scroller.state(), ScrollState::Unmounted);
    assert_eq!(host.attempts.get(), 2);
}
