use consts::leaderboard::{INITIAL_RENDER_MARGIN, SCROLL_VIEW_OFFSET, SCROLL_VIEW_POSITION};
use leptos::html;
use leptos::prelude::*;
use thiserror::Error;

use super::types::ThisPlayer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToIndexOptions {
    /// Pixels subtracted from the final scroll position
    pub view_offset: f64,
    /// Where the row lands in the viewport: 0.0 top, 0.5 centre, 1.0 bottom
    pub view_position: f64,
}

impl Default for ScrollToIndexOptions {
    fn default() -> Self {
        Self {
            view_offset: SCROLL_VIEW_OFFSET,
            view_position: SCROLL_VIEW_POSITION,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("row {index} is not laid out yet ({rendered} rows rendered)")]
    NotLaidOut { index: usize, rendered: usize },
    #[error("list is not mounted")]
    NoHost,
}

/// The scrollable list the leaderboard is rendered into.
pub trait ListHost {
    /// Scrolls row `index` into view. Fails while the row has no layout yet.
    fn scroll_to_index(&self, index: usize, options: ScrollToIndexOptions)
        -> Result<(), ScrollError>;
}

/// How many rows to render eagerly so the player's own row is likely laid out
/// before the first scroll attempt.
pub fn initial_num_to_render(this_player: &ThisPlayer) -> usize {
    this_player.user_rank as usize + INITIAL_RENDER_MARGIN
}

/// Scroll offset that places a row at `options.view_position` of the viewport.
pub fn scroll_offset(
    row_top: f64,
    row_height: f64,
    viewport_height: f64,
    options: ScrollToIndexOptions,
) -> f64 {
    let offset = row_top - options.view_position * (viewport_height - row_height) - options.view_offset;
    offset.max(0.0)
}

/// Top of a row in the list's scroll coordinates, from viewport-relative
/// rects of the row and the list.
pub fn row_top_in_list(row_viewport_top: f64, list_viewport_top: f64, list_scroll_top: f64) -> f64 {
    row_viewport_top - list_viewport_top + list_scroll_top
}

/// List host backed by a scroll container. The direct children of `rows`,
/// somewhere inside the container, are the rendered rows.
#[derive(Clone, Copy)]
pub struct DomListHost {
    container: NodeRef<html::Div>,
    rows: NodeRef<html::Div>,
    on_scroll_to_index_failed: Callback<ScrollError>,
}

impl DomListHost {
    pub fn new(
        container: NodeRef<html::Div>,
        rows: NodeRef<html::Div>,
        on_scroll_to_index_failed: Callback<ScrollError>,
    ) -> Self {
        Self {
            container,
            rows,
            on_scroll_to_index_failed,
        }
    }
}

impl ListHost for DomListHost {
    fn scroll_to_index(
        &self,
        index: usize,
        options: ScrollToIndexOptions,
    ) -> Result<(), ScrollError> {
        let (Some(container), Some(rows)) =
            (self.container.get_untracked(), self.rows.get_untracked())
        else {
            return Err(ScrollError::NoHost);
        };

        let rows = rows.children();
        let row = u32::try_from(index).ok().and_then(|idx| rows.item(idx));
        let Some(row) = row else {
            let err = ScrollError::NotLaidOut {
                index,
                rendered: rows.length() as usize,
            };
            self.on_scroll_to_index_failed.run(err.clone());
            return Err(err);
        };

        let row_rect = row.get_bounding_client_rect();
        let row_top = row_top_in_list(
            row_rect.top(),
            container.get_bounding_client_rect().top(),
            f64::from(container.scroll_top()),
        );
        let top = scroll_offset(
            row_top,
            row_rect.height(),
            f64::from(container.client_height()),
            options,
        );
        container.set_scroll_top(top.round() as i32);
        Ok(())
    }
}
