use consts::leaderboard::{EVEN_ROW_COLOR, HIGHLIGHT_ROW_COLOR, ODD_ROW_COLOR};
use leptos::prelude::*;

use super::types::{Entry, Record, ThisPlayer};

/// Inline style overrides, applied on top of the default row classes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowStyles {
    pub container: Option<String>,
    pub score: Option<String>,
    pub rank: Option<String>,
    pub label: Option<String>,
    pub avatar: Option<String>,
    pub odd_row_color: Option<String>,
    pub even_row_color: Option<String>,
}

impl RowStyles {
    pub fn even_color(&self) -> &str {
        self.even_row_color.as_deref().unwrap_or(EVEN_ROW_COLOR)
    }

    pub fn odd_color(&self) -> &str {
        self.odd_row_color.as_deref().unwrap_or(ODD_ROW_COLOR)
    }

    pub fn row_color(&self, index: usize) -> &str {
        if index % 2 == 0 {
            self.even_color()
        } else {
            self.odd_color()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankPadding {
    SingleDigit,
    DoubleDigit,
}

impl RankPadding {
    pub fn for_index(index: usize) -> Self {
        if index < 9 {
            Self::SingleDigit
        } else {
            Self::DoubleDigit
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::SingleDigit => "pl-4 pr-1.5",
            Self::DoubleDigit => "pl-2.5 pr-0.5",
        }
    }
}

/// Everything a row needs besides the entry itself.
#[derive(Clone, Debug, PartialEq)]
pub struct RowConfig {
    pub sort_by: String,
    pub label_by: String,
    pub icon: Option<String>,
    pub this_player: ThisPlayer,
    pub styles: RowStyles,
}

/// What the default row shows for one entry.
#[derive(Clone, Debug, PartialEq)]
pub struct RowModel {
    pub rank: usize,
    pub rank_padding: RankPadding,
    pub background: String,
    pub highlighted: bool,
    pub avatar: Option<String>,
    pub label: String,
    pub score: String,
}

impl RowModel {
    pub fn new(entry: &impl Record, index: usize, config: &RowConfig) -> Self {
        let highlighted = config.this_player.is_player(entry);
        let background = if highlighted {
            HIGHLIGHT_ROW_COLOR
        } else {
            config.styles.row_color(index)
        };
        let avatar = config
            .icon
            .as_deref()
            .and_then(|icon| entry.field(icon))
            .and_then(|uri| uri.as_str())
            .filter(|uri| !uri.is_empty())
            .map(str::to_string);

        Self {
            rank: index + 1,
            rank_padding: RankPadding::for_index(index),
            background: background.to_string(),
            highlighted,
            avatar,
            label: entry.label_text(&config.label_by),
            score: entry.score_text(&config.sort_by),
        }
    }
}

#[component]
pub fn LeaderboardRow(
    entry: Entry,
    index: usize,
    config: RowConfig,
    on_row_press: Option<Callback<(Entry, usize)>>,
) -> impl IntoView {
    let row = RowModel::new(&entry, index, &config);
    let styles = config.styles;

    let row_view = view! {
        <div
            class="flex relative justify-between items-center py-[15px] mb-[15px] rounded-[15px] border-[3px] border-transparent"
            class:font-semibold=row.highlighted
            style=format!("background-color: {};", row.background)
        >
            <div class="flex flex-1 items-center min-w-0">
                <span
                    class=format!("text-[17px] font-bold mr-[5px] {}", row.rank_padding.class())
                    style=styles.rank.unwrap_or_default()
                >
                    {row.rank}
                </span>
                {row.avatar.map(|src| {
                    view! {
                        <img
                            src=src
                            alt=""
                            class="mr-2.5 rounded-full w-[30px] h-[30px]"
                            style=styles.avatar.clone().unwrap_or_default()
                        />
                    }
                })}
                <span class="flex-1 pr-20 text-[17px] truncate" style=styles.label.unwrap_or_default()>
                    {row.label}
                </span>
            </div>
            <span
                class="absolute text-xl font-bold right-[15px] pl-[15px]"
                style=styles.score.unwrap_or_default()
            >
                {row.score}
            </span>
        </div>
    };

    match on_row_press {
        Some(on_row_press) => view! {
            <button
                type="button"
                class="block w-full text-left rounded-[15px] transition-[filter] hover:brightness-95 focus-visible:outline-2 focus-visible:outline-pink-600"
                on:click=move |_| on_row_press.run((entry.clone(), index))
            >
                {row_view}
            </button>
        }
        .into_any(),
        None => row_view.into_any(),
    }
}
