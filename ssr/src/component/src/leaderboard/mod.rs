pub mod list_host;
pub mod scroller;
pub mod sort;
pub mod table;
pub mod types;

use consts::leaderboard::{RENDER_AHEAD_MARGIN, RENDER_PAGE_SIZE, SCROLL_RETRY_INTERVAL};
use leptos::html;
use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, use_interval_fn, utils::Pausable,
    UseIntersectionObserverOptions,
};

pub use list_host::{DomListHost, ListHost, ScrollError, ScrollToIndexOptions};
pub use scroller::{ScrollState, VisibilityScroller};
pub use sort::{rank_of, sort_entries};
pub use table::{LeaderboardRow, RowConfig, RowModel, RowStyles};
pub use types::{Collection, Entry, LeaderboardError, Record, ThisPlayer};

/// Ranked list of players, highest `sort_by` value first.
///
/// The current player's row is highlighted and, once mounted, the list keeps
/// trying to scroll it into view for a few ticks.
#[component]
pub fn Leaderboard(
    /// Entries to rank, as a list or keyed by id
    #[prop(into)]
    data: Signal<Collection>,
    /// Field holding the score
    #[prop(into)]
    sort_by: String,
    /// Field holding the player's display name
    #[prop(into)]
    label_by: String,
    this_player: ThisPlayer,
    /// Replaces the default ordering; its output is shown as is
    #[prop(optional, into)]
    sort: Option<Callback<Collection, Vec<Entry>>>,
    /// Field holding an avatar URL
    #[prop(optional, into)]
    icon: Option<String>,
    #[prop(optional, into)] on_row_press: Option<Callback<(Entry, usize)>>,
    /// Replaces the default row
    #[prop(optional, into)]
    render_item: Option<Callback<(Entry, usize), AnyView>>,
    #[prop(optional, into)] container_style: Option<String>,
    #[prop(optional, into)] score_style: Option<String>,
    #[prop(optional, into)] rank_style: Option<String>,
    #[prop(optional, into)] label_style: Option<String>,
    #[prop(optional, into)] avatar_style: Option<String>,
    #[prop(optional, into)] odd_row_color: Option<String>,
    #[prop(optional, into)] even_row_color: Option<String>,
) -> impl IntoView {
    let list_ref = NodeRef::<html::Div>::new();
    let rows_ref = NodeRef::<html::Div>::new();
    let sentinel = NodeRef::<html::Div>::new();

    let sorted = sorted_entries(data, sort_by.clone(), sort);

    let row_config = RowConfig {
        sort_by,
        label_by,
        icon,
        this_player: this_player.clone(),
        styles: RowStyles {
            container: container_style,
            score: score_style,
            rank: rank_style,
            label: label_style,
            avatar: avatar_style,
            odd_row_color,
            even_row_color,
        },
    };
    let container_style = row_config.styles.container.clone().unwrap_or_default();

    // rows past this index are not rendered until the list is scrolled near its end
    let rendered = RwSignal::new(list_host::initial_num_to_render(&this_player));
    use_intersection_observer_with_options(
        sentinel,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if !entries.iter().any(|e| e.is_intersecting()) {
                return;
            }
            let total = sorted.with_untracked(Vec::len);
            let current = rendered.get_untracked();
            if current < total {
                rendered.set((current + RENDER_PAGE_SIZE).min(total));
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(RENDER_AHEAD_MARGIN.to_string())
            .root(Some(list_ref)),
    );

    let mut visibility = VisibilityScroller::new(&this_player);
    let failure = visibility.failure_flag();
    let host = DomListHost::new(
        list_ref,
        rows_ref,
        Callback::new(move |_: ScrollError| failure.raise()),
    );
    let mounted = visibility.mount();
    let visibility = StoredValue::new(visibility);
    let scroll_done = RwSignal::new(mounted.is_terminal());

    let Pausable { pause, .. } = use_interval_fn(
        move || {
            let state = visibility.try_update_value(|v| v.tick(&host));
            match state {
                Some(ScrollState::Scrolling { .. }) => {}
                Some(state) => {
                    log::debug!("auto-scroll to current player finished: {state:?}");
                    scroll_done.try_set(true);
                }
                None => {
                    scroll_done.try_set(true);
                }
            }
        },
        SCROLL_RETRY_INTERVAL.as_millis() as u64,
    );

    Effect::new(move |_| {
        if scroll_done.get() {
            pause();
        }
    });

    on_cleanup(move || {
        visibility.try_update_value(|v| v.unmount());
    });

    let rows = move || {
        let limit = rendered.get();
        sorted.with(|entries| {
            entries
                .iter()
                .take(limit)
                .cloned()
                .enumerate()
                .map(|(index, entry)| match render_item {
                    Some(render_item) => render_item.run((entry, index)),
                    None => view! {
                        <LeaderboardRow
                            entry
                            index
                            config=row_config.clone()
                            on_row_press
                        />
                    }
                    .into_any(),
                })
                .collect_view()
        })
    };

    // re-created with every page so a sentinel that is still in view reports again
    let end_of_list = move || {
        rendered.track();
        view! { <div node_ref=sentinel aria-hidden="true" class="w-full h-px"></div> }
    };

    view! {
        <div
            node_ref=list_ref
            class="overflow-y-auto relative w-full h-full"
            style=container_style
        >
            <div node_ref=rows_ref>{rows}</div>
            {end_of_list}
        </div>
    }
}

/// Entries in display order, recomputed whenever `data` changes.
fn sorted_entries(
    data: Signal<Collection>,
    sort_by: String,
    sort: Option<Callback<Collection, Vec<Entry>>>,
) -> Memo<Vec<Entry>> {
    Memo::new(move |_| {
        let collection = data.get();
        let sorted = match sort {
            Some(sort) => sort_entries(collection, &sort_by, Some(&|c: Collection| sort.run(c))),
            None => sort_entries(collection, &sort_by, None),
        };
        log::debug!("leaderboard sorted {} entries by {sort_by}", sorted.len());
        sorted
    })
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use consts::leaderboard::HIGHLIGHT_ROW_COLOR;
    use leptos::tachys::view::RenderHtml;
    use serde_json::json;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        let owner = Owner::new();
        owner.with(|| view().to_html())
    }

    fn podium() -> Collection {
        Collection::from_json_or_empty(json!([
            { "player_id": 1, "name": "alpha", "score": 10 },
            { "player_id": 2, "name": "bravo", "score": 30 },
            { "player_id": 3, "name": "charlie", "score": 20 },
        ]))
    }

    fn crowd(size: u64) -> Collection {
        let players = (1..=size)
            .map(|id| json!({ "player_id": id, "name": format!("p{id}"), "score": id }))
            .collect();
        Collection::from_json_or_empty(serde_json::Value::Array(players))
    }

    fn marker_row() -> Callback<(Entry, usize), AnyView> {
        Callback::new(|(entry, index): (Entry, usize)| {
            view! { <p class="custom-row">{index} {entry.label_text("name")}</p> }.into_any()
        })
    }

    #[test]
    fn default_rows_are_sorted_and_highlight_the_player() {
        let html = render(|| {
            let data = RwSignal::new(podium());
            view! {
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    this_player=ThisPlayer::new(3, 2)
                />
            }
            .into_any()
        });

        let at = |name: &str| html.find(name).unwrap();
        assert!(at("bravo") < at("charlie"));
        assert!(at("charlie") < at("alpha"));
        assert_eq!(html.matches(HIGHLIGHT_ROW_COLOR).count(), 1);
        assert!(!html.contains("<button"));
    }

    #[test]
    fn render_item_replaces_default_row() {
        let html = render(|| {
            let data = RwSignal::new(podium());
            view! {
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    this_player=ThisPlayer::new(3, 2)
                    render_item=marker_row()
                />
            }
            .into_any()
        });

        assert_eq!(html.matches("custom-row").count(), 3);
        assert!(!html.contains("rounded-[15px]"));
        assert!(!html.contains(HIGHLIGHT_ROW_COLOR));
    }

    #[test]
    fn pressable_rows_are_plain_buttons() {
        let html = render(|| {
            let data = RwSignal::new(podium());
            view! {
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    this_player=ThisPlayer::new(3, 2)
                    on_row_press=Callback::new(|_: (Entry, usize)| {})
                />
            }
            .into_any()
        });

        assert_eq!(html.matches("<button").count(), 3);
        assert_eq!(html.matches(r#"type="button""#).count(), 3);
    }

    #[test]
    fn only_the_initial_window_is_rendered() {
        let this_player = ThisPlayer::new(2, 2);
        let expected = list_host::initial_num_to_render(&this_player);
        let html = render(move || {
            let data = RwSignal::new(crowd(60));
            view! {
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    this_player
                    render_item=marker_row()
                />
            }
            .into_any()
        });

        assert_eq!(html.matches("custom-row").count(), expected);
    }

    #[test]
    fn short_lists_render_every_row() {
        let html = render(|| {
            let data = RwSignal::new(crowd(5));
            view! {
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    this_player=ThisPlayer::new(1, 5)
                    render_item=marker_row()
                />
            }
            .into_any()
        });

        assert_eq!(html.matches("custom-row").count(), 5);
    }

    #[test]
    fn sorted_entries_follow_data_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let data = RwSignal::new(podium());
            let sorted = sorted_entries(data.into(), "score".to_string(), None);
            let names = move || {
                sorted.with(|entries| entries.iter().map(|e| e.label_text("name")).collect::<Vec<_>>())
            };
            assert_eq!(names(), ["bravo", "charlie", "alpha"]);

            data.update(|c| {
                if let Collection::Sequence(entries) = c {
                    entries[0].0.insert("score".to_string(), json!(99));
                }
            });
            assert_eq!(names(), ["alpha", "bravo", "charlie"]);
        });
    }

    #[test]
    fn custom_sort_output_is_rendered_as_is() {
        let owner = Owner::new();
        owner.with(|| {
            let data = RwSignal::new(podium());
            let reversed = Callback::new(|c: Collection| {
                c.entries().into_iter().rev().cloned().collect::<Vec<Entry>>()
            });
            let sorted = sorted_entries(data.into(), "score".to_string(), Some(reversed));
            let ids: Vec<_> = sorted.with(|entries| entries.iter().map(|e| e.player_id().cloned()).collect());
            assert_eq!(ids, [Some(json!(3)), Some(json!(2)), Some(json!(1))]);
        });
    }
}
