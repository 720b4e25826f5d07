use component::leaderboard::{rank_of, sort_entries, Collection, Entry, Leaderboard, Record, ThisPlayer};
use consts::leaderboard::AVATAR_BASE;
use leptos::prelude::*;
use serde_json::{json, Value};

const DEMO_PLAYERS: u64 = 60;
const DEMO_PLAYER_ID: u64 = 42;
const BOOST: i64 = 10;

fn demo_collection() -> Collection {
    let players = (1..=DEMO_PLAYERS)
        .map(|id| {
            json!({
                "player_id": id,
                "name": format!("player{id}"),
                "score": (id * 37) % 101,
                "avatar": format!("{AVATAR_BASE}?seed={id}"),
            })
        })
        .collect();
    Collection::from_json_or_empty(Value::Array(players))
}

fn current_player(collection: &Collection) -> ThisPlayer {
    let mut me = ThisPlayer::new(DEMO_PLAYER_ID, 0);
    let sorted = sort_entries(collection.clone(), "score", None);
    me.user_rank = rank_of(&sorted, &me).unwrap_or_default();
    me
}

fn boost_score(collection: &mut Collection, player: &ThisPlayer) {
    let Collection::Sequence(entries) = collection else {
        return;
    };
    if let Some(entry) = entries.iter_mut().find(|e| player.is_player(&**e)) {
        let score = entry.sort_value("score") as i64 + BOOST;
        entry.0.insert("score".to_string(), json!(score));
    }
}

#[component]
pub fn DemoLeaderboard() -> impl IntoView {
    let data = RwSignal::new(demo_collection());
    let this_player = current_player(&data.get_untracked());
    let boost = {
        let me = this_player.clone();
        move |_| data.update(|c| boost_score(c, &me))
    };
    let on_row_press = Callback::new(|(entry, index): (Entry, usize)| {
        log::info!("row {} pressed: {}", index + 1, entry.label_text("name"));
    });

    view! {
        <div class="flex flex-col gap-4 p-4 mx-auto max-w-xl h-dvh">
            <button
                class="py-2 px-4 font-medium text-white bg-pink-600 rounded-lg hover:bg-pink-700"
                on:click=boost
            >
                {format!("Boost my score by {BOOST}")}
            </button>
            <div class="flex-1 min-h-0">
                <Leaderboard
                    data
                    sort_by="score"
                    label_by="name"
                    icon="avatar"
                    this_player
                    on_row_press
                />
            </div>
        </div>
    }
}
