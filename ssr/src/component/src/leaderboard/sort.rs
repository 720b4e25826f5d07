use std::cmp::Ordering;

use super::types::{Collection, Entry, Record, ThisPlayer};

/// Caller-supplied replacement for the default ordering.
pub type CustomSort<'a> = &'a dyn Fn(Collection) -> Vec<Entry>;

/// Orders entries by `sort_by`, highest first.
///
/// A custom sort receives the collection untouched and its output is used as is.
/// Keyed collections are flattened to their entries.
pub fn sort_entries(
    collection: Collection,
    sort_by: &str,
    custom: Option<CustomSort<'_>>,
) -> Vec<Entry> {
    if let Some(sort) = custom {
        return sort(collection);
    }

    let mut entries = match collection {
        Collection::Sequence(entries) => entries,
        Collection::Keyed(entries) => entries.into_values().collect(),
    };
    entries.sort_by(|a, b| descending(a, b, sort_by));
    entries
}

fn descending(a: &impl Record, b: &impl Record, sort_by: &str) -> Ordering {
    b.sort_value(sort_by).total_cmp(&a.sort_value(sort_by))
}

/// 1-based rank of `player` in already sorted entries.
pub fn rank_of(sorted: &[Entry], player: &ThisPlayer) -> Option<u32> {
    sorted
        .iter()
        .position(|entry| player.is_player(entry))
        .and_then(|idx| u32::try_from(idx + 1).ok())
}
