use consts::leaderboard::PLAYER_ID_FIELD;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("leaderboard data must be an array or an object of records: {0}")]
    InvalidCollection(String),
    #[error("leaderboard entry must be an object, got {0}")]
    InvalidEntry(String),
}

/// Anything the leaderboard can read fields from by name.
pub trait Record {
    fn field(&self, name: &str) -> Option<&Value>;

    /// Numeric value used for ordering. Missing or non-numeric values count as 0.
    fn sort_value(&self, name: &str) -> f64 {
        self.field(name).map(numeric_value).unwrap_or(0.0)
    }

    /// Text shown in the score column; absent and falsy values show as "0".
    fn score_text(&self, name: &str) -> String {
        match self.field(name) {
            None => "0".to_string(),
            Some(value) if is_falsy(value) => "0".to_string(),
            Some(Value::String(s)) => s.clone(),
            // f64 Display prints 30.0 as "30"
            Some(Value::Number(n)) if n.is_f64() => {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
            Some(value) => value.to_string(),
        }
    }

    fn label_text(&self, name: &str) -> String {
        match self.field(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(value) => value.to_string(),
        }
    }
}

fn numeric_value(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) if s.trim().is_empty() => 0.0,
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };
    if n.is_nan() {
        0.0
    } else {
        n
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n == 0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// One ranked participant. The schema is open: which fields hold the score,
/// label and avatar is decided by the leaderboard's props.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Entry(pub Map<String, Value>);

impl Entry {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn player_id(&self) -> Option<&Value> {
        self.get(PLAYER_ID_FIELD)
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }
}

impl Record for Entry {
    fn field(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl From<Map<String, Value>> for Entry {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Entry {
    type Error = LeaderboardError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(LeaderboardError::InvalidEntry(other.to_string())),
        }
    }
}

/// Leaderboard input, either a plain list or records keyed by an opaque id.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Collection {
    Sequence(Vec<Entry>),
    Keyed(IndexMap<String, Entry>),
}

impl Default for Collection {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl Collection {
    pub fn from_json(value: Value) -> Result<Self, LeaderboardError> {
        serde_json::from_value(value).map_err(|e| LeaderboardError::InvalidCollection(e.to_string()))
    }

    /// Malformed data renders as an empty leaderboard instead of failing.
    pub fn from_json_or_empty(value: Value) -> Self {
        Self::from_json(value).unwrap_or_else(|e| {
            log::warn!("ignoring leaderboard data: {e}");
            Self::default()
        })
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(entries) => entries.len(),
            Self::Keyed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn entries(&self) -> Vec<&Entry> {
        match self {
            Self::Sequence(entries) => entries.iter().collect(),
            Self::Keyed(entries) => entries.values().collect(),
        }
    }
}

impl From<Vec<Entry>> for Collection {
    fn from(entries: Vec<Entry>) -> Self {
        Self::Sequence(entries)
    }
}

impl From<IndexMap<String, Entry>> for Collection {
    fn from(entries: IndexMap<String, Entry>) -> Self {
        Self::Keyed(entries)
    }
}

/// The viewing player: who to highlight and which rank to scroll to.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ThisPlayer {
    pub player_id: Value,
    #[serde(rename = "userRank", default)]
    pub user_rank: u32,
}

impl ThisPlayer {
    pub fn new(player_id: impl Into<Value>, user_rank: u32) -> Self {
        Self {
            player_id: player_id.into(),
            user_rank,
        }
    }

    /// 0-based row index of the player, `None` when no rank is known.
    pub fn target_index(&self) -> Option<usize> {
        (self.user_rank as usize).checked_sub(1)
    }

    pub fn is_player(&self, entry: &impl Record) -> bool {
        entry
            .field(PLAYER_ID_FIELD)
            .is_some_and(|id| same_id(id, &self.player_id))
    }
}

// numbers compare by value, so 2 and 2.0 are the same id
fn same_id(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => a == b,
    }
}
