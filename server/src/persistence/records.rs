//! Opening book records: a position keyed by FEN and the recommended moves
//! that follow it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Evaluation attached to a position.
///
/// Clients send either a number (`1`, `0.3`) or the text typed into a form
/// (`"0.0"`, `"+-"`). The value is stored with the matching SQLite type and
/// read back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalScore {
    /// Must precede `Number` so whole JSON numbers stay integers.
    Integer(i64),
    Number(f64),
    Text(String),
}

/// A stored opening position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    pub fen: String,
    /// Move that led to this position.
    pub san: String,
    pub name_ko: String,
    pub name_en: String,
    pub eval: EvalScore,
    pub desc: String,
}

/// A recommended follow-up move. The parent FEN is implied by the entry the
/// move belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub move_san: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub priority: i64,
    pub branches: Branches,
}

/// One position together with the complete set of moves recommended from it.
///
/// Saving an entry replaces the position's scalar fields and its whole move
/// list; moves are never merged.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningEntry {
    pub position: PositionRecord,
    pub moves: Vec<MoveRecord>,
}

/// Sub-line indicator of a move, persisted as text.
///
/// The mobile app writes a JSON-encoded list of line names
/// (`"[\"Najdorf\",\"Dragon\"]"`). A plain JSON array, a boolean or an integer
/// are accepted too and normalized to their JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branches(String);

impl Branches {
    /// Wrap text exactly as it is stored in the `branches` column.
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        // A list of strings always serializes.
        Self(serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string()))
    }

    pub fn as_encoded(&self) -> &str {
        &self.0
    }

    /// Sub-line names, or an empty list when the stored text is not a JSON
    /// list of strings.
    pub fn names(&self) -> Vec<String> {
        serde_json::from_str(&self.0).unwrap_or_default()
    }

    /// Whether the move leads to further sub-lines.
    pub fn has_branches(&self) -> bool {
        if !self.names().is_empty() {
            return true;
        }
        match self.0.trim() {
            "true" => true,
            other => other.parse::<i64>().map(|n| n != 0).unwrap_or(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BranchesRepr {
    Names(Vec<String>),
    Encoded(String),
    Flag(bool),
    Count(i64),
}

impl<'de> Deserialize<'de> for Branches {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let branches = match BranchesRepr::deserialize(deserializer)? {
            BranchesRepr::Names(names) => Branches::from_names(names),
            BranchesRepr::Encoded(text) => Branches(text),
            BranchesRepr::Flag(flag) => Branches(flag.to_string()),
            BranchesRepr::Count(count) => Branches(count.to_string()),
        };
        Ok(branches)
    }
}

impl Serialize for Branches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
