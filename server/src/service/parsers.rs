//! Parsing of request bodies into domain types.
//!
//! Every check happens here, before any storage work starts: a request either
//! becomes a complete [`OpeningEntry`] or a [`PayloadError`].

use serde::Deserialize;

use crate::persistence::{MoveRecord, OpeningEntry, PositionRecord};

/// Errors raised while turning a request body into an [`OpeningEntry`].
#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("unreadable body: {0}")]
    Body(String),
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

/// Body of `POST /save_data`.
#[derive(Debug, Deserialize)]
pub struct SaveDataRequest {
    pub position: PositionRecord,
    pub moves: Vec<MoveRecord>,
}

impl SaveDataRequest {
    /// Check the fields serde cannot, and produce the entry to store.
    pub fn into_entry(self) -> Result<OpeningEntry, PayloadError> {
        if self.position.fen.trim().is_empty() {
            return Err(PayloadError::MissingField("position.fen"));
        }
        Ok(OpeningEntry {
            position: self.position,
            moves: self.moves,
        })
    }
}

pub fn parse_save_request(body: &[u8]) -> Result<OpeningEntry, PayloadError> {
    let request: SaveDataRequest = serde_json::from_slice(body)?;
    request.into_entry()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::EvalScore;
    use serde_json::json;

    fn payload() -> serde_json::Value {
        json!({
            "position": {
                "fen": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq",
                "san": "e4",
                "name_ko": "킹스폰",
                "name_en": "King Pawn",
                "eval": "0.3",
                "desc": "opening"
            },
            "moves": [
                {"move_san": "c5", "name": "Sicilian", "type": "best", "priority": 1,
                 "branches": "[\"Najdorf\",\"Dragon\"]"},
                {"move_san": "e5", "name": "Open Game", "type": "book", "priority": 2,
                 "branches": "[]"}
            ]
        })
    }

    #[test]
    fn test_parse_valid_request() {
        let entry = parse_save_request(payload().to_string().as_bytes()).unwrap();
        assert_eq!(entry.position.san, "e4");
        assert_eq!(entry.position.eval, EvalScore::Text("0.3".to_string()));
        assert_eq!(entry.moves.len(), 2);
        assert_eq!(entry.moves[0].move_san, "c5");
        assert_eq!(entry.moves[0].kind, "best");
        assert!(entry.moves[0].branches.has_branches());
        assert!(!entry.moves[1].branches.has_branches());
    }

    #[test]
    fn test_missing_position_field() {
        let mut body = payload();
        body["position"].as_object_mut().unwrap().remove("name_en");
        let err = parse_save_request(body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
        assert!(err.to_string().contains("name_en"), "got: {err}");
    }

    #[test]
    fn test_missing_move_field() {
        let mut body = payload();
        body["moves"][1].as_object_mut().unwrap().remove("priority");
        let err = parse_save_request(body.to_string().as_bytes()).unwrap_err();
        assert!(err.to_string().contains("priority"), "got: {err}");
    }

    #[test]
    fn test_missing_moves_list() {
        let mut body = payload();
        body.as_object_mut().unwrap().remove("moves");
        assert!(parse_save_request(body.to_string().as_bytes()).is_err());
    }

    #[test]
    fn test_empty_fen_rejected() {
        let mut body = payload();
        body["position"]["fen"] = json!("  ");
        let err = parse_save_request(body.to_string().as_bytes()).unwrap_err();
        assert!(matches!(err, PayloadError::MissingField("position.fen")));
    }

    #[test]
    fn test_not_json() {
        let err = parse_save_request(b"fen=start").unwrap_err();
        assert!(matches!(err, PayloadError::Json(_)));
    }
}
