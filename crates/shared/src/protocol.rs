use serde::{Deserialize, Serialize};

use crate::domain::CellId;

/// Application-level rejection marker carried in [`MoveResponse::status`].
///
/// Distinct from the transport-level HTTP status: the server answers 200 OK
/// and flags an illegal move through this field instead.
pub const MOVE_REJECTED_STATUS: i64 = 400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub source: CellId,
    pub target: CellId,
}

/// The server's verdict on one submitted move. `errorMessage` and
/// `isGameOver` may be absent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub status: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default)]
    pub is_game_over: bool,
}

impl MoveResponse {
    pub fn is_rejected(&self) -> bool {
        self.status == MOVE_REJECTED_STATUS
    }
}
