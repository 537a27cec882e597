use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    domain::CellId,
    protocol::{MoveRequest, MoveResponse},
};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub mod selection;
pub mod transport;

pub use selection::PendingMove;
pub use transport::{HttpMoveChannel, MoveChannel, MoveChannelError, MOVE_ENDPOINT};

/// Fixed path of the results view the player is sent to after a finished game.
pub const RESULTS_PATH: &str = "/result";

pub const GAME_OVER_NOTICE: &str = "The game is over.";

/// Fallback for a rejection that arrived without an error message.
pub const REJECTED_FALLBACK_NOTICE: &str = "The move was rejected.";

pub const SUBMISSION_FAILED_NOTICE: &str =
    "Could not reach the game server. The board was left unchanged.";

/// The page-level primitives the controller drives, supplied by whatever
/// hosts the board (a browser shell, a terminal frontend, a test fake).
#[async_trait]
pub trait BoardPage: Send + Sync {
    /// Blocking alert-style notification.
    async fn notify(&self, message: &str);

    /// Full reload of the board view from server-authoritative state.
    async fn reload(&self);

    /// Navigation to the results view at [`RESULTS_PATH`].
    async fn navigate_to_results(&self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Notify(String),
    ReloadBoard,
    NavigateToResults,
}

/// Maps a move verdict onto the ordered page actions it calls for.
///
/// The rejection and game-over checks are not mutually exclusive: a rejected
/// final move notifies twice. Game over ends the plan without a reload since
/// the page is about to be replaced; every other verdict falls through to a
/// full reload.
pub fn plan_ui_actions(response: &MoveResponse) -> Vec<UiAction> {
    let mut actions = Vec::new();

    if response.is_rejected() {
        let message = response
            .error_message
            .clone()
            .unwrap_or_else(|| REJECTED_FALLBACK_NOTICE.to_string());
        actions.push(UiAction::Notify(message));
    }

    if response.is_game_over {
        actions.push(UiAction::Notify(GAME_OVER_NOTICE.to_string()));
        actions.push(UiAction::NavigateToResults);
        return actions;
    }

    actions.push(UiAction::ReloadBoard);
    actions
}

/// Accumulates cell clicks into moves and drives the page with each verdict.
///
/// Holds the only [`PendingMove`]. A completed selection is reset before the
/// submission is dispatched, so a click landing while a move is in flight
/// starts a fresh selection; submissions are neither queued nor serialized.
pub struct SelectionController {
    channel: Arc<dyn MoveChannel>,
    page: Arc<dyn BoardPage>,
    pending: Mutex<PendingMove>,
}

impl SelectionController {
    pub fn new(channel: Arc<dyn MoveChannel>, page: Arc<dyn BoardPage>) -> Arc<Self> {
        Arc::new(Self {
            channel,
            page,
            pending: Mutex::new(PendingMove::new()),
        })
    }

    /// Feeds one cell-identifier event into the selection.
    ///
    /// The identifier is taken as-is; nothing checks that it names a real
    /// cell or differs from the first pick. When the click completes a move,
    /// the submission runs as a spawned task and this call returns without
    /// waiting for the verdict.
    pub async fn on_cell_clicked(self: &Arc<Self>, id: CellId) {
        debug!(%id, "cell clicked");

        let completed = {
            let mut pending = self.pending.lock().await;
            pending.select(id)
        };

        if let Some(request) = completed {
            let controller = Arc::clone(self);
            tokio::spawn(async move {
                controller.submit_move(request).await;
            });
        }
    }

    async fn submit_move(&self, request: MoveRequest) {
        debug!(source = %request.source, target = %request.target, "submitting move");

        match self.channel.submit(&request).await {
            Ok(response) => self.apply_verdict(&response).await,
            Err(error) => {
                warn!(%error, "move submission failed");
                self.page.notify(SUBMISSION_FAILED_NOTICE).await;
            }
        }
    }

    async fn apply_verdict(&self, response: &MoveResponse) {
        for action in plan_ui_actions(response) {
            match action {
                UiAction::Notify(message) => self.page.notify(&message).await,
                UiAction::ReloadBoard => self.page.reload().await,
                UiAction::NavigateToResults => self.page.navigate_to_results().await,
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
