use shared::{domain::CellId, protocol::MoveRequest};

/// In-progress move selection: a source slot and a target slot.
///
/// Each click fills the first empty slot; nothing validates the identifier
/// and nothing deselects. Once both slots are filled the selection is turned
/// into a [`MoveRequest`] and reset in the same step, so the state only ever
/// holds zero, one, or two picks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PendingMove {
    source: Option<CellId>,
    target: Option<CellId>,
}

impl PendingMove {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one cell click. Returns the completed request when this click
    /// filled the second slot, clearing both slots before returning.
    pub fn select(&mut self, id: CellId) -> Option<MoveRequest> {
        if self.source.is_none() {
            self.source = Some(id);
        } else {
            self.target = Some(id);
        }
        self.take_completed()
    }

    fn take_completed(&mut self) -> Option<MoveRequest> {
        if self.source.is_some() && self.target.is_some() {
            let source = self.source.take()?;
            let target = self.target.take()?;
            return Some(MoveRequest { source, target });
        }
        None
    }

    pub fn source(&self) -> Option<&CellId> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<&CellId> {
        self.target.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.target.is_none()
    }
}
