use serde::{Deserialize, Serialize};
use web_sys::DragEvent;

use crate::core::errors::StoreResult;
use crate::models::ColumnId;

// Payloads ride in the DataTransfer as plain text so every browser accepts them
const DRAG_FORMAT: &str = "text/plain";

/// A column slot as reported by the drag gesture: raw column id plus index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropLocation {
    pub column_id: String,
    pub index: usize,
}

/// What the gesture reports when a card is released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropReport {
    pub draggable_id: String,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: String,
    pub source: ColumnId,
    pub dest: ColumnId,
    pub dest_index: usize,
}

impl DropReport {
    /// Turns a drop into a board move.
    ///
    /// `Ok(None)` means there is nothing to do: the drop was cancelled or the
    /// card landed back in its own slot.
    pub fn into_move(self) -> StoreResult<Option<MoveRequest>> {
        let Some(destination) = self.destination else {
            return Ok(None);
        };
        if destination == self.source {
            return Ok(None);
        }

        Ok(Some(MoveRequest {
            task_id: self.draggable_id,
            source: self.source.column_id.parse()?,
            dest: destination.column_id.parse()?,
            dest_index: destination.index,
        }))
    }
}

/// Data attached to a card when a drag starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragPayload {
    pub task_id: String,
    pub column_id: ColumnId,
    pub index: usize,
}

impl DragPayload {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn dropped_at(self, column_id: ColumnId, index: usize) -> DropReport {
        DropReport {
            draggable_id: self.task_id,
            source: DropLocation {
                column_id: self.column_id.as_str().to_string(),
                index: self.index,
            },
            destination: Some(DropLocation {
                column_id: column_id.as_str().to_string(),
                index,
            }),
        }
    }
}

pub fn write_payload(ev: &DragEvent, payload: &DragPayload) {
    let Some(transfer) = ev.data_transfer() else {
        log::warn!("dragstart without a DataTransfer for task {}", payload.task_id);
        return;
    };
    match payload.to_json() {
        Ok(json) => {
            if transfer.set_data(DRAG_FORMAT, &json).is_err() {
                log::warn!("failed to attach drag payload for task {}", payload.task_id);
            }
        }
        Err(e) => log::error!("failed to encode drag payload: {}", e),
    }
}

pub fn read_payload(ev: &DragEvent) -> Option<DragPayload> {
    let raw = ev.data_transfer()?.get_data(DRAG_FORMAT).ok()?;
    match DragPayload::from_json(&raw) {
        Ok(payload) => Some(payload),
        Err(e) => {
            // Text dragged in from outside the board lands here
            log::debug!("ignoring foreign drop payload: {}", e);
            None
        }
    }
}
