//! Crate error taxonomy.
//!
//! Most widget operations degrade to a no-op on bad input rather than
//! returning an error; these types cover the cases that are surfaced to a
//! caller or logged at a recovery boundary.

use thiserror::Error;

use crate::widget::WidgetId;

/// Failure inside a persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store i/o failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed store entry: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("store backend unavailable: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("unknown widget id {0}")]
    UnknownWidget(WidgetId),
    #[error("widget {0} is not draggable")]
    NotDraggable(WidgetId),
    #[error("widget {0} is not resizable")]
    NotResizable(WidgetId),
    #[error("another pointer session is already active")]
    SessionActive,
    #[error("event handler failed on {channel}: {message}")]
    Handler { channel: String, message: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}
