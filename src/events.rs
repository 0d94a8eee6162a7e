//! Publish/subscribe channel decoupling the widget managers.
//!
//! Delivery is synchronous and in subscription order. A handler failure is
//! logged and does not stop delivery to the remaining subscribers.

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::WidgetError;
use crate::geometry::Bounds;
use crate::managers::resize::ResizeEdge;
use crate::widget::WidgetId;

/// Stable channel names other code may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventChannel {
    DragStart,
    DragEnd,
    ResizeStart,
    ResizeEnd,
    FocusChanged,
    WidgetRegistered,
    WidgetClosed,
}

impl EventChannel {
    pub fn name(self) -> &'static str {
        match self {
            EventChannel::DragStart => "drag:start",
            EventChannel::DragEnd => "drag:end",
            EventChannel::ResizeStart => "resize:start",
            EventChannel::ResizeEnd => "resize:end",
            EventChannel::FocusChanged => "focus:changed",
            EventChannel::WidgetRegistered => "widget:registered",
            EventChannel::WidgetClosed => "widget:closed",
        }
    }
}

impl fmt::Display for EventChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub enum WidgetEvent {
    DragStart {
        id: WidgetId,
        bounds: Bounds,
    },
    DragEnd {
        id: WidgetId,
        bounds: Bounds,
    },
    ResizeStart {
        id: WidgetId,
        edge: ResizeEdge,
        bounds: Bounds,
    },
    ResizeEnd {
        id: WidgetId,
        bounds: Bounds,
    },
    FocusChanged {
        previous: Option<WidgetId>,
        current: Option<WidgetId>,
    },
    WidgetRegistered {
        id: WidgetId,
    },
    WidgetClosed {
        id: WidgetId,
    },
}

impl WidgetEvent {
    pub fn channel(&self) -> EventChannel {
        match self {
            WidgetEvent::DragStart { .. } => EventChannel::DragStart,
            WidgetEvent::DragEnd { .. } => EventChannel::DragEnd,
            WidgetEvent::ResizeStart { .. } => EventChannel::ResizeStart,
            WidgetEvent::ResizeEnd { .. } => EventChannel::ResizeEnd,
            WidgetEvent::FocusChanged { .. } => EventChannel::FocusChanged,
            WidgetEvent::WidgetRegistered { .. } => EventChannel::WidgetRegistered,
            WidgetEvent::WidgetClosed { .. } => EventChannel::WidgetClosed,
        }
    }
}

pub type EventHandler = Box<dyn FnMut(&WidgetEvent) -> Result<(), WidgetError>>;

struct Subscriber {
    id: u64,
    handler: EventHandler,
}

#[derive(Default)]
struct BusInner {
    subscribers: HashMap<EventChannel, Vec<Subscriber>>,
    // ids unsubscribed while their channel list was detached for delivery
    removed: BTreeSet<u64>,
    next_id: u64,
}

/// Single-threaded synchronous event bus.
#[derive(Default)]
pub struct WidgetEventBus {
    inner: RefCell<BusInner>,
}

/// Handle returned by [`WidgetEventBus::subscribe`]; pass it back to
/// [`WidgetEventBus::unsubscribe`] to stop delivery.
#[derive(Debug)]
pub struct Subscription {
    channel: EventChannel,
    id: u64,
}

impl WidgetEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, channel: EventChannel, handler: EventHandler) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner
            .subscribers
            .entry(channel)
            .or_default()
            .push(Subscriber { id, handler });
        Subscription { channel, id }
    }

    pub fn unsubscribe(&self, subscription: Subscription) {
        let mut inner = self.inner.borrow_mut();
        if let Some(list) = inner.subscribers.get_mut(&subscription.channel) {
            let before = list.len();
            list.retain(|subscriber| subscriber.id != subscription.id);
            if list.len() != before {
                return;
            }
        }
        // channel list is detached mid-publish; drop the handler afterwards
        inner.removed.insert(subscription.id);
    }

    /// Deliver `event` to every current subscriber of its channel, in
    /// subscription order. Handler failures are logged and skipped.
    pub fn publish(&self, event: &WidgetEvent) {
        let channel = event.channel();
        let mut detached = {
            let mut inner = self.inner.borrow_mut();
            match inner.subscribers.get_mut(&channel) {
                Some(list) if !list.is_empty() => std::mem::take(list),
                _ => return,
            }
        };
        for subscriber in &mut detached {
            if let Err(err) = (subscriber.handler)(event) {
                tracing::warn!(channel = %channel, error = %err, "event handler failed");
            }
        }
        let mut inner = self.inner.borrow_mut();
        let removed = std::mem::take(&mut inner.removed);
        let list = inner.subscribers.entry(channel).or_default();
        // subscribers added during delivery were appended to the fresh list;
        // keep original order first, then honor mid-delivery unsubscribes
        let added = std::mem::take(list);
        detached.extend(added);
        detached.retain(|subscriber| !removed.contains(&subscriber.id));
        *list = detached;
    }

    pub fn subscriber_count(&self, channel: EventChannel) -> usize {
        self.inner
            .borrow()
            .subscribers
            .get(&channel)
            .map(|list| list.len())
            .unwrap_or(0)
    }
}
