//=========================================================================
// Drag Signals
//=========================================================================
//
// Outbound `drag-begin` / `drag-end` notifications.
//
// Architecture:
//   emit(E) ─┬─► handlers     (synchronous, connection order)
//            └─► subscribers  (crossbeam channels, pruned on disconnect)
//
// Delivery is synchronous and in order: every handler has returned and
// every live channel holds the event before `emit()` returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::trace;

//=== Internal Dependencies ===============================================

use crate::core::stage::Timestamp;

//=== DragSignal ==========================================================

/// Session lifecycle notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSignal {
    /// A drag entered the stage at `timestamp`.
    Begin { timestamp: Timestamp },

    /// The drag left the stage or was released.
    End,
}

//=== SignalEmitter =======================================================

/// Identifies a connected handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalHandlerId(u64);

type Handler<E> = Box<dyn FnMut(&E)>;

/// Fan-out point for one signal type.
pub struct SignalEmitter<E: Clone> {
    handlers: Vec<(SignalHandlerId, Handler<E>)>,
    subscribers: Vec<Sender<E>>,
    next_id: u64,
}

impl<E: Clone> SignalEmitter<E> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    //--- Connection -------------------------------------------------------

    /// Connects a callback invoked synchronously on every emission.
    pub fn connect<F>(&mut self, handler: F) -> SignalHandlerId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SignalHandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Disconnects a callback. Returns `false` for unknown ids.
    pub fn disconnect(&mut self, id: SignalHandlerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(h, _)| *h != id);
        self.handlers.len() != before
    }

    /// Opens a channel receiving a copy of every later emission.
    ///
    /// Dropping the receiver unsubscribes on the next emission.
    pub fn subscribe(&mut self) -> Receiver<E> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    //--- Emission ---------------------------------------------------------

    pub fn emit(&mut self, event: &E) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }

        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());

        let pruned = before - self.subscribers.len();
        if pruned > 0 {
            trace!(target: "xdnd", "Pruned {} disconnected signal subscriber(s)", pruned);
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E: Clone> Default for SignalEmitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
