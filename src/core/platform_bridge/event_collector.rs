//=========================================================================
// Event Collector
//=========================================================================
//
// Drains the inbound Xdnd channel with bounded polling and shutdown
// detection.
//
// Architecture:
//   Receiver<XdndEvent> → collect()/collect_blocking() → events → TickControl
//
// Events are kept in delivery order; nothing is coalesced. A `Shutdown`
// ends collection but every event queued before it is still returned.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::XdndEvent;

//=== TickControl =========================================================

/// Service loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects inbound events with bounded polling.
pub(crate) struct EventCollector {
    receiver: Receiver<XdndEvent>,
    events: Vec<XdndEvent>,
    max_events: usize,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<XdndEvent>, max_events: usize) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
            max_events,
        }
    }

    /// Collects pending events without blocking (bounded to prevent
    /// starvation).
    pub(crate) fn collect(&mut self) -> TickControl {
        self.events.clear();
        self.drain_pending()
    }

    /// Waits for at least one event, then collects whatever else is queued.
    pub(crate) fn collect_blocking(&mut self) -> TickControl {
        self.events.clear();

        match self.receiver.recv() {
            Ok(event) => {
                if self.handle_event(event) == TickControl::Exit {
                    return TickControl::Exit;
                }
            }
            Err(_) => return TickControl::Exit,
        }

        self.drain_pending()
    }

    /// Returns events collected by the last call.
    #[cfg(test)]
    pub(crate) fn events(&self) -> &[XdndEvent] {
        &self.events
    }

    /// Takes ownership of the collected events, leaving an empty vec.
    pub(crate) fn take_events(&mut self) -> Vec<XdndEvent> {
        std::mem::take(&mut self.events)
    }

    //--- Internal Helpers -------------------------------------------------

    fn drain_pending(&mut self) -> TickControl {
        while self.events.len() < self.max_events {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => return TickControl::Continue,
            }
        }

        if !self.receiver.is_empty() {
            warn!(
                target: "xdnd::service",
                "Event queue backlog: collected {} events, {} still queued",
                self.events.len(),
                self.receiver.len()
            );
        }

        TickControl::Continue
    }

    fn handle_event(&mut self, event: XdndEvent) -> TickControl {
        match event {
            XdndEvent::Shutdown => TickControl::Exit,
            other => {
                self.events.push(other);
                TickControl::Continue
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
