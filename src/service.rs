//=========================================================================
// Xdnd Service
//
// Lifecycle scope for one coordinator and its inbound event queue.
//
// Architecture:
// ```text
//     XdndServiceBuilder ──build(stage)──> (XdndService, XdndSender)
//         │                                   │             │
//         ├─ with_channel_capacity()          │             └─ host: send(XdndEvent)
//         └─ with_max_events_per_pump()       └─ pump() / run()
//                                                   └─ XdndCoordinator
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Sender, TrySendError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::{EventCollector, TickControl, XdndError, XdndEvent};
use crate::core::{Stage, XdndCoordinator};

//=== XdndServiceBuilder ==================================================

/// Builder for configuring and constructing an [`XdndService`].
///
/// # Default Values
///
/// - **Channel capacity**: 128 events
/// - **Max events per pump**: 100
///
/// # Examples
///
/// ```ignore
/// use aetheric_xdnd::prelude::*;
///
/// let (mut service, sender) = XdndServiceBuilder::new()
///     .with_channel_capacity(256)
///     .build(my_stage);
///
/// sender.send(XdndEvent::Enter)?;
/// service.pump();
/// ```
pub struct XdndServiceBuilder {
    channel_capacity: usize,
    max_events_per_pump: usize,
}

impl XdndServiceBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            channel_capacity: 128,
            max_events_per_pump: 100,
        }
    }

    /// Sets the capacity of the host → coordinator queue.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Bounds how many events a single [`XdndService::pump`] processes.
    ///
    /// Default: 100
    ///
    /// # Panics
    ///
    /// Panics if `max == 0`.
    pub fn with_max_events_per_pump(mut self, max: usize) -> Self {
        assert!(max > 0, "Max events per pump must be positive");
        self.max_events_per_pump = max;
        self
    }

    /// Builds the coordinator around `stage` and opens its event queue.
    ///
    /// The returned [`XdndSender`] is the only way in; once every clone of
    /// it is dropped, [`XdndService::run`] returns.
    pub fn build<S: Stage>(self, stage: S) -> (XdndService<S>, XdndSender) {
        info!(
            target: "xdnd::service",
            "Building Xdnd service (channel: {}, max per pump: {})",
            self.channel_capacity,
            self.max_events_per_pump
        );

        let (tx, rx) = bounded(self.channel_capacity);

        let service = XdndService {
            coordinator: XdndCoordinator::new(stage),
            collector: EventCollector::new(rx, self.max_events_per_pump),
            running: true,
        };

        (service, XdndSender { sender: tx })
    }
}

impl Default for XdndServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== XdndSender ==========================================================

/// Host-side handle for feeding protocol events to an [`XdndService`].
///
/// Cheap to clone and `Send`, so the protocol decoder may live on another
/// thread.
#[derive(Debug, Clone)]
pub struct XdndSender {
    sender: Sender<XdndEvent>,
}

impl XdndSender {
    /// Queues an event, blocking while the queue is full.
    pub fn send(&self, event: XdndEvent) -> Result<(), XdndError> {
        self.sender.send(event).map_err(|_| XdndError::Disconnected)
    }

    /// Queues an event without blocking.
    pub fn try_send(&self, event: XdndEvent) -> Result<(), XdndError> {
        self.sender.try_send(event).map_err(|e| match e {
            TrySendError::Full(event) => XdndError::QueueFull(event),
            TrySendError::Disconnected(_) => XdndError::Disconnected,
        })
    }
}

//=== XdndService =========================================================

/// Owns an [`XdndCoordinator`] and processes queued events in order.
///
/// All coordinator work runs on the thread calling [`pump`](Self::pump) or
/// [`run`](Self::run).
pub struct XdndService<S: Stage> {
    coordinator: XdndCoordinator<S>,
    collector: EventCollector,
    running: bool,
}

impl<S: Stage> XdndService<S> {
    //--- Execution --------------------------------------------------------

    /// Processes whatever is queued right now, without blocking.
    ///
    /// Returns the number of events handled. After a `Shutdown` (or once
    /// every sender is gone) the service stops and further pumps are no-ops.
    pub fn pump(&mut self) -> usize {
        if !self.running {
            warn!(target: "xdnd::service", "Pump on a stopped Xdnd service");
            return 0;
        }

        let control = self.collector.collect();
        let handled = self.process_collected();

        if control == TickControl::Exit {
            self.stop();
        }

        handled
    }

    /// Processes events until `Shutdown` arrives or every sender is dropped.
    pub fn run(&mut self) {
        info!(target: "xdnd::service", "Xdnd service loop started");

        while self.running {
            let control = self.collector.collect_blocking();
            self.process_collected();

            if control == TickControl::Exit {
                self.stop();
            }
        }

        info!(target: "xdnd::service", "Xdnd service loop exited");
    }

    //--- Accessors --------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn coordinator(&self) -> &XdndCoordinator<S> {
        &self.coordinator
    }

    pub fn coordinator_mut(&mut self) -> &mut XdndCoordinator<S> {
        &mut self.coordinator
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_collected(&mut self) -> usize {
        let events = self.collector.take_events();
        let handled = events.len();

        for event in events {
            self.coordinator.handle_event(event);
        }

        handled
    }

    fn stop(&mut self) {
        self.running = false;
        self.coordinator.shutdown();
        info!(target: "xdnd::service", "Xdnd service stopped");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
