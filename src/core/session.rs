//=========================================================================
// Drag Session
//=========================================================================
//
// Two-state machine tracking whether an Xdnd drag is in progress.
//
// ```text
//          enter (connect visibility)
//   Idle ─────────────────────────────► Active ──┐ position (no change)
//    ▲                                    │  ◄───┘
//    └────────── leave (disconnect) ──────┘
// ```
//
// Invariant: a visibility subscription is held iff the state is Active.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::stage::{SubscriptionHandle, Timestamp, WindowGroup};

//=== SessionState ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
}

/// How an `enter` was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// Idle → Active.
    Started,

    /// `enter` arrived while already Active; the stale subscription was
    /// replaced.
    Restarted,
}

//=== DragSession =========================================================

/// The single drag session owned by a coordinator.
#[derive(Debug, Default)]
pub struct DragSession {
    state: SessionState,
    serial: u64,
    start_time: Option<Timestamp>,
    visibility_handle: Option<SubscriptionHandle>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Transitions ------------------------------------------------------

    /// Enters the Active state and subscribes to window group visibility.
    pub fn begin<G: WindowGroup + ?Sized>(&mut self, group: &mut G, now: Timestamp) -> EnterOutcome {
        let outcome = if self.is_active() {
            warn!(
                target: "xdnd",
                "Drag enter while session {} is still active, restarting",
                self.serial
            );
            EnterOutcome::Restarted
        } else {
            EnterOutcome::Started
        };

        self.disconnect(group);
        self.visibility_handle = Some(group.connect_visibility_changed());
        self.state = SessionState::Active;
        self.serial += 1;
        self.start_time = Some(now);

        outcome
    }

    /// Returns to Idle, dropping the visibility subscription if one is held.
    ///
    /// Safe to call while already Idle. Returns whether a session was active.
    pub fn end<G: WindowGroup + ?Sized>(&mut self, group: &mut G) -> bool {
        let was_active = self.is_active();

        self.disconnect(group);
        self.state = SessionState::Idle;
        self.start_time = None;

        was_active
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Number of sessions started so far; identifies the current one.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Timestamp of the `enter` that started the current session.
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    pub fn visibility_handle(&self) -> Option<SubscriptionHandle> {
        self.visibility_handle
    }

    //--- Internal Helpers -------------------------------------------------

    fn disconnect<G: WindowGroup + ?Sized>(&mut self, group: &mut G) {
        if let Some(handle) = self.visibility_handle.take() {
            group.disconnect(handle);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
