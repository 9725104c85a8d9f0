//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Host-to-coordinator interface types (events and errors).
//
// Defines the in-process contract the host uses to feed decoded Xdnd
// protocol events into the coordinator.
//
//=========================================================================

//=== XdndEvent ===========================================================

/// Raw events delivered by the host, already decoded from the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XdndEvent {
    /// A foreign drag entered the stage.
    Enter,

    /// The foreign drag moved to `(x, y)` in stage coordinates.
    PositionChanged { x: i32, y: i32 },

    /// The drag left the stage or was released.
    Leave,

    /// The window group was shown or hidden. Only meaningful while a drag
    /// session holds a visibility subscription.
    WindowGroupVisibilityChanged { visible: bool },

    /// The stage output window is shown; the protocol may be initialised.
    StageShown,

    /// Stop processing; the service loop exits after this event.
    Shutdown,
}

//=== XdndError ===========================================================

/// Errors surfaced at the crate boundary.
///
/// Nothing inside the coordinator fails: missing actors, delegates or
/// subscriptions are silent no-ops.
#[derive(Debug)]
pub enum XdndError {
    /// The receiving service is gone.
    Disconnected,

    /// The inbound queue is full; the event was not delivered.
    QueueFull(XdndEvent),

    /// Event loop creation failed (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for XdndError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Xdnd service disconnected"),
            Self::QueueFull(e) => write!(f, "Xdnd event queue full, dropped {:?}", e),
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for XdndError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Disconnected | Self::QueueFull(_) => None,
            Self::EventLoopCreation(e) | Self::EventLoopExecution(e) => Some(e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_copy_and_eq() {
        let a = XdndEvent::PositionChanged { x: 1, y: 2 };
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, XdndEvent::PositionChanged { x: 2, y: 1 });
    }

    #[test]
    fn error_is_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<XdndError>();
    }

    #[test]
    fn disconnected_display() {
        assert_eq!(XdndError::Disconnected.to_string(), "Xdnd service disconnected");
    }
}
