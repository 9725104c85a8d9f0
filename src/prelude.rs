//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_xdnd::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Service and host
pub use crate::platform::Platform;
pub use crate::service::{XdndSender, XdndService, XdndServiceBuilder};

// Coordinator
pub use crate::core::{XdndCoordinator, XdndError, XdndEvent};

// Drag state and notifications
pub use crate::core::{DragSession, DragSignal, SessionState, SignalHandlerId};

// Dispatch
pub use crate::core::{
    DispatchOutcome, DragEvent, DragMonitor, DragMotionResult, DragSource, MonitorId,
};

// Stage traits
pub use crate::core::{
    ActorDelegate, ActorId, BindCoordinate, Clock, DragOverHandler, OverlayLayer, PickMode,
    SceneGraph, Stage, SubscriptionHandle, Timestamp, WindowActor, WindowGroup,
};
