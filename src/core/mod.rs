//=========================================================================
// Core Systems
//
// Everything that runs on the coordinator's thread.
//
// Responsibilities:
// - Track the single drag session (enter / leave)
// - Keep the cursor proxy in step with window group visibility
// - Hit-test position updates and route them to monitors and delegates
// - Emit `drag-begin` / `drag-end` to external subscribers
//
// Notes:
// The core never reaches into the host directly. It sees the scene graph,
// the overlay layer and the window group only through the `stage` traits,
// and receives protocol events only as `XdndEvent`s.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod coordinator;
pub mod cursor_proxy;
pub mod dispatch;
pub(crate) mod platform_bridge;
pub mod session;
pub mod signals;
pub mod stage;

#[cfg(test)]
pub(crate) mod testing;

//=== Public API ==========================================================

pub use coordinator::XdndCoordinator;
pub use cursor_proxy::{CursorProxy, CursorProxyManager};
pub use dispatch::{
    DispatchOutcome, DragEvent, DragMonitor, DragMonitorChain, DragMotionResult, DragSource,
    HitTestDispatcher, MonitorId,
};
pub use platform_bridge::{XdndError, XdndEvent};
pub use session::{DragSession, EnterOutcome, SessionState};
pub use signals::{DragSignal, SignalEmitter, SignalHandlerId};
pub use stage::{
    ActorDelegate, ActorId, BindCoordinate, Clock, DragOverHandler, OverlayLayer, PickMode,
    SceneGraph, Stage, SubscriptionHandle, Timestamp, WindowActor, WindowGroup,
};
