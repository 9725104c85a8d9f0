//=========================================================================
// Drag Dispatch
//=========================================================================
//
// Turns raw position updates into monitor and delegate callbacks.
//
// Architecture:
//   HitTestDispatcher
//     ├─ SceneGraph::actor_at_pos()   (hit test)
//     ├─ DragMonitorChain             (first refusal)
//     └─ ancestor walk                (nearest capable delegate wins)
//
//=========================================================================

//=== Module Declarations =================================================

mod event;
mod monitor;

//=== Public API ==========================================================

pub use event::{DragEvent, DragMotionResult, DragSource};
pub use hit_test::{DispatchOutcome, HitTestDispatcher};
pub use monitor::{DragMonitor, DragMonitorChain, MonitorId};
