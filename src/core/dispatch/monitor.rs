//=========================================================================
// Drag Monitor Chain
//=========================================================================
//
// Ordered set of global drag observers. Monitors see every position
// update before any per-actor delegate and may claim it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use super::event::{DragEvent, DragMotionResult};

//=== DragMonitor =========================================================

/// Global drag observer.
///
/// Monitors that only care about other drag phases keep the default
/// `drag_motion`, which never claims the motion.
pub trait DragMonitor {
    fn drag_motion(&mut self, _event: &DragEvent) -> DragMotionResult {
        DragMotionResult::Continue
    }
}

/// Identifies a registered monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorId(u64);

//=== DragMonitorChain ====================================================

/// Monitors in registration order.
pub struct DragMonitorChain {
    monitors: Vec<(MonitorId, Box<dyn DragMonitor>)>,
    next_id: u64,
}

impl DragMonitorChain {
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a monitor to the end of the chain.
    pub fn add(&mut self, monitor: Box<dyn DragMonitor>) -> MonitorId {
        let id = MonitorId(self.next_id);
        self.next_id += 1;
        self.monitors.push((id, monitor));
        debug!(target: "xdnd::dispatch", "Drag monitor {:?} added ({} total)", id, self.monitors.len());
        id
    }

    /// Removes a monitor. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: MonitorId) -> bool {
        let Some(pos) = self.monitors.iter().position(|(m, _)| *m == id) else {
            return false;
        };
        self.monitors.remove(pos);
        debug!(target: "xdnd::dispatch", "Drag monitor {:?} removed", id);
        true
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Offers `event` to each monitor in order.
    ///
    /// Returns the first non-`Continue` answer, or `Continue` if nobody
    /// claimed the motion.
    pub fn notify_motion(&mut self, event: &DragEvent) -> DragMotionResult {
        for (id, monitor) in self.monitors.iter_mut() {
            let result = monitor.drag_motion(event);
            if !result.is_continue() {
                trace!(target: "xdnd::dispatch", "Monitor {:?} claimed motion: {:?}", id, result);
                return result;
            }
        }
        DragMotionResult::Continue
    }
}

impl Default for DragMonitorChain {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
