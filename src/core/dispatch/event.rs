//=========================================================================
// Drag Event Types
//=========================================================================
//
// Values handed to monitors and delegates on every position update.
//
// A DragEvent is built per update and dropped when dispatch returns;
// nothing here is persisted.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::stage::ActorId;

//=== DragMotionResult ====================================================

/// Answer of a monitor or delegate to a drag motion.
///
/// Only [`DragMotionResult::Continue`] lets dispatch carry on; every other
/// value means the motion was claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragMotionResult {
    /// The target refuses the drop.
    NoDrop,

    /// The target would copy the payload.
    CopyDrop,

    /// The target would move the payload.
    MoveDrop,

    /// Not handled here, ask the next candidate.
    #[default]
    Continue,
}

impl DragMotionResult {
    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, Self::Continue)
    }
}

//=== DragSource ==========================================================

/// Identity of the coordinator that originated a drag.
///
/// Delegates compare it against sources they know to tell an Xdnd drag
/// apart from other drags. The id is chosen by whoever builds the
/// coordinator; by default it is the coordinator's placeholder actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragSource {
    id: u64,
}

impl DragSource {
    pub const fn new(id: u64) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

//=== DragEvent ===========================================================

/// One position update, as seen by monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEvent {
    pub x: i32,
    pub y: i32,

    /// Cursor proxy if one is live, otherwise the placeholder actor.
    pub drag_actor: ActorId,

    pub source: DragSource,

    /// Actor under the pointer.
    pub target_actor: Option<ActorId>,
}

//=========================================================================
// Unit Tests
//=========================================================================
