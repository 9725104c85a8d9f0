//=========================================================================
// Stage Interface
//=========================================================================
//
// Contract between the coordinator and the hosting compositor.
//
// The scene graph, the overlay layer and the window group are owned by
// the host. The coordinator only queries and pokes them through the
// traits below.
//
// Architecture:
// ```text
//   Stage ─┬─ Clock         current_time()
//          ├─ SceneGraph    pick / parent / delegate / window_actors
//          ├─ OverlayLayer  clones, constraints, restacking, init_xdnd
//          └─ WindowGroup   visibility subscription
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use crate::core::dispatch::{DragMotionResult, DragSource};

//=== Value Types =========================================================

/// Host-side time in milliseconds (X server time style, wraps at u32).
pub type Timestamp = u32;

/// Opaque reference to an actor in the host scene graph.
///
/// The coordinator never owns the actor behind the id; it only passes it
/// back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(pub u64);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Handle returned by a signal connection, used to disconnect it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(pub u64);

/// Which actors a pick operation considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickMode {
    /// Nothing is pickable.
    None,

    /// Only reactive actors.
    Reactive,

    /// Every visible actor, overlays included.
    All,
}

/// Axis of a one-way positional constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindCoordinate {
    X,
    Y,
}

/// A presented window as listed by the host, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowActor {
    pub actor: ActorId,

    /// `true` for windows that bypass normal placement (menus, DnD icons).
    pub override_redirect: bool,
}

//=== Delegate Capabilities ===============================================

/// Reacts to a drag hovering the actor the delegate is attached to.
pub trait DragOverHandler {
    /// Called once per position update while the pointer is over the actor
    /// (or one of its descendants that did not claim the motion).
    ///
    /// Returning anything but [`DragMotionResult::Continue`] stops the
    /// ancestor walk.
    fn handle_drag_over(
        &self,
        source: &DragSource,
        drag_actor: ActorId,
        x: i32,
        y: i32,
        time: Timestamp,
    ) -> DragMotionResult;
}

/// Application object attached to an actor.
///
/// Capabilities are queried, never probed: a delegate that can react to
/// drags overrides [`ActorDelegate::as_drag_over_handler`].
pub trait ActorDelegate {
    fn as_drag_over_handler(&self) -> Option<&dyn DragOverHandler> {
        None
    }
}

//=== Collaborator Traits =================================================

/// Monotonic time source.
pub trait Clock {
    fn current_time(&self) -> Timestamp;
}

/// Read-only view over the host scene graph.
pub trait SceneGraph {
    /// Resolves the actor at a screen coordinate.
    fn actor_at_pos(&self, mode: PickMode, x: i32, y: i32) -> Option<ActorId>;

    /// Returns the parent of `actor`, or `None` at the root.
    fn parent(&self, actor: ActorId) -> Option<ActorId>;

    /// Returns the delegate attached to `actor`, if any.
    fn delegate(&self, actor: ActorId) -> Option<&dyn ActorDelegate>;

    /// Currently presented window actors, ordered bottom to top.
    fn window_actors(&self) -> Vec<WindowActor>;
}

/// Mutable access to the topmost overlay group.
pub trait OverlayLayer {
    /// Enables the host side of the Xdnd protocol. Only valid once the
    /// stage has been shown.
    fn init_xdnd(&mut self);

    /// Creates a hidden, fully transparent 1x1 actor on the stage.
    fn create_placeholder(&mut self) -> ActorId;

    /// Creates a clone of `source` inside the overlay group.
    fn create_clone(&mut self, source: ActorId) -> ActorId;

    /// Locks one coordinate of `actor` to the same coordinate of `source`.
    fn bind_position(&mut self, actor: ActorId, source: ActorId, coordinate: BindCoordinate);

    /// Excludes `actor` from (or re-admits it to) pick operations.
    fn set_hidden_from_pick(&mut self, actor: ActorId, hidden: bool);

    /// Restacks `actor` above all of its siblings.
    fn raise_top(&mut self, actor: ActorId);

    /// Destroys an actor previously created through this layer.
    fn destroy(&mut self, actor: ActorId);
}

/// The group holding regular windows, hidden while e.g. the overview is up.
pub trait WindowGroup {
    fn is_visible(&self) -> bool;

    /// Starts delivering visibility notifications to the coordinator.
    fn connect_visibility_changed(&mut self) -> SubscriptionHandle;

    /// Stops a visibility subscription. Unknown handles are ignored.
    fn disconnect(&mut self, handle: SubscriptionHandle);
}

/// Everything the coordinator needs from its host.
pub trait Stage: Clock + SceneGraph + OverlayLayer + WindowGroup {}

impl<T: Clock + SceneGraph + OverlayLayer + WindowGroup> Stage for T {}

//=========================================================================
// Unit Tests
//=========================================================================
