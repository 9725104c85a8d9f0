//=========================================================================
// Test Stage
//=========================================================================
//
// In-memory stage used by the unit tests. Records every mutating call so
// tests can assert on ordering.
//
//=========================================================================

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::core::dispatch::{DragMotionResult, DragSource};
use crate::core::stage::{
    ActorDelegate, ActorId, BindCoordinate, Clock, DragOverHandler, OverlayLayer, PickMode,
    SceneGraph, SubscriptionHandle, Timestamp, WindowActor, WindowGroup,
};

//=== StageCall ===========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum StageCall {
    InitXdnd,
    CreatePlaceholder(ActorId),
    CreateClone(ActorId),
    BindPosition(ActorId, ActorId, BindCoordinate),
    SetHiddenFromPick(ActorId, bool),
    RaiseTop(ActorId),
    Destroy(ActorId),
    Connect(SubscriptionHandle),
    Disconnect(SubscriptionHandle),
    Pick(PickMode, i32, i32),
}

//=== MockStage ===========================================================

pub(crate) struct MockStage {
    pub time: Timestamp,
    pub visible: bool,
    pub pick_result: Option<ActorId>,
    windows: Vec<WindowActor>,
    parents: HashMap<ActorId, ActorId>,
    delegates: HashMap<ActorId, Box<dyn ActorDelegate>>,
    subscriptions: HashSet<SubscriptionHandle>,
    calls: RefCell<Vec<StageCall>>,
    next_actor: u64,
    next_handle: u64,
}

impl MockStage {
    pub fn new() -> Self {
        Self {
            time: 1000,
            visible: true,
            pick_result: None,
            windows: Vec::new(),
            parents: HashMap::new(),
            delegates: HashMap::new(),
            subscriptions: HashSet::new(),
            calls: RefCell::new(Vec::new()),
            next_actor: 500,
            next_handle: 1,
        }
    }

    pub fn add_window(&mut self, actor: ActorId, override_redirect: bool) {
        self.windows.push(WindowActor { actor, override_redirect });
    }

    pub fn set_parent(&mut self, child: ActorId, parent: ActorId) {
        self.parents.insert(child, parent);
    }

    pub fn set_delegate(&mut self, actor: ActorId, delegate: Box<dyn ActorDelegate>) {
        self.delegates.insert(actor, delegate);
    }

    pub fn calls(&self) -> Vec<StageCall> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count_calls(&self, pred: impl Fn(&StageCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    /// Calls recorded after the most recent `CreateClone`.
    pub fn calls_after_clone(&self) -> Vec<StageCall> {
        let calls = self.calls.borrow();
        let start = calls
            .iter()
            .rposition(|c| matches!(c, StageCall::CreateClone(_)))
            .map_or(calls.len(), |i| i + 1);
        calls[start..].to_vec()
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    fn record(&self, call: StageCall) {
        self.calls.borrow_mut().push(call);
    }

    fn alloc_actor(&mut self) -> ActorId {
        self.next_actor += 1;
        ActorId(self.next_actor)
    }
}

impl Clock for MockStage {
    fn current_time(&self) -> Timestamp {
        self.time
    }
}

impl SceneGraph for MockStage {
    fn actor_at_pos(&self, mode: PickMode, x: i32, y: i32) -> Option<ActorId> {
        self.record(StageCall::Pick(mode, x, y));
        self.pick_result
    }

    fn parent(&self, actor: ActorId) -> Option<ActorId> {
        self.parents.get(&actor).copied()
    }

    fn delegate(&self, actor: ActorId) -> Option<&dyn ActorDelegate> {
        self.delegates.get(&actor).map(|d| d.as_ref())
    }

    fn window_actors(&self) -> Vec<WindowActor> {
        self.windows.clone()
    }
}

impl OverlayLayer for MockStage {
    fn init_xdnd(&mut self) {
        self.record(StageCall::InitXdnd);
    }

    fn create_placeholder(&mut self) -> ActorId {
        let actor = self.alloc_actor();
        self.record(StageCall::CreatePlaceholder(actor));
        actor
    }

    fn create_clone(&mut self, source: ActorId) -> ActorId {
        self.record(StageCall::CreateClone(source));
        self.alloc_actor()
    }

    fn bind_position(&mut self, actor: ActorId, source: ActorId, coordinate: BindCoordinate) {
        self.record(StageCall::BindPosition(actor, source, coordinate));
    }

    fn set_hidden_from_pick(&mut self, actor: ActorId, hidden: bool) {
        self.record(StageCall::SetHiddenFromPick(actor, hidden));
    }

    fn raise_top(&mut self, actor: ActorId) {
        self.record(StageCall::RaiseTop(actor));
    }

    fn destroy(&mut self, actor: ActorId) {
        self.record(StageCall::Destroy(actor));
    }
}

impl WindowGroup for MockStage {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn connect_visibility_changed(&mut self) -> SubscriptionHandle {
        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        self.subscriptions.insert(handle);
        self.record(StageCall::Connect(handle));
        handle
    }

    fn disconnect(&mut self, handle: SubscriptionHandle) {
        self.subscriptions.remove(&handle);
        self.record(StageCall::Disconnect(handle));
    }
}

//=== RecordingDelegate ===================================================

/// One `handle_drag_over` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HandlerCall {
    pub name: &'static str,
    pub source: DragSource,
    pub drag_actor: ActorId,
    pub x: i32,
    pub y: i32,
    pub time: Timestamp,
}

pub(crate) type HandlerLog = Rc<RefCell<Vec<HandlerCall>>>;

/// Delegate that logs drag-over calls; `answer: None` exposes no handler.
pub(crate) struct RecordingDelegate {
    pub name: &'static str,
    pub answer: Option<DragMotionResult>,
    pub log: HandlerLog,
}

impl RecordingDelegate {
    pub fn boxed(
        name: &'static str,
        answer: Option<DragMotionResult>,
        log: &HandlerLog,
    ) -> Box<dyn ActorDelegate> {
        Box::new(Self { name, answer, log: Rc::clone(log) })
    }
}

impl ActorDelegate for RecordingDelegate {
    fn as_drag_over_handler(&self) -> Option<&dyn DragOverHandler> {
        self.answer.map(|_| self as &dyn DragOverHandler)
    }
}

impl DragOverHandler for RecordingDelegate {
    fn handle_drag_over(
        &self,
        source: &DragSource,
        drag_actor: ActorId,
        x: i32,
        y: i32,
        time: Timestamp,
    ) -> DragMotionResult {
        self.log.borrow_mut().push(HandlerCall {
            name: self.name,
            source: *source,
            drag_actor,
            x,
            y,
            time,
        });
        self.answer.unwrap_or_default()
    }
}
