//=========================================================================
// Xdnd Coordinator
//=========================================================================
//
// Receives raw Xdnd protocol events from the host and turns them into
// session transitions, cursor proxy updates and drag dispatch.
//
// Architecture:
// ```text
//   XdndEvent ──► XdndCoordinator
//                   ├─ Enter     → DragSession::begin → drag-begin
//                   ├─ Position  → HitTestDispatcher::dispatch
//                   ├─ Leave     → DragSession::end   → drag-end
//                   ├─ Visibility→ CursorProxyManager (subscribed only)
//                   └─ StageShown→ OverlayLayer::init_xdnd (once)
// ```
//
// All work happens synchronously on the caller's thread; the host must not
// re-enter the coordinator from inside a callback.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Receiver;
use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use crate::core::cursor_proxy::CursorProxyManager;
use crate::core::dispatch::{
    DispatchOutcome, DragMonitor, DragMonitorChain, DragSource, HitTestDispatcher, MonitorId,
};
use crate::core::platform_bridge::XdndEvent;
use crate::core::session::{DragSession, EnterOutcome};
use crate::core::signals::{DragSignal, SignalEmitter, SignalHandlerId};
use crate::core::stage::{ActorId, Stage};

//=== XdndCoordinator =====================================================

/// Owns the drag session, the cursor proxy and the monitor chain for one
/// stage.
///
/// Construct one per stage and keep it for the stage's lifetime; dropping
/// it releases every host resource it created.
pub struct XdndCoordinator<S: Stage> {
    stage: S,
    session: DragSession,
    proxy: CursorProxyManager,
    dispatcher: HitTestDispatcher,
    monitors: DragMonitorChain,
    signals: SignalEmitter<DragSignal>,
    xdnd_initialized: bool,
    shut_down: bool,
}

impl<S: Stage> XdndCoordinator<S> {
    //--- Construction -----------------------------------------------------

    /// Takes ownership of the stage handle and creates the placeholder drag
    /// actor. The drag source is identified by the placeholder's id.
    pub fn new(mut stage: S) -> Self {
        let placeholder = stage.create_placeholder();
        Self::build(stage, DragSource::new(placeholder.0), placeholder)
    }

    /// Like [`new`](Self::new), with a caller-chosen source identity.
    pub fn with_source(mut stage: S, source: DragSource) -> Self {
        let placeholder = stage.create_placeholder();
        Self::build(stage, source, placeholder)
    }

    fn build(stage: S, source: DragSource, placeholder: ActorId) -> Self {
        info!(target: "xdnd", "Xdnd coordinator {} ready (placeholder {})", source.id(), placeholder);

        Self {
            stage,
            session: DragSession::new(),
            proxy: CursorProxyManager::new(),
            dispatcher: HitTestDispatcher::new(source, placeholder),
            monitors: DragMonitorChain::new(),
            signals: SignalEmitter::new(),
            xdnd_initialized: false,
            shut_down: false,
        }
    }

    //--- Event Entry Points -----------------------------------------------

    /// Routes one host event to the matching handler.
    pub fn handle_event(&mut self, event: XdndEvent) {
        match event {
            XdndEvent::Enter => self.on_enter(),
            XdndEvent::PositionChanged { x, y } => {
                self.on_position_changed(x, y);
            }
            XdndEvent::Leave => self.on_leave(),
            XdndEvent::WindowGroupVisibilityChanged { visible } => {
                self.on_window_group_visibility_changed(visible)
            }
            XdndEvent::StageShown => self.on_stage_shown(),
            XdndEvent::Shutdown => {
                debug!(target: "xdnd", "Shutdown event reached coordinator, ignoring");
            }
        }
    }

    /// Enables the host protocol the first time the stage is shown.
    pub fn on_stage_shown(&mut self) {
        if self.xdnd_initialized {
            trace!(target: "xdnd", "Stage shown again, Xdnd already initialised");
            return;
        }

        self.stage.init_xdnd();
        self.xdnd_initialized = true;
        info!(target: "xdnd", "Xdnd initialised");
    }

    /// A foreign drag entered the stage.
    pub fn on_enter(&mut self) {
        let now = self.stage.current_time();

        if self.session.begin(&mut self.stage, now) == EnterOutcome::Started {
            info!(target: "xdnd", "Drag session {} began at {}", self.session.serial(), now);
        }

        if !self.stage.is_visible() {
            debug!(target: "xdnd::proxy", "Window group already hidden at drag enter");
            self.proxy.on_visibility_changed(&mut self.stage, false);
        }

        self.signals.emit(&DragSignal::Begin { timestamp: now });
    }

    /// The drag moved; runs hit testing and dispatch.
    pub fn on_position_changed(&mut self, x: i32, y: i32) -> DispatchOutcome {
        if !self.session.is_active() {
            trace!(target: "xdnd::dispatch", "Position ({}, {}) outside of a drag session", x, y);
        }

        let outcome =
            self.dispatcher
                .dispatch(&mut self.stage, &self.proxy, &mut self.monitors, x, y);

        trace!(target: "xdnd::dispatch", "Position ({}, {}) → {:?}", x, y, outcome);
        outcome
    }

    /// The drag left the stage or was released.
    ///
    /// Destroys the cursor proxy together with the session. `drag-end` is
    /// emitted even when no session was active.
    pub fn on_leave(&mut self) {
        if self.session.end(&mut self.stage) {
            info!(target: "xdnd", "Drag session {} ended", self.session.serial());
        } else {
            debug!(target: "xdnd", "Drag leave without an active session");
        }

        self.proxy.release(&mut self.stage);

        self.signals.emit(&DragSignal::End);
    }

    /// Window group visibility notification.
    ///
    /// Ignored unless the current session is subscribed to it.
    pub fn on_window_group_visibility_changed(&mut self, visible: bool) {
        if self.session.visibility_handle().is_none() {
            trace!(target: "xdnd::proxy", "Visibility change ({}) without subscription", visible);
            return;
        }

        self.proxy.on_visibility_changed(&mut self.stage, visible);
    }

    //--- Monitors ---------------------------------------------------------

    /// Registers a global drag monitor at the end of the chain.
    pub fn add_monitor(&mut self, monitor: Box<dyn DragMonitor>) -> MonitorId {
        self.monitors.add(monitor)
    }

    pub fn remove_monitor(&mut self, id: MonitorId) -> bool {
        self.monitors.remove(id)
    }

    //--- Signals ----------------------------------------------------------

    /// Connects a synchronous `drag-begin` / `drag-end` handler.
    pub fn connect_signals<F>(&mut self, handler: F) -> SignalHandlerId
    where
        F: FnMut(&DragSignal) + 'static,
    {
        self.signals.connect(handler)
    }

    pub fn disconnect_signals(&mut self, id: SignalHandlerId) -> bool {
        self.signals.disconnect(id)
    }

    /// Opens a channel receiving every later `drag-begin` / `drag-end`.
    pub fn subscribe_signals(&mut self) -> Receiver<DragSignal> {
        self.signals.subscribe()
    }

    //--- Queries ----------------------------------------------------------

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    pub fn cursor_proxy(&self) -> &CursorProxyManager {
        &self.proxy
    }

    pub fn source(&self) -> DragSource {
        self.dispatcher.source()
    }

    pub fn placeholder(&self) -> ActorId {
        self.dispatcher.placeholder()
    }

    pub fn is_xdnd_initialized(&self) -> bool {
        self.xdnd_initialized
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    //--- Teardown ---------------------------------------------------------

    /// Releases the visibility subscription, the proxy and the placeholder.
    ///
    /// Idempotent; also run on drop. No `drag-end` is emitted.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        self.session.end(&mut self.stage);
        self.proxy.release(&mut self.stage);
        self.stage.destroy(self.dispatcher.placeholder());

        info!(target: "xdnd", "Xdnd coordinator {} shut down", self.dispatcher.source().id());
    }
}

impl<S: Stage> Drop for XdndCoordinator<S> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
