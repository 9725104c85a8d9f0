//=========================================================================
// Platform Subsystem
//
// Optional winit host: feeds OS file drags into an Xdnd service.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────┐
//  │  Winit Event Loop                            │
//  │   ↓                                          │
//  │  XdndBridge (HoveredFile / CursorMoved / …)  │
//  │   ↓                                          │
//  │  XdndSender ──► queue ──► XdndService        │
//  │                               ↑              │
//  │  RedrawRequested ─── pump() ──┘              │
//  └──────────────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: queued events are processed once
//   per frame, in arrival order
// - **Window creation = stage shown**: `StageShown` is queued as soon as
//   the window exists
// - **Single thread**: the service and the event loop share the main
//   thread, so the stage needs no synchronisation
//
//=========================================================================

//=== Submodules ==========================================================

mod xdnd_bridge;

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::{Stage, XdndError, XdndEvent};
use crate::service::{XdndSender, XdndService};
use xdnd_bridge::XdndBridge;

//=== Platform ============================================================

/// Winit window hosting an [`XdndService`].
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(service, sender)`
/// 2. **Execution**: `platform.run()` starts the event loop
/// 3. **Event processing**: file drags are translated and queued
/// 4. **Shutdown**: closing the window queues `Shutdown` and exits
pub struct Platform<S: Stage> {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Translates winit file-drag events.
    bridge: XdndBridge,

    /// Queue into the service.
    sender: XdndSender,

    service: XdndService<S>,
}

impl<S: Stage> Platform<S> {
    //--- Construction -----------------------------------------------------

    /// Creates a platform around a service and a sender into it.
    ///
    /// Does not create the window yet; that happens lazily in `resumed()`.
    pub fn new(service: XdndService<S>, sender: XdndSender) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            bridge: XdndBridge::new(),
            sender,
            service,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop on the calling (main) thread.
    ///
    /// # Errors
    ///
    /// Returns [`XdndError::EventLoopCreation`] if no event loop can be
    /// created and [`XdndError::EventLoopExecution`] if it fails while
    /// running.
    pub fn run(mut self) -> Result<(), XdndError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(XdndError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(XdndError::EventLoopExecution)
    }

    pub fn service(&self) -> &XdndService<S> {
        &self.service
    }

    //--- Internal Helpers -------------------------------------------------

    /// Queues an event, pumping the service first if the queue is full.
    fn forward(&mut self, event: XdndEvent) {
        let result = match self.sender.try_send(event) {
            Err(XdndError::QueueFull(event)) => {
                debug!(target: "platform::xdnd", "Queue full, pumping before {:?}", event);
                self.service.pump();
                self.sender.try_send(event)
            }
            other => other,
        };

        if let Err(e) = result {
            warn!(target: "platform::xdnd", "Dropping {:?}: {}", event, e);
        }
    }

    /// Frame boundary: processes everything queued so far.
    fn flush(&mut self) {
        let handled = self.service.pump();
        if handled > 0 {
            trace!(target: "platform::xdnd", "Processed {} Xdnd events", handled);
        }
    }
}

//=== Winit Integration ===================================================

impl<S: Stage> ApplicationHandler for Platform<S> {
    /// Creates the window if it doesn't exist yet.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title("Aetheric Xdnd")
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{}",
                    window.inner_size().width,
                    window.inner_size().height
                );
                window.request_redraw();
                self.window = Some(window);
                self.forward(XdndEvent::StageShown);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.forward(XdndEvent::Shutdown);
                self.flush();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.forward(XdndEvent::Shutdown);
                self.flush();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                self.flush();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(xdnd) = self.bridge.translate(other) {
                    trace!(target: "platform::xdnd", "Translated {:?}", xdnd);
                    self.forward(xdnd);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
