//=========================================================================
// Cursor Proxy Manager
//=========================================================================
//
// Keeps a visible stand-in for the drag cursor while the window group is
// hidden (overview, expose), so drag feedback stays on screen.
//
// Lifecycle:
// ```text
//   hidden ──► find topmost override-redirect window ──► clone + bind X/Y
//   visible ─► destroy clone
// ```
//
// At most one proxy exists at any time. A missing source window is an
// expected transient state and simply means "no proxy".
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace};

//=== Internal Dependencies ===============================================

use crate::core::stage::{ActorId, BindCoordinate, OverlayLayer, SceneGraph};

//=== CursorProxy =========================================================

/// A live clone of the cursor window, position-locked to its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorProxy {
    pub actor: ActorId,
    pub source: ActorId,
}

//=== CursorProxyManager ==================================================

/// Sole owner of the optional cursor proxy.
#[derive(Debug, Default)]
pub struct CursorProxyManager {
    proxy: Option<CursorProxy>,
}

impl CursorProxyManager {
    pub fn new() -> Self {
        Self { proxy: None }
    }

    //--- Visibility Tracking ----------------------------------------------

    /// Reacts to the window group being shown or hidden.
    pub fn on_visibility_changed<S>(&mut self, stage: &mut S, is_visible: bool)
    where
        S: SceneGraph + OverlayLayer + ?Sized,
    {
        if is_visible {
            self.release(&mut *stage);
            return;
        }

        if self.proxy.is_some() {
            trace!(target: "xdnd::proxy", "Window group hidden again, proxy already live");
            return;
        }

        let Some(source) = Self::find_cursor_window(&*stage) else {
            debug!(target: "xdnd::proxy", "No override-redirect cursor window, not creating proxy");
            return;
        };

        let actor = stage.create_clone(source);
        stage.set_hidden_from_pick(actor, true);
        stage.bind_position(actor, source, BindCoordinate::X);
        stage.bind_position(actor, source, BindCoordinate::Y);

        debug!(target: "xdnd::proxy", "Cursor proxy {} created for {}", actor, source);
        self.proxy = Some(CursorProxy { actor, source });
    }

    /// Destroys the proxy if there is one.
    pub fn release<L: OverlayLayer + ?Sized>(&mut self, layer: &mut L) {
        if let Some(proxy) = self.proxy.take() {
            layer.destroy(proxy.actor);
            debug!(target: "xdnd::proxy", "Cursor proxy {} destroyed", proxy.actor);
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the live proxy actor, or `fallback` when there is none.
    pub fn active_proxy_or(&self, fallback: ActorId) -> ActorId {
        self.proxy.map_or(fallback, |p| p.actor)
    }

    pub fn proxy(&self) -> Option<CursorProxy> {
        self.proxy
    }

    pub fn has_proxy(&self) -> bool {
        self.proxy.is_some()
    }

    //--- Stacking ---------------------------------------------------------

    /// Keeps the proxy above everything else in the overlay group.
    pub fn raise_proxy_to_top<L: OverlayLayer + ?Sized>(&self, layer: &mut L) {
        if let Some(proxy) = self.proxy {
            layer.raise_top(proxy.actor);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn find_cursor_window<G: SceneGraph + ?Sized>(scene: &G) -> Option<ActorId> {
        scene
            .window_actors()
            .last()
            .filter(|w| w.override_redirect)
            .map(|w| w.actor)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
