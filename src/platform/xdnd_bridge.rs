//=========================================================================
// Xdnd Bridge
//=========================================================================
//
// Converts winit OS file-drag events into coordinator `XdndEvent`s.
//
// Architecture:
//   WindowEvent → XdndBridge → XdndEvent → XdndSender
//
// Mapping:
// ```text
//   HoveredFile (first)          → Enter
//   CursorMoved while hovering   → PositionChanged (rounded to pixels)
//   HoveredFileCancelled         → Leave
//   DroppedFile (first)          → Leave
//   Occluded(o)                  → WindowGroupVisibilityChanged(!o)
// ```
//
// winit reports one HoveredFile / DroppedFile per file, so the bridge
// tracks whether a hover is in progress and collapses repeats.
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::WindowEvent;

//=== Internal Dependencies ===============================================

use crate::core::XdndEvent;

//=== XdndBridge ==========================================================

/// Stateful winit → Xdnd translator.
#[derive(Debug, Default)]
pub(crate) struct XdndBridge {
    hovering: bool,
}

impl XdndBridge {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { hovering: false }
    }

    #[cfg(test)]
    pub(crate) fn is_hovering(&self) -> bool {
        self.hovering
    }

    //--- Event Processing -------------------------------------------------

    /// Translates a window event; `None` for events with no Xdnd meaning.
    pub(crate) fn translate(&mut self, event: &WindowEvent) -> Option<XdndEvent> {
        match event {
            WindowEvent::HoveredFile(_) => self.process_hovered_file(),
            WindowEvent::HoveredFileCancelled => self.process_hover_cancelled(),
            WindowEvent::DroppedFile(_) => self.process_dropped_file(),
            WindowEvent::CursorMoved { position, .. } => {
                self.process_cursor_moved(position.x, position.y)
            }
            WindowEvent::Occluded(occluded) => {
                Some(XdndEvent::WindowGroupVisibilityChanged { visible: !occluded })
            }
            _ => None,
        }
    }

    pub(crate) fn process_hovered_file(&mut self) -> Option<XdndEvent> {
        if self.hovering {
            return None;
        }
        self.hovering = true;
        Some(XdndEvent::Enter)
    }

    pub(crate) fn process_cursor_moved(&mut self, x: f64, y: f64) -> Option<XdndEvent> {
        if !self.hovering {
            return None;
        }
        Some(XdndEvent::PositionChanged {
            x: x.round() as i32,
            y: y.round() as i32,
        })
    }

    pub(crate) fn process_hover_cancelled(&mut self) -> Option<XdndEvent> {
        self.finish_hover()
    }

    pub(crate) fn process_dropped_file(&mut self) -> Option<XdndEvent> {
        self.finish_hover()
    }

    //--- Internal Helpers -------------------------------------------------

    fn finish_hover(&mut self) -> Option<XdndEvent> {
        if !self.hovering {
            return None;
        }
        self.hovering = false;
        Some(XdndEvent::Leave)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
