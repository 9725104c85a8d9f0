//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the host (compositor, winit backend, tests) with the
// coordinator.
//
// The host only ever talks to the coordinator through `XdndEvent`s, so
// hosts can be swapped without touching dispatch logic.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Coordinator-side event collection
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub use interface::{XdndError, XdndEvent};
