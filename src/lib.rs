//=========================================================================
// Aetheric Xdnd — Library Root
//
// Foreign drag-and-drop coordination for a compositor stage.
//
// Responsibilities:
// - Expose the coordinator (`XdndCoordinator`) and the stage traits it
//   drives
// - Provide a queued service front end (`XdndService`) for hosts that
//   decode the Xdnd protocol elsewhere
// - Offer an optional winit host (`Platform`) that maps OS file drags
//   onto Xdnd events
//
// Typical usage:
// ```ignore
// use aetheric_xdnd::prelude::*;
//
// let (service, sender) = XdndServiceBuilder::new().build(my_stage);
// Platform::new(service, sender).run()?;
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the coordinator and its collaborators. Embedders that
// drive the coordinator directly work from here.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` holds the winit integration; `service` owns the coordinator
// together with its inbound queue.
//
mod platform;
mod service;

//--- Public Exports ------------------------------------------------------

pub use crate::core::{XdndCoordinator, XdndError, XdndEvent};
pub use platform::Platform;
pub use service::{XdndSender, XdndService, XdndServiceBuilder};
