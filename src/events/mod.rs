//! Event/observer infrastructure.
//!
//! Presentation layers subscribe to engine lifecycle events; the engine is
//! agnostic to what subscribers do with them.
//!
//! - [`EventKind`]: the five subscribable kinds (move, win, draw, undo, reset)
//! - [`EngineEvent`]: an event with its payload
//! - [`ListenerRegistry`]: per-engine subscribe/unsubscribe/dispatch

mod event;
mod registry;

pub use event::{EngineEvent, EventKind};
pub use registry::{Handler, ListenerId, ListenerRegistry};
