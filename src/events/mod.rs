//! Game events and the append-only event log.
//!
//! Rule modules return events from `on_move`; the orchestrator appends them
//! to its log in execution order. Events are immutable records: nothing in
//! the engine ever edits, reorders, or removes one.
//!
//! ## Key Components
//!
//! - [`GameEvent`]: what happened (piece moved, piece captured, module-defined)
//! - [`EventKind`]: discriminant for filtering without matching payloads
//! - [`EventLog`]: ordered, append-only history with O(1) clone

mod event;
mod log;

pub use event::{EventKind, GameEvent};
pub use log::EventLog;
