//! Rule modules and the turn orchestrator that composes them.
//!
//! Game mechanics implement [`RuleModule`] to define:
//! - Initial board state
//! - Legal destinations for the occupants they govern
//! - How a move mutates the board, and the events it produces
//! - Win conditions
//!
//! [`TurnOrchestrator`] owns the board, sequences turns between the two sides,
//! and fans every call out to its registered modules in registration order.
//! Modules never reference each other; they coordinate only through the shared
//! board and the events they return.

mod module;
mod orchestrator;

pub use module::RuleModule;
pub use orchestrator::{GameOutcome, TurnOrchestrator};
