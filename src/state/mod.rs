// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod error_state;
pub mod list_state;
pub mod sequencer;

pub use error_state::*;
pub use list_state::*;
pub use sequencer::*;
