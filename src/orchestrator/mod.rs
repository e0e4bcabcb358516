mod engine;
mod state;

pub use engine::{Orchestrator, RequestTicket};
pub use state::{QueryPhase, SessionState};
