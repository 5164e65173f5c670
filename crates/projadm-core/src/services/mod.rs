//! Services: the workflow orchestrator and the execution mode gate.

pub mod gate;
pub mod orchestrator;

pub use gate::{ExecutionGate, Mode};
pub use orchestrator::ProjectAdmin;
