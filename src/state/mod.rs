//! Client-side state containers.

pub mod schedule;
pub mod session;

pub use schedule::{ScheduleState, ScheduleStatus};
pub use session::{SessionHandle, SessionPhase, SessionState};
