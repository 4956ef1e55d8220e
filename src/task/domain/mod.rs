//! Domain model for the task registry state machine.
//!
//! The domain models task creation, assignment, completion, cancellation,
//! and admin hand-over while keeping all infrastructure concerns outside of
//! the domain boundary. Rejections are plain values with stable numeric
//! codes; no operation mutates state before its preconditions hold.

mod error;
mod ids;
mod principal;
mod registry;
mod task;

pub use error::{ParseTaskStatusError, RegistryError, RegistryResult};
pub use ids::TaskId;
pub use principal::Principal;
pub use registry::TaskRegistry;
pub use task::{Task, TaskStatus};
