//! Error types for registry operations and status parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Rejections returned by registry operations.
///
/// Every rejection is an expected, caller-facing outcome rather than a
/// fault: the hosting environment forwards the stable numeric code from
/// [`RegistryError::code`] to callers in-band, and the registry is left
/// untouched whenever one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The caller does not hold the admin role.
    #[error("caller is not the current admin")]
    NotAdmin,

    /// No task exists under the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task's current status does not permit the operation.
    #[error("task {task_id} is {status}, which does not permit this operation")]
    InvalidStatus {
        /// Identifier of the rejected task.
        task_id: TaskId,
        /// Status the task held when the operation was rejected.
        status: TaskStatus,
    },

    /// The caller is not the task's creator.
    #[error("caller is not the creator of task {0}")]
    NotCreator(TaskId),

    /// The caller is not the task's assignee.
    #[error("caller is not the assignee of task {0}")]
    NotAssignee(TaskId),
}

impl RegistryError {
    /// Returns the stable numeric code reported to callers.
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::NotAdmin => 100,
            Self::TaskNotFound(_) => 101,
            Self::InvalidStatus { .. } => 102,
            Self::NotCreator(_) => 103,
            Self::NotAssignee(_) => 104,
        }
    }
}

/// Error returned while parsing task statuses from their storage form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
