//! Task record and lifecycle status types.

use super::{ParseTaskStatusError, Principal, RegistryError, RegistryResult, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created and awaits assignment.
    Pending,
    /// Task has been handed to an assignee.
    Assigned,
    /// Task work has been finished by its assignee.
    Completed,
    /// Task has been withdrawn by its creator.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether a task in this status can never leave it.
    ///
    /// A cancelled task never changes status again, though a redundant
    /// cancel against it still succeeds.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// A unit of work tracked by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    creator: Principal,
    assignee: Option<Principal>,
    title: String,
    description: String,
    reward: u64,
    status: TaskStatus,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a pending task owned by `creator`.
    ///
    /// Title, description, and reward are recorded verbatim; the registry
    /// imposes no content rules on them.
    #[must_use]
    pub fn new(
        id: TaskId,
        creator: Principal,
        title: impl Into<String>,
        description: impl Into<String>,
        reward: u64,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            creator,
            assignee: None,
            title: title.into(),
            description: description.into(),
            reward,
            status: TaskStatus::Pending,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the principal that created the task.
    #[must_use]
    pub const fn creator(&self) -> &Principal {
        &self.creator
    }

    /// Returns the assignee, if the task has been assigned.
    #[must_use]
    pub const fn assignee(&self) -> Option<&Principal> {
        self.assignee.as_ref()
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the reward offered for the task.
    #[must_use]
    pub const fn reward(&self) -> u64 {
        self.reward
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Hands the task to `assignee`.
    ///
    /// Only the creator may assign, and only while the task is pending.
    /// Any principal may be named as assignee, including the creator.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotCreator`] when `caller` did not create
    /// the task, or [`RegistryError::InvalidStatus`] when the task has left
    /// [`TaskStatus::Pending`].
    pub fn assign(&mut self, caller: &Principal, assignee: Principal) -> RegistryResult<()> {
        if self.creator != *caller {
            return Err(RegistryError::NotCreator(self.id));
        }
        if self.status != TaskStatus::Pending {
            return Err(self.invalid_status());
        }
        self.assignee = Some(assignee);
        self.status = TaskStatus::Assigned;
        Ok(())
    }

    /// Marks the task as completed.
    ///
    /// Only the current assignee may complete. The assignee check runs
    /// before the status check, so an unassigned task rejects every caller
    /// as a non-assignee rather than reporting its status.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAssignee`] when `caller` is not the
    /// assignee, or [`RegistryError::InvalidStatus`] when the task is not
    /// [`TaskStatus::Assigned`].
    pub fn complete(&mut self, caller: &Principal) -> RegistryResult<()> {
        if self.assignee.as_ref() != Some(caller) {
            return Err(RegistryError::NotAssignee(self.id));
        }
        if self.status != TaskStatus::Assigned {
            return Err(self.invalid_status());
        }
        self.status = TaskStatus::Completed;
        Ok(())
    }

    /// Withdraws the task.
    ///
    /// Only the creator may cancel, and only completed tasks refuse it.
    /// Cancellation rewrites the status alone: an assigned task keeps its
    /// assignee on record, and cancelling an already cancelled task
    /// succeeds as a redundant rewrite.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotCreator`] when `caller` did not create
    /// the task, or [`RegistryError::InvalidStatus`] when the task is
    /// [`TaskStatus::Completed`].
    pub fn cancel(&mut self, caller: &Principal) -> RegistryResult<()> {
        if self.creator != *caller {
            return Err(RegistryError::NotCreator(self.id));
        }
        if self.status == TaskStatus::Completed {
            return Err(self.invalid_status());
        }
        self.status = TaskStatus::Cancelled;
        Ok(())
    }

    const fn invalid_status(&self) -> RegistryError {
        RegistryError::InvalidStatus {
            task_id: self.id,
            status: self.status,
        }
    }
}
