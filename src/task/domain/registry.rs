//! Registry aggregate owning the admin role and the task arena.

use super::{Principal, RegistryError, RegistryResult, Task, TaskId};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Administrator-governed ledger of tasks.
///
/// The hosting environment owns one registry per deployment and threads it
/// into each call. Tasks live in an append-only arena: identifiers are
/// allocated sequentially from the task counter, a created task is never
/// removed, and an identifier is never reused. Every operation checks its
/// preconditions before mutating anything, so a rejected call leaves the
/// registry identical to its pre-call value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRegistry {
    admin: Principal,
    task_counter: u64,
    tasks: Vec<Task>,
}

impl TaskRegistry {
    /// Creates an empty registry governed by `admin`.
    #[must_use]
    pub const fn new(admin: Principal) -> Self {
        Self {
            admin,
            task_counter: 0,
            tasks: Vec::new(),
        }
    }

    /// Returns the current admin principal.
    #[must_use]
    pub const fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Returns whether `caller` currently holds the admin role.
    #[must_use]
    pub fn is_admin(&self, caller: &Principal) -> bool {
        self.admin == *caller
    }

    /// Returns the number of tasks ever created.
    ///
    /// This is also the identifier the next created task will receive.
    #[must_use]
    pub const fn task_counter(&self) -> u64 {
        self.task_counter
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        usize::try_from(id.value())
            .ok()
            .and_then(|index| self.tasks.get(index))
    }

    /// Creates a new pending task and returns its identifier.
    ///
    /// Creation is open to any caller and never fails. The creation
    /// timestamp is taken from the host-supplied `clock`.
    pub fn create_task(
        &mut self,
        caller: &Principal,
        title: impl Into<String>,
        description: impl Into<String>,
        reward: u64,
        clock: &impl Clock,
    ) -> TaskId {
        let id = TaskId::new(self.task_counter);
        self.tasks
            .push(Task::new(id, caller.clone(), title, description, reward, clock));
        self.task_counter += 1;
        id
    }

    /// Assigns a pending task to `assignee`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TaskNotFound`] for an unknown identifier,
    /// [`RegistryError::NotCreator`] when `caller` did not create the task,
    /// or [`RegistryError::InvalidStatus`] when the task is not pending.
    pub fn assign_task(
        &mut self,
        caller: &Principal,
        id: TaskId,
        assignee: Principal,
    ) -> RegistryResult<()> {
        self.task_mut(id)?.assign(caller, assignee)
    }

    /// Completes an assigned task.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TaskNotFound`] for an unknown identifier,
    /// [`RegistryError::NotAssignee`] when `caller` is not the assignee,
    /// or [`RegistryError::InvalidStatus`] when the task is not assigned.
    pub fn complete_task(&mut self, caller: &Principal, id: TaskId) -> RegistryResult<()> {
        self.task_mut(id)?.complete(caller)
    }

    /// Cancels a task that has not been completed.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::TaskNotFound`] for an unknown identifier,
    /// [`RegistryError::NotCreator`] when `caller` did not create the task,
    /// or [`RegistryError::InvalidStatus`] when the task is completed.
    pub fn cancel_task(&mut self, caller: &Principal, id: TaskId) -> RegistryResult<()> {
        self.task_mut(id)?.cancel(caller)
    }

    /// Hands the admin role to `new_admin`.
    ///
    /// The new principal is recorded verbatim; handing the role back to the
    /// current admin is permitted. The previous admin loses the role the
    /// moment this returns.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotAdmin`] when `caller` does not hold the
    /// admin role.
    pub fn transfer_admin(
        &mut self,
        caller: &Principal,
        new_admin: Principal,
    ) -> RegistryResult<()> {
        if !self.is_admin(caller) {
            return Err(RegistryError::NotAdmin);
        }
        self.admin = new_admin;
        Ok(())
    }

    fn task_mut(&mut self, id: TaskId) -> RegistryResult<&mut Task> {
        usize::try_from(id.value())
            .ok()
            .and_then(|index| self.tasks.get_mut(index))
            .ok_or(RegistryError::TaskNotFound(id))
    }
}
