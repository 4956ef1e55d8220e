//! Host-facing call service binding the registry to its clock.

use crate::task::domain::{Principal, Task, TaskId, TaskRegistry};
use crate::task::services::CallOutcome;
use mockable::Clock;
use std::sync::Arc;

/// Call surface the hosting environment drives.
///
/// Owns one [`TaskRegistry`] together with the clock that stamps task
/// creation times. The host authenticates callers, delivers calls one at a
/// time, and persists the registry value between runs via
/// [`RegistryCallService::snapshot`] and
/// [`RegistryCallService::from_snapshot`]. Each call returns a
/// [`CallOutcome`] so the host can relay the result in-band.
#[derive(Clone)]
pub struct RegistryCallService<C>
where
    C: Clock,
{
    registry: TaskRegistry,
    clock: Arc<C>,
}

impl<C> RegistryCallService<C>
where
    C: Clock,
{
    /// Creates a service around an empty registry governed by `admin`.
    #[must_use]
    pub const fn new(admin: Principal, clock: Arc<C>) -> Self {
        Self {
            registry: TaskRegistry::new(admin),
            clock,
        }
    }

    /// Rebuilds a service from a registry value the host previously stored.
    #[must_use]
    pub const fn from_snapshot(registry: TaskRegistry, clock: Arc<C>) -> Self {
        Self { registry, clock }
    }

    /// Borrows the registry for opaque persistence by the host.
    #[must_use]
    pub const fn snapshot(&self) -> &TaskRegistry {
        &self.registry
    }

    /// Creates a task and reports its identifier.
    pub fn create_task(
        &mut self,
        caller: &Principal,
        title: impl Into<String>,
        description: impl Into<String>,
        reward: u64,
    ) -> CallOutcome<TaskId> {
        let id = self
            .registry
            .create_task(caller, title, description, reward, &*self.clock);
        CallOutcome::Value(id)
    }

    /// Assigns a pending task to `assignee`.
    pub fn assign_task(
        &mut self,
        caller: &Principal,
        id: TaskId,
        assignee: Principal,
    ) -> CallOutcome<bool> {
        self.registry
            .assign_task(caller, id, assignee)
            .map(|()| true)
            .into()
    }

    /// Completes an assigned task.
    pub fn complete_task(&mut self, caller: &Principal, id: TaskId) -> CallOutcome<bool> {
        self.registry.complete_task(caller, id).map(|()| true).into()
    }

    /// Cancels a task that has not been completed.
    pub fn cancel_task(&mut self, caller: &Principal, id: TaskId) -> CallOutcome<bool> {
        self.registry.cancel_task(caller, id).map(|()| true).into()
    }

    /// Hands the admin role to `new_admin`.
    pub fn transfer_admin(&mut self, caller: &Principal, new_admin: Principal) -> CallOutcome<bool> {
        self.registry
            .transfer_admin(caller, new_admin)
            .map(|()| true)
            .into()
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.registry.task(id)
    }

    /// Returns the current admin principal.
    #[must_use]
    pub const fn admin(&self) -> &Principal {
        self.registry.admin()
    }

    /// Returns whether `caller` currently holds the admin role.
    #[must_use]
    pub fn is_admin(&self, caller: &Principal) -> bool {
        self.registry.is_admin(caller)
    }

    /// Returns the number of tasks ever created.
    #[must_use]
    pub const fn task_counter(&self) -> u64 {
        self.registry.task_counter()
    }
}
