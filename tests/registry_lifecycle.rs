//! End-to-end host-call tests for the task registry service.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskledger::task::{
    domain::{Principal, TaskId, TaskRegistry, TaskStatus},
    services::{CallOutcome, RegistryCallService},
};

type HostService = RegistryCallService<DefaultClock>;

fn admin() -> Principal {
    Principal::new("ST1ADMIN0000000000000000000000000000000000")
}

fn user(n: u8) -> Principal {
    Principal::new(format!("ST1USER{n}"))
}

#[fixture]
fn service() -> HostService {
    RegistryCallService::new(admin(), Arc::new(DefaultClock))
}

#[rstest]
fn create_assign_complete_full_round_trip(mut service: HostService) {
    let created = service.create_task(&user(1), "Task 1", "Complete this task", 100);
    assert_eq!(created, CallOutcome::Value(TaskId::new(0)));

    let assigned = service.assign_task(&user(1), TaskId::new(0), user(2));
    assert_eq!(assigned, CallOutcome::Value(true));

    let task = service.task(TaskId::new(0)).expect("task should exist");
    assert_eq!(task.assignee(), Some(&user(2)));
    assert_eq!(task.status(), TaskStatus::Assigned);

    let completed = service.complete_task(&user(2), TaskId::new(0));
    assert_eq!(completed, CallOutcome::Value(true));
    let task = service.task(TaskId::new(0)).expect("task should exist");
    assert_eq!(task.status(), TaskStatus::Completed);
}

#[rstest]
fn identifiers_count_up_from_zero(mut service: HostService) {
    for expected in 0..5_u64 {
        let outcome = service.create_task(&user(1), "Task", "Do work", 10);
        assert_eq!(outcome, CallOutcome::Value(TaskId::new(expected)));
    }
    assert_eq!(service.task_counter(), 5);
}

#[rstest]
fn authorization_gates_reject_the_wrong_principal(mut service: HostService) {
    service.create_task(&user(1), "Task A", "Do work", 50);

    assert_eq!(
        service.assign_task(&user(3), TaskId::new(0), user(2)),
        CallOutcome::Error(103)
    );

    service.assign_task(&user(1), TaskId::new(0), user(2));
    assert_eq!(
        service.complete_task(&user(3), TaskId::new(0)),
        CallOutcome::Error(104)
    );
    assert_eq!(
        service.cancel_task(&user(3), TaskId::new(0)),
        CallOutcome::Error(103)
    );
}

#[rstest]
fn double_completion_is_rejected(mut service: HostService) {
    service.create_task(&user(1), "Task A", "Do work", 50);
    service.assign_task(&user(1), TaskId::new(0), user(2));

    assert_eq!(
        service.complete_task(&user(2), TaskId::new(0)),
        CallOutcome::Value(true)
    );
    assert_eq!(
        service.complete_task(&user(2), TaskId::new(0)),
        CallOutcome::Error(102)
    );
}

#[rstest]
fn unknown_identifiers_report_code_101(mut service: HostService) {
    let missing = TaskId::new(7);

    assert_eq!(
        service.assign_task(&user(1), missing, user(2)),
        CallOutcome::Error(101)
    );
    assert_eq!(
        service.complete_task(&user(2), missing),
        CallOutcome::Error(101)
    );
    assert_eq!(
        service.cancel_task(&user(1), missing),
        CallOutcome::Error(101)
    );
}

#[rstest]
fn rejected_calls_leave_the_stored_state_identical(mut service: HostService) {
    service.create_task(&user(1), "Task A", "Do work", 50);
    let before = serde_json::to_string(service.snapshot()).expect("snapshot should encode");

    assert!(service.assign_task(&user(3), TaskId::new(0), user(2)).is_error());
    assert!(service.complete_task(&user(1), TaskId::new(0)).is_error());
    assert!(service.cancel_task(&user(2), TaskId::new(0)).is_error());
    assert!(service.transfer_admin(&user(1), user(1)).is_error());
    assert!(service.assign_task(&user(1), TaskId::new(9), user(2)).is_error());

    let after = serde_json::to_string(service.snapshot()).expect("snapshot should encode");
    assert_eq!(before, after);
}

#[rstest]
fn cancelling_an_assigned_task_keeps_its_assignee(mut service: HostService) {
    // Retained quirk: cancellation does not clear the assignee, so a
    // cancelled task can still name one.
    service.create_task(&user(1), "Task A", "Do work", 50);
    service.assign_task(&user(1), TaskId::new(0), user(2));

    assert_eq!(
        service.cancel_task(&user(1), TaskId::new(0)),
        CallOutcome::Value(true)
    );
    let task = service.task(TaskId::new(0)).expect("task should exist");
    assert_eq!(task.status(), TaskStatus::Cancelled);
    assert_eq!(task.assignee(), Some(&user(2)));

    // Retained quirk: a second cancel of the cancelled task still succeeds.
    assert_eq!(
        service.cancel_task(&user(1), TaskId::new(0)),
        CallOutcome::Value(true)
    );
}

#[rstest]
fn admin_handover_takes_effect_immediately(mut service: HostService) {
    let new_admin = Principal::new("ST1NEWADMIN0000");

    assert_eq!(
        service.transfer_admin(&user(1), new_admin.clone()),
        CallOutcome::Error(100)
    );
    assert_eq!(
        service.transfer_admin(&admin(), new_admin.clone()),
        CallOutcome::Value(true)
    );
    assert_eq!(service.admin(), &new_admin);
    assert!(service.is_admin(&new_admin));

    // The outgoing admin cannot transfer the role back.
    assert_eq!(
        service.transfer_admin(&admin(), admin()),
        CallOutcome::Error(100)
    );
    assert_eq!(
        service.transfer_admin(&new_admin, admin()),
        CallOutcome::Value(true)
    );
}

#[rstest]
fn stored_registry_value_revives_into_a_working_service(mut service: HostService) {
    service.create_task(&user(1), "Task A", "Do work", 50);
    service.assign_task(&user(1), TaskId::new(0), user(2));

    let stored = serde_json::to_string(service.snapshot()).expect("snapshot should encode");
    let registry: TaskRegistry = serde_json::from_str(&stored).expect("snapshot should decode");
    let mut revived = RegistryCallService::from_snapshot(registry, Arc::new(DefaultClock));

    assert_eq!(
        revived.complete_task(&user(2), TaskId::new(0)),
        CallOutcome::Value(true)
    );
    assert_eq!(
        revived.create_task(&user(1), "Task B", "More work", 25),
        CallOutcome::Value(TaskId::new(1))
    );
}
