//! End-to-end scenarios against the public API.

use parking_lot::Mutex;
use simplestate::{
    identifier_enum, EventDefinition, Machine, MachineBuilder, Settings, Transition, TriggerError,
};
use std::sync::{Arc, Weak};

identifier_enum! {
    enum TestState {
        A,
        B,
        C,
        D,
    }
}

identifier_enum! {
    enum TestEvent {
        E1,
        E2,
        E3,
        Unknown,
    }
}

type TestMachine = Machine<TestState, TestEvent>;

fn test_events() -> Vec<EventDefinition<TestState, TestEvent>> {
    vec![
        EventDefinition::new(TestEvent::E1, [TestState::A, TestState::B], TestState::C),
        EventDefinition::new(TestEvent::E2, [TestState::C], TestState::D),
        EventDefinition::new(TestEvent::E3, [TestState::A, TestState::D], TestState::A),
    ]
}

#[test]
fn walks_the_reference_table() {
    let machine = Machine::new(TestState::A, test_events(), Settings::default(), |_| {});

    assert!(machine.can(&TestEvent::E1));
    assert!(!machine.can(&TestEvent::E2));
    assert!(!machine.can(&TestEvent::E3));

    machine.trigger(&TestEvent::E1).unwrap();
    assert_eq!(machine.get(), TestState::C);

    machine.trigger(&TestEvent::E2).unwrap();
    assert_eq!(machine.get(), TestState::D);

    assert!(machine.can(&TestEvent::E3));
    machine.trigger(&TestEvent::E3).unwrap();
    assert_eq!(machine.get(), TestState::A);
}

#[test]
fn unknown_event_is_reported_before_state() {
    let machine = Machine::new(TestState::C, test_events(), Settings::default(), |_| {});

    assert_eq!(
        machine.trigger(&TestEvent::Unknown),
        Err(TriggerError::InvalidEvent {
            event: TestEvent::Unknown
        })
    );
    assert_eq!(machine.get(), TestState::C);
}

#[test]
fn invalid_state_is_reported_before_same_state() {
    // E3 would be a same-state transition from A, but B is not a source.
    let machine = Machine::new(TestState::B, test_events(), Settings::default(), |_| {});

    assert_eq!(
        machine.trigger(&TestEvent::E3),
        Err(TriggerError::InvalidState { state: TestState::B })
    );
}

#[test]
fn same_state_policy_is_configurable() {
    let strict = Machine::new(TestState::A, test_events(), Settings::default(), |_| {});
    assert_eq!(
        strict.trigger(&TestEvent::E3),
        Err(TriggerError::SameStateTransition {
            event: TestEvent::E3
        })
    );

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let relaxed = MachineBuilder::new()
        .initial(TestState::A)
        .definitions(test_events())
        .allow_same_state_transition(true)
        .on_transition(move |t| sink.lock().push(t))
        .build()
        .unwrap();

    relaxed.trigger(&TestEvent::E3).unwrap();
    assert_eq!(relaxed.get(), TestState::A);
    assert_eq!(
        *seen.lock(),
        vec![Transition {
            event: TestEvent::E3,
            source: TestState::A,
            destination: TestState::A,
        }]
    );
}

#[test]
fn later_duplicate_definition_wins() {
    let machine = Machine::new(
        TestState::A,
        vec![
            EventDefinition::new(TestEvent::E1, [TestState::A], TestState::B),
            EventDefinition::new(TestEvent::E1, [TestState::A], TestState::D),
        ],
        Settings::default(),
        |_| {},
    );

    machine.trigger(&TestEvent::E1).unwrap();
    assert_eq!(machine.get(), TestState::D);
}

#[test]
fn observer_chains_triggers() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);

    let machine = Arc::new_cyclic(|weak: &Weak<TestMachine>| {
        let weak = weak.clone();
        Machine::new(
            TestState::A,
            test_events(),
            Settings::default(),
            move |t: Transition<TestState, TestEvent>| {
                sink.lock().push(t.event);
                if t.event == TestEvent::E1 {
                    if let Some(machine) = weak.upgrade() {
                        assert!(machine.trigger(&TestEvent::E2).is_ok());
                    }
                }
            },
        )
    });

    assert!(machine.trigger(&TestEvent::E1).is_ok());
    assert_eq!(machine.get(), TestState::D);
    assert_eq!(*seen.lock(), vec![TestEvent::E1, TestEvent::E2]);
}

#[test]
fn observer_may_query_and_set() {
    let observed = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&observed);

    let machine = Arc::new_cyclic(|weak: &Weak<TestMachine>| {
        let weak = weak.clone();
        Machine::new(TestState::A, test_events(), Settings::default(), move |_| {
            if let Some(machine) = weak.upgrade() {
                sink.lock().push((machine.get(), machine.can(&TestEvent::E2)));
                machine.set(TestState::B);
            }
        })
    });

    machine.trigger(&TestEvent::E1).unwrap();

    assert_eq!(*observed.lock(), vec![(TestState::C, true)]);
    assert_eq!(machine.get(), TestState::B);
}

#[test]
fn rehydrate_with_set() {
    let saved = {
        let machine = Machine::new(TestState::A, test_events(), Settings::default(), |_| {});
        machine.trigger(&TestEvent::E1).unwrap();
        serde_json::to_string(&machine.get()).unwrap()
    };

    let restored: TestState = serde_json::from_str(&saved).unwrap();
    let machine = Machine::new(TestState::A, test_events(), Settings::default(), |_| {});
    machine.set(restored);

    assert!(machine.is(&TestState::C));
    assert!(machine.can(&TestEvent::E2));
}

#[test]
fn definitions_load_from_json() {
    let json = r#"[
        {"event": "E1", "sources": ["A", "B"], "destination": "C"},
        {"event": "E2", "sources": ["C"], "destination": "D"}
    ]"#;
    let definitions: Vec<EventDefinition<TestState, TestEvent>> =
        serde_json::from_str(json).unwrap();
    let settings: Settings = serde_json::from_str(r#"{"allow_same_state_transition": false}"#)
        .unwrap();

    let machine = Machine::new(TestState::B, definitions, settings, |_| {});

    machine.trigger(&TestEvent::E1).unwrap();
    machine.trigger(&TestEvent::E2).unwrap();
    assert_eq!(machine.get(), TestState::D);
}

#[test]
fn errors_render_identifiers() {
    let machine = Machine::new(TestState::A, test_events(), Settings::default(), |_| {});

    let err = machine.trigger(&TestEvent::E2).unwrap_err();
    assert_eq!(err.to_string(), "invalid state: A");
    assert_eq!(err.error_code(), "INVALID_STATE");
    assert!(err.is_recoverable());
}
