//! Order Workflow
//!
//! This example demonstrates chaining transitions from the observer and
//! restoring a machine from a saved state.
//!
//! Key concepts:
//! - The observer re-enters the machine to auto-advance
//! - Rejections are ordinary values the caller can match on
//! - `set` rehydrates a machine without notifying the observer
//!
//! Run with: RUST_LOG=simplestate=debug cargo run --example order_workflow

use simplestate::{identifier_enum, EventDefinition, Machine, Settings, TriggerError};
use std::sync::{Arc, Weak};
use tracing_subscriber::EnvFilter;

identifier_enum! {
    enum OrderState {
        Draft,
        Submitted,
        Approved,
        Shipped,
        Cancelled,
    }
}

identifier_enum! {
    enum OrderEvent {
        Submit,
        Approve,
        Ship,
        Cancel,
        Refund,
    }
}

fn definitions() -> Vec<EventDefinition<OrderState, OrderEvent>> {
    use OrderEvent::*;
    use OrderState::*;

    vec![
        EventDefinition::new(Submit, [Draft], Submitted),
        EventDefinition::new(Approve, [Submitted], Approved),
        EventDefinition::new(Ship, [Approved], Shipped),
        EventDefinition::new(Cancel, [Draft, Submitted, Approved], Cancelled),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Order Workflow ===\n");

    // Small orders are approved automatically as soon as they are submitted.
    let machine = Arc::new_cyclic(|weak: &Weak<Machine<OrderState, OrderEvent>>| {
        let weak = weak.clone();
        Machine::new(
            OrderState::Draft,
            definitions(),
            Settings::default(),
            move |t| {
                println!("  {} : {} -> {}", t.event, t.source, t.destination);
                if t.event == OrderEvent::Submit {
                    if let Some(machine) = weak.upgrade() {
                        if let Err(err) = machine.trigger(&OrderEvent::Approve) {
                            println!("  auto-approve failed: {err}");
                        }
                    }
                }
            },
        )
    });

    println!("Submitting order:");
    if let Err(err) = machine.trigger(&OrderEvent::Submit) {
        println!("  submit failed: {err}");
    }
    println!("State after submit: {}\n", machine.get());

    println!("Available events: {:?}\n", machine.available_events());

    println!("Rejections:");
    for event in [OrderEvent::Submit, OrderEvent::Refund] {
        match machine.trigger(&event) {
            Ok(()) => println!("  {event} fired"),
            Err(err @ TriggerError::InvalidEvent { .. }) => {
                println!("  {event}: {err} (programming error)")
            }
            Err(err) => println!("  {event}: {err} ({})", err.error_code()),
        }
    }

    println!("\nRestoring a saved order:");
    let saved = OrderState::Approved;
    machine.set(saved);
    println!("  restored to {}", machine.get());
    if machine.can(&OrderEvent::Ship) {
        let _ = machine.trigger(&OrderEvent::Ship);
    }
    println!("Final state: {}", machine.get());

    println!("\n=== Example Complete ===");
}
