//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Enum identifiers declared with `identifier_enum!`
//! - One event name shared by several source states
//!
//! Run with: cargo run --example traffic_light

use simplestate::{identifier_enum, MachineBuilder};

identifier_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

identifier_enum! {
    enum Signal {
        Advance,
        Emergency,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let machine = MachineBuilder::new()
        .initial(TrafficLight::Red)
        .event(Signal::Advance, [TrafficLight::Red], TrafficLight::Green)
        .event(Signal::Advance, [TrafficLight::Green], TrafficLight::Yellow)
        .event(Signal::Advance, [TrafficLight::Yellow], TrafficLight::Red)
        .event(
            Signal::Emergency,
            [TrafficLight::Green, TrafficLight::Yellow],
            TrafficLight::Red,
        )
        .on_transition(|t| {
            println!("  {:<9} {} -> {}", t.event.name(), t.source, t.destination)
        })
        .build()
        .expect("initial state is set");

    println!("Initial state: {}\n", machine.get());

    println!("Transition sequence:");
    for _ in 0..4 {
        machine
            .trigger(&Signal::Advance)
            .expect("advance is defined for every light");
    }
    machine
        .trigger(&Signal::Emergency)
        .expect("emergency is defined from green");

    println!();
    match machine.trigger(&Signal::Emergency) {
        Ok(()) => println!("Emergency fired again"),
        Err(err) => println!("Second emergency rejected: {err}"),
    }

    println!("\n=== Example Complete ===");
}
