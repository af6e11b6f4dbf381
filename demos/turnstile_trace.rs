//! Two-Coin Turnstile
//!
//! Drives a turnstile through a sequence of inputs given on the command
//! line and prints the resulting action trace.
//!
//! Run with: cargo run --example turnstile_trace -- Coin Coin Pass Pass Reset

use turnstile::{ActionRecorder, Event, TwoCoinTurnstile};

fn main() {
    let mut turnstile = TwoCoinTurnstile::new(ActionRecorder::new());

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        println!("Usage: turnstile_trace <Coin|Pass|Reset>...");
        return;
    }

    println!("=== Two-Coin Turnstile ===\n");
    println!("Initial state: {}", turnstile.state());

    for input in &inputs {
        if input == "Reset" {
            turnstile.reset();
        } else {
            match input.parse::<Event>() {
                Ok(event) => turnstile.handle_event(event),
                Err(e) => {
                    eprintln!("{e}");
                    continue;
                }
            }
        }
        println!("  {input:<5} -> {}", turnstile.state());
    }

    println!("\nTrace: {}", turnstile.actions().trace());
    println!(
        "Unexpected transitions: {}",
        turnstile.history().unexpected_count()
    );
}
