//! Terminal highway demo.
//!
//! Run: cargo run --bin highway -- [seed]

use causeway_demos::{render, run};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let outcome = match run(seed) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", render(&outcome.terrain, &outcome.blocks));
    println!(
        "highway: {} placed, {} cleared, {} skipped in town",
        outcome.highway.placed, outcome.highway.cleared, outcome.highway.skipped_urban
    );
    match outcome.branch {
        Some(b) => println!("branch:  {} placed, {} cleared", b.placed, b.cleared),
        None => println!("branch:  none"),
    }
}
