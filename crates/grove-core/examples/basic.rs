//! Basic example of generating a balanced board.

use grove_core::{Generator, GeneratorConfig};

fn main() {
    println!("Generating a 6x8 board...\n");
    let mut generator = Generator::with_config(GeneratorConfig { max_attempts: 1000 });

    match generator.generate(6, 8) {
        Ok(solution) => {
            println!("{}", solution.grid);
            println!("Attempts: {}", solution.attempts);
        }
        Err(e) => println!("Generation failed: {e}"),
    }

    // Pin the seed for a reproducible board.
    println!("\nSame board every run with a fixed seed:\n");
    let mut seeded = Generator::with_seed(42);
    if let Ok(solution) = seeded.generate(4, 4) {
        println!("{}", solution.grid);
    }
}
