// ============================================================================
// Fare Split Example
// ============================================================================
//
// Run with: RUST_LOG=trace cargo run --example fare_split --features logging

use tracing_subscriber::EnvFilter;
use txova_types::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fare Split Example ===\n");

    let ride = RideId::must_generate();
    let driver = DriverId::must_generate();
    let riders: Vec<UserId> = (0..3).map(|_| UserId::must_generate()).collect();

    let fare = Money::parse("100.01 MZN").expect("static fare");
    println!("Ride {} driven by {}", ride, driver);
    println!("Fare: {}\n", fare);

    let commission = fare.must_percentage(15);
    println!("Platform commission (15%): {}", commission);
    println!("Driver payout: {}\n", fare - commission);

    let shares = fare
        .split(riders.len() as i64)
        .expect("rider count is positive");
    for (rider, share) in riders.iter().zip(&shares) {
        println!("  {} pays {}", rider, share);
    }
    println!("  total: {}\n", shares.iter().sum::<Money>());

    println!("Storage encodings:");
    println!("  ride id -> {}", ride.to_storage());
    println!("  fare    -> {}", fare.to_storage());

    match "not-an-id".parse::<UserId>() {
        Ok(id) => println!("unexpected: {}", id),
        Err(err) => println!("\nRejected input: {}", err),
    }
}
