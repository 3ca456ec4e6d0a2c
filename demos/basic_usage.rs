// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configdef crate.
//!
//! This example demonstrates:
//! - Defining keys with a type, a default and an optional validator
//! - Parsing raw string properties into typed values
//! - Falling back to the default when a value cannot be coerced
//! - Rejecting unknown keys and values that fail validation
//!
//! To run this example:
//! ```bash
//! RUST_LOG=debug cargo run --example basic_usage
//! ```

use configdef::prelude::*;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== configdef: Basic Usage ===\n");

    let mut def = ConfigDef::new();
    def.define("app.name", ConfigType::Text, "demo")?
        .define("app.debug", ConfigType::Bool, false)?
        .define("app.workers", ConfigType::Int, 4)?
        .define("app.max_upload", ConfigType::Long, 1_048_576i64)?
        .define("app.hosts", ConfigType::List, "localhost")?
        .define("app.weights", ConfigType::Map, "primary:1")?
        .define_validated(
            "pool.size",
            ConfigType::Int,
            10,
            IntRangeValidator::new(1, 64),
        )?
        .define_validated(
            "app.token",
            ConfigType::Text,
            "abc123",
            RegexValidator::new("[0-9A-Za-z]{5,10}")?,
        )?;

    println!("Defined keys:");
    for name in def.names() {
        if let Some(key) = def.find(name) {
            println!("  {}", key);
        }
    }

    // Example 1: every type from strings
    println!("\n--- Example 1: Parsing raw strings ---");
    let values = def.parse([
        ("app.name", "inventory"),
        ("app.debug", "TRUE"),
        ("app.workers", "8"),
        ("app.max_upload", "10737418240"),
        ("app.hosts", "db1, db2 , "),
        ("app.weights", "primary:3, replica : 1"),
        ("pool.size", "32"),
    ])?;
    for (name, value) in &values {
        println!("  {} = {}", name, value);
    }

    // Example 2: uncoercible values fall back to the default
    println!("\n--- Example 2: Fallback to defaults ---");
    let values = def.parse([("app.workers", "lots")])?;
    println!(
        "  app.workers = {:?} (raw value was \"lots\")",
        values.get_int("app.workers")
    );

    // Example 3: bool is true only for "true", ignoring case
    println!("\n--- Example 3: Boolean values ---");
    for raw in ["true", "True", "yes", "1", "true "] {
        let values = def.parse([("app.debug", raw)])?;
        println!("  {:?} -> {:?}", raw, values.get_bool("app.debug"));
    }

    // Example 4: errors
    println!("\n--- Example 4: Errors ---");
    match def.parse([("app.timeout", "30")]) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {} ({:?})", e, e.kind()),
    }
    match def.parse([("pool.size", "100")]) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {} ({:?})", e, e.kind()),
    }
    match def.parse([("app.token", "abc!@111")]) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {} ({:?})", e, e.kind()),
    }
    match def.define("app.name", ConfigType::Text, "again") {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  ✗ {} ({:?})", e, e.kind()),
    }

    // Example 5: copies are independent
    println!("\n--- Example 5: Copying a registry ---");
    let mut extended = ConfigDef::copy_of(&def);
    extended.define("app.region", ConfigType::Text, "eu-west-1")?;
    println!("  original has {} keys", def.len());
    println!("  copy has {} keys", extended.len());

    Ok(())
}
