// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered property sources example.
//!
//! Raw properties are collected from a YAML file, environment variables and
//! command-line arguments, merged by priority, and parsed by one registry.
//!
//! Priority order (highest to lowest):
//!   1. CLI arguments (priority 3)
//!   2. Environment variables with the `DEMO_` prefix (priority 2)
//!   3. YAML file (priority 1)
//!
//! To run this example:
//! ```bash
//! export DEMO_DATABASE_PORT=6543
//! cargo run --example layered_sources -- --app.name=FromCli
//! ```

use configdef::prelude::*;
use std::env;

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== configdef: Layered Sources ===\n");

    let yaml_content = r#"
app:
  name: "YamlApp"
  port: 8080
  hosts: [web1, web2]

database:
  host: "localhost"
  port: 5432

features:
  analytics: true
"#;

    // Write to a temporary file
    let temp_file = tempfile::NamedTempFile::new()?;
    std::fs::write(temp_file.path(), yaml_content)?;

    let mut def = ConfigDef::new();
    def.define("app.name", ConfigType::Text, "demo")?
        .define("app.port", ConfigType::Int, 80)?
        .define("app.hosts", ConfigType::List, "")?
        .define("database.host", ConfigType::Text, "127.0.0.1")?
        .define_validated(
            "database.port",
            ConfigType::Int,
            5432,
            IntRangeValidator::new(1, 65535),
        )?
        .define("features.analytics", ConfigType::Bool, false)?;

    // Skip the program name
    let cli_args: Vec<String> = env::args().skip(1).collect();

    let loader = PropertyLoader::new()
        .with_yaml_file(temp_file.path())?
        .with_env_prefix("DEMO_")
        .with_cli_args(cli_args);

    println!("Sources, highest priority first: {:?}\n", loader.source_names());

    match def.load(&loader) {
        Ok(values) => {
            println!("=== Configuration Values ===");
            for (name, value) in &values {
                println!("  {} = {}", name, value);
            }
        }
        Err(e) => {
            println!("✗ Failed to load configuration: {}", e);
            if e.kind() == ErrorKind::UnknownKey {
                println!("  Only defined keys may be supplied; known keys are:");
                for name in def.names() {
                    println!("    {}", name);
                }
            }
        }
    }

    Ok(())
}
