//! Build script for finch-control
//!
//! Validates the embedded finch.toml defaults at compile time

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=finch.toml");
    println!("cargo:rerun-if-changed=build.rs");

    let config_path = Path::new("finch.toml");
    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read finch.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => fail(
            "Invalid TOML syntax in finch.toml",
            &e.to_string().lines().map(str::to_string).collect::<Vec<_>>(),
        ),
    };

    validate_profile(&config);
}

/// Validate the [profile] ranges
fn validate_profile(config: &toml::Value) {
    let profile = match config.get("profile") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => fail("Invalid profile configuration", &["[profile] must be a table".to_string()]),
        None => return,
    };

    let mut errors = Vec::new();

    for (key, min, max) in [
        ("motor_speed", 1, 255),
        ("led_brightness", 1, 255),
        ("sound_frequency_hz", 50, 2000),
    ] {
        match profile.get(key) {
            Some(toml::Value::Integer(v)) if (min..=max).contains(v) => {}
            Some(_) => errors.push(format!("[profile] {} must be an integer {}-{}", key, min, max)),
            None => {}
        }
    }

    // serde reads `wait_seconds = 2` as 2.0, so integers are accepted too
    let wait_seconds = match profile.get("wait_seconds") {
        Some(toml::Value::Float(v)) => Some(Some(*v)),
        Some(toml::Value::Integer(v)) => Some(Some(*v as f64)),
        Some(_) => Some(None),
        None => None,
    };
    match wait_seconds {
        Some(Some(v)) if (1.0..=10.0).contains(&v) => {}
        Some(_) => errors.push("[profile] wait_seconds must be a number 1.0-10.0".to_string()),
        None => {}
    }

    if !errors.is_empty() {
        fail("Invalid profile configuration", &errors);
    }
}

fn fail(title: &str, lines: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<57}║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        lines
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
