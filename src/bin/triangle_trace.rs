//! CLI tool for webgl-triangle - runs the bootstrap against a recording
//! context and prints the WebGL call trace as JSON
//!
//! Usage:
//!   triangle_trace                        # Basic variant
//!   triangle_trace --builtin              # Geometry variant, embedded asset
//!   triangle_trace <geometry.json>        # Geometry variant from a file
//!   triangle_trace [...] -o trace.json    # Write the trace to a file

#![allow(clippy::exit)]

use std::env;
use std::fs;
use std::io::{self, Write};

use webgl_triangle::logging::{init_logging, LoggingConfig};
use webgl_triangle::render::RecordingContext;
use webgl_triangle::{run, BootstrapConfig, Geometry};

fn main() {
    init_logging(LoggingConfig::default());

    let mut args = env::args().skip(1);
    let mut input_path = None;
    let mut output_path = None;
    let mut builtin = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" => output_path = args.next(),
            "--builtin" => builtin = true,
            "-h" | "--help" => {
                eprintln!("Usage: triangle_trace [--builtin | <geometry.json>] [-o trace.json]");
                return;
            }
            _ => input_path = Some(arg),
        }
    }

    let mut config = BootstrapConfig {
        use_builtin_geometry: builtin,
        ..BootstrapConfig::default()
    };

    if let Some(path) = &input_path {
        let json = match fs::read_to_string(path) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Error reading {}: {}", path, e);
                std::process::exit(1);
            }
        };
        config.geometry = match Geometry::from_json(&json) {
            Ok(g) => Some(g),
            Err(e) => {
                eprintln!("Error loading geometry: {}", e);
                std::process::exit(1);
            }
        };
    }

    // The bootstrap logs its own failures.
    let scene = match run(Some(RecordingContext::new()), &config) {
        Ok(s) => s,
        Err(_) => std::process::exit(1),
    };

    let json = match serde_json::to_string_pretty(scene.surface().calls()) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing trace: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(&path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{json}") {
                eprintln!("Error writing trace: {}", e);
                std::process::exit(1);
            }
        }
    }
}
