//! sniff CLI — driving adapter for the sniff describer registry.
//!
//! Subcommands:
//! - `describe <value> [--kind]` — print the description a value resolves to
//! - `generate <config> [--out <file>]` — emit a factory module
//! - `info` — print registered selectors in priority order
//!
//! Logging goes to stderr, filtered by `RUST_LOG` (default `warn`).

use std::path::Path;
use std::process;

use sniff::{Describer, DescriberRegistry, Value};
use sniff_gen::GeneratorConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "describe" => cmd_describe(&args[2..]),
        "generate" => cmd_generate(&args[2..]),
        "info" => cmd_info(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_describe(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("describe requires a value file path".into());
    }

    let value_path = &args[0];
    let show_kind = parse_describe_flags(&args[1..])?;

    let value = load_value(value_path)?;
    let registry = build_registry();
    let describer = registry.describer_for(&value);
    tracing::info!(describer = %describer_chain(&describer), "resolved describer");

    if show_kind {
        println!("{}", describer_chain(&describer));
    }
    println!("{}", describer.describe(&value));
    Ok(())
}

fn cmd_generate(args: &[String]) -> Result<(), String> {
    if args.is_empty() {
        return Err("generate requires a config file path".into());
    }

    let config_path = &args[0];
    let out = parse_out(&args[1..])?;

    let config = load_generator_config(config_path)?;
    let source = sniff_gen::render_module(&config).map_err(|e| format!("generation failed: {e}"))?;

    match out {
        Some(path) => {
            std::fs::write(&path, &source)
                .map_err(|e| format!("failed to write \"{path}\": {e}"))?;
            println!("Wrote {} methods to {path}", config.methods.len());
        }
        None => print!("{source}"),
    }

    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Uniform return type for all commands
fn cmd_info() -> Result<(), String> {
    let registry = build_registry();

    println!("Registered selectors (priority order):");
    for selector in registry.selectors() {
        let kind = registry.get(selector).map_or("?", Describer::kind);
        println!("  {selector} -> {kind}");
    }

    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Registry assembly (composition root)
// ═══════════════════════════════════════════════════════════════════════════════

fn build_registry() -> DescriberRegistry {
    sniff_test::register(DescriberRegistry::new())
}

/// `collection<item<custom>>` style summary of a resolved describer.
fn describer_chain(describer: &Describer) -> String {
    match describer.inner() {
        Some(inner) => format!("{}<{}>", describer.kind(), describer_chain(inner)),
        None => describer.kind().to_owned(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Input loading
// ═══════════════════════════════════════════════════════════════════════════════

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("failed to read \"{path}\": {e}"))
}

fn load_value(path: &str) -> Result<Value, String> {
    let content = read(path)?;

    let json: serde_json::Value = if is_json(path) {
        serde_json::from_str(&content).map_err(|e| format!("JSON parse error: {e}"))?
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(&content).map_err(|e| format!("YAML parse error: {e}"))?
    };

    Ok(sniff_test::fixture::to_value(&json))
}

fn load_generator_config(path: &str) -> Result<GeneratorConfig, String> {
    let content = read(path)?;

    let config = if is_json(path) {
        GeneratorConfig::from_json(&content)
    } else {
        GeneratorConfig::from_yaml(&content)
    };
    config.map_err(|e| e.to_string())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

fn parse_describe_flags(args: &[String]) -> Result<bool, String> {
    let mut show_kind = false;
    for arg in args {
        match arg.as_str() {
            "--kind" => show_kind = true,
            other => return Err(format!("unexpected argument \"{other}\"")),
        }
    }
    Ok(show_kind)
}

fn parse_out(args: &[String]) -> Result<Option<String>, String> {
    let mut out = None;
    let mut i = 0;

    while i < args.len() {
        if args[i] == "--out" {
            i += 1;
            let path = args.get(i).ok_or("--out requires a file path")?;
            out = Some(path.clone());
            i += 1;
        } else {
            return Err(format!("unexpected argument \"{}\"", args[i]));
        }
    }

    Ok(out)
}

fn print_usage() {
    eprintln!(
        "Usage: sniff <command> [options]

Commands:
  describe <value> [--kind]          Print the description of a JSON/YAML value
  generate <config> [--out <file>]   Emit a factory module
  info                               Print registered selectors
  help                               Show this help

Set RUST_LOG (e.g. RUST_LOG=sniff=trace) for diagnostics on stderr."
    );
}
