//! # RPSL Object Validator
//!
//! A command-line utility for checking RPSL object files against the
//! attribute catalog and object templates of a registry dialect.
//!
//! ## Usage
//!
//! ### Validate a Single File
//!
//! ```bash
//! cargo run --bin rpsl-validator objects/mntner.txt
//! ```
//!
//! ### Validate All Objects in a Directory
//!
//! ```bash
//! cargo run --bin rpsl-validator ./objects/ --dialect ripe
//! ```
//!
//! ### Print a Template
//!
//! ```bash
//! cargo run --bin rpsl-validator --template inetnum
//! ```
//!
//! ## Output Examples
//!
//! ```text
//! Validating objects in: objects/mntner.txt (APNIC)
//!
//!   ✓ mntner MAINT-EXAMPLE
//!   ❌ route 192.0.2.0/24
//!      - Mandatory attribute "origin" is missing
//!      - [3] Syntax error in AS-FOO
//!
//! Validation Summary:
//!   Valid objects: 1
//!   Invalid objects: 1
//!   Unreadable objects: 0
//! ```
//!
//! With `--json` the findings for every object are printed as one JSON
//! array instead.
//!
//! ## Exit Codes
//!
//! - `0`: Every object is valid
//! - `1`: One or more objects have findings, or the input could not be read

use rpsl_schema::{Catalog, Dialect, ObjectType, RpslObject, SchemaConfig, install};
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

struct Options {
    path: Option<PathBuf>,
    dialect: Option<Dialect>,
    json: bool,
    template: Option<ObjectType>,
}

#[derive(Default)]
struct Summary {
    valid: usize,
    invalid: usize,
    unreadable: usize,
    reports: Vec<serde_json::Value>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("rpsl-validator");

    let options = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            print_usage(program);
            process::exit(1);
        }
    };

    let config = match options.dialect {
        Some(dialect) => SchemaConfig::new(dialect),
        None => SchemaConfig::from_env().unwrap_or_else(|e| {
            eprintln!("❌ {}", e);
            process::exit(1);
        }),
    };
    let catalog = install(&config).unwrap_or_else(|e| {
        eprintln!("❌ Failed to build catalog: {}", e);
        process::exit(1);
    });

    if let Some(object_type) = options.template {
        print!("{}", catalog.describe_template(object_type));
        return;
    }

    let Some(path) = options.path else {
        print_usage(program);
        process::exit(1);
    };

    let files = match collect_files(&path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if !options.json {
        println!(
            "Validating objects in: {} ({})",
            path.display(),
            catalog.dialect()
        );
    }

    let mut summary = Summary::default();
    for file in &files {
        match fs::read_to_string(file) {
            Ok(content) => validate_text(catalog, file, &content, options.json, &mut summary),
            Err(e) => {
                eprintln!("❌ Cannot read {}: {}", file.display(), e);
                summary.unreadable += 1;
            }
        }
    }

    if options.json {
        match serde_json::to_string_pretty(&summary.reports) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to render JSON: {}", e);
                process::exit(1);
            }
        }
    } else {
        println!("\nValidation Summary:");
        println!("  Valid objects: {}", summary.valid);
        println!("  Invalid objects: {}", summary.invalid);
        println!("  Unreadable objects: {}", summary.unreadable);
    }

    if summary.invalid > 0 || summary.unreadable > 0 {
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <file-or-directory> [--dialect apnic|ripe] [--json] [--template <object-type>]",
        program
    );
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} objects/route.txt", program);
    eprintln!("  {} ./objects/ --dialect ripe --json", program);
    eprintln!("  {} --template aut-num", program);
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        path: None,
        dialect: None,
        json: false,
        template: None,
    };

    let mut args = args.iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--dialect" => {
                let value = args.next().ok_or("--dialect needs a value")?;
                options.dialect = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            "--template" => {
                let value = args.next().ok_or("--template needs an object type")?;
                options.template = Some(value.parse().map_err(|e| format!("{}", e))?);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option '{}'", flag)),
            path => {
                if options.path.is_some() {
                    return Err(format!("unexpected argument '{}'", path));
                }
                options.path = Some(PathBuf::from(path));
            }
        }
    }
    Ok(options)
}

fn collect_files(path: &Path) -> Result<Vec<PathBuf>, String> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(format!("'{}' is not a valid file or directory", path.display()));
    }

    let entries = fs::read_dir(path).map_err(|e| format!("Error reading directory: {}", e))?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|s| s.to_str()),
                Some("txt") | Some("rpsl")
            )
        })
        .collect();
    files.sort();
    Ok(files)
}

fn validate_text(catalog: &Catalog, file: &Path, content: &str, json: bool, summary: &mut Summary) {
    if !json {
        println!("\n{}", file.display());
    }

    for result in RpslObject::parse_all(content) {
        let object = match result {
            Ok(object) => object,
            Err(e) => {
                summary.unreadable += 1;
                if json {
                    summary.reports.push(json!({
                        "file": file.display().to_string(),
                        "error": e.to_string(),
                    }));
                } else {
                    eprintln!("  ❌ {}", e);
                }
                continue;
            }
        };

        let messages = catalog.validate(&object);
        if messages.has_errors() {
            summary.invalid += 1;
        } else {
            summary.valid += 1;
        }

        if json {
            summary.reports.push(json!({
                "file": file.display().to_string(),
                "object_type": object.object_type(),
                "key": object.key(),
                "messages": messages,
            }));
            continue;
        }

        if !messages.has_errors() {
            println!("  ✓ {} {}", object.object_type(), object.key());
            continue;
        }
        println!("  ❌ {} {}", object.object_type(), object.key());
        for (index, finding) in messages.iter() {
            match index {
                Some(index) => println!("     - [{}] {}", index, finding),
                None => println!("     - {}", finding),
            }
        }
    }
}
