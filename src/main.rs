use protected_record::{FieldAccess, MarkupSource, Record};
use std::env;

fn main() {
    let _logger = match flexi_logger::Logger::try_with_env_or_str("info")
        .and_then(|logger| logger.start())
    {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("WARNING: failed to start logger: {}", e);
            None
        }
    };

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-markup-file> [--field <NAME>]", args[0]);
        std::process::exit(1);
    }

    let path = &args[1];
    let mut requested_field: Option<&str> = None;
    // Parse --field argument
    if let Some(field_idx) = args.iter().position(|arg| arg == "--field") {
        if let Some(name) = args.get(field_idx + 1) {
            requested_field = Some(name);
        } else {
            eprintln!("ERROR: --field flag requires an argument.");
            std::process::exit(1);
        }
    }

    let source = match MarkupSource::from_file(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}", path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let record = match Record::builder().source(source).and_then(|b| b.build()) {
        Ok(record) => record,
        Err(e) => {
            eprintln!("ERROR: Failed to ingest {}", path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match requested_field {
        Some(name) => match record.field(name) {
            Ok(value) => println!("{}", value),
            Err(e) => {
                eprintln!("ERROR: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            println!("Ingested {} field(s) from {}", record.len(), path);
            println!("{}", "=".repeat(60));
            let mut fields: Vec<(&str, &str)> = record.iter().collect();
            fields.sort_by_key(|(name, _)| *name);
            for (name, value) in fields {
                println!("  {} = {}", name, value);
            }
        }
    }
}
