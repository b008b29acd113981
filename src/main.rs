use mo_reader::DecodeOptions;
use std::env;
use std::fs::File;

fn main() {
    let args: Vec<String> = env::args().collect();

    let lossy = args.iter().skip(1).any(|arg| arg == "--lossy");
    let positional: Vec<&str> = args
        .iter()
        .skip(1)
        .filter(|arg| *arg != "--lossy")
        .map(String::as_str)
        .collect();

    let Some((&mo_path, query)) = positional.split_first() else {
        eprintln!(
            "Usage: {} [--lossy] <path-to-mo-file> [<msgid> [<msgid_plural> <count>]]",
            args.first().map(String::as_str).unwrap_or("mo-reader")
        );
        std::process::exit(1);
    };

    let file = match File::open(mo_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("ERROR: Failed to open {}: {}", mo_path, e);
            std::process::exit(1);
        }
    };

    let catalog = match DecodeOptions::new().lossy_utf8(lossy).decode(file) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("ERROR: Failed to read catalog {}", mo_path);
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    match query {
        [] => {}
        [msgid] => {
            println!("{}", catalog.lookup(msgid));
            return;
        }
        [msgid, msgid_plural, count] => {
            let Ok(count) = count.parse::<i64>() else {
                eprintln!("ERROR: count must be an integer, got {:?}", count);
                std::process::exit(1);
            };
            println!("{}", catalog.lookup_plural(msgid, msgid_plural, count));
            return;
        }
        _ => {
            eprintln!("ERROR: Expected <msgid> or <msgid> <msgid_plural> <count>.");
            std::process::exit(1);
        }
    }

    println!("Catalog: {}", mo_path);
    println!("{}", "=".repeat(60));
    if let Some(header) = catalog.header() {
        println!("  Byte order: {}", header.endianness);
        println!("  Format version: {}", header.version);
        println!("  Records: {}", header.message_count);
    }
    println!("  Keys: {}", catalog.len());

    let metadata = catalog.metadata();
    if !metadata.is_empty() {
        println!("\nMetadata:");
        for (name, value) in metadata.iter() {
            println!("  {}: {}", name, value);
        }
    }

    let mut entries: Vec<(&str, &str)> = catalog
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .collect();
    entries.sort_unstable();

    println!("\nSample Entries (first 10):");
    for (i, (key, value)) in entries.iter().take(10).enumerate() {
        println!("  {}. {:?} -> {:?}", i + 1, key, value);
    }
    if entries.len() > 10 {
        println!("  ... and {} more", entries.len() - 10);
    }
}
