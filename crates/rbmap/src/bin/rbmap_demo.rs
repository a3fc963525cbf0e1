//! `rbmap-demo`: walks an [`RbMap`] through inserts, lookups, an update and
//! a delete, printing the tree after each stage.
//!
//! Usage:
//!   rbmap-demo [count] [log-level]
//!
//! `count` odd keys `1, 3, 5, …` are inserted (default 10). The log level
//! (`off`, `error`, `warn`, `info`, `debug`, `trace`) falls back to the
//! `RBMAP_LOG` environment variable, then to `info`.

use log::{info, LevelFilter};
use rbmap::{MapError, RbMap};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let count = match args.get(1).map(|s| s.parse::<u32>()) {
        None => 10,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("count must be a non-negative integer: {e}");
            std::process::exit(1);
        }
    };

    let level = args
        .get(2)
        .cloned()
        .or_else(|| std::env::var("RBMAP_LOG").ok())
        .unwrap_or_else(|| "info".to_string());
    let level = match level.parse::<LevelFilter>() {
        Ok(level) => level,
        Err(_) => {
            eprintln!("unknown log level: {level}");
            std::process::exit(1);
        }
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    if let Err(e) = run(count) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(count: u32) -> Result<(), MapError> {
    let mut map = RbMap::with_capacity(count as usize);
    let keys: Vec<u64> = (0..u64::from(count)).map(|i| i * 2 + 1).collect();
    info!("inserting {} odd keys", keys.len());
    for &k in &keys {
        map.insert(k, format!("value-{k}"))?;
    }

    println!("Tree after inserts:");
    println!("{}", map.print());
    println!();

    println!("In order:");
    let line: Vec<String> = map.keys().map(|k| k.to_string()).collect();
    println!("{}", line.join(" "));
    println!();

    println!("Lookups:");
    for k in 0..u64::from(count) * 2 {
        match map.get(&k) {
            Some(v) => println!("  {k}: {v}"),
            None => println!("  {k}: not found"),
        }
    }
    println!();

    if let Some(&k) = keys.first() {
        let previous = map.insert(k, "updated".to_string())?.previous();
        println!("Updated {k}: {previous:?} -> {:?}", map.get(&k));
    }

    match map.delete(&5) {
        Ok(v) => println!("Deleted 5 ({v})"),
        Err(e) => println!("Delete 5: {e}"),
    }

    println!();
    println!("Tree after delete:");
    println!("{}", map.print());
    println!(
        "size={} height={} black_height={}",
        map.len(),
        map.height(),
        map.black_height()
    );

    if let Err(e) = map.validate() {
        eprintln!("invariant check failed: {e}");
        std::process::exit(2);
    }
    info!("all invariants hold");
    Ok(())
}
