//! Example printing the argument table built from this program's command line
//!
//! ```text
//! RUST_LOG=argtable=trace cargo run -p argtable --example dump_args -- \
//!     -datadir=/tmp/node --port=8333 -noupnp -connect=a -connect=b positional
//! ```

use argtable::{ArgTable, EntrySource};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install a stderr subscriber filtered by `RUST_LOG`, forwarding `log` records
fn init_logging() {
    tracing_log::LogTracer::init().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}

fn source_label(source: EntrySource) -> &'static str {
    match source {
        EntrySource::CommandLine => "command line",
        EntrySource::Negation => "negation",
        EntrySource::SoftSet => "soft default",
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut table = ArgTable::from_env()?;

    // -connect implies -nolisten unless given explicitly
    if table.has("-connect") && table.soft_set_bool_arg("-listen", false) {
        tracing::info!("-connect given, disabling -listen");
    }
    table.soft_set_arg("-datadir", "~/.argtable");

    println!("=== Resolved arguments ===\n");
    for key in table.keys() {
        let Some(entry) = table.get_entry(key) else {
            continue;
        };
        println!(
            "{key:<16} = {:<20} ({}, bool={}, int={})",
            format!("{:?}", entry.value),
            source_label(entry.source),
            entry.as_bool(),
            entry.as_i64(),
        );
        let history = table.get_args(key);
        if history.len() > 1 {
            println!("{:<16}   history: {history:?}", "");
        }
    }

    println!("\n=== Typed lookups ===\n");
    println!("-datadir  = {}", table.get_arg("-datadir", ""));
    println!("-port     = {}", table.get_int_arg("-port", 8333));
    println!("-listen   = {}", table.get_bool_arg("-listen", true));
    println!("-upnp     = {}", table.get_bool_arg("-upnp", true));

    match table.try_get_int_arg("-port") {
        Ok(Some(port)) => println!("-port is a valid number: {port}"),
        Ok(None) => println!("-port not given, using default"),
        Err(e) => tracing::warn!("{e}"),
    }

    Ok(())
}
