use crate::clipboard::SystemClipboard;
use crate::error::CredsError;
use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod clipboard;
mod error;
mod update;

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout is kept for the status line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_line_number(debug)
        .with_env_filter(filter)
        .init();
}

fn main() -> ExitCode {
    let args = shared::args::Args::parse();

    init_tracing(args.debug);

    let result = SystemClipboard::new()
        .and_then(|mut clipboard| update::update_profile(&mut clipboard, &args));

    match result {
        Ok(profile_name) => {
            println!("✅ profile updated: {}", profile_name);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn report(e: &CredsError) {
    println!("❌ {}", e);

    let mut source = e.source();
    while let Some(cause) = source {
        println!("{}", cause);
        source = cause.source();
    }
}
