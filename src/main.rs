mod core;

use clap::Parser;

use crate::core::counter::{Counter, Inner};
use crate::core::error::CounterError;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 1)]
    increments: u32,
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    inner_value: Option<f32>,
    #[arg(short, long, default_value_t = String::from("./logs"))]
    log_dir: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_command_line_args();

    let _guard = init_tracing(&args.log_dir)?;

    let mut counter = create_counter(args.inner_value);
    run(&mut counter, args.increments)?;

    Ok(())
}

fn parse_command_line_args() -> Args {
    Args::parse()
}

fn init_tracing(log_dir: &str) -> Result<WorkerGuard, CounterError> {
    let app_name = concat!(env!("CARGO_PKG_NAME"), "-", env!("CARGO_PKG_VERSION")).to_string();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| CounterError::Tracing(e.to_string()))?;

    let file_appender = tracing_appender::rolling::daily(log_dir, "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let bunyan_formatting_layer = BunyanFormattingLayer::new(app_name, non_blocking);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(bunyan_formatting_layer)
        .try_init()
        .map_err(|e| CounterError::Tracing(e.to_string()))?;

    Ok(guard)
}

fn create_counter(inner_value: Option<f32>) -> Counter {
    match inner_value {
        Some(value) => Counter::with_inner(Inner::new(value)),
        None => Counter::new(),
    }
}

fn run(counter: &mut Counter, increments: u32) -> Result<(), CounterError> {
    for _ in 0..increments {
        let previous = counter.increment();
        println!("increment -> {}", previous);
    }
    tracing::info!("Counter value after {} increment(s): {}", increments, counter.value());

    match counter.inner() {
        Some(inner) => inner.foo(),
        None => {
            tracing::warn!("No inner value given, skipping foo");
            Ok(())
        }
    }
}
