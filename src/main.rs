use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use order_recap::{config, OrderRecap};

/// Summarize a year of concluded orders from the orders API.
#[derive(Parser, Debug)]
#[command(name = "order-recap", version)]
struct Cli {
    /// Bearer token copied from the `authorization` header
    #[arg(long, env = "ORDER_RECAP_TOKEN", hide_env_values = true)]
    token: String,

    /// Calendar year to analyze
    #[arg(long, default_value_t = config::DEFAULT_TARGET_YEAR)]
    year: i32,

    /// API origin
    #[arg(long, default_value = config::API_BASE)]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,

    /// Print the report as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn init_log() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some("order_recap"), my_code_level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_log();
    let args = Cli::parse();

    let result = OrderRecap::builder()
        .base_url(&args.base_url)
        .timeout(Duration::from_secs(args.timeout_secs))
        .build()
        .and_then(|mut recap| recap.analyze_year(&args.token, args.year));

    match result {
        Ok(report) => {
            let summary = report.summary();
            if args.json {
                match serde_json::to_string_pretty(&summary) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        log::error!("Failed to serialize report: {e}");
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{summary}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Analysis failed: {e}");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}
