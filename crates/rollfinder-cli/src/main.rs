mod analyze_cmd;
mod cli;
mod render;

use clap::Parser;
use log::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a global tracing subscriber was already set");
    }
    // The worker pool and config loader log through the `log` facade.
    if tracing_log::LogTracer::init().is_err() {
        eprintln!("Warning: a global logger was already set");
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!("rollfinder v{}", env!("CARGO_PKG_VERSION"));

    let config = match rollfinder::load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Analyze {
            ref names,
            ref documents,
            ref output,
            ref summary_json,
            workers,
            no_ocr,
        } => analyze_cmd::run(
            &analyze_cmd::AnalyzeArgs {
                names,
                documents,
                output: output.as_deref(),
                summary_json: summary_json.as_deref(),
                workers,
                no_ocr,
            },
            config,
        ),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
