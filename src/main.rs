use tfvars_gen::cli::commands::CliArgs;
use tfvars_gen::fs::RealFileSystem;
use tfvars_gen::generator::TfvarsGenerator;
use tfvars_gen::VERSION;

use clap::{CommandFactory, Parser};
use std::env;
use std::path::PathBuf;
use tracing::{debug, error, info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("tfvars-gen v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = handle_generate(&args);

    std::process::exit(exit_code);
}

fn handle_generate(args: &CliArgs) -> i32 {
    let Some(input) = &args.input else {
        // Usage goes to stdout, not stderr
        let _ = CliArgs::command().print_help();
        return 1;
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("terraform.tfvars"));

    info!(
        "Generating {} from {}",
        output.display(),
        input.display()
    );

    let generator =
        TfvarsGenerator::new(RealFileSystem::new()).with_precedence(args.type_precedence.into());

    match generator.generate(input, &output) {
        Ok(()) => {
            info!("Generation complete");
            println!("Successfully generated {}", output.display());
            0
        }
        Err(e) => {
            error!("Generation failed: {}", e);
            println!("Error: {}", e);
            1
        }
    }
}

fn init_logging_from_args(args: &CliArgs) {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if let Some(level_str) = &args.log_level {
            parse_level(level_str)
        } else if args.verbose {
            Level::DEBUG
        } else if args.quiet {
            Level::ERROR
        } else {
            let level_str =
                env::var("TFVARS_GEN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
            parse_level(&level_str)
        };

        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("tfvars_gen={}", level).parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to INFO. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::INFO
        }
    }
}
