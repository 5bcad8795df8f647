use clap::{error::ErrorKind, CommandFactory, Parser};
use volume_eject::config::trimmed_args;
use volume_eject::utils::{logger, validation::Validate};
use volume_eject::{run_execute, run_query, Action, CliConfig, SystemEjector, SystemVolumes};

fn help() -> ! {
    if let Err(e) = CliConfig::command().print_help() {
        eprintln!("{}", e);
    }
    std::process::exit(0);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match CliConfig::try_parse_from(trimmed_args(std::env::args_os())) {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("❌ {}", e.kind());
            help();
        }
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        help();
    }

    let action = match config.action() {
        Ok(action) => action,
        Err(_) => help(),
    };

    match action {
        Action::Query(name) => {
            let output = config.output_config();
            let mut sink = output.sink();
            match run_query(&SystemVolumes::new(), sink.as_mut(), &name) {
                Ok(count) => tracing::debug!("Wrote {} entries", count),
                Err(e) => {
                    tracing::error!("Failed to write query response: {}", e);
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
        Action::Execute(paths) => {
            let report = run_execute(&SystemEjector::new(), &paths).await;
            if report.is_success() {
                tracing::info!("Ejected {} volumes", report.ejected.len());
            } else {
                tracing::warn!(
                    "Eject finished: {} ejected, {} failed",
                    report.ejected.len(),
                    report.failed.len()
                );
            }
        }
    }
}
