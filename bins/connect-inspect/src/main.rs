mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands, InspectConfig};

mod cmd;

fn main() {
    // stdout занят выводом команд, логи идут в stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = InspectConfig::resolve(cli.config.as_deref(), cli.format).and_then(|config| {
        match cli.command {
            Commands::Shapes(args) => cmd::shapes::run(&args, &config),
            Commands::Operations => cmd::operations::run(&config),
            Commands::Show(args) => cmd::show::run(&args, &config),
        }
    });
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
