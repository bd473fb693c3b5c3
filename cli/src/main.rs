use clap::{CommandFactory as _, Parser as _};
use clap_complete::generate;

use apptrust::utils::ui;
use apptrust::{commands, Cli, Commands, Config};

/// Log filter variable shared with the JFrog CLI
const LOG_LEVEL_ENV: &str = "JFROG_CLI_LOG_LEVEL";

/// The main entry point for the CLI application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_LEVEL_ENV, "info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Cli::parse();

    match args.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(
                shell,
                &mut cmd,
                Cli::command().get_name().to_string(),
                &mut std::io::stdout(),
            );
            Ok(())
        }
        command => {
            let config = Config::load(args.config.as_deref())?;
            if let Err(err) = commands::run(command, &config).await {
                eprintln!("{}", ui::error(&err.to_string()));
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
