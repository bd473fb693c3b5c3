//! One handler per subcommand.
//!
//! A handler validates its flags, builds the request payload and resolves the
//! server before anything is sent, so invalid input never reaches the network.
pub(crate) mod application;
pub(crate) mod package;
pub(crate) mod system;
pub(crate) mod version;

pub use application::{CreateAppCommand, DeleteAppCommand, UpdateAppCommand};
pub use package::{BindPackageCommand, UnbindPackageCommand};
pub use system::PingCommand;
pub use version::{
    CreateAppVersionCommand, DeleteAppVersionCommand, PromoteAppVersionCommand,
    ReleaseAppVersionCommand, RollbackAppVersionCommand, UpdateAppVersionCommand,
};

use crate::cli::Commands;
use crate::config::{Config, ServerDetails};
use crate::error::{AppTrustError, Result};
use crate::http::{ApptrustHttpClient, JfrogHttpClient};
use crate::utils::ui;

pub const PING: &str = "ping";
pub const APP_CREATE: &str = "app-create";
pub const APP_UPDATE: &str = "app-update";
pub const APP_DELETE: &str = "app-delete";
pub const VERSION_CREATE: &str = "version-create";
pub const VERSION_PROMOTE: &str = "version-promote";
pub const VERSION_RELEASE: &str = "version-release";
pub const VERSION_ROLLBACK: &str = "version-rollback";
pub const VERSION_UPDATE: &str = "version-update";
pub const VERSION_DELETE: &str = "version-delete";
pub const PACKAGE_BIND: &str = "package-bind";
pub const PACKAGE_UNBIND: &str = "package-unbind";

#[allow(async_fn_in_trait)]
pub trait Command {
    fn command_name(&self) -> &'static str;

    fn server_details(&self) -> &ServerDetails;

    /// Sends the prepared request through `client`.
    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()>;
}

/// Opens a client for the command's server and runs it behind a spinner.
pub async fn exec<T: Command>(command: &T) -> Result<()> {
    let details = command.server_details();
    let client = JfrogHttpClient::new(details)?;
    log::debug!("Running {} against {}", command.command_name(), details.url);

    let spinner = ui::spinner();
    spinner.set_message(format!("Running {}...", command.command_name()));
    let result = command.run(&client).await;
    spinner.finish_and_clear();

    if let Err(err) = &result {
        log::debug!("{} failed: {err}", command.command_name());
    }
    result
}

/// Prepares and executes the handler of `command`.
pub async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Ping { server } => exec(&PingCommand::prepare(&server, config)?).await,
        Commands::AppCreate(args) => exec(&CreateAppCommand::prepare(&args, config)?).await,
        Commands::AppUpdate(args) => exec(&UpdateAppCommand::prepare(&args, config)?).await,
        Commands::AppDelete(args) => exec(&DeleteAppCommand::prepare(&args, config)?).await,
        Commands::VersionCreate(args) => {
            exec(&CreateAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::VersionPromote(args) => {
            exec(&PromoteAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::VersionRelease(args) => {
            exec(&ReleaseAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::VersionRollback(args) => {
            exec(&RollbackAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::VersionUpdate(args) => {
            exec(&UpdateAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::VersionDelete(args) => {
            exec(&DeleteAppVersionCommand::prepare(&args, config)?).await
        }
        Commands::PackageBind(args) => exec(&BindPackageCommand::prepare(&args, config)?).await,
        Commands::PackageUnbind(args) => {
            exec(&UnbindPackageCommand::prepare(&args, config)?).await
        }
        Commands::Completions { .. } => Err(AppTrustError::invalid_flag(
            "completions are generated locally and have no handler",
        )),
    }
}

/// Returns the first flag of `flags` that was given on the command line.
pub(crate) fn first_set_flag<'a>(flags: &[(&'a str, bool)]) -> Option<&'a str> {
    flags.iter().find(|(_, set)| *set).map(|(name, _)| *name)
}
