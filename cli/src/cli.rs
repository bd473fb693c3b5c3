use std::path::PathBuf;

use clap::builder::styling::{Color, Style};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

/// Manage JFrog AppTrust applications and application versions
#[derive(Debug, Parser)]
#[command(name = "apptrust", version)]
#[command(
    about = "Manage JFrog AppTrust applications and application versions",
    long_about = None
)]
#[command(styles = get_styles())]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the configuration file
    #[arg(long, env = "APPTRUST_CONFIG", hide_env = true)]
    #[arg(global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Connection flags shared by every command that talks to the platform
#[derive(Debug, Clone, Default, Args)]
pub struct ServerArgs {
    /// Server ID configured in the configuration file
    #[arg(long, value_name = "ID")]
    pub server_id: Option<String>,

    /// JFrog Platform URL
    #[arg(long, env = "JFROG_URL", hide_env = true)]
    pub url: Option<String>,

    /// JFrog username
    #[arg(long)]
    pub user: Option<String>,

    /// JFrog access token
    #[arg(long, env = "JFROG_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ping the application service
    #[command(long_about = "Check that the AppTrust service of the platform is reachable")]
    Ping {
        #[command(flatten)]
        server: ServerArgs,
    },

    /// Create a new application
    #[command(name = "app-create", aliases = ["ac"])]
    #[command(long_about = "Create a new application, from flags or from a JSON spec file")]
    AppCreate(AppCreateArgs),

    /// Update an existing application
    #[command(name = "app-update", aliases = ["au"])]
    #[command(long_about = "Update an existing application. Only the given flags are sent")]
    AppUpdate(AppUpdateArgs),

    /// Delete an application
    #[command(name = "app-delete", aliases = ["ad"])]
    AppDelete(AppKeyArgs),

    /// Create an application version
    #[command(name = "version-create", aliases = ["vc"])]
    #[command(
        long_about = "Create an application version from builds, release bundles, other application versions, packages or artifacts"
    )]
    VersionCreate(VersionCreateArgs),

    /// Promote an application version
    #[command(name = "version-promote", aliases = ["vp"])]
    #[command(long_about = "Promote an application version to a target stage")]
    VersionPromote(VersionPromoteArgs),

    /// Release an application version
    #[command(name = "version-release", aliases = ["vr"])]
    #[command(long_about = "Release an application version to the production stage")]
    VersionRelease(VersionReleaseArgs),

    /// Roll back an application version promotion
    #[command(name = "version-rollback", aliases = ["vrb"])]
    VersionRollback(VersionRollbackArgs),

    /// Update the tag and properties of an application version
    #[command(name = "version-update", aliases = ["vu"])]
    #[command(
        long_about = "Update the user-defined annotations (tag and custom properties) of an application version"
    )]
    VersionUpdate(VersionUpdateArgs),

    /// Delete an application version
    #[command(name = "version-delete", aliases = ["vd"])]
    VersionDelete(VersionArgs),

    /// Bind a package to an application
    #[command(name = "package-bind", aliases = ["pb"])]
    PackageBind(PackageArgs),

    /// Unbind a package from an application
    #[command(name = "package-unbind", aliases = ["pu"])]
    PackageUnbind(PackageArgs),

    /// Generate shell completions for a given shell
    #[command(aliases = ["complete"])]
    Completions {
        /// The shell to generate completions for
        shell: Shell,
    },
}

/// Fields describing an application, shared by create and update
#[derive(Debug, Clone, Default, Args)]
pub struct AppFieldArgs {
    /// The display name of the application
    #[arg(long)]
    pub application_name: Option<String>,

    /// The description of the application
    #[arg(long = "desc")]
    pub description: Option<String>,

    /// The business criticality level: unspecified, low, medium, high, critical
    #[arg(long)]
    pub business_criticality: Option<String>,

    /// The maturity level: unspecified, experimental, production, end_of_life
    #[arg(long)]
    pub maturity_level: Option<String>,

    /// Semicolon-separated labels, e.g. "key1=value1;key2=value2"
    #[arg(long)]
    pub labels: Option<String>,

    /// Semicolon-separated list of user owners
    #[arg(long)]
    pub user_owners: Option<String>,

    /// Semicolon-separated list of group owners
    #[arg(long)]
    pub group_owners: Option<String>,
}

/// JSON spec file flags
#[derive(Debug, Clone, Default, Args)]
pub struct SpecArgs {
    /// A path to the specification file
    #[arg(long, value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Semicolon-separated variables "key1=value1;key2=value2" replacing ${key1} in the spec file
    #[arg(long)]
    pub spec_vars: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct AppCreateArgs {
    /// The key of the application to create
    pub application_key: String,

    /// Project key of the application, mandatory without --spec
    #[arg(long)]
    pub project: Option<String>,

    #[command(flatten)]
    pub fields: AppFieldArgs,

    #[command(flatten)]
    pub spec: SpecArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AppUpdateArgs {
    /// The key of the application to update
    pub application_key: String,

    #[command(flatten)]
    pub fields: AppFieldArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct AppKeyArgs {
    /// The application key
    pub application_key: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// `--sync`, `--sync=true` and `--sync=false`, true when absent
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Wait for the operation to complete on the server
    #[arg(long, value_name = "BOOL")]
    #[arg(default_value_t = true, num_args = 0..=1, default_missing_value = "true")]
    #[arg(require_equals = true, action = ArgAction::Set)]
    pub sync: bool,
}

#[derive(Debug, Clone, Args)]
pub struct VersionCreateArgs {
    /// The application key
    pub application_key: String,

    /// The version (in SemVer format) to create
    pub version: String,

    /// A tag for the version: alphanumerics, hyphens, underscores and dots
    #[arg(long)]
    pub tag: Option<String>,

    /// Builds, e.g. "name=build1, id=1, include-deps=true; name=build2, id=7"
    #[arg(long)]
    pub source_type_builds: Option<String>,

    /// Release bundles, e.g. "name=rb1, version=1.0.0; name=rb2, version=2.0.0"
    #[arg(long)]
    pub source_type_release_bundles: Option<String>,

    /// Application versions, e.g. "application-key=app1, version=1.0.0"
    #[arg(long)]
    pub source_type_application_versions: Option<String>,

    /// Packages, e.g. "type=npm, name=pkg, version=1.0.0, repo-key=npm-local"
    #[arg(long)]
    pub source_type_packages: Option<String>,

    /// Artifacts, e.g. "path=repo/path/file.jar, sha256=abc..."
    #[arg(long)]
    pub source_type_artifacts: Option<String>,

    /// Create the version as a draft
    #[arg(long)]
    pub draft: bool,

    #[command(flatten)]
    pub spec: SpecArgs,

    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

/// Flags shared by promote and release
#[derive(Debug, Clone, Default, Args)]
pub struct PromotionArgs {
    /// The promotion type: copy, move, keep
    #[arg(long)]
    pub promotion_type: Option<String>,

    /// Semicolon-separated list of repositories to exclude
    #[arg(long)]
    pub exclude_repos: Option<String>,

    /// Semicolon-separated list of repositories to include
    #[arg(long)]
    pub include_repos: Option<String>,

    /// Properties added to each artifact, e.g. "key1=v1,v2;key2=v3"
    #[arg(long)]
    pub props: Option<String>,

    /// How existing artifacts in the target are handled: DISABLED, LATEST, ALL
    #[arg(long)]
    pub overwrite_strategy: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct VersionPromoteArgs {
    /// The application key
    pub application_key: String,

    /// The version to promote
    pub version: String,

    /// The stage to promote the version to
    pub target_stage: String,

    /// Simulate the promotion
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub promotion: PromotionArgs,

    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct VersionReleaseArgs {
    /// The application key
    pub application_key: String,

    /// The version to release
    pub version: String,

    #[command(flatten)]
    pub promotion: PromotionArgs,

    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct VersionRollbackArgs {
    /// The application key
    pub application_key: String,

    /// The version to roll back
    pub version: String,

    /// The stage to roll the version back from
    pub from_stage: String,

    #[command(flatten)]
    pub sync: SyncArgs,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct VersionUpdateArgs {
    /// The application key
    pub application_key: String,

    /// The version to update
    pub version: String,

    /// The tag to set on the version
    #[arg(long)]
    pub tag: Option<String>,

    /// Properties to set, e.g. "key1=value1[,value2];key2=value3". "key=" clears a key
    #[arg(long)]
    pub properties: Option<String>,

    /// Semicolon-separated property keys to remove with all their values
    #[arg(long)]
    pub delete_property: Option<String>,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct VersionArgs {
    /// The application key
    pub application_key: String,

    /// The version
    pub version: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

#[derive(Debug, Clone, Args)]
pub struct PackageArgs {
    /// The application key
    pub application_key: String,

    /// The package type, e.g. npm or docker
    pub package_type: String,

    /// The package name
    pub package_name: String,

    /// The package version
    pub package_version: String,

    #[command(flatten)]
    pub server: ServerArgs,
}

// JFrog green
const FROG_GREEN: (u8, u8, u8) = (64, 190, 70);

const PINK: (u8, u8, u8) = (255, 43, 137);

const BRIGHT_GREEN: (u8, u8, u8) = (87, 251, 219);

const LIGHT_GREY: (u8, u8, u8) = (200, 205, 210);

const BRIGHT_BLUE: (u8, u8, u8) = (120, 180, 255);

pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Rgb(FROG_GREEN.into()))),
        )
        .header(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Rgb(FROG_GREEN.into()))),
        )
        .literal(Style::new().fg_color(Some(Color::Rgb(BRIGHT_BLUE.into()))))
        .invalid(Style::new().bold().fg_color(Some(Color::Rgb(PINK.into()))))
        .error(Style::new().bold().fg_color(Some(Color::Rgb(PINK.into()))))
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Rgb(BRIGHT_GREEN.into()))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Rgb(LIGHT_GREY.into()))))
}
