use std::path::Path;

use super::{
    first_set_flag, Command, VERSION_CREATE, VERSION_DELETE, VERSION_PROMOTE, VERSION_RELEASE,
    VERSION_ROLLBACK, VERSION_UPDATE,
};
use crate::cli::{
    PromotionArgs, VersionArgs, VersionCreateArgs, VersionPromoteArgs, VersionReleaseArgs,
    VersionRollbackArgs, VersionUpdateArgs,
};
use crate::config::{Config, ServerDetails};
use crate::error::{AppTrustError, Result};
use crate::flags::{
    load_spec, parse_artifacts, parse_builds, parse_list_properties_flag, parse_packages,
    parse_release_bundles, parse_slice_flag, parse_source_versions, validate_enum_flag,
};
use crate::http::ApptrustHttpClient;
use crate::model::{
    ArtifactProperty, CommonPromoteAppVersion, CreateAppVersionRequest, CreateVersionSources,
    PromoteAppVersionRequest, ReleaseAppVersionRequest, RollbackAppVersionRequest,
    UpdateAppVersionRequest, OVERWRITE_STRATEGY_VALUES, PROMOTION_TYPE_COPY,
    PROMOTION_TYPE_DRY_RUN, PROMOTION_TYPE_VALUES,
};
use crate::service;

pub struct CreateAppVersionCommand {
    server_details: ServerDetails,
    request: CreateAppVersionRequest,
    sync: bool,
}

impl CreateAppVersionCommand {
    pub fn prepare(args: &VersionCreateArgs, config: &Config) -> Result<Self> {
        validate_create_version_args(args)?;
        let request = build_create_version_payload(args)?;
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            request,
            sync: args.sync.sync,
        })
    }

    pub fn request(&self) -> &CreateAppVersionRequest {
        &self.request
    }
}

impl Command for CreateAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_CREATE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::create_app_version(client, &self.request, self.sync).await
    }
}

fn source_flags(args: &VersionCreateArgs) -> [(&'static str, bool); 5] {
    [
        ("source-type-builds", args.source_type_builds.is_some()),
        (
            "source-type-release-bundles",
            args.source_type_release_bundles.is_some(),
        ),
        (
            "source-type-application-versions",
            args.source_type_application_versions.is_some(),
        ),
        ("source-type-packages", args.source_type_packages.is_some()),
        ("source-type-artifacts", args.source_type_artifacts.is_some()),
    ]
}

fn validate_create_version_args(args: &VersionCreateArgs) -> Result<()> {
    let sources = source_flags(args);
    let source_flag = first_set_flag(&sources);

    if args.spec.spec.is_some() {
        if let Some(flag) = source_flag {
            return Err(AppTrustError::invalid_flag(format!(
                "--spec provided: all other source flags (e.g., --{flag}) are not allowed."
            )));
        }
        return Ok(());
    }

    if source_flag.is_none() {
        return Err(AppTrustError::invalid_flag(
            "At least one source flag is required to create an application version. Please provide one of the following: --spec, --source-type-builds, --source-type-release-bundles, --source-type-application-versions, --source-type-packages, or --source-type-artifacts.",
        ));
    }
    Ok(())
}

pub(crate) fn build_create_version_payload(
    args: &VersionCreateArgs,
) -> Result<CreateAppVersionRequest> {
    let sources = match &args.spec.spec {
        Some(path) => load_sources_from_spec(path, args.spec.spec_vars.as_deref())?,
        None => build_sources_from_flags(args)?,
    };

    Ok(CreateAppVersionRequest {
        application_key: args.application_key.clone(),
        version: args.version.clone(),
        sources: Some(sources),
        tag: args.tag.clone().unwrap_or_default(),
        draft: args.draft,
    })
}

fn load_sources_from_spec(path: &Path, spec_vars: Option<&str>) -> Result<CreateVersionSources> {
    let sources: CreateVersionSources = load_spec(path, spec_vars)?;
    if sources.is_empty() {
        return Err(AppTrustError::invalid_flag(
            "Spec file is empty: must provide at least one source (packages, builds, release_bundles, versions, or artifacts)",
        ));
    }
    Ok(sources)
}

fn build_sources_from_flags(args: &VersionCreateArgs) -> Result<CreateVersionSources> {
    let flag = |value: &Option<String>| value.clone().unwrap_or_default();

    Ok(CreateVersionSources {
        artifacts: parse_artifacts(&flag(&args.source_type_artifacts))?,
        packages: parse_packages(&flag(&args.source_type_packages))?,
        builds: parse_builds(&flag(&args.source_type_builds))?,
        release_bundles: parse_release_bundles(&flag(&args.source_type_release_bundles))?,
        versions: parse_source_versions(&flag(&args.source_type_application_versions))?,
    })
}

/// Builds the fields promote and release share. `--dry-run` replaces the
/// promotion type with `dry_run`.
pub(crate) fn build_promotion_params(
    args: &PromotionArgs,
    dry_run: bool,
) -> Result<CommonPromoteAppVersion> {
    let mut promotion_type = validate_enum_flag(
        "promotion-type",
        args.promotion_type.as_deref().unwrap_or_default(),
        PROMOTION_TYPE_COPY,
        PROMOTION_TYPE_VALUES,
    )?;
    if dry_run {
        promotion_type = PROMOTION_TYPE_DRY_RUN.to_string();
    }

    let overwrite_strategy = validate_enum_flag(
        "overwrite-strategy",
        args.overwrite_strategy.as_deref().unwrap_or_default(),
        "",
        OVERWRITE_STRATEGY_VALUES,
    )?;

    Ok(CommonPromoteAppVersion {
        promotion_type,
        included_repository_keys: list_flag(&args.include_repos),
        excluded_repository_keys: list_flag(&args.exclude_repos),
        artifact_additional_properties: parse_artifact_props(&args.props)?,
        overwrite_strategy,
    })
}

fn list_flag(value: &Option<String>) -> Vec<String> {
    value
        .as_deref()
        .and_then(parse_slice_flag)
        .unwrap_or_default()
}

fn parse_artifact_props(value: &Option<String>) -> Result<Vec<ArtifactProperty>> {
    let props = parse_list_properties_flag(value.as_deref().unwrap_or_default())
        .map_err(|e| AppTrustError::parse(format!("failed to parse properties: {e}")))?;

    Ok(props
        .unwrap_or_default()
        .into_iter()
        .map(|(key, values)| ArtifactProperty { key, values })
        .collect())
}

pub struct PromoteAppVersionCommand {
    server_details: ServerDetails,
    application_key: String,
    version: String,
    request: PromoteAppVersionRequest,
    sync: bool,
}

impl PromoteAppVersionCommand {
    pub fn prepare(args: &VersionPromoteArgs, config: &Config) -> Result<Self> {
        let request = PromoteAppVersionRequest {
            common: build_promotion_params(&args.promotion, args.dry_run)?,
            stage: args.target_stage.clone(),
        };

        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            version: args.version.clone(),
            request,
            sync: args.sync.sync,
        })
    }

    pub fn request(&self) -> &PromoteAppVersionRequest {
        &self.request
    }
}

impl Command for PromoteAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_PROMOTE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::promote_app_version(
            client,
            &self.application_key,
            &self.version,
            &self.request,
            self.sync,
        )
        .await
    }
}

pub struct ReleaseAppVersionCommand {
    server_details: ServerDetails,
    application_key: String,
    version: String,
    request: ReleaseAppVersionRequest,
    sync: bool,
}

impl ReleaseAppVersionCommand {
    pub fn prepare(args: &VersionReleaseArgs, config: &Config) -> Result<Self> {
        let request = ReleaseAppVersionRequest::new(build_promotion_params(&args.promotion, false)?);

        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            version: args.version.clone(),
            request,
            sync: args.sync.sync,
        })
    }

    pub fn request(&self) -> &ReleaseAppVersionRequest {
        &self.request
    }
}

impl Command for ReleaseAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_RELEASE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::release_app_version(
            client,
            &self.application_key,
            &self.version,
            &self.request,
            self.sync,
        )
        .await
    }
}

pub struct RollbackAppVersionCommand {
    server_details: ServerDetails,
    application_key: String,
    version: String,
    request: RollbackAppVersionRequest,
    sync: bool,
}

impl RollbackAppVersionCommand {
    pub fn prepare(args: &VersionRollbackArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            version: args.version.clone(),
            request: RollbackAppVersionRequest::new(args.from_stage.clone()),
            sync: args.sync.sync,
        })
    }
}

impl Command for RollbackAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_ROLLBACK
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::rollback_app_version(
            client,
            &self.application_key,
            &self.version,
            &self.request,
            self.sync,
        )
        .await?;
        Ok(())
    }
}

pub struct UpdateAppVersionCommand {
    server_details: ServerDetails,
    application_key: String,
    version: String,
    request: UpdateAppVersionRequest,
}

impl UpdateAppVersionCommand {
    pub fn prepare(args: &VersionUpdateArgs, config: &Config) -> Result<Self> {
        let properties = match &args.properties {
            Some(value) => parse_list_properties_flag(value)?.unwrap_or_default(),
            None => Default::default(),
        };
        let request = UpdateAppVersionRequest {
            tag: args.tag.clone().unwrap_or_default(),
            properties,
            delete_properties: list_flag(&args.delete_property),
        };

        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            version: args.version.clone(),
            request,
        })
    }

    pub fn request(&self) -> &UpdateAppVersionRequest {
        &self.request
    }
}

impl Command for UpdateAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_UPDATE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::update_app_version(client, &self.application_key, &self.version, &self.request)
            .await
    }
}

pub struct DeleteAppVersionCommand {
    server_details: ServerDetails,
    application_key: String,
    version: String,
}

impl DeleteAppVersionCommand {
    pub fn prepare(args: &VersionArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            version: args.version.clone(),
        })
    }
}

impl Command for DeleteAppVersionCommand {
    fn command_name(&self) -> &'static str {
        VERSION_DELETE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::delete_app_version(client, &self.application_key, &self.version).await
    }
}
