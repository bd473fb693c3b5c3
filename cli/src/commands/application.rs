use std::path::Path;

use super::{first_set_flag, Command, APP_CREATE, APP_DELETE, APP_UPDATE};
use crate::cli::{AppCreateArgs, AppFieldArgs, AppKeyArgs, AppUpdateArgs};
use crate::config::{Config, ServerDetails};
use crate::error::{AppTrustError, Result};
use crate::flags::{load_spec, parse_map_flag, parse_slice_flag, validate_enum_flag};
use crate::http::ApptrustHttpClient;
use crate::model::{
    AppDescriptor, BUSINESS_CRITICALITY_UNSPECIFIED, BUSINESS_CRITICALITY_VALUES,
    MATURITY_LEVEL_UNSPECIFIED, MATURITY_LEVEL_VALUES,
};
use crate::service;

pub struct CreateAppCommand {
    server_details: ServerDetails,
    request: AppDescriptor,
}

impl CreateAppCommand {
    pub fn prepare(args: &AppCreateArgs, config: &Config) -> Result<Self> {
        validate_no_spec_and_flags_together(args)?;
        let request = build_create_payload(args)?;
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            request,
        })
    }

    pub fn request(&self) -> &AppDescriptor {
        &self.request
    }
}

impl Command for CreateAppCommand {
    fn command_name(&self) -> &'static str {
        APP_CREATE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::create_application(client, &self.request).await
    }
}

fn validate_no_spec_and_flags_together(args: &AppCreateArgs) -> Result<()> {
    if args.spec.spec.is_none() {
        return Ok(());
    }

    let fields = &args.fields;
    let other_flags = [
        ("application-name", fields.application_name.is_some()),
        ("project", args.project.is_some()),
        ("desc", fields.description.is_some()),
        ("business-criticality", fields.business_criticality.is_some()),
        ("maturity-level", fields.maturity_level.is_some()),
        ("labels", fields.labels.is_some()),
        ("user-owners", fields.user_owners.is_some()),
        ("group-owners", fields.group_owners.is_some()),
    ];
    match first_set_flag(&other_flags) {
        Some(flag) => Err(AppTrustError::invalid_flag(format!(
            "the flag --{flag} is not allowed when --spec is provided."
        ))),
        None => Ok(()),
    }
}

/// The key always comes from the argument and doubles as the display name
/// when none is given.
pub(crate) fn build_create_payload(args: &AppCreateArgs) -> Result<AppDescriptor> {
    let mut descriptor = match &args.spec.spec {
        Some(path) => load_from_spec(path, args.spec.spec_vars.as_deref())?,
        None => build_from_flags(args)?,
    };

    descriptor.application_key = args.application_key.clone();
    if descriptor.application_name.is_empty() {
        descriptor.application_name = args.application_key.clone();
    }
    Ok(descriptor)
}

fn load_from_spec(path: &Path, spec_vars: Option<&str>) -> Result<AppDescriptor> {
    let descriptor: AppDescriptor = load_spec(path, spec_vars)?;
    if descriptor.project_key.is_empty() {
        return Err(AppTrustError::invalid_flag(
            "project_key is mandatory in spec file",
        ));
    }
    Ok(descriptor)
}

fn build_from_flags(args: &AppCreateArgs) -> Result<AppDescriptor> {
    let project = args.project.as_deref().unwrap_or_default();
    if project.is_empty() {
        return Err(AppTrustError::invalid_flag("--project is mandatory"));
    }

    let fields = &args.fields;
    let business_criticality = validate_enum_flag(
        "business-criticality",
        fields.business_criticality.as_deref().unwrap_or_default(),
        BUSINESS_CRITICALITY_UNSPECIFIED,
        BUSINESS_CRITICALITY_VALUES,
    )?;
    let maturity_level = validate_enum_flag(
        "maturity-level",
        fields.maturity_level.as_deref().unwrap_or_default(),
        MATURITY_LEVEL_UNSPECIFIED,
        MATURITY_LEVEL_VALUES,
    )?;

    Ok(AppDescriptor {
        application_key: String::new(),
        application_name: fields.application_name.clone().unwrap_or_default(),
        project_key: project.to_string(),
        description: fields.description.clone().filter(|d| !d.is_empty()),
        maturity_level: Some(maturity_level),
        business_criticality: Some(business_criticality),
        labels: parse_map_flag(fields.labels.as_deref().unwrap_or_default())?.map(Some),
        user_owners: parse_slice_flag(fields.user_owners.as_deref().unwrap_or_default()).map(Some),
        group_owners: parse_slice_flag(fields.group_owners.as_deref().unwrap_or_default())
            .map(Some),
    })
}

pub struct UpdateAppCommand {
    server_details: ServerDetails,
    request: AppDescriptor,
}

impl UpdateAppCommand {
    pub fn prepare(args: &AppUpdateArgs, config: &Config) -> Result<Self> {
        let mut request = AppDescriptor {
            application_key: args.application_key.clone(),
            ..Default::default()
        };
        populate_from_flags(&args.fields, &mut request)?;

        Ok(Self {
            server_details: config.server_details(&args.server)?,
            request,
        })
    }

    pub fn request(&self) -> &AppDescriptor {
        &self.request
    }
}

impl Command for UpdateAppCommand {
    fn command_name(&self) -> &'static str {
        APP_UPDATE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::update_application(client, &self.request).await
    }
}

/// Sets exactly the fields whose flag was given. A flag given with an empty
/// value is still sent: `""` for text fields, `null` for labels and owners.
fn populate_from_flags(fields: &AppFieldArgs, descriptor: &mut AppDescriptor) -> Result<()> {
    descriptor.application_name = fields.application_name.clone().unwrap_or_default();
    descriptor.description = fields.description.clone();

    if let Some(value) = &fields.business_criticality {
        descriptor.business_criticality = Some(validate_enum_flag(
            "business-criticality",
            value,
            BUSINESS_CRITICALITY_UNSPECIFIED,
            BUSINESS_CRITICALITY_VALUES,
        )?);
    }
    if let Some(value) = &fields.maturity_level {
        descriptor.maturity_level = Some(validate_enum_flag(
            "maturity-level",
            value,
            MATURITY_LEVEL_UNSPECIFIED,
            MATURITY_LEVEL_VALUES,
        )?);
    }
    if let Some(value) = &fields.labels {
        descriptor.labels = Some(parse_map_flag(value)?);
    }
    if let Some(value) = &fields.user_owners {
        descriptor.user_owners = Some(parse_slice_flag(value));
    }
    if let Some(value) = &fields.group_owners {
        descriptor.group_owners = Some(parse_slice_flag(value));
    }
    Ok(())
}

pub struct DeleteAppCommand {
    server_details: ServerDetails,
    application_key: String,
}

impl DeleteAppCommand {
    pub fn prepare(args: &AppKeyArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
        })
    }
}

impl Command for DeleteAppCommand {
    fn command_name(&self) -> &'static str {
        APP_DELETE
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::delete_application(client, &self.application_key).await
    }
}
