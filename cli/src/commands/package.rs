use super::{Command, PACKAGE_BIND, PACKAGE_UNBIND};
use crate::cli::PackageArgs;
use crate::config::{Config, ServerDetails};
use crate::error::Result;
use crate::http::ApptrustHttpClient;
use crate::model::BindPackageRequest;
use crate::service;

pub struct BindPackageCommand {
    server_details: ServerDetails,
    application_key: String,
    request: BindPackageRequest,
}

impl BindPackageCommand {
    pub fn prepare(args: &PackageArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            request: BindPackageRequest {
                package_type: args.package_type.clone(),
                name: args.package_name.clone(),
                version: args.package_version.clone(),
            },
        })
    }

    pub fn request(&self) -> &BindPackageRequest {
        &self.request
    }
}

impl Command for BindPackageCommand {
    fn command_name(&self) -> &'static str {
        PACKAGE_BIND
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::bind_package(client, &self.application_key, &self.request).await
    }
}

pub struct UnbindPackageCommand {
    server_details: ServerDetails,
    application_key: String,
    package_type: String,
    package_name: String,
    package_version: String,
}

impl UnbindPackageCommand {
    pub fn prepare(args: &PackageArgs, config: &Config) -> Result<Self> {
        Ok(Self {
            server_details: config.server_details(&args.server)?,
            application_key: args.application_key.clone(),
            package_type: args.package_type.clone(),
            package_name: args.package_name.clone(),
            package_version: args.package_version.clone(),
        })
    }
}

impl Command for UnbindPackageCommand {
    fn command_name(&self) -> &'static str {
        PACKAGE_UNBIND
    }

    fn server_details(&self) -> &ServerDetails {
        &self.server_details
    }

    async fn run<C: ApptrustHttpClient>(&self, client: &C) -> Result<()> {
        service::unbind_package(
            client,
            &self.application_key,
            &self.package_type,
            &self.package_name,
            &self.package_version,
        )
        .await
    }
}
