use super::{expect_status, output, STATUS_CREATED, STATUS_NO_CONTENT};
use crate::error::Result;
use crate::http::{escape_path_segment, ApptrustHttpClient};
use crate::model::BindPackageRequest;

pub async fn bind_package<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    request: &BindPackageRequest,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}/packages");
    let response = client.post(&endpoint, request, &[]).await?;
    expect_status(&response, "bind package", STATUS_CREATED)?;

    output(&response);
    Ok(())
}

/// The package name is path-escaped, so scoped names such as `@scope/pkg`
/// stay a single segment.
pub async fn unbind_package<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    package_type: &str,
    package_name: &str,
    package_version: &str,
) -> Result<()> {
    let endpoint = format!(
        "/v1/applications/{application_key}/packages/{package_type}/{}/{package_version}",
        escape_path_segment(package_name)?
    );
    let response = client.delete(&endpoint, &[]).await?;
    expect_status(&response, "unbind package", STATUS_NO_CONTENT)?;

    log::info!("Package unbound successfully");
    Ok(())
}
