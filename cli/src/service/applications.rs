use super::{expect_status, output, STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK};
use crate::error::Result;
use crate::http::ApptrustHttpClient;
use crate::model::AppDescriptor;

pub async fn create_application<C: ApptrustHttpClient>(
    client: &C,
    descriptor: &AppDescriptor,
) -> Result<()> {
    let response = client.post("/v1/applications", descriptor, &[]).await?;
    expect_status(&response, "create an application", STATUS_CREATED)?;

    log::info!(
        "Application \"{}\" created successfully.",
        descriptor.application_key
    );
    output(&response);
    Ok(())
}

/// Sends only the fields set on `descriptor`.
pub async fn update_application<C: ApptrustHttpClient>(
    client: &C,
    descriptor: &AppDescriptor,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{}", descriptor.application_key);
    let response = client.patch(&endpoint, descriptor).await?;
    expect_status(&response, "update application", STATUS_OK)?;

    log::info!(
        "Application \"{}\" updated successfully.",
        descriptor.application_key
    );
    output(&response);
    Ok(())
}

pub async fn delete_application<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}");
    let response = client.delete(&endpoint, &[]).await?;
    expect_status(&response, "delete application", STATUS_NO_CONTENT)?;

    log::info!("Application \"{application_key}\" deleted successfully.");
    Ok(())
}
