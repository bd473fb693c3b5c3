use super::{
    async_param, expect_status, output, sync_status, STATUS_CREATED, STATUS_NO_CONTENT, STATUS_OK,
};
use crate::error::Result;
use crate::http::ApptrustHttpClient;
use crate::model::{
    CreateAppVersionRequest, PromoteAppVersionRequest, ReleaseAppVersionRequest,
    RollbackAppVersionRequest, RollbackAppVersionResponse, UpdateAppVersionRequest,
};

/// Accepted with `201 Created` when synchronous, `202 Accepted` otherwise.
pub async fn create_app_version<C: ApptrustHttpClient>(
    client: &C,
    request: &CreateAppVersionRequest,
    sync: bool,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{}/versions/", request.application_key);
    let response = client.post(&endpoint, request, &async_param(sync)).await?;
    expect_status(&response, "create app version", sync_status(sync, STATUS_CREATED))?;

    output(&response);
    Ok(())
}

pub async fn promote_app_version<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    version: &str,
    request: &PromoteAppVersionRequest,
    sync: bool,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}/versions/{version}/promote");
    let response = client.post(&endpoint, request, &async_param(sync)).await?;
    expect_status(&response, "promote app version", sync_status(sync, STATUS_OK))?;

    output(&response);
    Ok(())
}

pub async fn release_app_version<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    version: &str,
    request: &ReleaseAppVersionRequest,
    sync: bool,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}/versions/{version}/release");
    let response = client.post(&endpoint, request, &async_param(sync)).await?;
    expect_status(&response, "release app version", sync_status(sync, STATUS_OK))?;

    output(&response);
    Ok(())
}

/// Returns the decoded rollback summary when the server sent one.
pub async fn rollback_app_version<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    version: &str,
    request: &RollbackAppVersionRequest,
    sync: bool,
) -> Result<Option<RollbackAppVersionResponse>> {
    let endpoint = format!("/v1/applications/{application_key}/versions/{version}/rollback");
    let response = client.post(&endpoint, request, &async_param(sync)).await?;
    expect_status(&response, "rollback app version", sync_status(sync, STATUS_OK))?;

    let summary = serde_json::from_slice::<RollbackAppVersionResponse>(&response.body).ok();
    if let Some(summary) = &summary {
        log::info!(
            "Version \"{}\" of \"{}\" rolled back from {} to {}.",
            version,
            application_key,
            summary.rollback_from_stage,
            summary.rollback_to_stage
        );
    }
    output(&response);
    Ok(summary)
}

pub async fn update_app_version<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    version: &str,
    request: &UpdateAppVersionRequest,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}/versions/{version}");
    let response = client.patch(&endpoint, request).await?;
    expect_status(&response, "update app version", STATUS_OK)?;

    log::info!("Version \"{version}\" of \"{application_key}\" updated successfully.");
    output(&response);
    Ok(())
}

pub async fn delete_app_version<C: ApptrustHttpClient>(
    client: &C,
    application_key: &str,
    version: &str,
) -> Result<()> {
    let endpoint = format!("/v1/applications/{application_key}/versions/{version}");
    let response = client.delete(&endpoint, &[]).await?;
    expect_status(&response, "delete app version", STATUS_NO_CONTENT)?;

    log::info!("Version \"{version}\" of \"{application_key}\" deleted successfully.");
    Ok(())
}
