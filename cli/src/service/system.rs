use super::{expect_status, output, STATUS_OK};
use crate::error::Result;
use crate::http::ApptrustHttpClient;

pub async fn ping<C: ApptrustHttpClient>(client: &C) -> Result<()> {
    let response = client.get("/v1/system/ping").await?;
    expect_status(&response, "ping application service", STATUS_OK)?;

    output(&response);
    Ok(())
}
